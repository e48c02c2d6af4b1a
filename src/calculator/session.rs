use crate::calculator::keypad::Key;
use crate::expr::tokens::{has_operator, normalize_glyphs};
use crate::expr::{
    evaluate, evaluate_detailed, format_number, preview, round_decimals, EvalResult, ERROR_MARKER,
};
use crate::history::{EntryKind, History};
use crate::tax::{compute_gst, format_inr, parse_amount, GstComputation, GstMode, TaxError};
use tracing::debug;

/// Decimal places shown after a quick GST key.
const GST_DISPLAY_DECIMALS: i32 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculator {
    display: String,
    expression_line: String,
    gst_details: String,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            expression_line: String::new(),
            gst_details: String::new(),
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    /// Line above the display, e.g. `12×3 =` after a commit.
    pub fn expression_line(&self) -> &str {
        &self.expression_line
    }

    /// Tax breakdown left by the last quick GST key.
    pub fn gst_details(&self) -> &str {
        &self.gst_details
    }

    /// Preview of the current display; empty when there is nothing to show.
    pub fn preview(&self) -> String {
        preview(&self.display)
    }

    pub fn press(&mut self, key: Key, history: &mut History) {
        match key {
            Key::Clear => {
                self.display = "0".to_string();
                self.expression_line.clear();
                self.gst_details.clear();
            }
            Key::Backspace => {
                if self.display == ERROR_MARKER || self.display.chars().count() <= 1 {
                    self.display = "0".to_string();
                } else {
                    self.display.pop();
                }
            }
            Key::Equals => self.commit(history),
            Key::Digit(d) => {
                if self.is_blank() {
                    self.display = d.to_string();
                } else {
                    self.display.push(d);
                }
            }
            Key::DoubleZero => {
                if self.display == ERROR_MARKER {
                    self.display = "0".to_string();
                } else if self.display != "0" {
                    self.display.push_str("00");
                }
            }
            Key::LParen => {
                if self.is_blank() {
                    self.display = "(".to_string();
                } else {
                    self.display.push('(');
                }
            }
            Key::Decimal | Key::Operator(_) | Key::Percent | Key::RParen => {
                if self.display == ERROR_MARKER {
                    self.display = "0".to_string();
                }
                if let Some(text) = key.text() {
                    self.display.push_str(&text);
                }
            }
        }
    }

    /// Feed a sequence of keypad labels, e.g. `["1", "+", "2", "="]`.
    pub fn press_all<'a, I>(&mut self, keys: I, history: &mut History) -> Result<(), String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for label in keys {
            let key: Key = label.parse()?;
            self.press(key, history);
        }
        Ok(())
    }

    /// Apply a quick GST key to the current value.
    ///
    /// The value is the display itself, or the evaluated expression when the
    /// display holds an operator. Nothing changes when that value is invalid.
    pub fn apply_gst(
        &mut self,
        rate: f64,
        mode: GstMode,
        history: &mut History,
    ) -> Result<GstComputation, TaxError> {
        let value = self.current_value()?;
        let gst = compute_gst(value, rate, mode)?;

        let shown = match mode {
            GstMode::Add => gst.total,
            GstMode::Remove => gst.base,
        };
        let value_text = format_number(value);
        let rate_text = format_number(rate);

        self.display = format_number(round_decimals(shown, GST_DISPLAY_DECIMALS));
        self.expression_line = format!("{} {} {}% GST", value_text, mode.sign(), rate_text);
        self.gst_details = format!(
            "{}: {} (C: {}, S: {})",
            match mode {
                GstMode::Add => "GST",
                GstMode::Remove => "GST Rem",
            },
            format_inr(gst.gst_amount),
            format_inr(gst.cgst),
            format_inr(gst.sgst)
        );
        history.record(
            EntryKind::GstQuick,
            format!("{} {} {}%", value_text, mode.sign(), rate_text),
            self.display.clone(),
        );

        Ok(gst)
    }

    fn commit(&mut self, history: &mut History) {
        match evaluate(&self.display) {
            EvalResult::Value(value) => {
                self.expression_line = format!("{} =", self.display);
                history.record(EntryKind::Calc, self.display.clone(), value.clone());
                self.display = value;
            }
            EvalResult::Error => {
                self.display = ERROR_MARKER.to_string();
            }
        }
    }

    fn current_value(&self) -> Result<f64, TaxError> {
        if has_operator(&normalize_glyphs(&self.display)) {
            evaluate_detailed(&self.display).map_err(|e| {
                debug!(display = %self.display, error = %e, "cannot apply GST");
                TaxError::InvalidAmount(self.display.clone())
            })
        } else {
            parse_amount(&self.display)
        }
    }

    fn is_blank(&self) -> bool {
        self.display == "0" || self.display == ERROR_MARKER
    }
}
