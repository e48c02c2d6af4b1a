use crate::tax::error::TaxError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether the amount is tax-exclusive (`Add`) or tax-inclusive (`Remove`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GstMode {
    Add,
    Remove,
}

impl GstMode {
    /// Operator shown next to the rate, e.g. `100 + 18%`.
    pub fn sign(&self) -> char {
        match self {
            GstMode::Add => '+',
            GstMode::Remove => '-',
        }
    }
}

impl fmt::Display for GstMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GstMode::Add => write!(f, "add"),
            GstMode::Remove => write!(f, "remove"),
        }
    }
}

impl FromStr for GstMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "add" | "+" => Ok(GstMode::Add),
            "remove" | "-" => Ok(GstMode::Remove),
            other => Err(format!("Unknown GST mode '{}' (expected add or remove)", other)),
        }
    }
}

/// GST breakdown. CGST and SGST always split the tax evenly.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GstComputation {
    pub base: f64,
    pub gst_amount: f64,
    pub cgst: f64,
    pub sgst: f64,
    pub total: f64,
}

pub fn compute_gst(amount: f64, rate: f64, mode: GstMode) -> Result<GstComputation, TaxError> {
    if !amount.is_finite() {
        return Err(TaxError::InvalidAmount(amount.to_string()));
    }
    if !rate.is_finite() || !(0.0..=100.0).contains(&rate) {
        return Err(TaxError::InvalidRate(rate));
    }

    let (base, gst_amount, total) = match mode {
        GstMode::Add => {
            let gst = amount * rate / 100.0;
            (amount, gst, amount + gst)
        }
        GstMode::Remove => {
            // Amount already includes the tax; extract it.
            let base = amount * 100.0 / (100.0 + rate);
            (base, amount - base, amount)
        }
    };

    Ok(GstComputation {
        base,
        gst_amount,
        cgst: gst_amount / 2.0,
        sgst: gst_amount / 2.0,
        total,
    })
}

/// Parse an amount typed into the shell.
pub fn parse_amount(text: &str) -> Result<f64, TaxError> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(TaxError::InvalidAmount(trimmed.to_string())),
    }
}
