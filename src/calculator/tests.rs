#[cfg(test)]
mod tests {
    use super::super::keypad::{Key, Operator};
    use super::super::session::Calculator;
    use crate::history::{EntryKind, History};
    use crate::tax::{GstMode, TaxError};

    fn typed(keys: &[&str]) -> (Calculator, History) {
        let mut calc = Calculator::new();
        let mut history = History::default();
        calc.press_all(keys.iter().copied(), &mut history).unwrap();
        (calc, history)
    }

    #[test]
    fn test_digits_replace_leading_zero() {
        let (calc, _) = typed(&["0", "7", "5"]);
        assert_eq!(calc.display(), "75");

        let (calc, _) = typed(&["00"]);
        assert_eq!(calc.display(), "0");

        let (calc, _) = typed(&["5", "00"]);
        assert_eq!(calc.display(), "500");
    }

    #[test]
    fn test_operators_use_display_glyphs() {
        let (calc, _) = typed(&["9", "-", "3", "*", "2"]);
        assert_eq!(calc.display(), "9−3×2");
        assert_eq!(calc.preview(), "3");
    }

    #[test]
    fn test_equals_commits_and_records() {
        let (calc, history) = typed(&["1", "5", "0", "0", "+", "7", "8", "%", "="]);
        assert_eq!(calc.display(), "2670");
        assert_eq!(calc.expression_line(), "1500+78% =");
        assert_eq!(calc.preview(), "");

        let entry = history.entries().next().unwrap();
        assert_eq!(entry.kind, EntryKind::Calc);
        assert_eq!(entry.expression, "1500+78%");
        assert_eq!(entry.result, "2670");
    }

    #[test]
    fn test_error_then_recover() {
        let (mut calc, mut history) = typed(&["1", "0", "÷", "0", "="]);
        assert_eq!(calc.display(), "Error");
        assert_eq!(calc.preview(), "");
        assert!(history.is_empty());

        calc.press(Key::Digit('4'), &mut history);
        assert_eq!(calc.display(), "4");

        calc.press(Key::Equals, &mut history);
        calc.press(Key::Clear, &mut history);
        calc.press_all(["1", "/", "0", "=", "+"], &mut history).unwrap();
        assert_eq!(calc.display(), "0+");
    }

    #[test]
    fn test_preview_while_typing() {
        let mut calc = Calculator::new();
        let mut history = History::default();
        let mut previews = Vec::new();
        for key in ["5", "+", "3", "×", "2"] {
            calc.press(key.parse().unwrap(), &mut history);
            previews.push(calc.preview());
        }
        assert_eq!(previews, vec!["", "", "8", "", "11"]);
        assert!(history.is_empty());
    }

    #[test]
    fn test_backspace() {
        let (mut calc, mut history) = typed(&["1", "2", "×"]);
        calc.press(Key::Backspace, &mut history);
        assert_eq!(calc.display(), "12");
        calc.press(Key::Backspace, &mut history);
        calc.press(Key::Backspace, &mut history);
        assert_eq!(calc.display(), "0");
    }

    #[test]
    fn test_clear_resets_lines() {
        let (mut calc, mut history) = typed(&["1", "0", "0"]);
        calc.apply_gst(18.0, GstMode::Add, &mut history).unwrap();
        assert!(!calc.gst_details().is_empty());

        calc.press(Key::Clear, &mut history);
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.expression_line(), "");
        assert_eq!(calc.gst_details(), "");
    }

    #[test]
    fn test_parentheses() {
        let (calc, _) = typed(&["(", "2", "+", "3", ")", "×", "4", "="]);
        assert_eq!(calc.display(), "20");
    }

    #[test]
    fn test_quick_gst_add() {
        let (mut calc, mut history) = typed(&["1", "0", "0"]);
        let gst = calc.apply_gst(18.0, GstMode::Add, &mut history).unwrap();
        assert_eq!(gst.total, 118.0);
        assert_eq!(calc.display(), "118");
        assert_eq!(calc.expression_line(), "100 + 18% GST");
        assert_eq!(calc.gst_details(), "GST: ₹18.00 (C: ₹9.00, S: ₹9.00)");

        let entry = history.entries().next().unwrap();
        assert_eq!(entry.kind, EntryKind::GstQuick);
        assert_eq!(entry.expression, "100 + 18%");
        assert_eq!(entry.result, "118");
    }

    #[test]
    fn test_quick_gst_remove_on_expression() {
        let (mut calc, mut history) = typed(&["1", "0", "0", "+", "1", "8"]);
        calc.apply_gst(18.0, GstMode::Remove, &mut history).unwrap();
        assert_eq!(calc.display(), "100");
        assert_eq!(calc.expression_line(), "118 - 18% GST");
        assert_eq!(calc.gst_details(), "GST Rem: ₹18.00 (C: ₹9.00, S: ₹9.00)");
    }

    #[test]
    fn test_quick_gst_rounds_display() {
        let (mut calc, mut history) = typed(&["9", "9", ".", "9", "9"]);
        calc.apply_gst(5.0, GstMode::Remove, &mut history).unwrap();
        assert_eq!(calc.display(), "95.23");
    }

    #[test]
    fn test_quick_gst_on_invalid_display_changes_nothing() {
        let (mut calc, mut history) = typed(&["5", "+"]);
        let before = calc.clone();
        assert!(matches!(
            calc.apply_gst(18.0, GstMode::Add, &mut history),
            Err(TaxError::InvalidAmount(_))
        ));
        assert_eq!(calc, before);
        assert!(history.is_empty());
    }

    #[test]
    fn test_press_all_rejects_unknown_label() {
        let mut calc = Calculator::new();
        let mut history = History::default();
        assert!(calc.press_all(["1", "sqrt"], &mut history).is_err());
        assert_eq!(calc.display(), "1");
        calc.press(Key::Operator(Operator::Multiply), &mut history);
        assert_eq!(calc.display(), "1×");
    }
}
