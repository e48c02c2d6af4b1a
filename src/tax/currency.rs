/// Format an amount as Indian rupees, e.g. `₹1,18,000.00`.
///
/// Two decimals, the last three integer digits grouped together and the rest
/// in pairs (lakh/crore grouping). Negative amounts get a leading `-`.
pub fn format_inr(value: f64) -> String {
    if !value.is_finite() {
        return format!("₹{}", value);
    }

    let formatted = format!("{:.2}", value.abs());
    let (int_part, dec_part) = formatted.split_once('.').unwrap_or((&formatted, "00"));
    let negative = value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0');

    format!(
        "{}₹{}.{}",
        if negative { "-" } else { "" },
        group_indian(int_part),
        dec_part
    )
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
