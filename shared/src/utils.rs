/// Render a numeric cell as rupees with thousands separators, e.g. `₹500,000.00`.
/// Returns `None` when the text is not a finite number.
pub fn format_currency(raw: &str) -> Option<String> {
    let amount = parse_number(raw)?;
    let fixed = format!("{:.2}", amount.abs());
    let (whole, frac) = fixed.split_once('.')?;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    Some(format!("{}₹{}.{}", sign, grouped, frac))
}

/// Render a numeric cell as a percentage with one decimal, e.g. `10.5%`.
pub fn format_percentage(raw: &str) -> Option<String> {
    parse_number(raw).map(|value| format!("{:.1}%", value))
}

fn parse_number(raw: &str) -> Option<f64> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}
