/// Round to currency precision (two decimals, half away from zero).
pub fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format an amount in soles, e.g. `S/ 1,234.50`.
pub fn format_soles(value: f64) -> String {
    let rounded = round_currency(value);
    let negative = rounded < 0.0;
    let fixed = format!("{:.2}", rounded.abs());
    let (int_part, dec_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}S/ {}.{}", if negative { "-" } else { "" }, grouped, dec_part)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_currency() {
        assert_eq!(round_currency(130.0 * 0.18), 23.4);
        assert_eq!(round_currency(0.125), 0.13);
        assert_eq!(round_currency(10.0), 10.0);
    }

    #[test]
    fn test_format_soles() {
        assert_eq!(format_soles(153.4), "S/ 153.40");
        assert_eq!(format_soles(1234567.891), "S/ 1,234,567.89");
        assert_eq!(format_soles(0.0), "S/ 0.00");
        assert_eq!(format_soles(-65.0), "-S/ 65.00");
    }
}
