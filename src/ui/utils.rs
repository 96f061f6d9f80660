/// Formats a funding amount the way the costs screen displays money:
/// `$` prefix and thousands separated by commas.
pub fn format_funding(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{sign}${grouped}")
}

#[cfg(test)]
mod tests {
    use super::format_funding;

    #[test]
    fn test_format_funding() {
        assert_eq!(format_funding(0), "$0");
        assert_eq!(format_funding(999), "$999");
        assert_eq!(format_funding(1_000), "$1,000");
        assert_eq!(format_funding(600_000), "$600,000");
        assert_eq!(format_funding(1_234_567), "$1,234,567");
        assert_eq!(format_funding(-44_000), "-$44,000");
    }
}
