/// Currency sign shown next to ticket prices
pub const NAIRA_SIGN: char = '₦';

/// Format a whole-unit amount for display, e.g. `15000` -> `₦15,000`
pub fn format_price(amount: i32) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if amount < 0 {
        format!("-{}{}", NAIRA_SIGN, grouped)
    } else {
        format!("{}{}", NAIRA_SIGN, grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(format_price(5000), "₦5,000");
        assert_eq!(format_price(15000), "₦15,000");
        assert_eq!(format_price(1234567), "₦1,234,567");
    }

    #[test]
    fn test_small_amounts() {
        assert_eq!(format_price(0), "₦0");
        assert_eq!(format_price(999), "₦999");
        assert_eq!(format_price(-2500), "-₦2,500");
    }
}
