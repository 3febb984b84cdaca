//! src/normalize.rs
//! Turns user-typed money strings into whole amounts and back

/// Strips separators, currency symbols and any other non-digit characters
/// from a typed amount.
///
/// Returns `None` when no digit is left or the digits do not fit in `u64`.
///
/// # Examples
/// ```
/// use amount_words::normalize_money_input;
///
/// assert_eq!(normalize_money_input("1.234.567"), Some(1_234_567));
/// assert_eq!(normalize_money_input("$ 1,500"), Some(1_500));
/// assert_eq!(normalize_money_input("abc"), None);
/// ```
pub fn normalize_money_input(input: &str) -> Option<u64> {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Groups thousands with dots the way amount fields display them.
///
/// # Examples
/// ```
/// use amount_words::format_money_input;
///
/// assert_eq!(format_money_input(1_234_567), "1.234.567");
/// assert_eq!(format_money_input(999), "999");
/// ```
pub fn format_money_input(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    grouped
}
