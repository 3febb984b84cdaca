//! src/presenter.rs
//! Display helpers applied to formatted amounts before they reach a document

use crate::words::number_to_spanish_words;

/// Currency suffix printed after the amount in words.
pub const DEFAULT_CURRENCY_SUFFIX: &str = "Pesos MCTE.";

/// Capitalizes the first letter of each word and lowercases the rest.
/// Runs of whitespace collapse to a single space.
///
/// # Examples
/// ```
/// use amount_words::title_case;
///
/// assert_eq!(title_case("un millón doscientos mil"), "Un Millón Doscientos Mil");
/// assert_eq!(title_case("  diez   con 50/100 "), "Diez Con 50/100");
/// ```
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => {
                    let mut word = first.to_uppercase().collect::<String>();
                    word.extend(chars.flat_map(|c| c.to_lowercase()));
                    word
                }
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Builds the full amount line for a certificate or receipt, e.g.
/// "Un Millón Doscientos Mil Pesos MCTE.".
///
/// Returns an empty string when the amount cannot be written in words, so
/// the suffix never appears on its own.
///
/// # Examples
/// ```
/// use amount_words::{legal_amount_text, DEFAULT_CURRENCY_SUFFIX};
///
/// assert_eq!(
///     legal_amount_text(1_200_000.0, DEFAULT_CURRENCY_SUFFIX),
///     "Un Millón Doscientos Mil Pesos MCTE."
/// );
/// ```
pub fn legal_amount_text(amount: f64, currency_suffix: &str) -> String {
    let words = number_to_spanish_words(amount);
    if words.is_empty() {
        return String::new();
    }

    let suffix = currency_suffix.trim();
    if suffix.is_empty() {
        title_case(&words)
    } else {
        format!("{} {}", title_case(&words), suffix)
    }
}

/// Rounds a number to two decimal places for currency display
///
/// # Examples
/// ```
/// use amount_words::round_to_cents;
///
/// assert_eq!(round_to_cents(10.456), 10.46);
/// assert_eq!(round_to_cents(10.454), 10.45);
/// ```
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        let test_cases = vec![
            ("un millón", "Un Millón"),
            ("treinta y un", "Treinta Y Un"),
            ("VEINTITRÉS", "Veintitrés"),
            ("dos   mil", "Dos Mil"),
            ("   cien   ", "Cien"),
            ("", ""),
        ];

        for (input, expected) in test_cases {
            assert_eq!(title_case(input), expected);
        }
    }

    #[test]
    fn test_legal_amount_text() {
        assert_eq!(
            legal_amount_text(1_234_567.0, DEFAULT_CURRENCY_SUFFIX),
            "Un Millón Doscientos Treinta Y Cuatro Mil Quinientos Sesenta Y Siete Pesos MCTE."
        );
        assert_eq!(
            legal_amount_text(10.5, DEFAULT_CURRENCY_SUFFIX),
            "Diez Con 50/100 Pesos MCTE."
        );
        assert_eq!(legal_amount_text(0.0, "Pesos"), "Cero Pesos");
    }

    #[test]
    fn test_legal_amount_text_edge_cases() {
        assert_eq!(legal_amount_text(f64::NAN, DEFAULT_CURRENCY_SUFFIX), "");
        assert_eq!(legal_amount_text(100.0, "   "), "Cien");
    }

    #[test]
    fn test_round_to_cents() {
        let test_cases = vec![
            (10.456, 10.46),
            (10.454, 10.45),
            (0.0, 0.0),
            (99.999, 100.0),
            (-10.456, -10.46),
        ];

        for (input, expected) in test_cases {
            assert_eq!(round_to_cents(input), expected);
        }
    }
}
