//! src/words.rs
//! Spanish amount-in-words formatter used on printed certificates and receipts

use log::debug;

const UNITS: [&str; 10] = [
    "", "uno", "dos", "tres", "cuatro", "cinco", "seis", "siete", "ocho", "nueve",
];

// 10 through 19
const TEENS: [&str; 10] = [
    "diez", "once", "doce", "trece", "catorce",
    "quince", "dieciséis", "diecisiete", "dieciocho", "diecinueve",
];

const TENS: [&str; 10] = [
    "", "", "veinte", "treinta", "cuarenta",
    "cincuenta", "sesenta", "setenta", "ochenta", "noventa",
];

const HUNDREDS: [&str; 10] = [
    "", "ciento", "doscientos", "trescientos", "cuatrocientos",
    "quinientos", "seiscientos", "setecientos", "ochocientos", "novecientos",
];

/// Converts an amount into the Spanish words printed next to it on legal
/// documents.
///
/// The integer part is spelled out, every standalone "uno" becomes "un", and
/// non-zero cents are appended as `" con NN/100"`. Cents that round up to 100
/// carry into the integer part instead, so 0.999 reads "un". Negative amounts
/// are formatted by magnitude. Returns an empty string only for NaN and the
/// infinities; every finite amount gets words, however large.
///
/// # Examples
/// ```
/// use amount_words::number_to_spanish_words;
///
/// assert_eq!(number_to_spanish_words(1_200_000.0), "un millón doscientos mil");
/// assert_eq!(number_to_spanish_words(10.5), "diez con 50/100");
/// assert_eq!(number_to_spanish_words(f64::NAN), "");
/// ```
pub fn number_to_spanish_words(amount: f64) -> String {
    let (integer_part, cents) = match split_amount(amount) {
        Some(parts) => parts,
        None => {
            debug!("Amount {} is not representable in words", amount);
            return String::new();
        }
    };

    let words = elide_uno(&whole_to_words(integer_part));

    if cents > 0 {
        format!("{} con {:02}/100", words, cents)
    } else {
        words
    }
}

/// Splits an amount into its whole units (an integral, non-negative `f64`)
/// and rounded cents. `None` only for non-finite input.
///
/// Cents that round up to 100 carry into the integer part, so the cents
/// value is always below 100.
pub fn split_amount(amount: f64) -> Option<(f64, u8)> {
    if !amount.is_finite() {
        return None;
    }

    let magnitude = amount.abs();
    let mut whole = magnitude.floor();
    let mut cents = ((magnitude - whole) * 100.0).round() as u8;
    if cents >= 100 {
        whole += 1.0;
        cents = 0;
    }

    Some((whole, cents))
}

/// Spells out a whole number without the "uno" elision.
///
/// Millions recurse into this same function, so there is no upper bound on
/// the magnitudes it can compose.
pub fn integer_to_words(n: u64) -> String {
    if n == 0 {
        return "cero".to_string();
    }

    let millions = match n / 1_000_000 {
        0 => None,
        1 => Some("un millón".to_string()),
        m => Some(format!("{} millones", integer_to_words(m))),
    };

    join_segments(millions, n % 1_000_000 / 1000, n % 1000)
}

/// Same as `integer_to_words` for an integral `f64`, so finite amounts past
/// `u64::MAX` still compose. `%` is exact on integral floats.
fn whole_to_words(whole: f64) -> String {
    // u64::MAX as f64 rounds up to 2^64, the first value that no longer fits
    if whole < u64::MAX as f64 {
        return integer_to_words(whole as u64);
    }

    // at least 2^64 / 10^6 millions, never "un millón"
    let millions = (whole / 1e6).floor();
    let thousands = ((whole % 1e6) / 1e3).floor() as u64;
    let remainder = (whole % 1e3) as u64;

    join_segments(
        Some(format!("{} millones", whole_to_words(millions))),
        thousands,
        remainder,
    )
}

fn join_segments(millions: Option<String>, thousands: u64, remainder: u64) -> String {
    let mut segments = Vec::with_capacity(3);
    segments.extend(millions);

    // "mil", never "uno mil"
    match thousands {
        0 => {}
        1 => segments.push("mil".to_string()),
        t => segments.push(format!("{} mil", words999(t))),
    }

    if remainder > 0 {
        segments.push(words999(remainder));
    }

    segments.join(" ")
}

/// Words for a value below one thousand. Zero yields an empty string.
fn words999(n: u64) -> String {
    debug_assert!(n < 1000, "words999 called with {}", n);

    if n == 0 {
        return String::new();
    }
    if n == 100 {
        return "cien".to_string();
    }

    let hundred = (n / 100 % 10) as usize;
    let ten = (n % 100 / 10) as usize;
    let unit = (n % 10) as usize;

    let mut parts = Vec::with_capacity(2);

    if hundred > 0 {
        parts.push(HUNDREDS[hundred].to_string());
    }

    match ten {
        0 if unit > 0 => parts.push(UNITS[unit].to_string()),
        0 => {}
        1 => parts.push(TEENS[unit].to_string()),
        2 => parts.push(twenties(unit)),
        _ if unit == 0 => parts.push(TENS[ten].to_string()),
        _ => parts.push(format!("{} y {}", TENS[ten], UNITS[unit])),
    }

    parts.join(" ")
}

/// The fused 20-29 forms.
fn twenties(unit: usize) -> String {
    match unit {
        0 => "veinte".to_string(),
        2 => "veintidós".to_string(),
        3 => "veintitrés".to_string(),
        u => format!("veinti{}", UNITS[u]),
    }
}

/// Replaces every standalone "uno" with "un". Fused forms such as
/// "veintiuno" are left alone.
fn elide_uno(words: &str) -> String {
    words
        .split(' ')
        .map(|word| if word == "uno" { "un" } else { word })
        .collect::<Vec<&str>>()
        .join(" ")
}
