/// Currency phrase formatting
///
/// Wraps the encoder to turn a decimal-looking string ("152.45") into a
/// spoken rupee/paise phrase with the first letter capitalized:
/// "One hundred fifty-two rupees and forty-five paise".
use crate::config::constants::PAISE_DIGITS;
use crate::conversion::number_to_words::number_to_words;
use crate::error::{ConvertError, Result};
use crate::lexicon::ScaleSystem;

/// Parse the fractional part of the input into paise.
///
/// The string is truncated to at most PAISE_DIGITS characters and
/// right-padded with a zero when exactly one character long, so "5" → 50
/// and "456" → 45. Anything that still fails to parse contributes 0 —
/// only the integer part can make the whole request fail.
fn parse_paise(decimal_str: &str) -> i64 {
    let mut digits: String = decimal_str.chars().take(PAISE_DIGITS).collect();
    if digits.chars().count() == 1 {
        digits.push('0');
    }
    digits.parse().unwrap_or(0)
}

/// Upper-case the first character of a phrase, leaving the rest unchanged
fn capitalize(phrase: &str) -> String {
    let mut chars = phrase.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Format a raw decimal string as a spoken currency phrase
///
/// The input is split on the first '.'. The integer part must parse as an
/// i64 (InvalidFormat otherwise, which also catches 64-bit overflow); the
/// paise part is normalized to two digits per `parse_paise`. The "and ...
/// paise" clause appears only when the paise amount is positive.
///
/// Singular/plural: "rupee" only when the whole-unit amount is exactly
/// one (positive or negative), "paisa" only when the paise amount is
/// exactly one.
pub fn format_currency(raw: &str, system: ScaleSystem) -> Result<String> {
    let trimmed = raw.trim();
    let (integer_str, decimal_str) = match trimmed.split_once('.') {
        Some((integer, decimal)) => (integer, decimal),
        None => (trimmed, ""),
    };

    let integer_part: i64 = integer_str.parse().map_err(|_| {
        ConvertError::InvalidFormat(format!(
            "cannot parse {:?} as a 64-bit integer",
            integer_str
        ))
    })?;
    let decimal_part = parse_paise(decimal_str);

    let mut phrase = number_to_words(integer_part, system);
    phrase.push_str(if integer_part.unsigned_abs() == 1 {
        " rupee"
    } else {
        " rupees"
    });

    if decimal_part > 0 {
        phrase.push_str(" and ");
        phrase.push_str(&number_to_words(decimal_part, system));
        phrase.push_str(if decimal_part == 1 { " paisa" } else { " paise" });
    }

    Ok(capitalize(&phrase))
}
