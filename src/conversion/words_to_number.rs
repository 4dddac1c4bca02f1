/// Words to number decoding
///
/// Parses a free-form phrase ("forty-five thousand seven hundred rupees")
/// back into an integer. This direction trades strictness for robustness:
/// it never fails. Unrecognized tokens are skipped, and empty or fully
/// unparseable input decodes to 0 — callers that need to distinguish "zero"
/// from "garbage" must validate upstream.
use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::lexicon;

lazy_static! {
    /// Connective and currency words stripped before tokenization.
    /// Whole-word matches only, so "sandy" or "paisely" survive.
    static ref FILLER_WORDS: Regex = Regex::new(r"\b(and|rupees|rupee|paisa|paise)\b").unwrap();
}

/// Fold Unicode punctuation variants into the ASCII forms the tokenizer
/// expects: hyphen/dash variants to '-', non-breaking space to a regular
/// space, soft hyphens removed, then NFC normalization.
fn normalize_phrase(text: &str) -> String {
    let mut cleaned = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            // Hyphen, non-breaking hyphen, figure dash, en dash, em dash
            '\u{2010}' | '\u{2011}' | '\u{2012}' | '\u{2013}' | '\u{2014}' => cleaned.push('-'),
            // Non-breaking space → regular space
            '\u{00A0}' => cleaned.push(' '),
            // Soft hyphen → removed
            '\u{00AD}' => continue,
            _ => cleaned.push(ch),
        }
    }
    cleaned.nfc().collect()
}

/// Decode a word phrase into a signed 64-bit integer
///
/// The phrase may be mixed case, hyphenated, and may contain the connective
/// "and" and the currency words rupees/rupee/paisa/paise, all of which are
/// ignored. "negative" anywhere in the text flips the sign of the result —
/// a substring match, not restricted to word boundaries (see DESIGN.md).
///
/// Accumulation runs left to right with two registers: `current` collects
/// the in-progress hundred/tens/ones group, and `total` sums completed
/// scaled groups. "hundred" multiplies the current group; thousand-and-above
/// words close it out. Arithmetic saturates, so pathological input clamps
/// at the i64 range instead of wrapping.
pub fn words_to_number(phrase: &str) -> i64 {
    let text = normalize_phrase(phrase).to_lowercase().replace('-', " ");
    let text = FILLER_WORDS.replace_all(&text, " ");

    let mut negative = false;
    let text = if text.contains("negative") {
        negative = true;
        text.replace("negative", "")
    } else {
        text.into_owned()
    };

    let mut total: i64 = 0;
    let mut current: i64 = 0;

    for token in text.split_whitespace() {
        let value = match lexicon::word_value(token) {
            Some(v) => v,
            None => {
                tracing::trace!(token, "skipping unrecognized token");
                continue;
            }
        };

        if value == 100 {
            current = current.saturating_mul(100);
            if current == 0 {
                // A bare "hundred" means 100
                current = 100;
            }
        } else if value >= 1000 {
            if current == 0 {
                // A bare "thousand" (or lakh, crore, ...) means one of it
                current = 1;
            }
            total = total.saturating_add(current.saturating_mul(value));
            current = 0;
        } else {
            current = current.saturating_add(value);
        }
    }
    total = total.saturating_add(current);

    if negative {
        total.saturating_neg()
    } else {
        total
    }
}
