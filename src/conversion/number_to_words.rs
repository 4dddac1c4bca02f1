/// Number to words encoding
///
/// Turns a signed 64-bit integer into its spoken form, in either the
/// International (thousand/million/billion) or Indian (thousand/lakh/crore)
/// convention. Output is lowercase, words separated by single spaces, with
/// hyphens only inside a tens-ones pair ("twenty-five").
use crate::lexicon::{ScaleSystem, ONES, TENS};

/// Convert a number in [0, 999] to words; empty string for 0.
///
/// The caller guarantees the range, so plain array indexing is safe.
fn convert_chunk(n: u64) -> String {
    let mut n = n as usize;
    let mut words = String::new();

    if n >= 100 {
        words.push_str(ONES[n / 100]);
        words.push_str(" hundred");
        n %= 100;
        if n > 0 {
            words.push(' ');
        }
    }
    if n >= 20 {
        words.push_str(TENS[n / 10]);
        n %= 10;
        if n > 0 {
            words.push('-');
        }
    }
    if n > 0 {
        words.push_str(ONES[n]);
    }

    words
}

/// Convert a signed 64-bit integer to its word phrase
///
/// Examples:
/// - `number_to_words(0, _)` → "zero"
/// - `number_to_words(-5, International)` → "negative five"
/// - `number_to_words(1_000_000, International)` → "one million"
/// - `number_to_words(100_000, Indian)` → "one lakh"
///
/// This function never fails. In Indian mode, digits above the padma scale
/// (10^15) are dropped once the scale table is exhausted; the International
/// table covers all of i64.
pub fn number_to_words(num: i64, system: ScaleSystem) -> String {
    if num == 0 {
        return "zero".to_string();
    }

    let mut result = String::new();
    if num < 0 {
        result.push_str("negative ");
    }

    // unsigned_abs avoids the i64::MIN negation overflow
    let mut remaining = num.unsigned_abs();
    let scales = system.scale_words();
    let mut parts: Vec<String> = Vec::new();

    match system {
        ScaleSystem::International => {
            let mut scale_index = 0;
            while remaining > 0 {
                if remaining % 1000 != 0 {
                    let mut chunk = convert_chunk(remaining % 1000);
                    if scale_index > 0 {
                        chunk.push(' ');
                        chunk.push_str(scales[scale_index]);
                    }
                    parts.push(chunk);
                }
                remaining /= 1000;
                scale_index += 1;
            }
        }
        ScaleSystem::Indian => {
            // Lowest group is base-1000 and carries no scale word
            parts.push(convert_chunk(remaining % 1000));
            remaining /= 1000;

            // Every later group is base-100 (lakh, crore, ...)
            let mut scale_index = 1;
            while remaining > 0 && scale_index < scales.len() {
                if remaining % 100 != 0 {
                    parts.push(format!(
                        "{} {}",
                        convert_chunk(remaining % 100),
                        scales[scale_index]
                    ));
                }
                remaining /= 100;
                scale_index += 1;
            }
        }
    }

    // Groups were collected least-significant-first
    parts.reverse();
    let phrase = parts
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    result.push_str(&phrase);

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Chunk Converter Tests =====

    #[test]
    fn test_chunk_zero_is_empty() {
        assert_eq!(convert_chunk(0), "");
    }

    #[test]
    fn test_chunk_ones_and_teens() {
        assert_eq!(convert_chunk(5), "five");
        assert_eq!(convert_chunk(13), "thirteen");
        assert_eq!(convert_chunk(19), "nineteen");
    }

    #[test]
    fn test_chunk_tens_hyphenation() {
        assert_eq!(convert_chunk(20), "twenty");
        assert_eq!(convert_chunk(25), "twenty-five");
        assert_eq!(convert_chunk(99), "ninety-nine");
    }

    #[test]
    fn test_chunk_hundreds() {
        assert_eq!(convert_chunk(100), "one hundred");
        assert_eq!(convert_chunk(105), "one hundred five");
        assert_eq!(convert_chunk(110), "one hundred ten");
        assert_eq!(convert_chunk(999), "nine hundred ninety-nine");
    }

    // ===== International Encoder Tests =====

    #[test]
    fn test_zero() {
        assert_eq!(number_to_words(0, ScaleSystem::International), "zero");
        assert_eq!(number_to_words(0, ScaleSystem::Indian), "zero");
    }

    #[test]
    fn test_negative_five() {
        assert_eq!(
            number_to_words(-5, ScaleSystem::International),
            "negative five"
        );
    }

    #[test]
    fn test_one_hundred_twenty_three() {
        assert_eq!(
            number_to_words(123, ScaleSystem::International),
            "one hundred twenty-three"
        );
    }

    #[test]
    fn test_one_thousand() {
        assert_eq!(
            number_to_words(1_000, ScaleSystem::International),
            "one thousand"
        );
    }

    #[test]
    fn test_one_million() {
        assert_eq!(
            number_to_words(1_000_000, ScaleSystem::International),
            "one million"
        );
    }

    #[test]
    fn test_zero_chunks_are_skipped() {
        // No "zero thousand" between the million and the ones
        assert_eq!(
            number_to_words(1_000_003, ScaleSystem::International),
            "one million three"
        );
    }

    #[test]
    fn test_full_international_phrase() {
        assert_eq!(
            number_to_words(1_234_567, ScaleSystem::International),
            "one million two hundred thirty-four thousand five hundred sixty-seven"
        );
    }

    #[test]
    fn test_large_international_scales() {
        assert_eq!(
            number_to_words(1_000_000_000_000, ScaleSystem::International),
            "one trillion"
        );
        assert_eq!(
            number_to_words(2_000_000_000_000_000_000, ScaleSystem::International),
            "two quintillion"
        );
    }

    #[test]
    fn test_i64_extremes_do_not_panic() {
        let max = number_to_words(i64::MAX, ScaleSystem::International);
        assert!(max.starts_with("nine quintillion"));

        let min = number_to_words(i64::MIN, ScaleSystem::International);
        assert!(min.starts_with("negative nine quintillion"));
    }

    // ===== Indian Encoder Tests =====

    #[test]
    fn test_one_lakh() {
        assert_eq!(number_to_words(100_000, ScaleSystem::Indian), "one lakh");
    }

    #[test]
    fn test_one_crore() {
        assert_eq!(number_to_words(10_000_000, ScaleSystem::Indian), "one crore");
    }

    #[test]
    fn test_indian_grouping() {
        // 12,34,567 reads as twelve lakh, thirty-four thousand, five
        // hundred sixty-seven
        assert_eq!(
            number_to_words(1_234_567, ScaleSystem::Indian),
            "twelve lakh thirty-four thousand five hundred sixty-seven"
        );
    }

    #[test]
    fn test_indian_forty_five_thousand_seven_hundred() {
        assert_eq!(
            number_to_words(45_700, ScaleSystem::Indian),
            "forty-five thousand seven hundred"
        );
    }

    #[test]
    fn test_indian_upper_scales() {
        assert_eq!(
            number_to_words(1_000_000_000, ScaleSystem::Indian),
            "one arab"
        );
        assert_eq!(
            number_to_words(10_000_000_000_000, ScaleSystem::Indian),
            "one neel"
        );
        assert_eq!(
            number_to_words(1_000_000_000_000_000, ScaleSystem::Indian),
            "one padma"
        );
    }

    #[test]
    fn test_indian_negative() {
        assert_eq!(
            number_to_words(-100_000, ScaleSystem::Indian),
            "negative one lakh"
        );
    }

    #[test]
    fn test_indian_scale_exhaustion_drops_high_digits() {
        // 10^17 is beyond padma; the leading digits fall off the table.
        // See DESIGN.md for the truncation semantics.
        assert_eq!(
            number_to_words(100_000_000_000_000_000, ScaleSystem::Indian),
            ""
        );
        // 99 padma keeps everything below the cutoff
        assert_eq!(
            number_to_words(99_000_000_000_000_000, ScaleSystem::Indian),
            "ninety-nine padma"
        );
    }

    // ===== Purity =====

    #[test]
    fn test_idempotent() {
        let a = number_to_words(987_654_321, ScaleSystem::International);
        let b = number_to_words(987_654_321, ScaleSystem::International);
        assert_eq!(a, b);
    }
}
