/// Static word tables shared by the encoder and decoder
///
/// All tables are immutable module-level data: plain `const` arrays for the
/// positional names and a `lazy_static` map for word lookup. Nothing here is
/// mutated after construction, so the tables are safe to read from any
/// number of threads without locking.
use lazy_static::lazy_static;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::ConvertError;

/// Names for 0-19; index 0 is empty because zero is never spelled inside a
/// larger number ("one hundred", not "one hundred zero").
pub const ONES: [&str; 20] = [
    "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen", "nineteen",
];

/// Names for the tens column; indexes 0 and 1 are unused (0-19 come from ONES).
pub const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Scale names for the International system, one per base-1000 group.
/// Index 6 (quintillion, 10^18) is enough to cover all of i64.
pub const INTERNATIONAL_SCALES: [&str; 7] = [
    "",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
];

/// Scale names for the Indian system. The first group is base-1000
/// (thousand), every later group is base-100 (lakh = 10^5, crore = 10^7,
/// arab = 10^9, kharab = 10^11, neel = 10^13, padma = 10^15).
pub const INDIAN_SCALES: [&str; 8] = [
    "", "thousand", "lakh", "crore", "arab", "kharab", "neel", "padma",
];

/// Which regional numbering convention the encoder should speak
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleSystem {
    International,
    Indian,
}

impl ScaleSystem {
    /// The ordered magnitude-name table for this system
    pub fn scale_words(&self) -> &'static [&'static str] {
        match self {
            ScaleSystem::International => &INTERNATIONAL_SCALES,
            ScaleSystem::Indian => &INDIAN_SCALES,
        }
    }
}

impl fmt::Display for ScaleSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaleSystem::International => write!(f, "international"),
            ScaleSystem::Indian => write!(f, "indian"),
        }
    }
}

impl FromStr for ScaleSystem {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "international" => Ok(ScaleSystem::International),
            "indian" => Ok(ScaleSystem::Indian),
            other => Err(ConvertError::InvalidFormat(format!(
                "unknown scale system: {} (expected international or indian)",
                other
            ))),
        }
    }
}

lazy_static! {
    /// Word -> value map used by the decoder.
    ///
    /// Built from the same arrays the encoder reads, plus the multipliers of
    /// both scale systems, so the two directions can never disagree on a
    /// spelling. "zero" is inserted explicitly because ONES[0] is empty.
    static ref WORD_VALUES: HashMap<&'static str, i64> = {
        let mut map = HashMap::new();
        map.insert("zero", 0);
        for (value, word) in ONES.iter().enumerate().skip(1) {
            map.insert(*word, value as i64);
        }
        for (index, word) in TENS.iter().enumerate().skip(2) {
            map.insert(*word, (index * 10) as i64);
        }
        map.insert("hundred", 100);
        map.insert("thousand", 1_000);
        map.insert("million", 1_000_000);
        map.insert("billion", 1_000_000_000);
        map.insert("trillion", 1_000_000_000_000);
        map.insert("quadrillion", 1_000_000_000_000_000);
        map.insert("quintillion", 1_000_000_000_000_000_000);
        map.insert("lakh", 100_000);
        map.insert("crore", 10_000_000);
        map.insert("arab", 1_000_000_000);
        map.insert("kharab", 100_000_000_000);
        map.insert("neel", 10_000_000_000_000);
        map.insert("padma", 1_000_000_000_000_000);
        map
    };
}

/// Look up the numeric value of a lowercase word token
pub fn word_value(token: &str) -> Option<i64> {
    WORD_VALUES.get(token).copied()
}
