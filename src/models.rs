use serde::Serialize;

use crate::lexicon::ScaleSystem;

/// A single completed conversion, as written by the CLI's --json export
#[derive(Debug, Serialize, Clone)]
pub struct ConversionRecord {
    /// "number_to_words" or "words_to_number"
    pub direction: &'static str,
    /// Raw input as the user supplied it
    pub input: String,
    /// Result phrase or decoded integer, rendered as text
    pub output: String,
    /// Scale system used; absent for the decode direction, which is
    /// system-agnostic
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<ScaleSystem>,
    /// RFC 3339 timestamp of when the conversion ran
    pub generated_at: String,
}

impl ConversionRecord {
    pub fn number_to_words(input: &str, output: &str, system: ScaleSystem) -> Self {
        Self {
            direction: "number_to_words",
            input: input.to_string(),
            output: output.to_string(),
            system: Some(system),
            generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn words_to_number(input: &str, value: i64) -> Self {
        Self {
            direction: "words_to_number",
            input: input.to_string(),
            output: value.to_string(),
            system: None,
            generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
