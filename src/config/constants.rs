/// Maximum accepted length for a word-phrase input (in characters)
///
/// The decoder itself never fails, so this guard lives at the CLI boundary:
/// oversized input is rejected before decoding starts.
pub const MAX_PHRASE_LENGTH: usize = 10_000;

/// Number of fractional digits spoken as paise
///
/// The fractional input is truncated to this many characters and padded to
/// it, so the paise amount is always in [0, 99].
pub const PAISE_DIGITS: usize = 2;
