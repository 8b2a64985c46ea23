/// Maximum accepted input length (in characters)
///
/// Longer phrases are rejected before tokenizing. No valid amount up to the
/// trillions comes anywhere near this.
pub const MAX_INPUT_LENGTH: usize = 10_000;

/// Subunits per whole dollar in the currency profile
pub const CENTS_PER_DOLLAR: i64 = 100;

/// Weight carried by the word "hundred"
pub const HUNDRED: i64 = 100;

pub const THOUSAND: i64 = 1_000;
pub const MILLION: i64 = 1_000_000;
pub const BILLION: i64 = 1_000_000_000;
pub const TRILLION: i64 = 1_000_000_000_000;
