use std::ops::RangeInclusive;

use rand::Rng;

/// Codes are six decimal digits with no leading zero.
pub const CODE_RANGE: RangeInclusive<u32> = 100_000..=999_999;

pub fn generate_verification_code() -> String {
    rand::thread_rng().gen_range(CODE_RANGE).to_string()
}
