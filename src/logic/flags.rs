//! Result flag bitmask decoding.

use crate::models::FlagData;

const CLEARED: u32 = 0b1;

/// Decodes the flag bitmask of a result. Unknown bits are ignored.
pub fn decode_flags(flags: u32) -> FlagData {
    FlagData {
        cleared: flags & CLEARED == CLEARED,
    }
}
