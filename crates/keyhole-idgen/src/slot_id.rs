use modular_bitfield::prelude::*;
use std::fmt;

/// A packed 40-bit identifier value: epoch seconds plus a per-second
/// sequence number.
///
/// The sequence occupies the high-order bits, so a `SlotId` with sequence
/// zero encodes to exactly the same base-62 string as the bare epoch
/// second, keeping hardened identifiers aligned with time-seeded ones.
#[bitfield]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId {
    /// 32 bits of timestamp (whole seconds since the Unix epoch).
    pub timestamp: B32,
    /// 8 bits of sequence number (resets every second).
    pub sequence: B8,
}

impl SlotId {
    /// Returns the packed value as an integer, ready for base-62 encoding.
    pub fn value(&self) -> u64 {
        let b = self.into_bytes();
        u64::from_le_bytes([b[0], b[1], b[2], b[3], b[4], 0, 0, 0])
    }
}

impl fmt::Debug for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlotId")
            .field("timestamp", &self.timestamp())
            .field("sequence", &self.sequence())
            .finish()
    }
}
