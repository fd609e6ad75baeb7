//! Identifier generation for keyhole.
//!
//! Two strategies sit behind the [`IdGenerator`] trait:
//!
//! - [`TimeSeededGenerator`] reproduces the legacy scheme: the current
//!   epoch second, base-62 encoded. Calls within the same second collide,
//!   and that race is part of the documented contract.
//! - [`SequencedGenerator`] is the hardened alternative: the same epoch
//!   second extended with a per-second sequence counter, so same-second
//!   calls stay unique within a process.

pub mod clock;
pub mod error;
pub mod sequenced;
pub mod slot_id;
pub mod time_seeded;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::Error;
pub use sequenced::SequencedGenerator;
pub use slot_id::SlotId;
pub use time_seeded::TimeSeededGenerator;

use keyhole_core::ShortId;

/// A source of short identifiers.
///
/// Implementations are pure of storage. Whether identifiers are unique is
/// a property of the strategy (and ultimately of the write policy), not
/// of this trait.
pub trait IdGenerator: Send + Sync + 'static {
    /// Produces the next identifier.
    fn generate(&self) -> ShortId;
}
