use crate::clock::{Clock, SystemClock};
use crate::error::Error;
use crate::slot_id::SlotId;
use crate::IdGenerator;
use jiff::Timestamp;
use keyhole_core::ShortId;
use std::sync::Mutex;

const MAX_TIMESTAMP_SECONDS: i64 = u32::MAX as i64;
const MAX_SEQUENCE: u8 = u8::MAX;

#[derive(Debug, Default)]
struct SequenceState {
    last_second: Option<i64>,
    sequence: u8,
}

/// Hardened identifier generator: the time-seeded scheme extended with a
/// per-second sequence counter.
///
/// The first id of each second carries sequence zero and is therefore
/// identical to the plain time-seeded id; later ids in the same second
/// differ in the packed sequence field. Exhausting a second's 256 slots
/// blocks until the next second. A clock that moves backward blocks until
/// it catches up with the last second handed out, so a
/// `(second, sequence)` pair is never reissued.
pub struct SequencedGenerator<C: Clock = SystemClock> {
    clock: C,
    state: Mutex<SequenceState>,
}

impl SequencedGenerator<SystemClock> {
    /// Creates a generator backed by the real system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for SequencedGenerator<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> SequencedGenerator<C> {
    /// Creates a generator reading time from the given clock.
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            state: Mutex::new(SequenceState::default()),
        }
    }

    /// Produces the next packed id.
    pub fn next_id(&self) -> Result<SlotId, Error> {
        let mut state = self.state.lock().map_err(|_| Error::StatePoisoned)?;

        let mut now = self.clock.now();

        if let Some(last) = state.last_second {
            if now.as_second() < last {
                // The clock ran backward. Wait it out rather than reissue
                // a pair that may already be in the wild.
                let target =
                    Timestamp::from_second(last).map_err(|_| Error::TimestampOutOfRange)?;
                self.clock.wait_until(target);
                now = self.clock.now();
            }

            if now.as_second() == last {
                if state.sequence == MAX_SEQUENCE {
                    // All 256 slots of this second are spoken for; start
                    // fresh in the next one.
                    let next =
                        Timestamp::from_second(last + 1).map_err(|_| Error::TimestampOutOfRange)?;
                    self.clock.wait_until(next);
                    now = self.clock.now();
                    state.sequence = 0;
                } else {
                    state.sequence += 1;
                }
            } else {
                state.sequence = 0;
            }
        } else {
            state.sequence = 0;
        }

        let second = now.as_second();
        if !(0..=MAX_TIMESTAMP_SECONDS).contains(&second) {
            return Err(Error::TimestampOutOfRange);
        }

        state.last_second = Some(second);

        Ok(SlotId::new()
            .with_timestamp(second as u32)
            .with_sequence(state.sequence))
    }
}

impl<C: Clock + 'static> IdGenerator for SequencedGenerator<C> {
    fn generate(&self) -> ShortId {
        // Generation is contractually infallible: the only failure states
        // are a poisoned lock and a clock outside the 32-bit second range.
        let id = self
            .next_id()
            .expect("sequenced generator failed to produce the next id");
        ShortId::generated(id.value())
    }
}
