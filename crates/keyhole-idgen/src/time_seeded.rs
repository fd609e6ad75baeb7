use crate::clock::{Clock, SystemClock};
use crate::IdGenerator;
use keyhole_core::ShortId;

/// The legacy identifier scheme: the current epoch second, base-62
/// encoded.
///
/// Deterministic for a given second and injective across distinct
/// seconds, but *not* unique within one. Two calls inside the same
/// wall-clock second produce the same identifier, and the later write
/// silently replaces the earlier record under an overwriting store
/// policy. Callers that cannot tolerate that race should use
/// [`SequencedGenerator`](crate::SequencedGenerator) or a
/// collision-checking write policy.
#[derive(Debug)]
pub struct TimeSeededGenerator<C: Clock = SystemClock> {
    clock: C,
}

impl TimeSeededGenerator<SystemClock> {
    /// Creates a generator backed by the real system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for TimeSeededGenerator<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TimeSeededGenerator<C> {
    /// Creates a generator reading time from the given clock.
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Encodes the clock's current second as an identifier.
    pub fn current_id(&self) -> ShortId {
        // The id space starts at the Unix epoch; clamp anything earlier.
        let seconds = self.clock.now().as_second().max(0) as u64;
        ShortId::generated(seconds)
    }
}

impl<C: Clock + 'static> IdGenerator for TimeSeededGenerator<C> {
    fn generate(&self) -> ShortId {
        self.current_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use keyhole_core::encoding::ALPHABET;

    #[test]
    fn id_is_the_encoded_epoch_second() {
        let gen = TimeSeededGenerator::with_clock(ManualClock::at_second(61));
        assert_eq!(gen.generate().as_str(), "Z");

        let gen = TimeSeededGenerator::with_clock(ManualClock::at_second(62));
        assert_eq!(gen.generate().as_str(), "10");
    }

    #[test]
    fn same_second_collides_by_design() {
        let gen = TimeSeededGenerator::with_clock(ManualClock::at_second(1_754_524_800));

        // The documented race: within one second the generator is a
        // constant function.
        assert_eq!(gen.generate(), gen.generate());
    }

    #[test]
    fn distinct_seconds_produce_distinct_ids() {
        let clock = ManualClock::at_second(1_754_524_800);
        let gen = TimeSeededGenerator::with_clock(clock.clone());

        let first = gen.generate();
        clock.advance_secs(1);
        let second = gen.generate();

        assert_ne!(first, second);
    }

    #[test]
    fn ids_stay_inside_the_alphabet_and_are_compact() {
        let gen = TimeSeededGenerator::with_clock(ManualClock::at_second(1_754_524_800));
        let id = gen.generate();

        assert!(!id.as_str().is_empty());
        assert!(id.as_str().chars().all(|c| ALPHABET.contains(c)));
        assert!(id.as_str().len() <= 7);
    }

    #[test]
    fn pre_epoch_clock_clamps_to_zero() {
        let gen = TimeSeededGenerator::with_clock(ManualClock::at_second(-5));
        assert_eq!(gen.generate().as_str(), "0");
    }
}
