use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The clock reads outside the 32-bit epoch-second range of the id
    /// layout (before 1970, or past the year 2106).
    #[error("current time does not fit the identifier layout")]
    TimestampOutOfRange,
    /// The generator's state lock was poisoned by a panicking thread.
    #[error("generator state is poisoned")]
    StatePoisoned,
}
