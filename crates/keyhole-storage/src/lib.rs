//! Link store implementations.
//!
//! [`MemoryStore`] backs tests and single-process use; [`RedisStore`]
//! speaks to a real key-value backend that enforces record expiry on its
//! own, the way the store contract expects.

pub mod memory;
pub mod redis;

pub use memory::MemoryStore;
pub use self::redis::RedisStore;
