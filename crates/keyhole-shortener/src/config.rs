use crate::error::ShortenError;
use jiff::SignedDuration;
use typed_builder::TypedBuilder;

/// Default record lifetime: one day, matching the legacy deployment.
pub const DEFAULT_EXPIRY: SignedDuration = SignedDuration::from_secs(86_400);

/// Default regeneration budget for [`CollisionPolicy::Retry`].
pub const DEFAULT_RETRY_ATTEMPTS: u32 = 3;

/// How the write path treats an identifier that is already taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// Unconditional put, last-writer-wins. The legacy behavior: no
    /// existence probe is made, so a same-second duplicate from the
    /// time-seeded generator silently replaces the earlier record.
    #[default]
    Overwrite,
    /// Probe the store first and fail the create if the id is taken.
    Reject,
    /// Probe the store and regenerate up to `max_attempts` times before
    /// giving up.
    Retry { max_attempts: u32 },
}

/// Configuration for the shortener write path.
///
/// Built once at startup and injected into
/// [`ShortenerService`](crate::ShortenerService); nothing reads the
/// environment ad hoc.
#[derive(Debug, Clone, TypedBuilder)]
pub struct ShortenerConfig {
    /// Prefix prepended verbatim to generated identifiers to form the
    /// public short URL, e.g. `"https://short.ly/"`. It carries its own
    /// trailing separator.
    pub domain_url: String,
    /// How long records live before the backend may expire them.
    #[builder(default = DEFAULT_EXPIRY)]
    pub expiry: SignedDuration,
    /// Collision handling for generated identifiers.
    #[builder(default)]
    pub collision_policy: CollisionPolicy,
}

impl ShortenerConfig {
    /// Checks the invariants the builder cannot express.
    pub(crate) fn validate(&self) -> Result<(), ShortenError> {
        if self.domain_url.is_empty() {
            return Err(ShortenError::InvalidConfig(
                "domain_url must not be empty".to_string(),
            ));
        }

        if self.expiry <= SignedDuration::ZERO {
            return Err(ShortenError::InvalidConfig(format!(
                "expiry must be positive, got {}",
                self.expiry
            )));
        }

        if let CollisionPolicy::Retry { max_attempts: 0 } = self.collision_policy {
            return Err(ShortenError::InvalidConfig(
                "retry budget must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
