use crate::error::RedirectorError;
use typed_builder::TypedBuilder;

/// Configuration for the redirect read path.
#[derive(Debug, Clone, TypedBuilder)]
pub struct RedirectorConfig {
    /// Where lookups that cannot be served are redirected.
    ///
    /// A product decision rather than an error channel: missing ids and
    /// backend failures both land here, and the logs tell them apart.
    pub fallback_url: String,
}

impl RedirectorConfig {
    pub(crate) fn validate(&self) -> Result<(), RedirectorError> {
        if self.fallback_url.is_empty() {
            return Err(RedirectorError::InvalidConfig(
                "fallback_url must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fallback_is_rejected() {
        let config = RedirectorConfig::builder()
            .fallback_url(String::new())
            .build();
        assert!(matches!(
            config.validate(),
            Err(RedirectorError::InvalidConfig(_))
        ));
    }
}
