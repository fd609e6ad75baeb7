use crate::encoding;
use crate::error::CoreError;
use smol_str::SmolStr;
use std::fmt::Display;

/// A validated short identifier for a stored link.
///
/// Identifiers are non-empty and strictly ASCII alphanumeric. Generated
/// identifiers satisfy this by construction; identifiers arriving in
/// requests go through [`ShortId::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShortId(SmolStr);

impl ShortId {
    /// Creates a `ShortId` by base-62 encoding a generated integer value.
    ///
    /// Encoder output is alphanumeric by construction, so no validation
    /// is performed.
    pub fn generated(value: impl Into<u128>) -> Self {
        Self(encoding::encode_base62(value))
    }

    /// Parses an identifier from untrusted input, e.g. a retrieve request.
    pub fn parse(id: impl AsRef<str>) -> Result<Self, CoreError> {
        let id = id.as_ref();
        Self::validate(id)?;
        Ok(Self(SmolStr::new(id)))
    }

    /// Creates a `ShortId` without validation.
    ///
    /// Use this only for identifiers from trusted internal sources.
    pub fn new_unchecked(id: impl AsRef<str>) -> Self {
        Self(SmolStr::new(id.as_ref()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Builds the public short URL for this identifier.
    ///
    /// The domain prefix is used verbatim: the short URL is always the
    /// plain concatenation `domain_url + short_id`, so the prefix carries
    /// its own trailing separator (e.g. `"https://short.ly/"`).
    pub fn to_short_url(&self, domain_url: &str) -> String {
        format!("{domain_url}{self}")
    }

    fn validate(id: &str) -> Result<(), CoreError> {
        if id.is_empty() {
            return Err(CoreError::InvalidShortId(
                "identifier must not be empty".to_string(),
            ));
        }

        if !id.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(CoreError::InvalidShortId(format!(
                "identifier must contain only alphanumeric characters: '{id}'"
            )));
        }

        Ok(())
    }
}

impl Display for ShortId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_ids_parse() {
        assert!(ShortId::parse("1UWGDp").is_ok());
        assert!(ShortId::parse("abc123XYZ").is_ok());
        assert!(ShortId::parse("0").is_ok());
    }

    #[test]
    fn empty_id_is_rejected() {
        assert!(matches!(
            ShortId::parse(""),
            Err(CoreError::InvalidShortId(_))
        ));
    }

    #[test]
    fn non_alphanumeric_ids_are_rejected() {
        assert!(ShortId::parse("abc/def").is_err());
        assert!(ShortId::parse("abc def").is_err());
        assert!(ShortId::parse("abc-def").is_err());
        assert!(ShortId::parse("abc!").is_err());
    }

    #[test]
    fn generated_ids_are_valid_by_construction() {
        let id = ShortId::generated(1_754_524_800u64);
        assert!(ShortId::parse(id.as_str()).is_ok());
    }

    #[test]
    fn short_url_is_plain_concatenation() {
        let id = ShortId::new_unchecked("1UWGDp");
        assert_eq!(id.to_short_url("short.ly/"), "short.ly/1UWGDp");
        // No separator is invented; the prefix is taken as configured.
        assert_eq!(id.to_short_url("short.ly"), "short.ly1UWGDp");
    }

    #[test]
    fn display_matches_as_str() {
        let id = ShortId::new_unchecked("abc123");
        assert_eq!(id.to_string(), "abc123");
        assert_eq!(id.as_str(), "abc123");
    }
}
