use serde::{Deserialize, Serialize};

/// HTTP status used for every redirect this service emits.
pub const MOVED_PERMANENTLY: u16 = 301;

/// A redirect instruction for the caller, in the legacy wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectDirective {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub location: String,
}

impl RedirectDirective {
    /// A permanent redirect to `location`.
    pub fn permanent(location: impl Into<String>) -> Self {
        Self {
            status_code: MOVED_PERMANENTLY,
            location: location.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_shape_uses_the_legacy_field_names() {
        let directive = RedirectDirective::permanent("https://example.com/page");
        let json = serde_json::to_value(&directive).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "statusCode": 301,
                "location": "https://example.com/page",
            })
        );
    }
}
