use keyhole_core::ShortId;
use serde::Serialize;

/// A successfully created mapping, as returned by the shortener service.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedLink {
    pub short_id: ShortId,
    pub short_url: String,
    pub long_url: String,
}

/// Wire form of a successful create, served with status 200.
///
/// Field names follow the legacy external contract, quirk included:
/// the `short_id` field carries the full short URL, not the bare
/// identifier.
#[derive(Debug, Clone, Serialize)]
pub struct CreateResponse {
    pub short_id: String,
    pub long_url: String,
}

impl From<&CreatedLink> for CreateResponse {
    fn from(link: &CreatedLink) -> Self {
        Self {
            short_id: link.short_url.clone(),
            long_url: link.long_url.clone(),
        }
    }
}
