use crate::config::RedirectorConfig;
use crate::directive::RedirectDirective;
use crate::error::RedirectorError;
use keyhole_core::{LinkRecord, ReadLinkStore, ShortId, StorageError};
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Outcome of a lookup, before it is folded into a redirect directive.
///
/// Kept distinct so callers and logs can tell a missing identifier from a
/// backend failure; the wire response deliberately cannot.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// The identifier maps to a live record.
    Found(LinkRecord),
    /// The identifier is unknown, or the backend already expired it.
    NotFound,
}

/// The read path: resolves identifiers and emits redirect directives.
#[derive(Debug, Clone)]
pub struct RedirectorService<S> {
    store: Arc<S>,
    config: RedirectorConfig,
}

impl<S: ReadLinkStore> RedirectorService<S> {
    /// Creates the service, validating the configuration up front.
    pub fn new(store: S, config: RedirectorConfig) -> Result<Self, RedirectorError> {
        config.validate()?;
        Ok(Self {
            store: Arc::new(store),
            config,
        })
    }

    /// Looks up an identifier, keeping failure classes distinct.
    pub async fn resolve(&self, id: &ShortId) -> Result<Resolution, StorageError> {
        trace!(id = %id, "resolving short identifier");

        match self.store.get(id).await? {
            Some(record) => {
                debug!(id = %id, location = %record.long_url, "resolved short identifier");
                Ok(Resolution::Found(record))
            }
            None => {
                debug!(id = %id, "short identifier not found");
                Ok(Resolution::NotFound)
            }
        }
    }

    /// Serves a retrieve request: every outcome becomes a 301 directive.
    ///
    /// Malformed ids and missing records redirect to the fallback without
    /// an error path; backend failures also fall back, but are logged
    /// loudly first so they stay observable.
    pub async fn retrieve(&self, raw_id: &str) -> RedirectDirective {
        let id = match ShortId::parse(raw_id) {
            Ok(id) => id,
            Err(e) => {
                debug!(raw_id, error = %e, "rejecting malformed identifier");
                return self.fallback();
            }
        };

        match self.resolve(&id).await {
            Ok(Resolution::Found(record)) => RedirectDirective::permanent(record.long_url),
            Ok(Resolution::NotFound) => self.fallback(),
            Err(e) => {
                warn!(id = %id, error = %e, "lookup failed, serving fallback");
                self.fallback()
            }
        }
    }

    fn fallback(&self) -> RedirectDirective {
        RedirectDirective::permanent(self.config.fallback_url.clone())
    }
}
