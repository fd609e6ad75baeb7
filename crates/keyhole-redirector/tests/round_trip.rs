//! End-to-end behavior of the create and retrieve paths over a shared
//! store.

use std::sync::Arc;

use keyhole_idgen::{ManualClock, TimeSeededGenerator};
use keyhole_redirector::{RedirectDirective, RedirectorConfig, RedirectorService};
use keyhole_shortener::{ShortenerConfig, ShortenerService};
use keyhole_storage::MemoryStore;

const FALLBACK: &str = "https://fallback.example/lost.jpg";

struct Services {
    shortener: ShortenerService<Arc<MemoryStore>, TimeSeededGenerator<ManualClock>>,
    redirector: RedirectorService<Arc<MemoryStore>>,
}

fn services(domain_url: &str) -> Services {
    let store = Arc::new(MemoryStore::new());
    let generator = TimeSeededGenerator::with_clock(ManualClock::at_second(1_754_524_800));

    let shortener = ShortenerService::new(
        Arc::clone(&store),
        generator,
        ShortenerConfig::builder()
            .domain_url(domain_url.to_string())
            .build(),
    )
    .unwrap();

    let redirector = RedirectorService::new(
        store,
        RedirectorConfig::builder()
            .fallback_url(FALLBACK.to_string())
            .build(),
    )
    .unwrap();

    Services {
        shortener,
        redirector,
    }
}

#[tokio::test]
async fn created_links_resolve_to_the_original_url() {
    let services = services("short.ly/");

    let link = services
        .shortener
        .create("https://example.com/page")
        .await
        .unwrap();

    let directive = services.redirector.retrieve(link.short_id.as_str()).await;
    assert_eq!(
        directive,
        RedirectDirective::permanent("https://example.com/page")
    );
}

#[tokio::test]
async fn short_urls_are_the_domain_prefix_plus_the_id() {
    let services = services("short.ly/");

    let link = services
        .shortener
        .create("https://example.com/page")
        .await
        .unwrap();

    let (prefix, id) = link.short_url.split_at("short.ly/".len());
    assert_eq!(prefix, "short.ly/");
    assert!(!id.is_empty());
    assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(id, link.short_id.as_str());
}

#[tokio::test]
async fn resolving_an_unwritten_id_serves_the_fallback() {
    let services = services("short.ly/");

    let directive = services.redirector.retrieve("neverWr1tten").await;
    assert_eq!(directive, RedirectDirective::permanent(FALLBACK));
}

#[tokio::test]
async fn fresh_records_resolve_well_inside_the_expiry_window() {
    // A record created moments ago with the default day-long expiry.
    let services = services("short.ly/");

    let link = services
        .shortener
        .create("https://example.com/page")
        .await
        .unwrap();

    let first = services.redirector.retrieve(link.short_id.as_str()).await;
    let second = services.redirector.retrieve(link.short_id.as_str()).await;

    assert_eq!(
        first,
        RedirectDirective::permanent("https://example.com/page")
    );
    assert_eq!(first, second);
}
