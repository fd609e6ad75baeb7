mod cli;

use crate::cli::{Cli, StorageBackendArg};
use anyhow::Context;
use clap::Parser;
use keyhole_core::ReadLinkStore;
use keyhole_redirector::config::RedirectorConfig;
use keyhole_redirector::service::RedirectorService;
use keyhole_storage::{MemoryStore, RedisStore};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    info!(
        short_id = %cli.short_id,
        storage_backend = %cli.storage,
        "resolving short link"
    );

    let config = RedirectorConfig::builder()
        .fallback_url(cli.fallback_url.clone())
        .build();

    match cli.storage {
        StorageBackendArg::InMemory => run(MemoryStore::new(), config, &cli.short_id).await,
        StorageBackendArg::Redis => {
            let redis_url = cli
                .redis_url
                .as_deref()
                .context("redis url is required when the storage backend is redis")?;
            let store = RedisStore::connect(redis_url, cli.table_name.clone()).await?;
            run(store, config, &cli.short_id).await
        }
    }
}

async fn run<S: ReadLinkStore>(
    store: S,
    config: RedirectorConfig,
    short_id: &str,
) -> anyhow::Result<()> {
    let service = RedirectorService::new(store, config)?;
    let directive = service.retrieve(short_id).await;
    println!("{}", serde_json::to_string(&directive)?);
    Ok(())
}
