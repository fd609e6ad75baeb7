mod cli;

use crate::cli::{Cli, CollisionPolicyArg, IdStrategyArg, StorageBackendArg};
use anyhow::Context;
use clap::Parser;
use jiff::SignedDuration;
use keyhole_core::LinkStore;
use keyhole_idgen::{IdGenerator, SequencedGenerator, TimeSeededGenerator};
use keyhole_shortener::config::{CollisionPolicy, ShortenerConfig};
use keyhole_shortener::model::CreateResponse;
use keyhole_shortener::service::ShortenerService;
use keyhole_storage::{MemoryStore, RedisStore};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    info!(
        domain_url = %cli.domain_url,
        storage_backend = %cli.storage,
        id_strategy = %cli.id_strategy,
        collision_policy = %cli.collision_policy,
        "creating short link"
    );

    let config = ShortenerConfig::builder()
        .domain_url(cli.domain_url.clone())
        .expiry(SignedDuration::from_secs(cli.expiry_secs))
        .collision_policy(match cli.collision_policy {
            CollisionPolicyArg::Overwrite => CollisionPolicy::Overwrite,
            CollisionPolicyArg::Reject => CollisionPolicy::Reject,
            CollisionPolicyArg::Retry => CollisionPolicy::Retry {
                max_attempts: cli.max_attempts,
            },
        })
        .build();

    match (cli.storage, cli.id_strategy) {
        (StorageBackendArg::InMemory, IdStrategyArg::TimeSeeded) => {
            run(MemoryStore::new(), TimeSeededGenerator::new(), config, &cli.long_url).await
        }
        (StorageBackendArg::InMemory, IdStrategyArg::Sequenced) => {
            run(MemoryStore::new(), SequencedGenerator::new(), config, &cli.long_url).await
        }
        (StorageBackendArg::Redis, strategy) => {
            let redis_url = cli
                .redis_url
                .as_deref()
                .context("redis url is required when the storage backend is redis")?;
            let store = RedisStore::connect(redis_url, cli.table_name.clone()).await?;
            match strategy {
                IdStrategyArg::TimeSeeded => {
                    run(store, TimeSeededGenerator::new(), config, &cli.long_url).await
                }
                IdStrategyArg::Sequenced => {
                    run(store, SequencedGenerator::new(), config, &cli.long_url).await
                }
            }
        }
    }
}

async fn run<S: LinkStore, G: IdGenerator>(
    store: S,
    generator: G,
    config: ShortenerConfig,
    long_url: &str,
) -> anyhow::Result<()> {
    let service = ShortenerService::new(store, generator, config)?;
    let link = service.create(long_url).await?;
    println!("{}", serde_json::to_string(&CreateResponse::from(&link))?);
    Ok(())
}
