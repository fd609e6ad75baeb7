use clap::{Parser, ValueEnum};
use keyhole_shortener::config::DEFAULT_RETRY_ATTEMPTS;
use std::fmt::{Display, Formatter};

pub const DOMAIN_URL_ENV: &str = "KEYHOLE_DOMAIN_URL";
pub const EXPIRY_SECS_ENV: &str = "KEYHOLE_EXPIRY_SECS";
pub const TABLE_NAME_ENV: &str = "KEYHOLE_TABLE_NAME";
pub const STORAGE_BACKEND_ENV: &str = "KEYHOLE_STORAGE_BACKEND";
pub const REDIS_URL_ENV: &str = "KEYHOLE_REDIS_URL";
pub const ID_STRATEGY_ENV: &str = "KEYHOLE_ID_STRATEGY";
pub const COLLISION_POLICY_ENV: &str = "KEYHOLE_COLLISION_POLICY";

pub const DEFAULT_EXPIRY_SECS: i64 = 86_400;
pub const DEFAULT_TABLE_NAME: &str = "keyhole-links";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackendArg {
    #[value(name = "in-memory")]
    InMemory,
    #[value(name = "redis")]
    Redis,
}

impl Display for StorageBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackendArg::InMemory => write!(f, "in-memory"),
            StorageBackendArg::Redis => write!(f, "redis"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IdStrategyArg {
    /// The legacy scheme: the current epoch second, base-62 encoded.
    /// Not collision-checked by itself.
    #[value(name = "time-seeded")]
    TimeSeeded,
    /// Epoch second plus a per-second sequence counter.
    #[value(name = "sequenced")]
    Sequenced,
}

impl Display for IdStrategyArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            IdStrategyArg::TimeSeeded => write!(f, "time-seeded"),
            IdStrategyArg::Sequenced => write!(f, "sequenced"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CollisionPolicyArg {
    #[value(name = "overwrite")]
    Overwrite,
    #[value(name = "reject")]
    Reject,
    #[value(name = "retry")]
    Retry,
}

impl Display for CollisionPolicyArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CollisionPolicyArg::Overwrite => write!(f, "overwrite"),
            CollisionPolicyArg::Reject => write!(f, "reject"),
            CollisionPolicyArg::Retry => write!(f, "retry"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "shorten")]
pub struct Cli {
    /// The URL to shorten.
    #[arg(long)]
    pub long_url: String,

    #[arg(long, env = DOMAIN_URL_ENV)]
    pub domain_url: String,

    #[arg(long, env = EXPIRY_SECS_ENV, default_value_t = DEFAULT_EXPIRY_SECS)]
    pub expiry_secs: i64,

    #[arg(long, env = TABLE_NAME_ENV, default_value = DEFAULT_TABLE_NAME)]
    pub table_name: String,

    #[arg(
        long,
        env = STORAGE_BACKEND_ENV,
        value_enum,
        default_value_t = StorageBackendArg::InMemory
    )]
    pub storage: StorageBackendArg,

    #[arg(long, env = REDIS_URL_ENV, required_if_eq("storage", "redis"))]
    pub redis_url: Option<String>,

    #[arg(
        long,
        env = ID_STRATEGY_ENV,
        value_enum,
        default_value_t = IdStrategyArg::TimeSeeded
    )]
    pub id_strategy: IdStrategyArg,

    #[arg(
        long,
        env = COLLISION_POLICY_ENV,
        value_enum,
        default_value_t = CollisionPolicyArg::Overwrite
    )]
    pub collision_policy: CollisionPolicyArg,

    /// Attempt budget when the collision policy is `retry`.
    #[arg(long, default_value_t = DEFAULT_RETRY_ATTEMPTS)]
    pub max_attempts: u32,
}
