use clap::{Parser, ValueEnum};
use std::fmt::{Display, Formatter};

pub const FALLBACK_URL_ENV: &str = "KEYHOLE_FALLBACK_URL";
pub const TABLE_NAME_ENV: &str = "KEYHOLE_TABLE_NAME";
pub const STORAGE_BACKEND_ENV: &str = "KEYHOLE_STORAGE_BACKEND";
pub const REDIS_URL_ENV: &str = "KEYHOLE_REDIS_URL";

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

#[derive(Debug, Parser)]
#[command(name = "resolve")]
pub struct Cli {
    /// The short identifier to resolve.
    #[arg(long)]
    pub short_id: String,

    #[arg(long, env = FALLBACK_URL_ENV)]
    pub fallback_url: String,

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
}
