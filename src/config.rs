//! Runtime configuration from environment variables

use crate::store::{StoreConfig, StoreKind, DEFAULT_SESSION_TTL};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MEMORY_CAPACITY: usize = 10_000;
const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub store: StoreConfig,
    pub session_ttl: Duration,
    pub sweep_interval: Duration,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Missing or unparseable
    /// values take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let kind = match lookup("BMI_USSD_STORE") {
            Some(raw) => StoreKind::parse(&raw).unwrap_or_else(|| {
                tracing::warn!(value = %raw, "Unknown BMI_USSD_STORE, using sqlite");
                StoreKind::Sqlite
            }),
            None => StoreKind::Sqlite,
        };

        let db_path = lookup("BMI_USSD_DB_PATH").map_or_else(
            || {
                let home = lookup("HOME").unwrap_or_else(|| "/tmp".to_string());
                PathBuf::from(format!("{home}/.bmi-ussd/sessions.db"))
            },
            PathBuf::from,
        );

        Self {
            port: parsed(&lookup, "BMI_USSD_PORT").unwrap_or(DEFAULT_PORT),
            store: StoreConfig {
                kind,
                db_path,
                memory_capacity: parsed(&lookup, "BMI_USSD_MEMORY_CAPACITY")
                    .filter(|&n: &usize| n > 0)
                    .unwrap_or(DEFAULT_MEMORY_CAPACITY),
            },
            session_ttl: seconds(&lookup, "BMI_USSD_SESSION_TTL_SECS")
                .unwrap_or(DEFAULT_SESSION_TTL),
            sweep_interval: seconds(&lookup, "BMI_USSD_SWEEP_INTERVAL_SECS")
                .unwrap_or(DEFAULT_SWEEP_INTERVAL),
        }
    }
}

fn parsed<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    lookup(key).and_then(|raw| raw.trim().parse().ok())
}

// Zero is rejected: `tokio::time::interval` panics on it
fn seconds<F>(lookup: &F, key: &str) -> Option<Duration>
where
    F: Fn(&str) -> Option<String>,
{
    parsed::<F, u64>(lookup, key)
        .filter(|&s| s > 0)
        .map(Duration::from_secs)
}
