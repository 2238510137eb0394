//! Configuración del servicio desde variables de entorno (y `.env` si existe).

use std::env;
use std::str::FromStr;

use crate::algorithm::planner::{DEFAULT_MAX_CATALOG_SIZE, DEFAULT_MAX_CREDIT_BUDGET};
use crate::algorithm::{PlannerOptions, UnknownGradePolicy};
use crate::error::ConfigError;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5001";
pub const DEFAULT_DB_URL: &str = "sqlite://data/courses.db";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bind_addr: String,
    pub db_url: String,
    pub workers: usize,
    pub planner: PlannerOptions,
    pub max_upload_bytes: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            db_url: DEFAULT_DB_URL.to_string(),
            workers: num_cpus::get(),
            planner: PlannerOptions::default(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

fn parse_key<T, F>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw.trim().parse::<T>().map_err(|e| ConfigError::InvalidValue {
            key,
            value: raw.clone(),
            reason: e.to_string(),
        }),
        _ => Ok(default),
    }
}

fn positive(key: &'static str, v: usize) -> Result<usize, ConfigError> {
    if v == 0 {
        return Err(ConfigError::InvalidValue {
            key,
            value: v.to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    Ok(v)
}

impl AppConfig {
    /// Carga `.env` (si existe) y lee el entorno del proceso.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenv::dotenv();
        Self::from_lookup(|k| env::var(k).ok())
    }

    /// Igual que `from_env` pero con una fuente de claves inyectable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AppConfig::default();

        let bind_addr = lookup("SKS_BIND_ADDR")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.bind_addr);
        let db_url = lookup("SKS_DB_URL")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.db_url);

        let workers = positive("SKS_WORKERS", parse_key(&lookup, "SKS_WORKERS", defaults.workers)?)?;
        let max_credit_budget = parse_key(&lookup, "SKS_MAX_CREDITS", DEFAULT_MAX_CREDIT_BUDGET)?;
        let max_catalog_size = parse_key(&lookup, "SKS_MAX_CATALOG", DEFAULT_MAX_CATALOG_SIZE)?;
        let unknown_grade = parse_key(&lookup, "SKS_UNKNOWN_GRADE", UnknownGradePolicy::default())?;
        let max_upload_bytes = positive(
            "SKS_MAX_UPLOAD_BYTES",
            parse_key(&lookup, "SKS_MAX_UPLOAD_BYTES", defaults.max_upload_bytes)?,
        )?;

        Ok(AppConfig {
            bind_addr,
            db_url,
            workers,
            planner: PlannerOptions {
                unknown_grade,
                max_credit_budget,
                max_catalog_size,
            },
            max_upload_bytes,
        })
    }
}
