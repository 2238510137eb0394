//! Tipos de error del crate.

use thiserror::Error;

/// Fallos de precondición del planificador. El optimizador en sí no falla
/// para entradas bien formadas; todo se rechaza aquí antes de reservar la tabla.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlannerError {
    #[error("credit budget must be non-negative, got {0}")]
    NegativeBudget(i32),

    #[error("credit budget {requested} exceeds the configured maximum {max}")]
    BudgetTooLarge { requested: i32, max: usize },

    #[error("catalog has {size} courses, the configured maximum is {max}")]
    CatalogTooLarge { size: usize, max: usize },

    #[error("minimum credits {min} must be between 0 and the maximum {max}")]
    InvalidCreditRange { min: i32, max: i32 },

    #[error("course {course_id} has an unrecognized predicted grade '{label}'")]
    UnknownGrade { course_id: i64, label: String },
}

/// Errors from the persistence collaborator.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("postgres error: {0}")]
    Postgres(#[from] postgres::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("database URL uses unsupported scheme: {0}")]
    UnsupportedScheme(String),

    #[error("invalid course record: {0}")]
    InvalidRecord(String),

    #[error("database worker thread panicked")]
    WorkerPanicked,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Fallos al leer un archivo de importación masiva.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{} invalid course record(s): {}", .0.len(), .0.join("; "))]
    InvalidRecords(Vec<String>),
}
