use actix_web::error::BlockingError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

use crate::algorithm::{PlanRequest, PlannerOptions};
use crate::config::AppConfig;
use crate::error::{ImportError, PlannerError, StoreError};
use crate::storage::{CatalogProvider, CourseStore};

pub mod handlers;

/// Parámetros de entrada para `POST /api/optimize`
///
/// # Estructura del JSON esperado:
/// ```json
/// {
///   "jurusan": "Informatika",
///   "fakultas": "FTI",
///   "semester": 5,
///   "minSks": 18,
///   "maxSks": 24
/// }
/// ```
///
/// `minSks` es opcional (0 por defecto). No restringe la optimización: sólo
/// se valida (`0 <= minSks <= maxSks`) y se informa si la selección lo alcanza.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeRequest {
    pub jurusan: String,
    pub fakultas: String,
    pub semester: i32,
    #[serde(default)]
    pub min_sks: i32,
    pub max_sks: i32,
}

impl OptimizeRequest {
    pub fn plan_request(&self) -> PlanRequest {
        PlanRequest {
            target_semester: self.semester,
            min_credits: self.min_sks,
            max_credits: self.max_sks,
        }
    }
}

pub fn parse_json_input(json_str: &str) -> Result<OptimizeRequest, serde_json::Error> {
    serde_json::from_str::<OptimizeRequest>(json_str)
}

/// Estado compartido por los handlers. No guarda conexiones abiertas: cada
/// operación abre la suya.
#[derive(Clone)]
pub struct AppState {
    pub store: CourseStore,
    pub catalog: Arc<dyn CatalogProvider>,
    pub planner: PlannerOptions,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(store: CourseStore, config: &AppConfig) -> Self {
        AppState {
            catalog: Arc::new(store.clone()),
            store,
            planner: config.planner,
            max_upload_bytes: config.max_upload_bytes,
        }
    }

    /// Reemplaza la fuente de catálogo que usan las búsquedas.
    pub fn with_catalog(mut self, catalog: Arc<dyn CatalogProvider>) -> Self {
        self.catalog = catalog;
        self
    }
}

/// Errores de la capa HTTP; se serializan como `{"error": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Planner(#[from] PlannerError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    PayloadTooLarge(String),

    #[error("background task failed")]
    Blocking,
}

impl From<BlockingError> for ApiError {
    fn from(err: BlockingError) -> Self {
        warn!(error = %err, "blocking task failed");
        ApiError::Blocking
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Planner(PlannerError::NegativeBudget(_))
            | ApiError::Planner(PlannerError::InvalidCreditRange { .. }) => StatusCode::BAD_REQUEST,
            ApiError::Planner(PlannerError::UnknownGrade { .. }) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Planner(PlannerError::BudgetTooLarge { .. })
            | ApiError::Planner(PlannerError::CatalogTooLarge { .. }) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Store(StoreError::InvalidRecord(_)) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) | ApiError::Blocking => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Import(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({"error": self.to_string()}))
    }
}
