// Biblioteca raíz del crate `sks_planner`.
// Reexporta los módulos principales; el núcleo es `algorithm`
// (elegibilidad + mochila 0/1 por créditos).
pub mod algorithm;
pub mod api_json;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod server;
pub mod storage;

pub use algorithm::{plan_courses, select_optimal_courses, PlanRequest, PlannerOptions};
pub use error::{PlannerError, StoreError};
pub use models::{Course, SelectionResult};

/// Ejecuta el servidor HTTP (reexport para facilitar uso desde `main`)
pub use server::run_server;
