// Estructuras de datos principales

use serde::{Deserialize, Serialize};

/// Mata kuliah del catálogo. Los nombres JSON se mantienen tal como los
/// expone la API original (`namaMk`, `jumlahSks`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Identificador asignado por la persistencia; opaco para el optimizador.
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "namaMk")]
    pub name: String,
    #[serde(rename = "jurusan")]
    pub department: String,
    #[serde(rename = "fakultas")]
    pub faculty: String,
    /// Créditos (SKS). Debe ser > 0 para entrar en la tabla DP.
    #[serde(rename = "jumlahSks")]
    pub credits: i32,
    #[serde(rename = "semesterMin")]
    pub min_semester: i32,
    /// Nota prevista ("A", "AB", ...). No se valida al insertar.
    #[serde(rename = "prediksiNilai")]
    pub predicted_grade: String,
}

/// Motivo por el que un curso del catálogo no llega al optimizador.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ExclusionReason {
    SemesterTooLow,
    NonPositiveCredits,
    DuplicateId,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExcludedCourse {
    pub id: i64,
    pub name: String,
    pub reason: ExclusionReason,
}

/// Resultado de una optimización. Se crea por llamada y no se persiste.
///
/// `courses` sale en orden inverso al del catálogo (así lo produce la
/// reconstrucción); no hay que depender de ese orden.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionResult {
    pub courses: Vec<Course>,
    pub total_credits: i32,
    pub total_weight: f64,
    pub min_credits: i32,
    pub meets_min_credits: bool,
    pub excluded: Vec<ExcludedCourse>,
}

impl SelectionResult {
    pub fn empty(min_credits: i32, excluded: Vec<ExcludedCourse>) -> Self {
        SelectionResult {
            courses: Vec::new(),
            total_credits: 0,
            total_weight: 0.0,
            min_credits,
            meets_min_credits: min_credits <= 0,
            excluded,
        }
    }
}
