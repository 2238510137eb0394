//! Conversión de nota prevista a peso numérico (escala 1.0 - 4.0).
//!
//! La tabla es configuración constante del proceso; no se deriva de datos.

use std::str::FromStr;

use crate::error::PlannerError;
use crate::models::Course;

const GRADE_TABLE: [(&str, f64); 6] = [
    ("A", 4.0),
    ("AB", 3.5),
    ("B", 3.0),
    ("BC", 2.5),
    ("C", 2.0),
    ("D", 1.0),
];

/// Qué hacer con una nota que no está en la tabla.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownGradePolicy {
    /// Peso 0: el curso nunca resulta elegido.
    #[default]
    Zero,
    /// Falla la planificación con `PlannerError::UnknownGrade`.
    Reject,
}

impl FromStr for UnknownGradePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zero" => Ok(UnknownGradePolicy::Zero),
            "reject" => Ok(UnknownGradePolicy::Reject),
            other => Err(format!("expected 'zero' or 'reject', got '{}'", other)),
        }
    }
}

pub struct GradeValueMap;

impl GradeValueMap {
    /// Coincidencia exacta: "a" o " B " no son etiquetas de la tabla.
    pub fn lookup(label: &str) -> Option<f64> {
        GRADE_TABLE.iter().find(|(g, _)| *g == label).map(|(_, v)| *v)
    }

    /// Peso del curso según la política configurada.
    pub fn weight_for(course: &Course, policy: UnknownGradePolicy) -> Result<f64, PlannerError> {
        match (Self::lookup(&course.predicted_grade), policy) {
            (Some(v), _) => Ok(v),
            (None, UnknownGradePolicy::Zero) => Ok(0.0),
            (None, UnknownGradePolicy::Reject) => Err(PlannerError::UnknownGrade {
                course_id: course.id,
                label: course.predicted_grade.clone(),
            }),
        }
    }
}

/// Peso de una etiqueta; 0.0 si no se reconoce.
pub fn grade_value(label: &str) -> f64 {
    GradeValueMap::lookup(label).unwrap_or(0.0)
}
