//! Filtro de elegibilidad por semestre mínimo.
//!
//! Además separa los registros que no pueden entrar a la tabla DP
//! (créditos <= 0, ids repetidos) para que el optimizador nunca los vea.

use std::collections::HashSet;

use crate::models::{Course, ExcludedCourse, ExclusionReason};

/// Cursos del catálogo divididos en aptos y descartados.
#[derive(Debug, Default)]
pub struct Partition {
    /// Aptos, en el mismo orden que el catálogo.
    pub eligible: Vec<Course>,
    pub excluded: Vec<ExcludedCourse>,
}

/// Mantiene exactamente los cursos con `min_semester <= target_semester`,
/// preservando el orden del catálogo.
pub fn filter_eligible(catalog: &[Course], target_semester: i32) -> Vec<Course> {
    catalog
        .iter()
        .filter(|c| c.min_semester <= target_semester)
        .cloned()
        .collect()
}

/// Parte de `filter_eligible` y además descarta registros mal formados y
/// repeticiones de id (se queda con la primera aparición). Los descartes por
/// semestre van primero, luego el resto en orden de catálogo.
pub fn partition_catalog(catalog: &[Course], target_semester: i32) -> Partition {
    let mut out = Partition::default();

    for course in catalog.iter().filter(|c| c.min_semester > target_semester) {
        out.excluded.push(excluded(course, ExclusionReason::SemesterTooLow));
    }

    let mut seen: HashSet<i64> = HashSet::new();
    for course in filter_eligible(catalog, target_semester) {
        if course.credits <= 0 {
            out.excluded.push(excluded(&course, ExclusionReason::NonPositiveCredits));
        } else if !seen.insert(course.id) {
            out.excluded.push(excluded(&course, ExclusionReason::DuplicateId));
        } else {
            out.eligible.push(course);
        }
    }

    out
}

fn excluded(course: &Course, reason: ExclusionReason) -> ExcludedCourse {
    ExcludedCourse {
        id: course.id,
        name: course.name.clone(),
        reason,
    }
}
