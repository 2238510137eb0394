//! Orquestador: elegibilidad -> llenado DP -> reconstrucción.
//!
//! Toda validación ocurre antes de reservar la tabla; con entradas válidas
//! el optimizador no falla. Cada llamada trabaja sobre su propia copia del
//! catálogo, así que se puede invocar en paralelo sin coordinación.

use tracing::{debug, warn};

use crate::algorithm::eligibility::partition_catalog;
use crate::algorithm::grades::{GradeValueMap, UnknownGradePolicy};
use crate::algorithm::knapsack::KnapsackTable;
use crate::algorithm::selector::reconstruct;
use crate::error::PlannerError;
use crate::models::{Course, ExclusionReason, SelectionResult};

pub const DEFAULT_MAX_CREDIT_BUDGET: usize = 60;
pub const DEFAULT_MAX_CATALOG_SIZE: usize = 2000;

/// Parámetros de una consulta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanRequest {
    pub target_semester: i32,
    /// No restringe la optimización; sólo se informa en `meets_min_credits`.
    pub min_credits: i32,
    pub max_credits: i32,
}

/// Límites y políticas del proceso (ver `config`). `plan_courses` sólo usa
/// `unknown_grade`; los topes se aplican con `check_limits`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannerOptions {
    pub unknown_grade: UnknownGradePolicy,
    /// Tope de W; la tabla ocupa O(n·W).
    pub max_credit_budget: usize,
    pub max_catalog_size: usize,
}

impl Default for PlannerOptions {
    fn default() -> Self {
        PlannerOptions {
            unknown_grade: UnknownGradePolicy::default(),
            max_credit_budget: DEFAULT_MAX_CREDIT_BUDGET,
            max_catalog_size: DEFAULT_MAX_CATALOG_SIZE,
        }
    }
}

fn validate(req: &PlanRequest) -> Result<usize, PlannerError> {
    if req.max_credits < 0 {
        return Err(PlannerError::NegativeBudget(req.max_credits));
    }
    if req.min_credits < 0 || req.min_credits > req.max_credits {
        return Err(PlannerError::InvalidCreditRange {
            min: req.min_credits,
            max: req.max_credits,
        });
    }
    Ok(req.max_credits as usize)
}

/// Topes de W y n para quien expone el planificador (HTTP). El núcleo no
/// los aplica: con entradas bien formadas `plan_courses` no falla.
pub fn check_limits(catalog_len: usize, req: &PlanRequest, opts: &PlannerOptions) -> Result<(), PlannerError> {
    if req.max_credits > 0 && req.max_credits as usize > opts.max_credit_budget {
        return Err(PlannerError::BudgetTooLarge {
            requested: req.max_credits,
            max: opts.max_credit_budget,
        });
    }
    if catalog_len > opts.max_catalog_size {
        return Err(PlannerError::CatalogTooLarge {
            size: catalog_len,
            max: opts.max_catalog_size,
        });
    }
    Ok(())
}

/// Selecciona el subconjunto de cursos que maximiza el peso de notas
/// previstas con créditos totales <= `req.max_credits`.
pub fn plan_courses(
    catalog: &[Course],
    req: &PlanRequest,
    opts: &PlannerOptions,
) -> Result<SelectionResult, PlannerError> {
    let budget = validate(req)?;

    let partition = partition_catalog(catalog, req.target_semester);
    for ex in &partition.excluded {
        match ex.reason {
            ExclusionReason::NonPositiveCredits => {
                warn!(course_id = ex.id, name = %ex.name, "course skipped: credits must be positive")
            }
            ExclusionReason::DuplicateId => {
                warn!(course_id = ex.id, name = %ex.name, "course skipped: duplicate id in catalog")
            }
            ExclusionReason::SemesterTooLow => {}
        }
    }

    if partition.eligible.is_empty() || budget == 0 {
        debug!(eligible = partition.eligible.len(), budget, "nothing to optimize");
        return Ok(SelectionResult::empty(req.min_credits, partition.excluded));
    }

    let items = partition
        .eligible
        .iter()
        .map(|c| -> Result<(usize, f64), PlannerError> {
            Ok((c.credits as usize, GradeValueMap::weight_for(c, opts.unknown_grade)?))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let table = KnapsackTable::fill(&items, budget);
    let courses = reconstruct(&table, &partition.eligible);

    let total_credits: i32 = courses.iter().map(|c| c.credits).sum();
    let total_weight: f64 = courses
        .iter()
        .map(|c| GradeValueMap::lookup(&c.predicted_grade).unwrap_or(0.0))
        .sum();
    let meets_min_credits = total_credits >= req.min_credits;

    debug!(
        eligible = partition.eligible.len(),
        budget,
        optimum = table.best_value(),
        selected = courses.len(),
        total_credits,
        "course selection computed"
    );
    if !meets_min_credits {
        warn!(total_credits, min_credits = req.min_credits, "optimal selection is below the requested minimum credits");
    }

    Ok(SelectionResult {
        courses,
        total_credits,
        total_weight,
        min_credits: req.min_credits,
        meets_min_credits,
        excluded: partition.excluded,
    })
}

/// Operación principal con opciones por defecto: devuelve sólo la lista.
pub fn select_optimal_courses(
    catalog: &[Course],
    target_semester: i32,
    credit_budget: i32,
) -> Result<Vec<Course>, PlannerError> {
    let req = PlanRequest {
        target_semester,
        min_credits: 0,
        max_credits: credit_budget,
    };
    plan_courses(catalog, &req, &PlannerOptions::default()).map(|r| r.courses)
}
