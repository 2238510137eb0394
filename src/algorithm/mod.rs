// Módulo de alto nivel del optimizador de cursos
pub mod eligibility;
pub mod grades;
pub mod knapsack;
pub mod planner;
pub mod selector;

// Reexportar la API pública
pub use eligibility::{filter_eligible, partition_catalog, Partition};
pub use grades::{grade_value, GradeValueMap, UnknownGradePolicy};
pub use knapsack::KnapsackTable;
pub use planner::{check_limits, plan_courses, select_optimal_courses, PlanRequest, PlannerOptions};
pub use selector::reconstruct;
