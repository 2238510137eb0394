use crate::algorithm::knapsack::KnapsackTable;
use crate::models::Course;

/// Reconstruye el subconjunto que realiza value[n][W] a partir de las
/// decisiones registradas en la tabla. Los cursos salen en orden inverso
/// al del catálogo.
pub fn reconstruct(table: &KnapsackTable, courses: &[Course]) -> Vec<Course> {
    let mut selected: Vec<Course> = Vec::new();
    let mut w = table.budget();

    for i in (0..table.len().min(courses.len())).rev() {
        if w == 0 {
            break;
        }
        if table.is_included(i, w) {
            selected.push(courses[i].clone());
            w = w.saturating_sub(table.cost(i));
        }
    }

    selected
}
