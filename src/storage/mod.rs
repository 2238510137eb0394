//! Persistencia del catálogo de cursos.
//!
//! El optimizador nunca ve una conexión: la capa HTTP pide el catálogo a un
//! `CatalogProvider` y le pasa al planificador una copia en memoria.

pub mod courses;
pub mod db;
pub mod import;

pub use db::CourseStore;
pub use import::{parse_course_list, validate_course};

use crate::error::StoreError;
use crate::models::Course;

/// Capacidad de búsqueda de catálogo: (jurusan, fakultas) -> cursos en orden.
pub trait CatalogProvider: Send + Sync {
    fn courses_by_department_faculty(&self, department: &str, faculty: &str) -> Result<Vec<Course>, StoreError>;
}

impl CatalogProvider for CourseStore {
    fn courses_by_department_faculty(&self, department: &str, faculty: &str) -> Result<Vec<Course>, StoreError> {
        CourseStore::courses_by_department_faculty(self, department, faculty)
    }
}

/// Catálogo fijo en memoria.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    courses: Vec<Course>,
}

impl StaticCatalog {
    pub fn new(courses: Vec<Course>) -> Self {
        StaticCatalog { courses }
    }
}

impl CatalogProvider for StaticCatalog {
    fn courses_by_department_faculty(&self, department: &str, faculty: &str) -> Result<Vec<Course>, StoreError> {
        Ok(self
            .courses
            .iter()
            .filter(|c| c.department == department && c.faculty == faculty)
            .cloned()
            .collect())
    }
}
