use crate::error::ImportError;
use crate::models::Course;

/// Problemas de un registro antes de persistirlo. Vacío si es válido.
/// La nota prevista no se valida aquí; eso lo decide la política del planificador.
pub fn validate_course(course: &Course) -> Vec<String> {
    let mut problems = Vec::new();
    if course.name.trim().is_empty() {
        problems.push("namaMk is required".to_string());
    }
    if course.department.trim().is_empty() {
        problems.push("jurusan is required".to_string());
    }
    if course.faculty.trim().is_empty() {
        problems.push("fakultas is required".to_string());
    }
    if course.credits <= 0 {
        problems.push(format!("jumlahSks must be positive, got {}", course.credits));
    }
    if course.min_semester <= 0 {
        problems.push(format!("semesterMin must be positive, got {}", course.min_semester));
    }
    problems
}

/// Parsea el contenido de un archivo de importación (arreglo JSON de cursos)
/// y valida todos los registros. Si alguno falla se rechaza el archivo completo.
pub fn parse_course_list(bytes: &[u8]) -> Result<Vec<Course>, ImportError> {
    let courses: Vec<Course> = serde_json::from_slice(bytes)?;

    let mut problems = Vec::new();
    for (idx, c) in courses.iter().enumerate() {
        for p in validate_course(c) {
            problems.push(format!("record {}: {}", idx, p));
        }
    }
    if !problems.is_empty() {
        return Err(ImportError::InvalidRecords(problems));
    }
    Ok(courses)
}
