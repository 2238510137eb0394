use actix_web::{HttpResponse, Responder};
use serde_json::json;

use crate::api_json::OptimizeRequest;
use crate::models::Course;

/// GET /help
pub async fn help_handler() -> impl Responder {
    let course_example = Course {
        id: 0,
        name: "Struktur Data".to_string(),
        department: "Informatika".to_string(),
        faculty: "Teknologi Industri".to_string(),
        credits: 3,
        min_semester: 2,
        predicted_grade: "AB".to_string(),
    };
    let optimize_example = OptimizeRequest {
        jurusan: "Informatika".to_string(),
        fakultas: "Teknologi Industri".to_string(),
        semester: 5,
        min_sks: 18,
        max_sks: 24,
    };

    let help = json!({
        "description": "Selecciona los cursos que maximizan la nota prevista total sin superar maxSKS créditos, considerando sólo cursos con semesterMin <= semester.",
        "routes": {
            "GET /api/getAllCourses": "lista todos los cursos",
            "POST /api/addCourses": "agrega un curso (ver 'course_example')",
            "DELETE /api/removeCourses/{id}": "elimina un curso",
            "POST /api/addDataJson": "multipart, campo 'file' con un arreglo JSON de cursos",
            "GET /api/searchCourses/{jurusan}/{fakultas}/{semester}/{minSKS}/{maxSKS}": "arreglo de cursos elegidos",
            "POST /api/optimize": "resultado completo (ver 'optimize_example')"
        },
        "course_example": course_example,
        "optimize_example": optimize_example,
        "grades": {"A": 4.0, "AB": 3.5, "B": 3.0, "BC": 2.5, "C": 2.0, "D": 1.0},
        "note": "minSKS no restringe la optimización; /api/optimize informa 'meetsMinCredits'."
    });

    HttpResponse::Ok().json(help)
}
