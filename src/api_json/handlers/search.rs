use actix_web::{web, HttpResponse};
use tracing::{info, warn};

use crate::algorithm::{check_limits, plan_courses, PlanRequest};
use crate::api_json::{ApiError, AppState, OptimizeRequest};
use crate::models::SelectionResult;

/// Pide el catálogo del par (jurusan, fakultas) y ejecuta el planificador,
/// todo en el pool bloqueante. Cada llamada trabaja con su propia copia.
/// Los topes configurados de W y n se aplican aquí, no en el núcleo.
async fn run_search(
    state: &AppState,
    jurusan: String,
    fakultas: String,
    req: PlanRequest,
) -> Result<SelectionResult, ApiError> {
    let catalog = state.catalog.clone();
    let opts = state.planner;
    web::block(move || -> Result<SelectionResult, ApiError> {
        check_limits(0, &req, &opts)?;
        let courses = catalog.courses_by_department_faculty(&jurusan, &fakultas)?;
        check_limits(courses.len(), &req, &opts)?;
        Ok(plan_courses(&courses, &req, &opts)?)
    })
    .await?
}

/// GET /api/searchCourses/{jurusan}/{fakultas}/{semester}/{minSKS}/{maxSKS}
/// Respuesta con la forma original: sólo el arreglo de cursos elegidos.
pub async fn search_courses_handler(
    state: web::Data<AppState>,
    path: web::Path<(String, String, i32, i32, i32)>,
) -> Result<HttpResponse, ApiError> {
    let (jurusan, fakultas, semester, min_sks, max_sks) = path.into_inner();
    info!(%jurusan, %fakultas, semester, min_sks, max_sks, "searchCourses");

    let req = PlanRequest {
        target_semester: semester,
        min_credits: min_sks,
        max_credits: max_sks,
    };
    let result = run_search(&state, jurusan, fakultas, req).await?;
    if !result.meets_min_credits {
        warn!(
            total_credits = result.total_credits,
            min_sks, "selection returned below the requested minSKS"
        );
    }
    Ok(HttpResponse::Ok().json(result.courses))
}

/// POST /api/optimize
/// Devuelve el `SelectionResult` completo (totales, mínimo alcanzado, descartes).
pub async fn optimize_handler(
    state: web::Data<AppState>,
    body: web::Json<OptimizeRequest>,
) -> Result<HttpResponse, ApiError> {
    let payload = body.into_inner();
    info!(jurusan = %payload.jurusan, fakultas = %payload.fakultas, semester = payload.semester, "optimize");

    let req = payload.plan_request();
    let result = run_search(&state, payload.jurusan, payload.fakultas, req).await?;
    Ok(HttpResponse::Ok().json(result))
}
