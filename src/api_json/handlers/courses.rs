use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use futures_util::stream::StreamExt;
use serde_json::json;
use tracing::{info, warn};

use crate::api_json::{ApiError, AppState};
use crate::models::Course;
use crate::storage::parse_course_list;

/// GET /api/getAllCourses
pub async fn get_all_courses_handler(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let store = state.store.clone();
    let courses = web::block(move || store.list_courses())
        .await??;
    Ok(HttpResponse::Ok().json(courses))
}

/// DELETE /api/removeCourses/{id}
pub async fn remove_course_handler(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let raw = path.into_inner();
    let id: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ApiError::BadRequest("Invalid course ID".to_string()))?;

    let store = state.store.clone();
    let deleted = web::block(move || store.delete_course(id))
        .await??;

    if !deleted {
        return Err(ApiError::NotFound(format!("course {} not found", id)));
    }
    info!(course_id = id, "course deleted");
    Ok(HttpResponse::Ok().json(json!({"message": "Course deleted successfully"})))
}

/// POST /api/addCourses
pub async fn add_course_handler(
    state: web::Data<AppState>,
    body: web::Json<Course>,
) -> Result<HttpResponse, ApiError> {
    let course = body.into_inner();
    let store = state.store.clone();
    let id = web::block(move || store.insert_course(&course))
        .await??;
    info!(course_id = id, "course added");
    Ok(HttpResponse::Ok().json(json!({"message": "Course added successfully", "id": id})))
}

/// POST /api/addDataJson
/// Multipart con un campo `file` que contiene un arreglo JSON de cursos.
/// Se valida el archivo completo antes de insertar nada.
pub async fn add_data_json_handler(
    state: web::Data<AppState>,
    mut payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let limit = state.max_upload_bytes;
    let mut file_bytes: Option<Vec<u8>> = None;

    while let Some(field_res) = payload.next().await {
        let mut field = field_res.map_err(|e| ApiError::BadRequest(format!("File upload failed: {}", e)))?;
        let is_file = field.content_disposition().get_name() == Some("file");

        let mut buf: Vec<u8> = Vec::new();
        while let Some(chunk) = field.next().await {
            let bytes = chunk.map_err(|e| ApiError::BadRequest(format!("File upload failed: {}", e)))?;
            if !is_file {
                continue;
            }
            if buf.len() + bytes.len() > limit {
                warn!(limit, "upload rejected: file too large");
                return Err(ApiError::PayloadTooLarge(format!("uploaded file exceeds {} bytes", limit)));
            }
            buf.extend_from_slice(&bytes);
        }

        if is_file && file_bytes.is_none() {
            file_bytes = Some(buf);
        }
    }

    let bytes = file_bytes.ok_or_else(|| ApiError::BadRequest("File upload failed".to_string()))?;
    let courses = parse_course_list(&bytes)?;

    let store = state.store.clone();
    let count = web::block(move || store.insert_many(&courses))
        .await??;
    info!(count, "bulk course import committed");
    Ok(HttpResponse::Ok().json(json!({"message": "Data added successfully", "count": count})))
}
