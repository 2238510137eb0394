use actix_cors::Cors;
use actix_web::error::InternalError;
use actix_web::http::header;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpResponse, HttpServer};
use serde_json::json;
use std::io;
use tracing::info;

use crate::api_json::handlers::{
    add_course_handler, add_data_json_handler, get_all_courses_handler, help_handler, optimize_handler,
    remove_course_handler, search_courses_handler,
};
use crate::api_json::AppState;
use crate::config::AppConfig;
use crate::storage::CourseStore;

/// CORS abierto, igual que el servicio original.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION])
        .max_age(3600)
}

/// Registra rutas y extractores. Los errores de extracción (JSON o ruta
/// inválidos) responden 400 con `{"error": ...}`.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        let msg = format!("Invalid data format: {}", err);
        InternalError::from_response(err, HttpResponse::BadRequest().json(json!({"error": msg}))).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
        let msg = format!("Invalid path parameter: {}", err);
        InternalError::from_response(err, HttpResponse::BadRequest().json(json!({"error": msg}))).into()
    }))
    .route("/api/getAllCourses", web::get().to(get_all_courses_handler))
    .route("/api/removeCourses/{id}", web::delete().to(remove_course_handler))
    .route("/api/addCourses", web::post().to(add_course_handler))
    .route("/api/addDataJson", web::post().to(add_data_json_handler))
    .route(
        "/api/searchCourses/{jurusan}/{fakultas}/{semester}/{minSKS}/{maxSKS}",
        web::get().to(search_courses_handler),
    )
    .route("/api/optimize", web::post().to(optimize_handler))
    .route("/help", web::get().to(help_handler));
}

pub async fn run_server(config: AppConfig) -> io::Result<()> {
    let store = CourseStore::from_url(&config.db_url).map_err(io::Error::other)?;
    store.init_schema().map_err(io::Error::other)?;

    let state = web::Data::new(AppState::new(store, &config));
    info!(bind = %config.bind_addr, workers = config.workers, "starting course planner API");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(cors())
            .app_data(state.clone())
            .configure(configure_routes)
    })
    .workers(config.workers)
    .bind(&config.bind_addr)?
    .run()
    .await
}
