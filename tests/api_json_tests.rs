use actix_web::http::{header, StatusCode};
use actix_web::{test, web, App};
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;

use sks_planner::algorithm::{PlannerOptions, UnknownGradePolicy};
use sks_planner::api_json::AppState;
use sks_planner::config::AppConfig;
use sks_planner::server::{configure_routes, cors};
use sks_planner::storage::{CourseStore, StaticCatalog};
use sks_planner::Course;

const BOUNDARY: &str = "XSKSBOUNDARYX";

fn temp_state() -> (TempDir, AppState) {
    let dir = tempfile::tempdir().expect("tempdir");
    let db = dir.path().join("courses.db");
    let store = CourseStore::sqlite(&db);
    store.init_schema().expect("schema");
    let config = AppConfig {
        db_url: format!("sqlite://{}", db.display()),
        ..AppConfig::default()
    };
    (dir, AppState::new(store, &config))
}

fn course_json(name: &str, credits: i32, min_semester: i32, grade: &str) -> Value {
    serde_json::json!({
        "namaMk": name,
        "jurusan": "Informatika",
        "fakultas": "FTI",
        "jumlahSks": credits,
        "semesterMin": min_semester,
        "prediksiNilai": grade
    })
}

fn multipart_body(field: &str, content: &str) -> String {
    format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"{f}\"; filename=\"courses.json\"\r\nContent-Type: application/json\r\n\r\n{c}\r\n--{b}--\r\n",
        b = BOUNDARY,
        f = field,
        c = content
    )
}

fn upload_request(field: &str, content: &str) -> actix_web::test::TestRequest {
    test::TestRequest::post()
        .uri("/api/addDataJson")
        .insert_header((header::CONTENT_TYPE, format!("multipart/form-data; boundary={}", BOUNDARY)))
        .set_payload(multipart_body(field, content))
}

#[actix_web::test]
async fn test_add_list_and_remove_course() {
    let (_dir, state) = temp_state();
    let app = test::init_service(App::new().app_data(web::Data::new(state)).configure(configure_routes)).await;

    let req = test::TestRequest::post()
        .uri("/api/addCourses")
        .set_json(course_json("Basis Data", 3, 2, "A"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["message"], "Course added successfully");
    let id = body["id"].as_i64().expect("id");

    let req = test::TestRequest::get().uri("/api/getAllCourses").to_request();
    let courses: Vec<Course> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].id, id);
    assert_eq!(courses[0].credits, 3);

    let req = test::TestRequest::delete().uri(&format!("/api/removeCourses/{}", id)).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::delete().uri(&format!("/api/removeCourses/{}", id)).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::delete().uri("/api/removeCourses/abc").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid course ID");
}

#[actix_web::test]
async fn test_add_course_rejects_bad_input() {
    let (_dir, state) = temp_state();
    let app = test::init_service(App::new().app_data(web::Data::new(state)).configure(configure_routes)).await;

    let req = test::TestRequest::post()
        .uri("/api/addCourses")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{\"namaMk\": 12")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap_or_default().starts_with("Invalid data format"));

    let req = test::TestRequest::post()
        .uri("/api/addCourses")
        .set_json(course_json("Etika", 0, 1, "A"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_bulk_import_then_search() {
    let (_dir, state) = temp_state();
    let app = test::init_service(App::new().app_data(web::Data::new(state)).configure(configure_routes)).await;

    let file = serde_json::json!([
        course_json("Kalkulus", 3, 1, "A"),
        course_json("Fisika", 2, 1, "B"),
        course_json("Skripsi", 1, 6, "A")
    ])
    .to_string();
    let body: Value = test::call_and_read_body_json(&app, upload_request("file", &file).to_request()).await;
    assert_eq!(body["message"], "Data added successfully");
    assert_eq!(body["count"], 3);

    let req = test::TestRequest::get().uri("/api/searchCourses/Informatika/FTI/5/0/4").to_request();
    let selected: Vec<Course> = test::call_and_read_body_json(&app, req).await;
    let names: Vec<&str> = selected.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Kalkulus"]);

    let req = test::TestRequest::get().uri("/api/searchCourses/Informatika/FTI/5/0/10").to_request();
    let selected: Vec<Course> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(selected.len(), 2);
    assert!(selected.iter().all(|c| c.name != "Skripsi"));

    // otro par jurusan/fakultas: catálogo vacío
    let req = test::TestRequest::get().uri("/api/searchCourses/Manajemen/FEB/5/0/10").to_request();
    let selected: Vec<Course> = test::call_and_read_body_json(&app, req).await;
    assert!(selected.is_empty());
}

#[actix_web::test]
async fn test_bulk_import_rejects_invalid_file() {
    let (_dir, state) = temp_state();
    let app = test::init_service(App::new().app_data(web::Data::new(state)).configure(configure_routes)).await;

    let file = serde_json::json!([course_json("Kalkulus", 3, 1, "A"), course_json("Rusak", -1, 1, "A")]).to_string();
    let resp = test::call_service(&app, upload_request("file", &file).to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = test::call_service(&app, upload_request("document", "[]").to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get().uri("/api/getAllCourses").to_request();
    let courses: Vec<Course> = test::call_and_read_body_json(&app, req).await;
    assert!(courses.is_empty());
}

#[actix_web::test]
async fn test_optimize_reports_totals_and_min_credits() {
    let (_dir, state) = temp_state();
    let catalog = StaticCatalog::new(vec![
        Course {
            id: 1,
            name: "Kalkulus".to_string(),
            department: "Informatika".to_string(),
            faculty: "FTI".to_string(),
            credits: 3,
            min_semester: 1,
            predicted_grade: "A".to_string(),
        },
        Course {
            id: 2,
            name: "Fisika".to_string(),
            department: "Informatika".to_string(),
            faculty: "FTI".to_string(),
            credits: 2,
            min_semester: 1,
            predicted_grade: "B".to_string(),
        },
    ]);
    let state = state.with_catalog(Arc::new(catalog));
    let app = test::init_service(App::new().app_data(web::Data::new(state)).configure(configure_routes)).await;

    let req = test::TestRequest::post()
        .uri("/api/optimize")
        .set_json(serde_json::json!({"jurusan": "Informatika", "fakultas": "FTI", "semester": 5, "minSks": 4, "maxSks": 4}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["totalCredits"], 3);
    assert_eq!(body["totalWeight"], 4.0);
    assert_eq!(body["meetsMinCredits"], false);
    assert_eq!(body["courses"][0]["namaMk"], "Kalkulus");

    let req = test::TestRequest::post()
        .uri("/api/optimize")
        .set_json(serde_json::json!({"jurusan": "Informatika", "fakultas": "FTI", "semester": 5, "maxSks": 5}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["totalWeight"], 7.0);
    assert_eq!(body["meetsMinCredits"], true);
}

#[actix_web::test]
async fn test_search_precondition_errors() {
    let (_dir, state) = temp_state();
    let app = test::init_service(App::new().app_data(web::Data::new(state)).configure(configure_routes)).await;

    let cases = [
        ("/api/searchCourses/Informatika/FTI/5/0/-1", StatusCode::BAD_REQUEST),
        ("/api/searchCourses/Informatika/FTI/5/10/4", StatusCode::BAD_REQUEST),
        ("/api/searchCourses/Informatika/FTI/5/0/999", StatusCode::PAYLOAD_TOO_LARGE),
        ("/api/searchCourses/Informatika/FTI/lima/0/4", StatusCode::BAD_REQUEST),
    ];
    for (uri, expected) in cases {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), expected, "uri {}", uri);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());
    }
}

#[actix_web::test]
async fn test_catalog_cap_applied_at_http_layer() {
    let (_dir, state) = temp_state();
    let catalog: Vec<Course> = (1..=3)
        .map(|id| Course {
            id,
            name: format!("MK{}", id),
            department: "Informatika".to_string(),
            faculty: "FTI".to_string(),
            credits: 2,
            min_semester: 1,
            predicted_grade: "B".to_string(),
        })
        .collect();
    let mut state = state.with_catalog(Arc::new(StaticCatalog::new(catalog)));
    state.planner = PlannerOptions {
        max_catalog_size: 2,
        ..PlannerOptions::default()
    };
    let app = test::init_service(App::new().app_data(web::Data::new(state)).configure(configure_routes)).await;

    let req = test::TestRequest::get().uri("/api/searchCourses/Informatika/FTI/5/0/4").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[actix_web::test]
async fn test_unknown_grade_rejected_when_configured() {
    let (_dir, mut state) = temp_state();
    state.planner = PlannerOptions {
        unknown_grade: UnknownGradePolicy::Reject,
        ..PlannerOptions::default()
    };
    state.store.insert_course(&serde_json::from_value(course_json("Magang", 2, 1, "E")).unwrap()).unwrap();
    let app = test::init_service(App::new().app_data(web::Data::new(state)).configure(configure_routes)).await;

    let req = test::TestRequest::get().uri("/api/searchCourses/Informatika/FTI/5/0/4").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_web::test]
async fn test_cors_preflight_and_help() {
    let (_dir, state) = temp_state();
    let app = test::init_service(
        App::new()
            .wrap(cors())
            .app_data(web::Data::new(state))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::default()
        .method(actix_web::http::Method::OPTIONS)
        .uri("/api/getAllCourses")
        .insert_header((header::ORIGIN, "http://localhost:3000"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "GET"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    assert!(resp.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));

    let req = test::TestRequest::get().uri("/help").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert!(body["routes"]["POST /api/optimize"].is_string());
    assert_eq!(body["grades"]["AB"], 3.5);
}
