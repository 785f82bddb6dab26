use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, Query, State};
use axum::http::{HeaderValue, Method, StatusCode, header};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info, warn};

use crate::db::repository;
use crate::db::repository::AttendanceToggle;
use crate::error::AppError;
use crate::models::*;
use crate::state::AppState;

#[derive(Deserialize)]
struct TaskQueryParams {
    date: Option<String>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/api/tasks", get(list_tasks).post(create_task))
        .route("/api/tasks/{id}", delete(delete_task))
        .route("/api/exams", get(list_exams).post(create_exam))
        .route("/api/exams/{id}", delete(delete_exam))
        .route("/api/courses", get(list_courses).post(create_course))
        .route("/api/courses/{id}", delete(delete_course))
        .route("/api/attendance", post(mark_attendance))
        .route("/api/attendance/{date}", get(attendance_by_date))
        .fallback(not_found)
        .layer(cors_layer())
        .with_state(state)
}

/// Any origin in development; a single configured origin in production,
/// matching the frontend deployment.
fn cors_layer() -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    if std::env::var("APP_ENV").as_deref() == Ok("production") {
        let origin = std::env::var("ALLOWED_ORIGIN")
            .unwrap_or_else(|_| "https://sp-frontend.onrender.com".to_string());
        match origin.parse::<HeaderValue>() {
            Ok(origin) => cors.allow_origin(origin),
            Err(_) => {
                warn!("invalid ALLOWED_ORIGIN {:?}, allowing any origin", origin);
                cors.allow_origin(Any)
            }
        }
    } else {
        cors.allow_origin(Any)
    }
}

async fn home() -> Json<serde_json::Value> {
    Json(json!({ "message": "Server is running" }))
}

async fn not_found() -> AppError {
    AppError::NotFound
}

async fn create_task(
    State(state): State<AppState>,
    payload: Result<Json<NewTaskRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<serde_json::Value>), AppError> {
    let Json(req) = payload?;
    let new = req.validate()?;
    let task = repository::insert_task(&state.db, new).await?;
    info!("created task with id: {}", task.id);

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Task created successfully",
            "task": TaskResponse::from(task),
        })),
    ))
}

async fn list_tasks(
    State(state): State<AppState>,
    Query(params): Query<TaskQueryParams>,
) -> Result<Json<Vec<TaskResponse>>, AppError> {
    debug!("listing tasks with date filter: {:?}", params.date);

    // An empty date value means "no filter", not a malformed date.
    let date = match params.date.as_deref() {
        None | Some("") => None,
        Some(raw) => Some(crate::models::parse_date(raw)?),
    };

    let tasks = repository::fetch_tasks(&state.db, date.as_deref()).await?;
    debug!("returning {} tasks", tasks.len());
    Ok(Json(tasks.into_iter().map(TaskResponse::from).collect()))
}

async fn delete_task(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Path(id) = id?;
    debug!("deleting task id: {}", id);
    if repository::delete_task(&state.db, id).await? {
        Ok(Json(json!({ "message": "Task deleted successfully" })))
    } else {
        Err(AppError::NotFound)
    }
}

async fn create_exam(
    State(state): State<AppState>,
    payload: Result<Json<NewExamRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<serde_json::Value>), AppError> {
    let Json(req) = payload?;
    let new = req.validate()?;
    let exam = repository::insert_exam(&state.db, new).await?;
    info!("created exam with id: {}", exam.id);

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Exam created successfully",
            "id": exam.id,
            "exam": ExamResponse::from(exam),
        })),
    ))
}

async fn list_exams(
    State(state): State<AppState>,
) -> Result<Json<Vec<ExamResponse>>, AppError> {
    let exams = repository::fetch_exams(&state.db).await?;
    debug!("returning {} exams", exams.len());
    Ok(Json(exams.into_iter().map(ExamResponse::from).collect()))
}

async fn delete_exam(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Path(id) = id?;
    debug!("deleting exam id: {}", id);
    if repository::delete_exam(&state.db, id).await? {
        Ok(Json(json!({ "message": "Exam deleted successfully" })))
    } else {
        Err(AppError::NotFound)
    }
}

async fn create_course(
    State(state): State<AppState>,
    payload: Result<Json<NewCourseRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CourseResponse>), AppError> {
    let Json(req) = payload?;
    let new = req.validate()?;
    let course = repository::insert_course(&state.db, new).await?;
    info!("created course with id: {}", course.id);
    Ok((StatusCode::CREATED, Json(CourseResponse::from(course))))
}

async fn list_courses(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseResponse>>, AppError> {
    let courses = repository::fetch_courses(&state.db).await?;
    Ok(Json(courses.into_iter().map(CourseResponse::from).collect()))
}

async fn delete_course(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id?;
    if repository::delete_course(&state.db, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound)
    }
}

async fn mark_attendance(
    State(state): State<AppState>,
    payload: Result<Json<MarkAttendanceRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<serde_json::Value>), AppError> {
    let Json(req) = payload?;
    let mark = req.validate()?;
    match repository::toggle_attendance(&state.db, mark).await? {
        AttendanceToggle::Marked(att) => {
            info!("marked attendance id: {}", att.id);
            Ok((
                StatusCode::CREATED,
                Json(json!({ "message": "Attendance marked successfully" })),
            ))
        }
        AttendanceToggle::Unmarked => Ok((
            StatusCode::OK,
            Json(json!({ "message": "Attendance unmarked successfully" })),
        )),
    }
}

async fn attendance_by_date(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<Vec<AttendanceResponse>>, AppError> {
    let date = crate::models::parse_date(&date)?;
    let records = repository::fetch_attendance_by_date(&state.db, &date).await?;
    debug!("returning {} attendance records for {}", records.len(), date);
    Ok(Json(
        records.into_iter().map(AttendanceResponse::from).collect(),
    ))
}
