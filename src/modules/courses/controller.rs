use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::role::RequireManager;
use crate::modules::courses::model::{
    CourseFilterParams, CourseResponse, CoursesResponse, CreateCourseDto, CreateCourseResponse,
};
use crate::modules::courses::service::CourseService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// List courses
#[utoipa::path(
    get,
    path = "/courses",
    params(
        ("search" = Option<String>, Query, description = "Case-insensitive substring match on the title"),
        ("orderBy" = Option<String>, Query, description = "Order column, `id` (default) or `title`"),
        ("page" = Option<i64>, Query, description = "Accepted for compatibility; results are not paginated")
    ),
    responses(
        (status = 200, description = "List of courses", body = CoursesResponse),
        (status = 400, description = "Invalid query parameters"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
#[instrument(skip_all)]
pub async fn get_courses(
    State(state): State<AppState>,
    filters: Result<Query<CourseFilterParams>, QueryRejection>,
) -> Result<Json<CoursesResponse>, AppError> {
    let Query(filters) = filters
        .map_err(|e| AppError::bad_request(anyhow::anyhow!("Invalid query parameters: {}", e)))?;

    let courses = CourseService::get_courses(&state.db, filters).await?;

    Ok(Json(CoursesResponse { courses }))
}

/// Fetch a single course
#[utoipa::path(
    get,
    path = "/courses/{id}",
    params(
        ("id" = Uuid, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course details", body = CourseResponse),
        (status = 404, description = "Course not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
#[instrument(skip_all)]
pub async fn get_course_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CourseResponse>, AppError> {
    let course = CourseService::get_course(&state.db, id).await?;

    Ok(Json(CourseResponse { course }))
}

/// Create a course, managers only
#[utoipa::path(
    post,
    path = "/courses",
    request_body = CreateCourseDto,
    responses(
        (status = 201, description = "Course created successfully", body = CreateCourseResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller is not a manager"),
        (status = 422, description = "Validation failed"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
#[instrument(skip_all)]
pub async fn create_course(
    State(state): State<AppState>,
    _manager: RequireManager,
    ValidatedJson(dto): ValidatedJson<CreateCourseDto>,
) -> Result<(StatusCode, Json<CreateCourseResponse>), AppError> {
    let course_id = CourseService::create_course(&state.db, dto).await?;

    Ok((StatusCode::CREATED, Json(CreateCourseResponse { course_id })))
}
