use crate::modules::courses::controller::{create_course, get_course_by_id, get_courses};
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn init_courses_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_courses).post(create_course))
        .route("/{id}", get(get_course_by_id))
}
