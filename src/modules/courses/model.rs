//! Course catalog models and DTOs.
//!
//! The list endpoint returns [`CourseSummary`] entries (id and title); the
//! detail endpoint returns the full [`Course`] including its nullable
//! description.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A course with its full description.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
}

/// Course listing entry.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct CourseSummary {
    pub id: Uuid,
    pub title: String,
}

/// Columns the course list can be ordered by.
///
/// A closed set: the value maps to a fixed column name and is never
/// interpolated from raw input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CourseOrderBy {
    #[default]
    Id,
    Title,
}

impl CourseOrderBy {
    pub fn column(self) -> &'static str {
        match self {
            CourseOrderBy::Id => "id",
            CourseOrderBy::Title => "title",
        }
    }
}

/// Query parameters for listing courses.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseFilterParams {
    /// Case-insensitive substring match on the title.
    pub search: Option<String>,
    #[serde(default)]
    pub order_by: CourseOrderBy,
    /// Accepted for wire compatibility; results are not paginated.
    #[serde(default = "default_page")]
    pub page: i64,
}

fn default_page() -> i64 {
    1
}

/// DTO for creating a course.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateCourseDto {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseResponse {
    pub course_id: Uuid,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CoursesResponse {
    pub courses: Vec<CourseSummary>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CourseResponse {
    pub course: Course,
}
