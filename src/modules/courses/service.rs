use anyhow::Context;
use sqlx::{PgPool, QueryBuilder};
use tracing::instrument;
use uuid::Uuid;

use crate::modules::courses::model::{
    Course, CourseFilterParams, CourseSummary, CreateCourseDto,
};
use crate::utils::errors::AppError;

pub struct CourseService;

impl CourseService {
    #[instrument(skip(db, dto))]
    pub async fn create_course(db: &PgPool, dto: CreateCourseDto) -> Result<Uuid, AppError> {
        let course_id = sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO courses (title, description) VALUES ($1, $2) RETURNING id",
        )
        .bind(&dto.title)
        .bind(&dto.description)
        .fetch_one(db)
        .await
        .context("Failed to insert course")
        .map_err(AppError::database)?;

        Ok(course_id)
    }

    /// Lists courses, optionally filtered by a title substring. The order
    /// column comes from the closed enum on the filter, never from raw
    /// input; `page` is recorded on the span but not applied.
    #[instrument(
        skip(db, filters),
        fields(search = ?filters.search, order_by = ?filters.order_by, page = filters.page)
    )]
    pub async fn get_courses(
        db: &PgPool,
        filters: CourseFilterParams,
    ) -> Result<Vec<CourseSummary>, AppError> {
        let mut query = QueryBuilder::new("SELECT id, title FROM courses");

        if let Some(search) = &filters.search {
            query.push(" WHERE title ILIKE ");
            query.push_bind(format!("%{search}%"));
        }

        query.push(" ORDER BY ");
        query.push(filters.order_by.column());

        let courses = query
            .build_query_as::<CourseSummary>()
            .fetch_all(db)
            .await
            .context("Failed to fetch courses")
            .map_err(AppError::database)?;

        Ok(courses)
    }

    #[instrument(skip(db))]
    pub async fn get_course(db: &PgPool, id: Uuid) -> Result<Course, AppError> {
        let course = sqlx::query_as::<_, Course>(
            "SELECT id, title, description FROM courses WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch course by id")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Course not found")))?;

        Ok(course)
    }
}
