use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::model::{LoginRequest, LoginResponse};
use crate::modules::courses::model::{
    Course, CourseFilterParams, CourseOrderBy, CourseResponse, CourseSummary, CoursesResponse,
    CreateCourseDto, CreateCourseResponse,
};
use crate::modules::users::model::{
    CreateUserDto, CreateUserResponse, MessageResponse, UpdateUserDto, User, UserFilterParams,
    UserResponse, UserRole, UsersResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::login_user,
        crate::modules::users::controller::create_user,
        crate::modules::users::controller::get_users,
        crate::modules::users::controller::get_user_by_id,
        crate::modules::users::controller::update_user,
        crate::modules::users::controller::delete_user,
        crate::modules::courses::controller::get_courses,
        crate::modules::courses::controller::get_course_by_id,
        crate::modules::courses::controller::create_course,
    ),
    components(
        schemas(
            User,
            UserRole,
            CreateUserDto,
            UpdateUserDto,
            UserFilterParams,
            CreateUserResponse,
            UsersResponse,
            UserResponse,
            MessageResponse,
            LoginRequest,
            LoginResponse,
            Course,
            CourseSummary,
            CourseOrderBy,
            CourseFilterParams,
            CreateCourseDto,
            CreateCourseResponse,
            CoursesResponse,
            CourseResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Login and token issuance"),
        (name = "Users", description = "User management endpoints"),
        (name = "Courses", description = "Course catalog endpoints")
    ),
    info(
        title = "Coursedeck API",
        version = "0.1.0",
        description = "Course platform API with JWT authentication and role-gated user management.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
