use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::CourseService;
use crate::models::courses::requests::CreateCourseRequest;
use crate::models::courses::responses::CourseResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_course(
    service: &CourseService,
    request: &HttpRequest,
    course_data: CreateCourseRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if course_data.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Course name must not be empty",
        )));
    }

    // 所属班级必须存在
    match storage.get_class_by_id(course_data.class_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ClassNotFound,
                "Class not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve class: {e}"),
                )),
            );
        }
    }

    match storage.create_course(course_data).await {
        Ok(course) => {
            info!("Course {} created in class {}", course.name, course.class_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                CourseResponse { course },
                "Course created successfully",
            )))
        }
        Err(e) => {
            error!("Course creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::CourseCreationFailed,
                    format!("Course creation failed: {e}"),
                )),
            )
        }
    }
}
