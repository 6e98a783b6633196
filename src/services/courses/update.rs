use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CourseService;
use crate::models::courses::requests::UpdateCourseRequest;
use crate::models::courses::responses::CourseResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn update_course(
    service: &CourseService,
    request: &HttpRequest,
    course_id: i64,
    update_data: UpdateCourseRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(ref name) = update_data.name
        && name.trim().is_empty()
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Course name must not be empty",
        )));
    }

    match storage.update_course(course_id, update_data).await {
        Ok(Some(course)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            CourseResponse { course },
            "Course updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CourseNotFound,
            "Course not found",
        ))),
        Err(e) => {
            error!("Course update failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::CourseUpdateFailed,
                    format!("Course update failed: {e}"),
                )),
            )
        }
    }
}
