use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassService;
use crate::models::classes::responses::ClassDetailResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_class(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let class = match storage.get_class_by_id(class_id).await {
        Ok(Some(class)) => class,
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
    };

    // 详情附带班级下的课程列表
    match storage.list_courses_by_class(class_id).await {
        Ok(courses) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ClassDetailResponse { class, courses },
            "Class retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve class courses: {e}"),
            )),
        ),
    }
}
