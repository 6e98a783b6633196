use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ClassService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_class(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 班级必须存在
    match storage.get_class_by_id(class_id).await {
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

    // 仍有学生的班级不允许删除
    match storage.count_class_students(class_id).await {
        Ok(0) => {}
        Ok(count) => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::ClassHasStudents,
                format!("Class still has {count} students and cannot be deleted"),
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to count class students: {e}"),
                )),
            );
        }
    }

    match storage.delete_class(class_id).await {
        Ok(true) => {
            info!("Class {} deleted", class_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Class deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClassNotFound,
            "Class not found",
        ))),
        Err(e) => {
            error!("Class deletion failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ClassDeleteFailed,
                    format!("Class deletion failed: {e}"),
                )),
            )
        }
    }
}
