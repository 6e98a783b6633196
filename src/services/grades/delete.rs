use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::GradeService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_grade(
    service: &GradeService,
    request: &HttpRequest,
    grade_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_grade(grade_id).await {
        Ok(true) => {
            info!("Grade {} deleted", grade_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Grade deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::GradeNotFound,
            "Grade not found",
        ))),
        Err(e) => {
            error!("Grade deletion failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::GradeDeleteFailed,
                    format!("Grade deletion failed: {e}"),
                )),
            )
        }
    }
}
