use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::GradeService;
use crate::models::grades::requests::UpdateGradeRequest;
use crate::models::grades::responses::GradeResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_grade_value;

pub async fn update_grade(
    service: &GradeService,
    request: &HttpRequest,
    grade_id: i64,
    update_data: UpdateGradeRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(value) = update_data.value
        && let Err(msg) = validate_grade_value(value)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::GradeValueInvalid, msg)));
    }

    match storage.update_grade(grade_id, update_data).await {
        Ok(Some(grade)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            GradeResponse { grade },
            "Grade updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::GradeNotFound,
            "Grade not found",
        ))),
        Err(e) => {
            error!("Grade update failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::GradeUpdateFailed,
                    format!("Grade update failed: {e}"),
                )),
            )
        }
    }
}
