use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ClassService;
use crate::models::classes::requests::UpdateClassRequest;
use crate::models::classes::responses::ClassResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn update_class(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
    update_data: UpdateClassRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(ref name) = update_data.name
        && name.trim().is_empty()
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Class name must not be empty",
        )));
    }

    match storage.update_class(class_id, update_data).await {
        Ok(Some(class)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ClassResponse { class },
            "Class updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClassNotFound,
            "Class not found",
        ))),
        Err(e) => {
            error!("Class update failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ClassUpdateFailed,
                    format!("Class update failed: {e}"),
                )),
            )
        }
    }
}
