use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ClassService;
use crate::middlewares::RequireJWT;
use crate::models::classes::requests::CreateClassRequest;
use crate::models::classes::responses::ClassResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_class(
    service: &ClassService,
    request: &HttpRequest,
    class_data: CreateClassRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let uid = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user id",
            )));
        }
    };

    if class_data.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Class name must not be empty",
        )));
    }

    match storage.create_class(class_data).await {
        Ok(class) => {
            info!("Class {} created successfully by {}", class.name, uid);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                ClassResponse { class },
                "Class created successfully",
            )))
        }
        Err(e) => {
            error!("Class creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ClassCreationFailed,
                    format!("Class creation failed: {e}"),
                )),
            )
        }
    }
}
