use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::UserService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_user(
    service: &UserService,
    request: &HttpRequest,
    user_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let caller = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user identity",
            )));
        }
    };

    // 只能删除自己的账号
    if caller.id != user_id {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "You can only delete your own account",
        )));
    }

    match storage.delete_user(user_id).await {
        Ok(true) => {
            info!("User {} deleted their account", user_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("User deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "User not found",
        ))),
        Err(e) => {
            error!("User deletion failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::UserDeleteFailed,
                    format!("User deletion failed: {e}"),
                )),
            )
        }
    }
}
