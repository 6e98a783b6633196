use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode, users::responses::UserResponse};

pub async fn get_user(
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

    // 教授可查任意用户，学生只能查自己
    if !caller.role.is_professor() && caller.id != user_id {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "You can only view your own profile",
        )));
    }

    match storage.get_user_by_id(user_id).await {
        Ok(Some(user)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            UserResponse { user },
            "User retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "User not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve user: {e}"),
            )),
        ),
    }
}
