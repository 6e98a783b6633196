use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::UserService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    users::{requests::UpdateUserRequest, responses::UserResponse},
};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_password_simple, validate_pseudo};

pub async fn update_user(
    service: &UserService,
    request: &HttpRequest,
    user_id: i64,
    mut update_data: UpdateUserRequest,
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

    // 只能更新自己的资料
    if caller.id != user_id {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "You can only update your own profile",
        )));
    }

    // 字段校验
    if let Some(ref email) = update_data.email {
        if let Err(msg) = validate_email(email) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::UserEmailInvalid, msg)));
        }
        // 邮箱唯一性检查（允许换回自己当前的邮箱）
        match storage.get_user_by_email(email).await {
            Ok(Some(existing)) if existing.id != user_id => {
                return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::UserEmailAlreadyExists,
                    "Email is already registered",
                )));
            }
            Ok(_) => {}
            Err(e) => {
                error!("Failed to check email uniqueness: {}", e);
                return Ok(HttpResponse::InternalServerError().json(
                    ApiResponse::error_empty(ErrorCode::UserUpdateFailed, "User update failed"),
                ));
            }
        }
    }
    if let Some(ref pseudo) = update_data.pseudo
        && let Err(msg) = validate_pseudo(pseudo)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserPseudoInvalid, msg)));
    }
    if let Some(ref password) = update_data.password {
        if let Err(msg) = validate_password_simple(password) {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::UserPasswordInvalid,
                msg,
            )));
        }
        match hash_password(password) {
            Ok(hash) => update_data.password = Some(hash),
            Err(e) => {
                error!("Failed to hash password: {}", e);
                return Ok(HttpResponse::InternalServerError().json(
                    ApiResponse::error_empty(ErrorCode::UserUpdateFailed, "User update failed"),
                ));
            }
        }
    }

    match storage.update_user(user_id, update_data).await {
        Ok(Some(user)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            UserResponse { user },
            "User updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "User not found",
        ))),
        Err(e) => {
            error!("User update failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::UserUpdateFailed,
                    format!("User update failed: {e}"),
                )),
            )
        }
    }
}
