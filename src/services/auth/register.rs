use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use crate::models::{
    ApiResponse, ErrorCode,
    auth::requests::RegisterRequest,
    users::{requests::CreateUserRequest, responses::UserResponse},
};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_password_simple, validate_pseudo};

use super::AuthService;

pub async fn handle_register(
    service: &AuthService,
    register_request: RegisterRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 1. 字段校验
    if let Err(msg) = validate_email(&register_request.email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserEmailInvalid, msg)));
    }
    if let Err(msg) = validate_pseudo(&register_request.pseudo) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserPseudoInvalid, msg)));
    }
    if let Err(msg) = validate_password_simple(&register_request.password) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::UserPasswordInvalid,
            msg,
        )));
    }

    // 2. 邮箱唯一性检查
    match storage.get_user_by_email(&register_request.email).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::UserEmailAlreadyExists,
                "Email is already registered",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            error!("Failed to check email uniqueness: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::RegisterFailed,
                    "Registration failed",
                )),
            );
        }
    }

    // 3. 哈希密码
    let password_hash = match hash_password(&register_request.password) {
        Ok(hash) => hash,
        Err(e) => {
            error!("Failed to hash password: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::RegisterFailed,
                    "Registration failed",
                )),
            );
        }
    };

    // 4. 创建用户
    let create_request = CreateUserRequest {
        email: register_request.email,
        pseudo: register_request.pseudo,
        password: password_hash,
        role: register_request.role,
    };

    match storage.create_user(create_request).await {
        Ok(user) => {
            info!("User {} registered successfully", user.email);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                UserResponse { user },
                "User registered successfully",
            )))
        }
        Err(e) => {
            let msg = e.to_string();
            error!("User registration failed: {}", msg);
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::UserEmailAlreadyExists,
                    "Email is already registered",
                )))
            } else {
                Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::RegisterFailed,
                        format!("Registration failed: {msg}"),
                    )),
                )
            }
        }
    }
}
