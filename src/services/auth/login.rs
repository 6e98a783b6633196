use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    auth::{requests::LoginRequest, responses::LoginResponse},
};
use crate::utils::jwt;
use crate::utils::password::verify_password;

use super::AuthService;

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();

    // 1. 根据邮箱获取用户信息
    match storage.get_user_by_email(&login_request.email).await {
        Ok(Some(user)) => {
            // 2. 验证密码
            if verify_password(&login_request.password, &user.password_hash) {
                // 3. 生成令牌对
                match user
                    .generate_token_pair(login_request.remember_me.then(|| {
                        chrono::Duration::days(config.jwt.refresh_token_remember_me_expiry)
                    }))
                    .await
                {
                    Ok(token_pair) => {
                        tracing::info!("User {} logged in successfully", user.email);

                        let response = LoginResponse {
                            access_token: token_pair.access_token,
                            expires_in: config.jwt.access_token_expiry * 60, // 转换为秒
                            user,
                            created_at: chrono::Utc::now(),
                        };

                        // 4. 创建 refresh token cookie
                        let refresh_cookie =
                            jwt::JwtUtils::create_refresh_token_cookie(&token_pair.refresh_token);

                        Ok(HttpResponse::Ok()
                            .cookie(refresh_cookie)
                            .json(ApiResponse::success(response, "Login successful")))
                    }
                    Err(e) => {
                        tracing::error!("Failed to generate JWT token: {}", e);
                        Ok(
                            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                                ErrorCode::InternalServerError,
                                "Login failed, unable to generate token",
                            )),
                        )
                    }
                }
            } else {
                Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                    ErrorCode::AuthFailed,
                    "Email or password is incorrect",
                )))
            }
        }
        Ok(None) => Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::AuthFailed,
            "Email or password is incorrect",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Login failed: {e}"),
            )),
        ),
    }
}
