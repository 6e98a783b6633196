use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::require_jwt::RequireJWT;
use crate::models::auth::requests::VerifyTokenRequest;
use crate::models::auth::responses::{
    RefreshTokenResponse, TokenVerificationResponse, UserInfoResponse,
};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::jwt;

use super::AuthService;

pub async fn handle_refresh_token(
    service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let config = service.get_config();
    // 从 cookie 中提取 refresh token
    match jwt::JwtUtils::extract_refresh_token_from_cookie(request) {
        Some(refresh_token) => {
            // 验证 refresh token 并生成新的 access token
            match jwt::JwtUtils::refresh_access_token(&refresh_token) {
                Ok(new_access_token) => {
                    let response = RefreshTokenResponse {
                        access_token: new_access_token,
                        expires_in: config.jwt.access_token_expiry * 60,
                    };
                    Ok(HttpResponse::Ok().json(ApiResponse::success(
                        response,
                        "Token refreshed successfully",
                    )))
                }
                Err(e) => {
                    tracing::info!("Refresh token failed: {}", e);

                    // 清除无效的 refresh token cookie
                    let empty_cookie = jwt::JwtUtils::create_empty_refresh_token_cookie();

                    Ok(HttpResponse::Unauthorized().cookie(empty_cookie).json(
                        ApiResponse::error_empty(
                            ErrorCode::Unauthorized,
                            "Login expired or invalid, please login again",
                        ),
                    ))
                }
            }
        }
        None => Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        ))),
    }
}

/// 校验对端服务或客户端提交的 access token
///
/// 令牌无效时仍返回 200，`is_valid` 为 false。对端据此区分
/// "令牌被拒绝" 与 "本服务不可达"。
pub async fn handle_verify_token(
    service: &AuthService,
    verify_request: VerifyTokenRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let claims = match jwt::JwtUtils::verify_access_token(&verify_request.token) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::info!("Token verification failed: {}", e);
            return Ok(HttpResponse::Ok().json(ApiResponse::success(
                TokenVerificationResponse {
                    is_valid: false,
                    user: None,
                },
                "Token is invalid",
            )));
        }
    };

    let user = match claims.sub.parse::<i64>() {
        Ok(user_id) => match storage.get_user_by_id(user_id).await {
            Ok(user) => user,
            Err(e) => {
                tracing::error!("Failed to load user for token verification: {}", e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Token verification failed",
                    )),
                );
            }
        },
        Err(_) => None,
    };

    match user {
        Some(user) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            TokenVerificationResponse {
                is_valid: true,
                user: Some(user),
            },
            "Token is valid",
        ))),
        None => Ok(HttpResponse::Ok().json(ApiResponse::success(
            TokenVerificationResponse {
                is_valid: false,
                user: None,
            },
            "Token is invalid",
        ))),
    }
}

pub async fn handle_get_user(
    _service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // RequireJWT 中间件已将用户写入请求扩展
    match RequireJWT::extract_user_claims(request) {
        Some(user) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            UserInfoResponse { user },
            "User information retrieved successfully",
        ))),
        None => Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        ))),
    }
}
