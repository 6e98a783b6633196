/*!
 * JWT 认证中间件
 *
 * 验证 `Authorization: Bearer <token>` 中的 access token，通过后把完整的
 * 用户实体写入请求扩展，供后续处理程序与 RequireRole 中间件使用。
 *
 * ## 认证流程
 *
 * 1. 本地校验 JWT 签名与 token 类型
 * 2. 按 `user:{token}` 命中缓存则直接放行
 * 3. 缓存未命中时从存储加载用户；若配置了对端认证服务，再做一次远端确认：
 *    对端明确拒绝则令牌无效，网络不可达时回退到本地校验结果
 * 4. 校验失败返回 401
 */

use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;
use crate::models::users::entities::UserRole;
use crate::models::{ErrorCode, users::entities};
use crate::storage::Storage;
use crate::utils::auth_client::AuthServiceClient;
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::{rc::Rc, sync::Arc};
use tracing::{debug, info, warn};

use super::create_error_response;

const BEARER_PREFIX: &str = "Bearer ";
const AUTHORIZATION_HEADER: &str = "Authorization";

#[derive(Clone)]
pub struct RequireJWT;

// 辅助函数：提取并验证 JWT access token
async fn extract_and_validate_jwt(req: &ServiceRequest) -> Result<entities::User, String> {
    let token = req
        .headers()
        .get(AUTHORIZATION_HEADER)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix(BEARER_PREFIX))
        .ok_or_else(|| "Missing or invalid Authorization header".to_string())?;

    let claims = crate::utils::jwt::JwtUtils::verify_access_token(token).map_err(|err| {
        info!("JWT token validation failed: {}", err);
        "Invalid JWT token".to_string()
    })?;

    let cache = req
        .app_data::<actix_web::web::Data<Arc<dyn ObjectCache>>>()
        .expect("Cache not found in app data")
        .get_ref()
        .clone();

    // 从缓存中获取用户信息，命中则跳过存储与远端确认
    match cache.get_raw(&format!("user:{token}")).await {
        CacheResult::Found(json) => match serde_json::from_str::<entities::User>(&json) {
            Ok(user) => return Ok(user),
            Err(_) => {
                cache.remove(&format!("user:{token}")).await;
                info!("Failed to deserialize user from cache for token: {}", token);
            }
        },
        _ => {
            debug!("User not found in cache for token: {}", token);
        }
    };

    let storage = req
        .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
        .expect("Storage not found in app data")
        .get_ref()
        .clone();

    let user_id = claims
        .sub
        .parse::<i64>()
        .map_err(|_| "Invalid user ID in JWT".to_string())?;

    let user = storage
        .get_user_by_id(user_id)
        .await
        .map_err(|_| "Failed to retrieve user from storage".to_string())?
        .ok_or_else(|| "User not found".to_string())?;

    // 配置了对端认证服务时做二次确认
    let app_config = AppConfig::get();
    if let Some(base_url) = app_config.auth_service_url() {
        match AuthServiceClient::verify_token(base_url, token).await {
            Ok(verification) => {
                if !verification.is_valid {
                    info!("Token rejected by auth service for user {}", user_id);
                    return Err("Token rejected by auth service".to_string());
                }
            }
            Err(e) => {
                // 传输层失败回退到本地校验结果
                warn!(
                    "Auth service unreachable, falling back to local verification: {}",
                    e
                );
            }
        }
    }

    // 将用户信息存入缓存
    if let Ok(user_json) = serde_json::to_string(&user) {
        cache
            .insert_raw(
                format!("user:{token}"),
                user_json,
                app_config.cache.default_ttl,
            )
            .await;
    }

    Ok(user)
}

impl<S, B> Transform<S, ServiceRequest> for RequireJWT
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireJWTMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireJWTMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireJWTMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireJWTMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            // 处理 OPTIONS 请求
            if req.method() == actix_web::http::Method::OPTIONS {
                return Ok(req.into_response(
                    create_error_response(StatusCode::NO_CONTENT, ErrorCode::Success, "")
                        .map_into_right_body(),
                ));
            }

            // 验证 JWT token
            match extract_and_validate_jwt(&req).await {
                Ok(user) => {
                    debug!("JWT authentication successful for ID: {}", user.id);
                    req.extensions_mut().insert(user);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Err(err) => {
                    info!(
                        "JWT authentication failed for request to {}: {}",
                        req.path(),
                        err
                    );
                    Ok(req.into_response(
                        create_error_response(
                            StatusCode::UNAUTHORIZED,
                            ErrorCode::Unauthorized,
                            &format!("Unauthorized: {err}"),
                        )
                        .map_into_right_body(),
                    ))
                }
            }
        })
    }
}

// 辅助函数：从请求中提取用户信息
impl RequireJWT {
    /// 从请求扩展中提取用户信息
    /// 此函数应该在应用了RequireJWT中间件的路由处理程序中使用
    pub fn extract_user_claims(req: &actix_web::HttpRequest) -> Option<entities::User> {
        req.extensions().get::<entities::User>().cloned()
    }

    /// 从请求扩展中提取用户ID
    pub fn extract_user_id(req: &actix_web::HttpRequest) -> Option<i64> {
        req.extensions().get::<entities::User>().map(|user| user.id)
    }

    /// 从请求扩展中提取用户角色
    pub fn extract_user_role(req: &actix_web::HttpRequest) -> Option<UserRole> {
        req.extensions()
            .get::<entities::User>()
            .map(|user| user.role.clone())
    }
}
