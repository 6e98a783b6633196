use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::ApiResponse;
use crate::utils::jwt;

use super::AuthService;

pub async fn handle_logout(
    service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 从缓存中移除当前 access token 对应的用户条目
    if let Some(token) = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
    {
        let cache = service.get_cache(request);
        cache.remove(&format!("user:{token}")).await;
    }

    // 清除 refresh token cookie
    let empty_cookie = jwt::JwtUtils::create_empty_refresh_token_cookie();

    Ok(HttpResponse::Ok()
        .cookie(empty_cookie)
        .json(ApiResponse::success_empty("Logout successful")))
}
