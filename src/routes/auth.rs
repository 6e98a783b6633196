use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::requests::{LoginRequest, RegisterRequest, VerifyTokenRequest};
use crate::services::AuthService;

// 懒加载的全局 AuthService 实例
static AUTH_SERVICE: Lazy<AuthService> = Lazy::new(AuthService::new_lazy);

pub async fn login(
    req: HttpRequest,
    user_data: web::Json<LoginRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.login(user_data.into_inner(), &req).await
}

pub async fn register(
    req: HttpRequest,
    user_data: web::Json<RegisterRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.register(user_data.into_inner(), &req).await
}

pub async fn refresh_token(request: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.refresh_token(&request).await
}

pub async fn verify_token(
    request: HttpRequest,
    verify_data: web::Json<VerifyTokenRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE
        .verify_token(verify_data.into_inner(), &request)
        .await
}

pub async fn get_user(request: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.get_user(&request).await
}

pub async fn logout(request: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.logout(&request).await
}

// 配置路由
pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .service(
                web::resource("/login")
                    .route(web::post().to(login).wrap(middlewares::RateLimit::login())),
            )
            .service(
                web::resource("/register").route(
                    web::post()
                        .to(register)
                        .wrap(middlewares::RateLimit::register()),
                ),
            )
            .service(
                web::resource("/refresh").route(
                    web::post()
                        .to(refresh_token)
                        .wrap(middlewares::RateLimit::refresh_token()),
                ),
            )
            // 供对端服务验证令牌，自身不要求认证
            .route("/verify-token", web::post().to(verify_token))
            .service(
                web::scope("")
                    .wrap(middlewares::RequireJWT)
                    .route("/me", web::get().to(get_user))
                    .route("/logout", web::post().to(logout)),
            ),
    );
}
