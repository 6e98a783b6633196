use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::services::SystemService;

// 懒加载的全局 SystemService 实例
static SYSTEM_SERVICE: Lazy<SystemService> = Lazy::new(SystemService::new_lazy);

pub async fn health(request: HttpRequest) -> ActixResult<HttpResponse> {
    SYSTEM_SERVICE.health(&request).await
}

// 配置路由，健康检查无需认证
pub fn configure_system_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AppStartTime;
    use actix_web::{App, test};

    #[actix_web::test]
    async fn test_health_endpoint_reports_ok() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppStartTime {
                    start_datetime: chrono::Utc::now(),
                }))
                .configure(configure_system_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], 0);
        assert_eq!(body["data"]["status"], "ok");
    }
}
