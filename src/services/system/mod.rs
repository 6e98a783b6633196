use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};

use crate::models::system::responses::HealthResponse;
use crate::models::{ApiResponse, AppStartTime};

pub struct SystemService;

impl SystemService {
    pub fn new_lazy() -> Self {
        Self
    }

    // 存活检查，无需认证
    pub async fn health(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        let uptime_seconds = request
            .app_data::<web::Data<AppStartTime>>()
            .map(|start| {
                chrono::Utc::now()
                    .signed_duration_since(start.start_datetime)
                    .num_seconds()
            })
            .unwrap_or(0);

        Ok(HttpResponse::Ok().json(ApiResponse::success(
            HealthResponse {
                status: "ok".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                uptime_seconds,
            },
            "Service healthy",
        )))
    }
}
