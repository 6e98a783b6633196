//! 认证服务客户端
//!
//! 配置了 auth_service.url 时，本服务在本地校验通过后再向对端认证服务
//! 二次确认令牌。对端明确拒绝则令牌无效；网络不可达时由调用方回退到
//! 本地校验结果，保证认证服务下线期间本服务可降级运行。

use once_cell::sync::Lazy;
use reqwest::Client;
use std::time::Duration;

use crate::config::AppConfig;
use crate::errors::Result;
use crate::models::ApiResponse;
use crate::models::auth::responses::TokenVerificationResponse;

static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    let config = AppConfig::get();
    Client::builder()
        .timeout(Duration::from_secs(config.auth_service.timeout))
        .build()
        .unwrap_or_default()
});

pub struct AuthServiceClient;

impl AuthServiceClient {
    /// 向对端认证服务确认令牌
    ///
    /// 返回 Err 仅表示传输层失败；对端正常应答但令牌无效时返回
    /// `is_valid = false`。
    pub async fn verify_token(base_url: &str, token: &str) -> Result<TokenVerificationResponse> {
        let url = format!(
            "{}/api/v1/auth/verify-token",
            base_url.trim_end_matches('/')
        );

        let response = HTTP_CLIENT
            .post(&url)
            .json(&serde_json::json!({ "token": token }))
            .send()
            .await?;

        let body: ApiResponse<TokenVerificationResponse> = response.json().await?;
        Ok(body.data.unwrap_or(TokenVerificationResponse {
            is_valid: false,
            user: None,
        }))
    }
}
