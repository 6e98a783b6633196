use crate::models::users::entities::User;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 登录响应模型
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../client/src/types/generated/auth.ts")]
pub struct LoginResponse {
    pub access_token: String,
    pub expires_in: i64,
    pub user: User,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../client/src/types/generated/auth.ts")]
pub struct RefreshTokenResponse {
    pub access_token: String,
    pub expires_in: i64,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../client/src/types/generated/auth.ts")]
pub struct UserInfoResponse {
    pub user: User,
}

// 令牌校验响应，同时也是对端服务反序列化的目标
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../client/src/types/generated/auth.ts")]
pub struct TokenVerificationResponse {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}
