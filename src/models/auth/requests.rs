use crate::models::users::entities::UserRole;
use serde::Deserialize;
use ts_rs::TS;

// 用户登录请求（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../client/src/types/generated/auth.ts")]
pub struct LoginRequest {
    /// 邮箱
    pub email: String,
    /// 密码
    pub password: String,
    /// 是否记住我
    #[serde(default)]
    pub remember_me: bool,
}

// 用户注册请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../client/src/types/generated/auth.ts")]
pub struct RegisterRequest {
    pub email: String,
    pub pseudo: String,
    pub password: String,
    pub role: UserRole,
}

// 令牌校验请求（供对端服务调用）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../client/src/types/generated/auth.ts")]
pub struct VerifyTokenRequest {
    pub token: String,
}
