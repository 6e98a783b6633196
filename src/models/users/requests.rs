use super::entities::UserRole;
use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 用户查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../client/src/types/generated/user.ts")]
pub struct UserListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub role: Option<UserRole>,
    pub search: Option<String>,
}

// 用户创建请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../client/src/types/generated/user.ts")]
pub struct CreateUserRequest {
    pub email: String,
    pub pseudo: String,
    pub password: String,
    pub role: UserRole,
}

// 用户更新请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../client/src/types/generated/user.ts")]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub pseudo: Option<String>,
    pub password: Option<String>,
}

// 用户列表查询参数（用于存储层）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../client/src/types/generated/user.ts")]
pub struct UserListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub role: Option<UserRole>,
    pub search: Option<String>,
}
