use super::entities::ClassSortBy;
use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 班级查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../client/src/types/generated/class.ts")]
pub struct ClassQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
    pub sort_by: Option<ClassSortBy>,
}

// 创建班级请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../client/src/types/generated/class.ts")]
pub struct CreateClassRequest {
    pub name: String,
    pub description: Option<String>,
    pub year: i32,
}

// 更新班级请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../client/src/types/generated/class.ts")]
pub struct UpdateClassRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub year: Option<i32>,
}

// 班级列表查询参数（用于存储层）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../client/src/types/generated/class.ts")]
pub struct ClassListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
    pub sort_by: Option<ClassSortBy>,
}

// 班级加入学生请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../client/src/types/generated/class.ts")]
pub struct AddStudentRequest {
    pub student_id: i64,
}
