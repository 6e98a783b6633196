use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 课程查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../client/src/types/generated/course.ts")]
pub struct CourseQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub class_id: Option<i64>,
    pub search: Option<String>,
}

// 创建课程请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../client/src/types/generated/course.ts")]
pub struct CreateCourseRequest {
    pub class_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub credits: i32,
}

// 更新课程请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../client/src/types/generated/course.ts")]
pub struct UpdateCourseRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub credits: Option<i32>,
}

// 课程列表查询参数（用于存储层）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../client/src/types/generated/course.ts")]
pub struct CourseListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub class_id: Option<i64>,
    pub search: Option<String>,
}
