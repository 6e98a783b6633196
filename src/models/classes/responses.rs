use super::entities::Class;
use crate::models::common::PaginationInfo;
use crate::models::courses::entities::Course;
use crate::models::users::entities::User;
use serde::Serialize;
use ts_rs::TS;

// 班级响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../client/src/types/generated/class.ts")]
pub struct ClassResponse {
    pub class: Class,
}

// 班级详情响应（含课程列表）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../client/src/types/generated/class.ts")]
pub struct ClassDetailResponse {
    pub class: Class,
    pub courses: Vec<Course>,
}

// 班级列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../client/src/types/generated/class.ts")]
pub struct ClassListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<Class>,
}

// 班级学生列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../client/src/types/generated/class.ts")]
pub struct ClassStudentListResponse {
    pub items: Vec<User>,
}
