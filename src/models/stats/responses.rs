use super::entities::GradeStats;
use serde::Serialize;
use ts_rs::TS;

/// 班级成绩统计响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../client/src/types/generated/stats.ts")]
pub struct ClassGradeStatsResponse {
    pub class_id: i64,
    pub class_name: String,
    pub stats: GradeStats,
}

/// 课程成绩统计响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../client/src/types/generated/stats.ts")]
pub struct CourseGradeStatsResponse {
    pub course_id: i64,
    pub course_name: String,
    pub stats: GradeStats,
}

/// 学生成绩统计响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../client/src/types/generated/stats.ts")]
pub struct StudentGradeStatsResponse {
    pub student_id: i64,
    pub student_name: String,
    pub stats: GradeStats,
}
