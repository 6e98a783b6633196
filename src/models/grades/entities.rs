use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 成绩取值范围（闭区间）
pub const GRADE_VALUE_MIN: f64 = 0.0;
pub const GRADE_VALUE_MAX: f64 = 20.0;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../client/src/types/generated/grade.ts")]
pub struct Grade {
    // 成绩ID
    pub id: i64,
    // 所属课程ID
    pub course_id: i64,
    // 学生ID
    pub student_id: i64,
    // 分数，取值范围 [0, 20]
    pub value: f64,
    // 评语
    pub comment: Option<String>,
    // 评分日期
    pub date: chrono::DateTime<chrono::Utc>,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
