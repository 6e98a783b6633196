use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../client/src/types/generated/course.ts")]
pub struct Course {
    // 课程ID
    pub id: i64,
    // 所属班级ID
    pub class_id: i64,
    // 课程名称
    pub name: String,
    // 课程描述
    pub description: Option<String>,
    // 学分
    pub credits: i32,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
