use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../client/src/types/generated/class.ts")]
pub struct Class {
    // 班级ID
    pub id: i64,
    // 班级名称
    pub name: String,
    // 班级描述
    pub description: Option<String>,
    // 学年
    pub year: i32,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 班级学生关联
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../client/src/types/generated/class.ts")]
pub struct ClassStudent {
    pub id: i64,
    pub class_id: i64,
    pub student_id: i64,
    pub joined_at: chrono::DateTime<chrono::Utc>,
}

// 班级列表排序字段
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../client/src/types/generated/class.ts")]
pub enum ClassSortBy {
    Name,
    Year,
}

impl<'de> Deserialize<'de> for ClassSortBy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "name" => Ok(ClassSortBy::Name),
            "year" => Ok(ClassSortBy::Year),
            _ => Err(serde::de::Error::custom(format!(
                "无效的排序字段: '{s}'. 支持的字段: name, year"
            ))),
        }
    }
}

impl std::fmt::Display for ClassSortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClassSortBy::Name => write!(f, "name"),
            ClassSortBy::Year => write!(f, "year"),
        }
    }
}
