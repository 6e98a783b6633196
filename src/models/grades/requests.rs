use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 成绩查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../client/src/types/generated/grade.ts")]
pub struct GradeQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    /// 逗号分隔的课程ID列表，如 "1,2,3"
    pub course_ids: Option<String>,
}

impl GradeQueryParams {
    /// 解析逗号分隔的课程ID，忽略空段，任一段非法即返回 None
    pub fn parse_course_ids(&self) -> Option<Vec<i64>> {
        let raw = self.course_ids.as_deref()?;
        let ids: Result<Vec<i64>, _> = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::parse::<i64>)
            .collect();
        ids.ok().filter(|v| !v.is_empty())
    }
}

// 创建成绩请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../client/src/types/generated/grade.ts")]
pub struct CreateGradeRequest {
    pub course_id: i64,
    pub student_id: i64,
    pub value: f64,
    pub comment: Option<String>,
    pub date: Option<chrono::DateTime<chrono::Utc>>,
}

// 更新成绩请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../client/src/types/generated/grade.ts")]
pub struct UpdateGradeRequest {
    pub value: Option<f64>,
    pub comment: Option<String>,
    pub date: Option<chrono::DateTime<chrono::Utc>>,
}

// 成绩列表查询参数（用于存储层）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../client/src/types/generated/grade.ts")]
pub struct GradeListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub student_id: Option<i64>,
    pub course_ids: Option<Vec<i64>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(course_ids: Option<&str>) -> GradeQueryParams {
        GradeQueryParams {
            pagination: Default::default(),
            course_ids: course_ids.map(str::to_string),
        }
    }

    #[test]
    fn test_parse_course_ids() {
        assert_eq!(params(Some("1,2,3")).parse_course_ids(), Some(vec![1, 2, 3]));
        assert_eq!(params(Some(" 4 , 5 ")).parse_course_ids(), Some(vec![4, 5]));
        assert_eq!(params(Some("")).parse_course_ids(), None);
        assert_eq!(params(Some("1,abc")).parse_course_ids(), None);
        assert_eq!(params(None).parse_course_ids(), None);
    }
}
