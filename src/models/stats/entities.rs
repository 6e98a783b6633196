use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 成绩统计摘要
///
/// 按需计算，不落库。count 为 0 时四个数值字段均为 null。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../client/src/types/generated/stats.ts")]
pub struct GradeStats {
    pub average: Option<f64>,
    pub median: Option<f64>,
    pub lowest: Option<f64>,
    pub highest: Option<f64>,
    pub count: usize,
}

impl GradeStats {
    /// 空数据集的统计结果
    pub fn empty() -> Self {
        Self {
            average: None,
            median: None,
            lowest: None,
            highest: None,
            count: 0,
        }
    }
}
