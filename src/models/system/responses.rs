use serde::Serialize;
use ts_rs::TS;

/// 健康检查响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../client/src/types/generated/system.ts")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    // 自进程启动以来的秒数
    pub uptime_seconds: i64,
}
