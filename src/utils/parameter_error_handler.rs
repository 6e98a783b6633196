//! 请求参数解析错误处理器
//!
//! 将 actix-web 的 JSON / Query 解析错误转换为统一的 ApiResponse 结构。

use actix_web::{HttpRequest, HttpResponse, error};

use crate::models::{ApiResponse, ErrorCode};

pub fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> error::Error {
    let detail = err.to_string();
    let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::BadRequest,
        format!("无效的JSON参数: {detail}"),
    ));
    error::InternalError::from_response(err, response).into()
}

pub fn query_error_handler(err: error::QueryPayloadError, _req: &HttpRequest) -> error::Error {
    let detail = err.to_string();
    let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::BadRequest,
        format!("无效的查询参数: {detail}"),
    ));
    error::InternalError::from_response(err, response).into()
}
