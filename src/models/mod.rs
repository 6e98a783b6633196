pub mod auth;
pub mod classes;
pub mod common;
pub mod courses;
pub mod grades;
pub mod stats;
pub mod system;
pub mod users;

pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

/// 程序启动时间，用于健康检查的运行时长统计
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// 业务错误码
///
/// 编码规则：HTTP 状态码 * 100 + 序号，成功为 0。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 400xx 请求参数错误
    BadRequest = 40000,
    UserEmailInvalid = 40001,
    UserPseudoInvalid = 40002,
    UserPasswordInvalid = 40003,
    GradeValueInvalid = 40004,

    // 401xx 认证错误
    Unauthorized = 40100,
    AuthFailed = 40101,

    // 403xx 权限错误
    Forbidden = 40300,
    ClassHasStudents = 40301,
    TargetNotStudent = 40302,

    // 404xx 资源不存在
    NotFound = 40400,
    UserNotFound = 40401,
    ClassNotFound = 40402,
    CourseNotFound = 40403,
    GradeNotFound = 40404,

    // 409xx 资源冲突
    UserEmailAlreadyExists = 40900,
    StudentAlreadyInClass = 40901,

    // 429xx 限流
    RateLimitExceeded = 42900,

    // 500xx 服务器内部错误
    InternalServerError = 50000,
    RegisterFailed = 50001,
    UserUpdateFailed = 50002,
    UserDeleteFailed = 50003,
    ClassCreationFailed = 50004,
    ClassUpdateFailed = 50005,
    ClassDeleteFailed = 50006,
    CourseCreationFailed = 50007,
    CourseUpdateFailed = 50008,
    CourseDeleteFailed = 50009,
    GradeCreationFailed = 50010,
    GradeUpdateFailed = 50011,
    GradeDeleteFailed = 50012,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success as i32, 0);
        assert_eq!(ErrorCode::Unauthorized as i32, 40100);
        assert_eq!(ErrorCode::Forbidden as i32, 40300);
        assert_eq!(ErrorCode::ClassNotFound as i32, 40402);
        assert_eq!(ErrorCode::UserEmailAlreadyExists as i32, 40900);
    }
}
