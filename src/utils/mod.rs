pub mod auth_client;
pub mod extractor;
pub mod jwt;
pub mod parameter_error_handler;
pub mod password;
pub mod sql;
pub mod validate;

pub use extractor::{SafeClassIdI64, SafeCourseIdI64, SafeGradeIdI64, SafeIDI64, SafeStudentIdI64};
pub use parameter_error_handler::json_error_handler;
pub use parameter_error_handler::query_error_handler;
pub use sql::escape_like_pattern;
