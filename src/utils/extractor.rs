//! 路径参数安全提取器
//!
//! 路径中的 ID 必须是正整数，解析失败时直接返回统一的 400 响应，
//! 避免每个服务重复写参数校验。

use actix_web::{FromRequest, HttpResponse, dev::Payload, error::InternalError};
use std::future::{Ready, ready};

/// 定义一个从路径段解析正整数 ID 的提取器
///
/// 用法: `define_safe_i64_extractor!(SafeClassIdI64, "class_id");`
#[macro_export]
macro_rules! define_safe_i64_extractor {
    ($name:ident, $param:literal) => {
        #[derive(Debug, Clone, Copy)]
        pub struct $name(pub i64);

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct IdVisitor;

                impl serde::de::Visitor<'_> for IdVisitor {
                    type Value = i64;

                    fn expecting(
                        &self,
                        formatter: &mut std::fmt::Formatter,
                    ) -> std::fmt::Result {
                        formatter.write_str("a positive integer id")
                    }

                    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        if value > 0 {
                            Ok(value)
                        } else {
                            Err(E::custom("id must be positive"))
                        }
                    }

                    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        if value > 0 && value <= i64::MAX as u64 {
                            Ok(value as i64)
                        } else {
                            Err(E::custom("id must be positive"))
                        }
                    }

                    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        match value.parse::<i64>() {
                            Ok(id) if id > 0 => Ok(id),
                            _ => Err(E::custom("id must be positive")),
                        }
                    }
                }

                deserializer.deserialize_any(IdVisitor).map($name)
            }
        }

        impl FromRequest for $name {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &actix_web::HttpRequest, _payload: &mut Payload) -> Self::Future {
                let parsed = req
                    .match_info()
                    .get($param)
                    .and_then(|raw| raw.parse::<i64>().ok())
                    .filter(|id| *id > 0);

                ready(match parsed {
                    Some(id) => Ok($name(id)),
                    None => {
                        let response = HttpResponse::BadRequest().json(
                            $crate::models::ApiResponse::error_empty(
                                $crate::models::ErrorCode::BadRequest,
                                format!("无效的 {} 参数", $param),
                            ),
                        );
                        Err(InternalError::from_response("invalid path id", response).into())
                    }
                })
            }
        }
    };
}

define_safe_i64_extractor!(SafeIDI64, "id");
define_safe_i64_extractor!(SafeClassIdI64, "class_id");
define_safe_i64_extractor!(SafeCourseIdI64, "course_id");
define_safe_i64_extractor!(SafeGradeIdI64, "grade_id");
define_safe_i64_extractor!(SafeStudentIdI64, "student_id");

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_safe_id_accepts_positive() {
        let req = TestRequest::default()
            .param("id", "42")
            .to_http_request();
        let extracted = SafeIDI64::from_request(&req, &mut Payload::None).await;
        assert_eq!(extracted.map(|id| id.0).ok(), Some(42));
    }

    #[actix_web::test]
    async fn test_safe_id_rejects_garbage() {
        for raw in ["0", "-3", "abc", "9999999999999999999999"] {
            let req = TestRequest::default().param("id", raw).to_http_request();
            let extracted = SafeIDI64::from_request(&req, &mut Payload::None).await;
            assert!(extracted.is_err(), "expected rejection for {raw}");
        }
    }
}
