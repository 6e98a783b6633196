use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GradeService;
use crate::middlewares::RequireJWT;
use crate::models::grades::responses::GradeResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_grade(
    service: &GradeService,
    request: &HttpRequest,
    grade_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let caller = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user identity",
            )));
        }
    };

    match storage.get_grade_by_id(grade_id).await {
        Ok(Some(grade)) => {
            // 教授或成绩所属学生可见
            if !caller.role.is_professor() && caller.id != grade.student_id {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::Forbidden,
                    "You can only view your own grades",
                )));
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                GradeResponse { grade },
                "Grade retrieved successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::GradeNotFound,
            "Grade not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve grade: {e}"),
            )),
        ),
    }
}
