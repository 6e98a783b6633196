use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GradeService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    grades::requests::{GradeListQuery, GradeQueryParams},
};

pub async fn list_student_grades(
    service: &GradeService,
    request: &HttpRequest,
    student_id: i64,
    query: GradeQueryParams,
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

    // 教授可查任意学生，学生只能查自己
    if !caller.role.is_professor() && caller.id != student_id {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "You can only view your own grades",
        )));
    }

    // 目标学生必须存在
    match storage.get_user_by_id(student_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "User not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve user: {e}"),
                )),
            );
        }
    }

    let list_query = GradeListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        student_id: Some(student_id),
        course_ids: query.parse_course_ids(),
    };

    match storage.list_grades_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Grade list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve grade list: {e}"),
            )),
        ),
    }
}
