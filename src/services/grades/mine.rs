use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GradeService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    grades::requests::{GradeListQuery, GradeQueryParams},
};

pub async fn list_my_grades(
    service: &GradeService,
    request: &HttpRequest,
    query: GradeQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let uid = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user id",
            )));
        }
    };

    let list_query = GradeListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        student_id: Some(uid),
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
