use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseService;
use crate::models::{
    ApiResponse, ErrorCode,
    courses::requests::{CourseListQuery, CourseQueryParams},
};

pub async fn list_courses(
    service: &CourseService,
    request: &HttpRequest,
    query: CourseQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let list_query = CourseListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        class_id: query.class_id,
        search: query.search,
    };

    match storage.list_courses_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Course list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve course list: {e}"),
            )),
        ),
    }
}
