use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ClassService;
use crate::models::classes::responses::ClassStudentListResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn add_student(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 1. 班级必须存在
    match storage.get_class_by_id(class_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ClassNotFound,
                "Class not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve class: {e}"),
                )),
            );
        }
    }

    // 2. 目标用户必须存在且是学生
    match storage.get_user_by_id(student_id).await {
        Ok(Some(user)) => {
            if !user.role.is_student() {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::TargetNotStudent,
                    "Target user is not a student",
                )));
            }
        }
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

    // 3. 不允许重复加入
    match storage.get_class_student(class_id, student_id).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::StudentAlreadyInClass,
                "Student is already in this class",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to check class membership: {e}"),
                )),
            );
        }
    }

    match storage.add_student_to_class(class_id, student_id).await {
        Ok(class_student) => {
            info!("Student {} joined class {}", student_id, class_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                class_student,
                "Student added to class successfully",
            )))
        }
        Err(e) => {
            error!("Failed to add student to class: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to add student to class: {e}"),
                )),
            )
        }
    }
}

pub async fn list_students(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 班级必须存在
    match storage.get_class_by_id(class_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ClassNotFound,
                "Class not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve class: {e}"),
                )),
            );
        }
    }

    match storage.list_class_students(class_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ClassStudentListResponse { items },
            "Class students retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve class students: {e}"),
            )),
        ),
    }
}
