use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::GradeService;
use crate::models::grades::requests::CreateGradeRequest;
use crate::models::grades::responses::GradeResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_grade_value;

pub async fn create_grade(
    service: &GradeService,
    request: &HttpRequest,
    grade_data: CreateGradeRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 1. 分数范围校验
    if let Err(msg) = validate_grade_value(grade_data.value) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::GradeValueInvalid, msg)));
    }

    // 2. 课程必须存在
    match storage.get_course_by_id(grade_data.course_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseNotFound,
                "Course not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve course: {e}"),
                )),
            );
        }
    }

    // 3. 目标用户必须存在且是学生
    match storage.get_user_by_id(grade_data.student_id).await {
        Ok(Some(user)) => {
            if !user.role.is_student() {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::TargetNotStudent,
                    "Grades can only be assigned to students",
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

    match storage.create_grade(grade_data).await {
        Ok(grade) => {
            info!(
                "Grade {} created for student {} in course {}",
                grade.id, grade.student_id, grade.course_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                GradeResponse { grade },
                "Grade created successfully",
            )))
        }
        Err(e) => {
            error!("Grade creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::GradeCreationFailed,
                    format!("Grade creation failed: {e}"),
                )),
            )
        }
    }
}
