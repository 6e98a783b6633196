//! 统计聚合协调
//!
//! 每个统计操作都是同一条流水线：解析范围（错误原样上抛）→ 按选择器
//! 取成绩 → 抽取分数 → 引擎计算 → 组装响应。无重试，首个失败的查询
//! 以其原有错误类型浮出。

use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StatsService;
use super::engine::compute_stats;
use super::scope::{GradeSelector, ResolvedScope, StatsScope, resolve_scope};
use crate::errors::{Result, SchoolIncError};
use crate::middlewares::RequireJWT;
use crate::models::stats::entities::GradeStats;
use crate::models::stats::responses::{
    ClassGradeStatsResponse, CourseGradeStatsResponse, StudentGradeStatsResponse,
};
use crate::models::users::entities::User;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

/// 按选择器取成绩并计算统计
pub async fn aggregate_stats(
    caller: Option<&User>,
    scope: StatsScope,
    storage: &Arc<dyn Storage>,
) -> Result<(ResolvedScope, GradeStats)> {
    let resolved = resolve_scope(caller, scope, storage).await?;

    let grades = match &resolved.selector {
        GradeSelector::ByCourseIds(course_ids) => {
            storage.list_grades_by_course_ids(course_ids).await?
        }
        GradeSelector::ByStudent(student_id) => {
            storage.list_grades_by_student(*student_id).await?
        }
    };

    let values: Vec<f64> = grades.iter().map(|g| g.value).collect();
    Ok((resolved, compute_stats(&values)))
}

/// 把解析/取数错误映射为响应，NotFound 的业务码由调用方按目标类型给定
fn error_response(err: SchoolIncError, not_found_code: ErrorCode) -> HttpResponse {
    match err {
        SchoolIncError::Authentication(msg) => HttpResponse::Unauthorized()
            .json(ApiResponse::error_empty(ErrorCode::Unauthorized, msg)),
        SchoolIncError::Authorization(msg) => {
            HttpResponse::Forbidden().json(ApiResponse::error_empty(ErrorCode::Forbidden, msg))
        }
        SchoolIncError::NotFound(msg) => {
            HttpResponse::NotFound().json(ApiResponse::error_empty(not_found_code, msg))
        }
        other => {
            tracing::error!("Statistics aggregation failed: {}", other);
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Statistics aggregation failed: {other}"),
            ))
        }
    }
}

pub async fn class_grade_stats(
    service: &StatsService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let caller = RequireJWT::extract_user_claims(request);

    match aggregate_stats(caller.as_ref(), StatsScope::Class(class_id), &storage).await {
        Ok((resolved, stats)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ClassGradeStatsResponse {
                class_id: resolved.target_id,
                class_name: resolved.target_name,
                stats,
            },
            "Class statistics computed successfully",
        ))),
        Err(e) => Ok(error_response(e, ErrorCode::ClassNotFound)),
    }
}

pub async fn course_grade_stats(
    service: &StatsService,
    request: &HttpRequest,
    course_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let caller = RequireJWT::extract_user_claims(request);

    match aggregate_stats(caller.as_ref(), StatsScope::Course(course_id), &storage).await {
        Ok((resolved, stats)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            CourseGradeStatsResponse {
                course_id: resolved.target_id,
                course_name: resolved.target_name,
                stats,
            },
            "Course statistics computed successfully",
        ))),
        Err(e) => Ok(error_response(e, ErrorCode::CourseNotFound)),
    }
}

pub async fn student_grade_stats(
    service: &StatsService,
    request: &HttpRequest,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let caller = RequireJWT::extract_user_claims(request);

    match aggregate_stats(caller.as_ref(), StatsScope::Student(student_id), &storage).await {
        Ok((resolved, stats)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            StudentGradeStatsResponse {
                student_id: resolved.target_id,
                student_name: resolved.target_name,
                stats,
            },
            "Student statistics computed successfully",
        ))),
        Err(e) => Ok(error_response(e, ErrorCode::UserNotFound)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::stats::test_support::{
        MockStorage, make_class, make_course, make_grade, make_professor, make_student,
    };

    fn storage_with_grades() -> Arc<dyn Storage> {
        let storage = MockStorage::new()
            .with_user(make_professor(1))
            .with_user(make_student(2))
            .with_user(make_student(3))
            .with_class(make_class(10, "Terminale A"))
            .with_course(make_course(100, 10, "Maths"))
            .with_course(make_course(101, 10, "Physique"))
            // 学生2：两门课各一条；学生3：只有数学
            .with_grade(make_grade(1000, 100, 2, 10.0))
            .with_grade(make_grade(1001, 100, 3, 15.0))
            .with_grade(make_grade(1002, 101, 2, 12.0))
            // 不属于该班级课程的成绩不应计入班级统计
            .with_course(make_course(200, 20, "Histoire"))
            .with_grade(make_grade(1003, 200, 2, 8.0));
        Arc::new(storage)
    }

    #[tokio::test]
    async fn test_class_aggregation_spans_all_class_courses() {
        let storage = storage_with_grades();
        let professor = make_professor(1);

        let (resolved, stats) =
            aggregate_stats(Some(&professor), StatsScope::Class(10), &storage)
                .await
                .unwrap();
        assert_eq!(resolved.target_name, "Terminale A");
        // 三条班内成绩：10, 15, 12；课程200的成绩被排除
        assert_eq!(stats.count, 3);
        assert_eq!(stats.lowest, Some(10.0));
        assert_eq!(stats.highest, Some(15.0));
        assert_eq!(stats.median, Some(12.0));
    }

    #[tokio::test]
    async fn test_course_aggregation() {
        let storage = storage_with_grades();
        let professor = make_professor(1);

        let (_, stats) = aggregate_stats(Some(&professor), StatsScope::Course(100), &storage)
            .await
            .unwrap();
        assert_eq!(stats.count, 2);
        assert_eq!(stats.average, Some(12.5));
    }

    #[tokio::test]
    async fn test_student_aggregation_crosses_courses() {
        let storage = storage_with_grades();
        let student = make_student(2);

        let (resolved, stats) = aggregate_stats(Some(&student), StatsScope::Student(2), &storage)
            .await
            .unwrap();
        assert_eq!(resolved.target_name, "student2");
        // 学生2的全部成绩：10, 12, 8
        assert_eq!(stats.count, 3);
        assert_eq!(stats.median, Some(10.0));
    }

    #[tokio::test]
    async fn test_empty_scope_yields_empty_stats() {
        let storage: Arc<dyn Storage> = Arc::new(
            MockStorage::new()
                .with_user(make_professor(1))
                .with_class(make_class(10, "Nouvelle")),
        );
        let professor = make_professor(1);

        let (_, stats) = aggregate_stats(Some(&professor), StatsScope::Class(10), &storage)
            .await
            .unwrap();
        assert_eq!(stats.count, 0);
        assert_eq!(stats.average, None);
    }

    #[tokio::test]
    async fn test_missing_target_fails_before_stats() {
        let storage = storage_with_grades();
        let professor = make_professor(1);

        let err = aggregate_stats(Some(&professor), StatsScope::Student(999), &storage)
            .await
            .unwrap_err();
        assert!(matches!(err, SchoolIncError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_errors_propagate_unchanged() {
        let storage = storage_with_grades();
        let student = make_student(2);

        let err = aggregate_stats(Some(&student), StatsScope::Class(10), &storage)
            .await
            .unwrap_err();
        assert!(matches!(err, SchoolIncError::Authorization(_)));

        let err = aggregate_stats(None, StatsScope::Student(2), &storage)
            .await
            .unwrap_err();
        assert!(matches!(err, SchoolIncError::Authentication(_)));
    }
}
