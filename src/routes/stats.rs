use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::services::StatsService;
use crate::utils::{SafeClassIdI64, SafeCourseIdI64, SafeStudentIdI64};

// 懒加载的全局 StatsService 实例
static STATS_SERVICE: Lazy<StatsService> = Lazy::new(StatsService::new_lazy);

// HTTP处理程序
pub async fn class_stats(req: HttpRequest, class_id: SafeClassIdI64) -> ActixResult<HttpResponse> {
    STATS_SERVICE.class_stats(&req, class_id.0).await
}

pub async fn course_stats(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
) -> ActixResult<HttpResponse> {
    STATS_SERVICE.course_stats(&req, course_id.0).await
}

pub async fn student_stats(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    STATS_SERVICE.student_stats(&req, student_id.0).await
}

// 配置路由
//
// 角色与目标存在性检查统一由范围解析器完成，这里只要求已认证。
pub fn configure_stats_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/stats")
            .wrap(middlewares::RequireJWT)
            .route("/classes/{class_id}", web::get().to(class_stats))
            .route("/courses/{course_id}", web::get().to(course_stats))
            .route("/students/{student_id}", web::get().to(student_stats)),
    );
}
