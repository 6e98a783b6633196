use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::grades::requests::{CreateGradeRequest, GradeQueryParams, UpdateGradeRequest};
use crate::models::users::entities::UserRole;
use crate::services::GradeService;
use crate::utils::{SafeGradeIdI64, SafeStudentIdI64};

// 懒加载的全局 GradeService 实例
static GRADE_SERVICE: Lazy<GradeService> = Lazy::new(GradeService::new_lazy);

// HTTP处理程序
pub async fn list_my_grades(
    req: HttpRequest,
    query: web::Query<GradeQueryParams>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.list_my_grades(&req, query.into_inner()).await
}

pub async fn list_student_grades(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
    query: web::Query<GradeQueryParams>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE
        .list_student_grades(&req, student_id.0, query.into_inner())
        .await
}

pub async fn get_grade(req: HttpRequest, grade_id: SafeGradeIdI64) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.get_grade(&req, grade_id.0).await
}

pub async fn create_grade(
    req: HttpRequest,
    grade_data: web::Json<CreateGradeRequest>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE
        .create_grade(&req, grade_data.into_inner())
        .await
}

pub async fn update_grade(
    req: HttpRequest,
    grade_id: SafeGradeIdI64,
    update_data: web::Json<UpdateGradeRequest>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE
        .update_grade(&req, grade_id.0, update_data.into_inner())
        .await
}

pub async fn delete_grade(req: HttpRequest, grade_id: SafeGradeIdI64) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.delete_grade(&req, grade_id.0).await
}

// 配置路由
pub fn configure_grades_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/grades")
            .wrap(middlewares::RequireJWT)
            .route("/mine", web::get().to(list_my_grades))
            // 教授或本人的判定在服务层
            .route("/students/{student_id}", web::get().to(list_student_grades))
            .service(
                web::resource("").route(
                    web::post()
                        .to(create_grade)
                        .wrap(middlewares::RequireRole::new_any(UserRole::professor_roles())),
                ),
            )
            .service(
                web::resource("/{grade_id}")
                    .route(web::get().to(get_grade))
                    .route(
                        web::put()
                            .to(update_grade)
                            .wrap(middlewares::RequireRole::new_any(UserRole::professor_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_grade)
                            .wrap(middlewares::RequireRole::new_any(UserRole::professor_roles())),
                    ),
            ),
    );
}
