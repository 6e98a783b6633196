use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::classes::requests::{
    AddStudentRequest, ClassQueryParams, CreateClassRequest, UpdateClassRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::ClassService;
use crate::utils::SafeClassIdI64;

// 懒加载的全局 ClassService 实例
static CLASS_SERVICE: Lazy<ClassService> = Lazy::new(ClassService::new_lazy);

// HTTP处理程序
pub async fn list_classes(
    req: HttpRequest,
    query: web::Query<ClassQueryParams>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.list_classes(&req, query.into_inner()).await
}

pub async fn create_class(
    req: HttpRequest,
    class_data: web::Json<CreateClassRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .create_class(&req, class_data.into_inner())
        .await
}

pub async fn get_class(req: HttpRequest, class_id: SafeClassIdI64) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.get_class(&req, class_id.0).await
}

pub async fn update_class(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    update_data: web::Json<UpdateClassRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .update_class(&req, class_id.0, update_data.into_inner())
        .await
}

pub async fn delete_class(req: HttpRequest, class_id: SafeClassIdI64) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.delete_class(&req, class_id.0).await
}

pub async fn add_student(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    add_data: web::Json<AddStudentRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .add_student(&req, class_id.0, add_data.into_inner().student_id)
        .await
}

pub async fn list_students(
    req: HttpRequest,
    class_id: SafeClassIdI64,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.list_students(&req, class_id.0).await
}

// 班级成员路由，需在班级路由之前注册
pub fn configure_class_students_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/classes/{class_id}/students")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(
                        web::post()
                            .to(add_student)
                            // 添加班级成员需教授权限
                            .wrap(middlewares::RequireRole::new_any(UserRole::professor_roles())),
                    )
                    .route(web::get().to(list_students)),
            ),
    );
}

// 配置路由
pub fn configure_classes_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/classes")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_classes))
                    .route(
                        web::post()
                            .to(create_class)
                            .wrap(middlewares::RequireRole::new_any(UserRole::professor_roles())),
                    ),
            )
            .service(
                web::resource("/{class_id}")
                    .route(web::get().to(get_class))
                    .route(
                        web::put()
                            .to(update_class)
                            .wrap(middlewares::RequireRole::new_any(UserRole::professor_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_class)
                            .wrap(middlewares::RequireRole::new_any(UserRole::professor_roles())),
                    ),
            ),
    );
}
