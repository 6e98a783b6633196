pub mod by_student;
pub mod create;
pub mod delete;
pub mod get;
pub mod mine;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::grades::requests::{CreateGradeRequest, GradeQueryParams, UpdateGradeRequest};
use crate::storage::Storage;

pub struct GradeService {
    storage: Option<Arc<dyn Storage>>,
}

impl GradeService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 获取自己的成绩列表
    pub async fn list_my_grades(
        &self,
        request: &HttpRequest,
        query: GradeQueryParams,
    ) -> ActixResult<HttpResponse> {
        mine::list_my_grades(self, request, query).await
    }

    // 获取指定学生的成绩列表（教授或本人）
    pub async fn list_student_grades(
        &self,
        request: &HttpRequest,
        student_id: i64,
        query: GradeQueryParams,
    ) -> ActixResult<HttpResponse> {
        by_student::list_student_grades(self, request, student_id, query).await
    }

    // 获取单条成绩（教授或成绩所属学生）
    pub async fn get_grade(
        &self,
        request: &HttpRequest,
        grade_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_grade(self, request, grade_id).await
    }

    // 创建成绩（教授）
    pub async fn create_grade(
        &self,
        request: &HttpRequest,
        grade_data: CreateGradeRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_grade(self, request, grade_data).await
    }

    // 更新成绩（教授）
    pub async fn update_grade(
        &self,
        request: &HttpRequest,
        grade_id: i64,
        update_data: UpdateGradeRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_grade(self, request, grade_id, update_data).await
    }

    // 删除成绩（教授）
    pub async fn delete_grade(
        &self,
        request: &HttpRequest,
        grade_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_grade(self, request, grade_id).await
    }
}
