pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod students;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::classes::requests::{ClassQueryParams, CreateClassRequest, UpdateClassRequest};
use crate::storage::Storage;

pub struct ClassService {
    storage: Option<Arc<dyn Storage>>,
}

impl ClassService {
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

    // 获取班级列表
    pub async fn list_classes(
        &self,
        request: &HttpRequest,
        query: ClassQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_classes(self, request, query).await
    }

    // 创建班级（教授）
    pub async fn create_class(
        &self,
        request: &HttpRequest,
        class_data: CreateClassRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_class(self, request, class_data).await
    }

    // 获取班级详情（含课程列表）
    pub async fn get_class(
        &self,
        request: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_class(self, request, class_id).await
    }

    // 更新班级信息（教授）
    pub async fn update_class(
        &self,
        request: &HttpRequest,
        class_id: i64,
        update_data: UpdateClassRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_class(self, request, class_id, update_data).await
    }

    // 删除班级（教授，班级必须为空）
    pub async fn delete_class(
        &self,
        request: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_class(self, request, class_id).await
    }

    // 将学生加入班级（教授）
    pub async fn add_student(
        &self,
        request: &HttpRequest,
        class_id: i64,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        students::add_student(self, request, class_id, student_id).await
    }

    // 获取班级学生列表
    pub async fn list_students(
        &self,
        request: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        students::list_students(self, request, class_id).await
    }
}
