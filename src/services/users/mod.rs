pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::users::requests::{UpdateUserRequest, UserListParams};
use crate::storage::Storage;

pub struct UserService {
    storage: Option<Arc<dyn Storage>>,
}

impl UserService {
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

    // 获取用户列表（教授）
    pub async fn list_users(
        &self,
        request: &HttpRequest,
        query: UserListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_users(self, request, query).await
    }

    // 获取用户信息（教授或本人）
    pub async fn get_user(&self, request: &HttpRequest, user_id: i64) -> ActixResult<HttpResponse> {
        get::get_user(self, request, user_id).await
    }

    // 更新用户信息（仅本人）
    pub async fn update_user(
        &self,
        request: &HttpRequest,
        user_id: i64,
        update_data: UpdateUserRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_user(self, request, user_id, update_data).await
    }

    // 删除用户（仅本人）
    pub async fn delete_user(
        &self,
        request: &HttpRequest,
        user_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_user(self, request, user_id).await
    }
}
