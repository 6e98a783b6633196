use super::SeaOrmStorage;
use crate::entity::classes::{ActiveModel, Column, Entity as Classes};
use crate::errors::{Result, SchoolIncError};
use crate::models::{
    PaginationInfo,
    classes::{
        entities::{Class, ClassSortBy},
        requests::{ClassListQuery, CreateClassRequest, UpdateClassRequest},
        responses::ClassListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建班级
    pub async fn create_class_impl(&self, req: CreateClassRequest) -> Result<Class> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            description: Set(req.description),
            year: Set(req.year),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolIncError::database_operation(format!("创建班级失败: {e}")))?;

        Ok(result.into_class())
    }

    /// 通过 ID 获取班级
    pub async fn get_class_by_id_impl(&self, class_id: i64) -> Result<Option<Class>> {
        let result = Classes::find_by_id(class_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolIncError::database_operation(format!("查询班级失败: {e}")))?;

        Ok(result.map(|m| m.into_class()))
    }

    /// 分页列出班级
    pub async fn list_classes_with_pagination_impl(
        &self,
        query: ClassListQuery,
    ) -> Result<ClassListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Classes::find();

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(Column::Name.contains(&escaped));
        }

        // 排序，默认按创建时间倒序
        select = match query.sort_by {
            Some(ClassSortBy::Name) => select.order_by_asc(Column::Name),
            Some(ClassSortBy::Year) => select.order_by_asc(Column::Year),
            None => select.order_by_desc(Column::CreatedAt),
        };

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SchoolIncError::database_operation(format!("查询班级总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SchoolIncError::database_operation(format!("查询班级页数失败: {e}")))?;

        let classes = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SchoolIncError::database_operation(format!("查询班级列表失败: {e}")))?;

        Ok(ClassListResponse {
            items: classes.into_iter().map(|m| m.into_class()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新班级信息
    pub async fn update_class_impl(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>> {
        // 先检查班级是否存在
        let existing = self.get_class_by_id_impl(class_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(class_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        if let Some(year) = update.year {
            model.year = Set(year);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SchoolIncError::database_operation(format!("更新班级失败: {e}")))?;

        self.get_class_by_id_impl(class_id).await
    }

    /// 删除班级
    pub async fn delete_class_impl(&self, class_id: i64) -> Result<bool> {
        let result = Classes::delete_by_id(class_id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolIncError::database_operation(format!("删除班级失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
