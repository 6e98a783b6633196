use super::SeaOrmStorage;
use crate::entity::courses::{ActiveModel, Column, Entity as Courses};
use crate::errors::{Result, SchoolIncError};
use crate::models::{
    PaginationInfo,
    courses::{
        entities::Course,
        requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest},
        responses::CourseListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建课程
    pub async fn create_course_impl(&self, req: CreateCourseRequest) -> Result<Course> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            class_id: Set(req.class_id),
            name: Set(req.name),
            description: Set(req.description),
            credits: Set(req.credits),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolIncError::database_operation(format!("创建课程失败: {e}")))?;

        Ok(result.into_course())
    }

    /// 通过 ID 获取课程
    pub async fn get_course_by_id_impl(&self, course_id: i64) -> Result<Option<Course>> {
        let result = Courses::find_by_id(course_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolIncError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 分页列出课程
    pub async fn list_courses_with_pagination_impl(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Courses::find();

        // 班级筛选
        if let Some(class_id) = query.class_id {
            select = select.filter(Column::ClassId.eq(class_id));
        }

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(Column::Name.contains(&escaped));
        }

        // 排序
        select = select.order_by_desc(Column::CreatedAt);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SchoolIncError::database_operation(format!("查询课程总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SchoolIncError::database_operation(format!("查询课程页数失败: {e}")))?;

        let courses = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SchoolIncError::database_operation(format!("查询课程列表失败: {e}")))?;

        Ok(CourseListResponse {
            items: courses.into_iter().map(|m| m.into_course()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 列出班级下的全部课程
    pub async fn list_courses_by_class_impl(&self, class_id: i64) -> Result<Vec<Course>> {
        let courses = Courses::find()
            .filter(Column::ClassId.eq(class_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                SchoolIncError::database_operation(format!("查询班级课程列表失败: {e}"))
            })?;

        Ok(courses.into_iter().map(|m| m.into_course()).collect())
    }

    /// 更新课程信息
    pub async fn update_course_impl(
        &self,
        course_id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        // 先检查课程是否存在
        let existing = self.get_course_by_id_impl(course_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(course_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        if let Some(credits) = update.credits {
            model.credits = Set(credits);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SchoolIncError::database_operation(format!("更新课程失败: {e}")))?;

        self.get_course_by_id_impl(course_id).await
    }

    /// 删除课程
    pub async fn delete_course_impl(&self, course_id: i64) -> Result<bool> {
        let result = Courses::delete_by_id(course_id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolIncError::database_operation(format!("删除课程失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
