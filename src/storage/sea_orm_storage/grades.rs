use super::SeaOrmStorage;
use crate::entity::grades::{ActiveModel, Column, Entity as Grades};
use crate::errors::{Result, SchoolIncError};
use crate::models::{
    PaginationInfo,
    grades::{
        entities::Grade,
        requests::{CreateGradeRequest, GradeListQuery, UpdateGradeRequest},
        responses::GradeListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建成绩（date 缺省时使用当前时间）
    pub async fn create_grade_impl(&self, req: CreateGradeRequest) -> Result<Grade> {
        let now = chrono::Utc::now().timestamp();
        let date = req.date.map(|d| d.timestamp()).unwrap_or(now);

        let model = ActiveModel {
            course_id: Set(req.course_id),
            student_id: Set(req.student_id),
            value: Set(req.value),
            comment: Set(req.comment),
            date: Set(date),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolIncError::database_operation(format!("创建成绩失败: {e}")))?;

        Ok(result.into_grade())
    }

    /// 通过 ID 获取成绩
    pub async fn get_grade_by_id_impl(&self, grade_id: i64) -> Result<Option<Grade>> {
        let result = Grades::find_by_id(grade_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolIncError::database_operation(format!("查询成绩失败: {e}")))?;

        Ok(result.map(|m| m.into_grade()))
    }

    /// 分页列出成绩
    pub async fn list_grades_with_pagination_impl(
        &self,
        query: GradeListQuery,
    ) -> Result<GradeListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Grades::find();

        // 学生筛选
        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        // 课程集合筛选
        if let Some(ref course_ids) = query.course_ids
            && !course_ids.is_empty()
        {
            select = select.filter(Column::CourseId.is_in(course_ids.iter().copied()));
        }

        // 排序，评分日期倒序
        select = select.order_by_desc(Column::Date);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SchoolIncError::database_operation(format!("查询成绩总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SchoolIncError::database_operation(format!("查询成绩页数失败: {e}")))?;

        let grades = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SchoolIncError::database_operation(format!("查询成绩列表失败: {e}")))?;

        Ok(GradeListResponse {
            items: grades.into_iter().map(|m| m.into_grade()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 按课程 ID 集合取全部成绩
    pub async fn list_grades_by_course_ids_impl(&self, course_ids: &[i64]) -> Result<Vec<Grade>> {
        if course_ids.is_empty() {
            return Ok(Vec::new());
        }

        let grades = Grades::find()
            .filter(Column::CourseId.is_in(course_ids.iter().copied()))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolIncError::database_operation(format!("查询课程成绩失败: {e}")))?;

        Ok(grades.into_iter().map(|m| m.into_grade()).collect())
    }

    /// 按学生 ID 取全部成绩
    pub async fn list_grades_by_student_impl(&self, student_id: i64) -> Result<Vec<Grade>> {
        let grades = Grades::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolIncError::database_operation(format!("查询学生成绩失败: {e}")))?;

        Ok(grades.into_iter().map(|m| m.into_grade()).collect())
    }

    /// 更新成绩
    pub async fn update_grade_impl(
        &self,
        grade_id: i64,
        update: UpdateGradeRequest,
    ) -> Result<Option<Grade>> {
        // 先检查成绩是否存在
        let existing = self.get_grade_by_id_impl(grade_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(grade_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(value) = update.value {
            model.value = Set(value);
        }

        if let Some(comment) = update.comment {
            model.comment = Set(Some(comment));
        }

        if let Some(date) = update.date {
            model.date = Set(date.timestamp());
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SchoolIncError::database_operation(format!("更新成绩失败: {e}")))?;

        self.get_grade_by_id_impl(grade_id).await
    }

    /// 删除成绩
    pub async fn delete_grade_impl(&self, grade_id: i64) -> Result<bool> {
        let result = Grades::delete_by_id(grade_id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolIncError::database_operation(format!("删除成绩失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
