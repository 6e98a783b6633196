use super::SeaOrmStorage;
use crate::entity::class_students::{ActiveModel, Column, Entity as ClassStudents};
use crate::entity::users::Entity as Users;
use crate::errors::{Result, SchoolIncError};
use crate::models::{classes::entities::ClassStudent, users::entities::User};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 将学生加入班级
    pub async fn add_student_to_class_impl(
        &self,
        class_id: i64,
        student_id: i64,
    ) -> Result<ClassStudent> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            class_id: Set(class_id),
            student_id: Set(student_id),
            joined_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolIncError::database_operation(format!("学生加入班级失败: {e}")))?;

        Ok(result.into_class_student())
    }

    /// 获取学生在班级中的关联记录
    pub async fn get_class_student_impl(
        &self,
        class_id: i64,
        student_id: i64,
    ) -> Result<Option<ClassStudent>> {
        let result = ClassStudents::find()
            .filter(Column::ClassId.eq(class_id))
            .filter(Column::StudentId.eq(student_id))
            .one(&self.db)
            .await
            .map_err(|e| SchoolIncError::database_operation(format!("查询班级学生失败: {e}")))?;

        Ok(result.map(|m| m.into_class_student()))
    }

    /// 列出班级的全部学生
    pub async fn list_class_students_impl(&self, class_id: i64) -> Result<Vec<User>> {
        let rows = ClassStudents::find()
            .filter(Column::ClassId.eq(class_id))
            .order_by_asc(Column::JoinedAt)
            .find_also_related(Users)
            .all(&self.db)
            .await
            .map_err(|e| {
                SchoolIncError::database_operation(format!("查询班级学生列表失败: {e}"))
            })?;

        Ok(rows
            .into_iter()
            .filter_map(|(_, user)| user.map(|u| u.into_user()))
            .collect())
    }

    /// 统计班级学生数量
    pub async fn count_class_students_impl(&self, class_id: i64) -> Result<u64> {
        let count = ClassStudents::find()
            .filter(Column::ClassId.eq(class_id))
            .count(&self.db)
            .await
            .map_err(|e| {
                SchoolIncError::database_operation(format!("统计班级学生数量失败: {e}"))
            })?;

        Ok(count)
    }
}
