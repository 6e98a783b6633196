use std::sync::Arc;

use crate::models::{
    classes::{
        entities::{Class, ClassStudent},
        requests::{ClassListQuery, CreateClassRequest, UpdateClassRequest},
        responses::ClassListResponse,
    },
    courses::{
        entities::Course,
        requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest},
        responses::CourseListResponse,
    },
    grades::{
        entities::Grade,
        requests::{CreateGradeRequest, GradeListQuery, UpdateGradeRequest},
        responses::GradeListResponse,
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

/// 记录存储层统一接口
///
/// 作为显式依赖（`Arc<dyn Storage>`）通过 app data 传入各服务，
/// 测试时可用内存 mock 替换。
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（password 字段应已是哈希值）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 统计用户数量
    async fn count_users(&self) -> Result<u64>;

    /// 班级管理方法
    // 创建班级
    async fn create_class(&self, class: CreateClassRequest) -> Result<Class>;
    // 通过ID获取班级信息
    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>>;
    // 列出班级
    async fn list_classes_with_pagination(
        &self,
        query: ClassListQuery,
    ) -> Result<ClassListResponse>;
    // 更新班级信息
    async fn update_class(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>>;
    // 删除班级
    async fn delete_class(&self, class_id: i64) -> Result<bool>;

    /// 班级学生关联方法
    // 将学生加入班级
    async fn add_student_to_class(&self, class_id: i64, student_id: i64) -> Result<ClassStudent>;
    // 获取学生在班级中的关联记录
    async fn get_class_student(
        &self,
        class_id: i64,
        student_id: i64,
    ) -> Result<Option<ClassStudent>>;
    // 列出班级的全部学生
    async fn list_class_students(&self, class_id: i64) -> Result<Vec<User>>;
    // 统计班级学生数量
    async fn count_class_students(&self, class_id: i64) -> Result<u64>;

    /// 课程管理方法
    // 创建课程
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course>;
    // 通过ID获取课程信息
    async fn get_course_by_id(&self, course_id: i64) -> Result<Option<Course>>;
    // 列出课程
    async fn list_courses_with_pagination(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse>;
    // 列出班级下的全部课程（不分页，供统计选择器使用）
    async fn list_courses_by_class(&self, class_id: i64) -> Result<Vec<Course>>;
    // 更新课程信息
    async fn update_course(
        &self,
        course_id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>>;
    // 删除课程
    async fn delete_course(&self, course_id: i64) -> Result<bool>;

    /// 成绩管理方法
    // 创建成绩
    async fn create_grade(&self, grade: CreateGradeRequest) -> Result<Grade>;
    // 通过ID获取成绩信息
    async fn get_grade_by_id(&self, grade_id: i64) -> Result<Option<Grade>>;
    // 列出成绩
    async fn list_grades_with_pagination(
        &self,
        query: GradeListQuery,
    ) -> Result<GradeListResponse>;
    // 按课程ID集合取成绩（不分页，供统计选择器使用）
    async fn list_grades_by_course_ids(&self, course_ids: &[i64]) -> Result<Vec<Grade>>;
    // 按学生ID取成绩（不分页，供统计选择器使用）
    async fn list_grades_by_student(&self, student_id: i64) -> Result<Vec<Grade>>;
    // 更新成绩
    async fn update_grade(
        &self,
        grade_id: i64,
        update: UpdateGradeRequest,
    ) -> Result<Option<Grade>>;
    // 删除成绩
    async fn delete_grade(&self, grade_id: i64) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
