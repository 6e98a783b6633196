pub mod aggregate;
pub mod engine;
pub mod scope;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub struct StatsService {
    storage: Option<Arc<dyn Storage>>,
}

impl StatsService {
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

    // 班级成绩统计（教授）
    pub async fn class_stats(
        &self,
        request: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        aggregate::class_grade_stats(self, request, class_id).await
    }

    // 课程成绩统计（教授）
    pub async fn course_stats(
        &self,
        request: &HttpRequest,
        course_id: i64,
    ) -> ActixResult<HttpResponse> {
        aggregate::course_grade_stats(self, request, course_id).await
    }

    // 学生成绩统计（教授或本人）
    pub async fn student_stats(
        &self,
        request: &HttpRequest,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        aggregate::student_grade_stats(self, request, student_id).await
    }
}

/// 内存 mock 存储与数据构造器，供统计相关测试共用
#[cfg(test)]
pub(crate) mod test_support {
    use chrono::{TimeZone, Utc};

    use crate::errors::Result;
    use crate::models::classes::entities::{Class, ClassStudent};
    use crate::models::classes::requests::{ClassListQuery, CreateClassRequest, UpdateClassRequest};
    use crate::models::classes::responses::ClassListResponse;
    use crate::models::courses::entities::Course;
    use crate::models::courses::requests::{
        CourseListQuery, CreateCourseRequest, UpdateCourseRequest,
    };
    use crate::models::courses::responses::CourseListResponse;
    use crate::models::grades::entities::Grade;
    use crate::models::grades::requests::{CreateGradeRequest, GradeListQuery, UpdateGradeRequest};
    use crate::models::grades::responses::GradeListResponse;
    use crate::models::users::entities::{User, UserRole};
    use crate::models::users::requests::{CreateUserRequest, UpdateUserRequest, UserListQuery};
    use crate::models::users::responses::UserListResponse;
    use crate::storage::Storage;

    fn fixed_time() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 1, 8, 0, 0).unwrap()
    }

    pub fn make_professor(id: i64) -> User {
        User {
            id,
            email: format!("prof{id}@school.test"),
            pseudo: format!("prof{id}"),
            password_hash: String::new(),
            role: UserRole::Professor,
            created_at: fixed_time(),
            updated_at: fixed_time(),
        }
    }

    pub fn make_student(id: i64) -> User {
        User {
            id,
            email: format!("student{id}@school.test"),
            pseudo: format!("student{id}"),
            password_hash: String::new(),
            role: UserRole::Student,
            created_at: fixed_time(),
            updated_at: fixed_time(),
        }
    }

    pub fn make_class(id: i64, name: &str) -> Class {
        Class {
            id,
            name: name.to_string(),
            description: None,
            year: 2025,
            created_at: fixed_time(),
            updated_at: fixed_time(),
        }
    }

    pub fn make_course(id: i64, class_id: i64, name: &str) -> Course {
        Course {
            id,
            class_id,
            name: name.to_string(),
            description: None,
            credits: 3,
            created_at: fixed_time(),
            updated_at: fixed_time(),
        }
    }

    pub fn make_grade(id: i64, course_id: i64, student_id: i64, value: f64) -> Grade {
        Grade {
            id,
            course_id,
            student_id,
            value,
            comment: None,
            date: fixed_time(),
            created_at: fixed_time(),
            updated_at: fixed_time(),
        }
    }

    /// 只实现统计路径用到的只读方法，其余方法不应被触及
    #[derive(Default)]
    pub struct MockStorage {
        users: Vec<User>,
        classes: Vec<Class>,
        courses: Vec<Course>,
        grades: Vec<Grade>,
    }

    impl MockStorage {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_user(mut self, user: User) -> Self {
            self.users.push(user);
            self
        }

        pub fn with_class(mut self, class: Class) -> Self {
            self.classes.push(class);
            self
        }

        pub fn with_course(mut self, course: Course) -> Self {
            self.courses.push(course);
            self
        }

        pub fn with_grade(mut self, grade: Grade) -> Self {
            self.grades.push(grade);
            self
        }
    }

    #[async_trait::async_trait]
    impl Storage for MockStorage {
        async fn create_user(&self, _user: CreateUserRequest) -> Result<User> {
            unimplemented!()
        }
        async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
            Ok(self.users.iter().find(|u| u.id == id).cloned())
        }
        async fn get_user_by_email(&self, _email: &str) -> Result<Option<User>> {
            unimplemented!()
        }
        async fn list_users_with_pagination(
            &self,
            _query: UserListQuery,
        ) -> Result<UserListResponse> {
            unimplemented!()
        }
        async fn update_user(&self, _id: i64, _update: UpdateUserRequest) -> Result<Option<User>> {
            unimplemented!()
        }
        async fn delete_user(&self, _id: i64) -> Result<bool> {
            unimplemented!()
        }
        async fn count_users(&self) -> Result<u64> {
            unimplemented!()
        }

        async fn create_class(&self, _class: CreateClassRequest) -> Result<Class> {
            unimplemented!()
        }
        async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>> {
            Ok(self.classes.iter().find(|c| c.id == class_id).cloned())
        }
        async fn list_classes_with_pagination(
            &self,
            _query: ClassListQuery,
        ) -> Result<ClassListResponse> {
            unimplemented!()
        }
        async fn update_class(
            &self,
            _class_id: i64,
            _update: UpdateClassRequest,
        ) -> Result<Option<Class>> {
            unimplemented!()
        }
        async fn delete_class(&self, _class_id: i64) -> Result<bool> {
            unimplemented!()
        }

        async fn add_student_to_class(
            &self,
            _class_id: i64,
            _student_id: i64,
        ) -> Result<ClassStudent> {
            unimplemented!()
        }
        async fn get_class_student(
            &self,
            _class_id: i64,
            _student_id: i64,
        ) -> Result<Option<ClassStudent>> {
            unimplemented!()
        }
        async fn list_class_students(&self, _class_id: i64) -> Result<Vec<User>> {
            unimplemented!()
        }
        async fn count_class_students(&self, _class_id: i64) -> Result<u64> {
            unimplemented!()
        }

        async fn create_course(&self, _course: CreateCourseRequest) -> Result<Course> {
            unimplemented!()
        }
        async fn get_course_by_id(&self, course_id: i64) -> Result<Option<Course>> {
            Ok(self.courses.iter().find(|c| c.id == course_id).cloned())
        }
        async fn list_courses_with_pagination(
            &self,
            _query: CourseListQuery,
        ) -> Result<CourseListResponse> {
            unimplemented!()
        }
        async fn list_courses_by_class(&self, class_id: i64) -> Result<Vec<Course>> {
            Ok(self
                .courses
                .iter()
                .filter(|c| c.class_id == class_id)
                .cloned()
                .collect())
        }
        async fn update_course(
            &self,
            _course_id: i64,
            _update: UpdateCourseRequest,
        ) -> Result<Option<Course>> {
            unimplemented!()
        }
        async fn delete_course(&self, _course_id: i64) -> Result<bool> {
            unimplemented!()
        }

        async fn create_grade(&self, _grade: CreateGradeRequest) -> Result<Grade> {
            unimplemented!()
        }
        async fn get_grade_by_id(&self, _grade_id: i64) -> Result<Option<Grade>> {
            unimplemented!()
        }
        async fn list_grades_with_pagination(
            &self,
            _query: GradeListQuery,
        ) -> Result<GradeListResponse> {
            unimplemented!()
        }
        async fn list_grades_by_course_ids(&self, course_ids: &[i64]) -> Result<Vec<Grade>> {
            Ok(self
                .grades
                .iter()
                .filter(|g| course_ids.contains(&g.course_id))
                .cloned()
                .collect())
        }
        async fn list_grades_by_student(&self, student_id: i64) -> Result<Vec<Grade>> {
            Ok(self
                .grades
                .iter()
                .filter(|g| g.student_id == student_id)
                .cloned()
                .collect())
        }
        async fn update_grade(
            &self,
            _grade_id: i64,
            _update: UpdateGradeRequest,
        ) -> Result<Option<Grade>> {
            unimplemented!()
        }
        async fn delete_grade(&self, _grade_id: i64) -> Result<bool> {
            unimplemented!()
        }
    }
}
