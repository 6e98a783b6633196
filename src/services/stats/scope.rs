//! 统计访问范围解析
//!
//! 三种统计目标共用同一个解析入口，按 认证 → 角色 → 存在性 的顺序检查，
//! 成功时返回成绩选择器与目标展示名。只读，唯一的存储访问是存在性查询。

use std::sync::Arc;

use crate::errors::{Result, SchoolIncError};
use crate::models::users::entities::User;
use crate::storage::Storage;

/// 统计目标
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatsScope {
    Class(i64),
    Course(i64),
    Student(i64),
}

/// 成绩选择器
///
/// 班级范围先解析课程ID集合（两步选择，避免逐课程查询），
/// 课程范围是单元素集合，学生范围按学生ID取数。
#[derive(Debug, Clone, PartialEq)]
pub enum GradeSelector {
    ByCourseIds(Vec<i64>),
    ByStudent(i64),
}

/// 解析结果：目标、展示名与取数方式
#[derive(Debug, Clone)]
pub struct ResolvedScope {
    pub target_id: i64,
    pub target_name: String,
    pub selector: GradeSelector,
}

/// 解析统计范围
///
/// - 无调用者身份 → 认证错误，先于任何角色或存在性检查
/// - `Class`/`Course` 仅教授可用；`Student` 教授或学生本人可用
/// - 角色检查通过后才查存在性，目标缺失 → NotFound
pub async fn resolve_scope(
    caller: Option<&User>,
    scope: StatsScope,
    storage: &Arc<dyn Storage>,
) -> Result<ResolvedScope> {
    let caller =
        caller.ok_or_else(|| SchoolIncError::authentication("Missing caller identity"))?;

    match scope {
        StatsScope::Class(class_id) => {
            if !caller.role.is_professor() {
                return Err(SchoolIncError::authorization(
                    "Only professors may view class statistics",
                ));
            }
            let class = storage
                .get_class_by_id(class_id)
                .await?
                .ok_or_else(|| SchoolIncError::not_found(format!("Class {class_id} not found")))?;

            let courses = storage.list_courses_by_class(class_id).await?;
            let course_ids = courses.into_iter().map(|c| c.id).collect();

            Ok(ResolvedScope {
                target_id: class_id,
                target_name: class.name,
                selector: GradeSelector::ByCourseIds(course_ids),
            })
        }
        StatsScope::Course(course_id) => {
            if !caller.role.is_professor() {
                return Err(SchoolIncError::authorization(
                    "Only professors may view course statistics",
                ));
            }
            let course = storage
                .get_course_by_id(course_id)
                .await?
                .ok_or_else(|| {
                    SchoolIncError::not_found(format!("Course {course_id} not found"))
                })?;

            Ok(ResolvedScope {
                target_id: course_id,
                target_name: course.name,
                selector: GradeSelector::ByCourseIds(vec![course_id]),
            })
        }
        StatsScope::Student(student_id) => {
            if !caller.role.is_professor() && caller.id != student_id {
                return Err(SchoolIncError::authorization(
                    "Students may only view their own statistics",
                ));
            }
            let student = storage
                .get_user_by_id(student_id)
                .await?
                .ok_or_else(|| {
                    SchoolIncError::not_found(format!("Student {student_id} not found"))
                })?;

            Ok(ResolvedScope {
                target_id: student_id,
                target_name: student.pseudo,
                selector: GradeSelector::ByStudent(student_id),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::stats::test_support::{
        MockStorage, make_class, make_course, make_professor, make_student,
    };

    fn storage_with_fixtures() -> Arc<dyn Storage> {
        let storage = MockStorage::new()
            .with_user(make_professor(1))
            .with_user(make_student(2))
            .with_user(make_student(3))
            .with_class(make_class(10, "Terminale A"))
            .with_course(make_course(100, 10, "Maths"))
            .with_course(make_course(101, 10, "Physique"));
        Arc::new(storage)
    }

    #[tokio::test]
    async fn test_no_caller_is_authentication_error() {
        let storage = storage_with_fixtures();
        // 目标不存在也必须先报认证错误
        let err = resolve_scope(None, StatsScope::Class(999), &storage)
            .await
            .unwrap_err();
        assert!(matches!(err, SchoolIncError::Authentication(_)));
    }

    #[tokio::test]
    async fn test_student_forbidden_from_class_scope() {
        let storage = storage_with_fixtures();
        let student = make_student(2);
        // 存在与否不影响：学生一律禁止班级/课程范围
        for class_id in [10, 999] {
            let err = resolve_scope(Some(&student), StatsScope::Class(class_id), &storage)
                .await
                .unwrap_err();
            assert!(matches!(err, SchoolIncError::Authorization(_)));
        }
    }

    #[tokio::test]
    async fn test_student_forbidden_from_course_scope() {
        let storage = storage_with_fixtures();
        let student = make_student(2);
        let err = resolve_scope(Some(&student), StatsScope::Course(100), &storage)
            .await
            .unwrap_err();
        assert!(matches!(err, SchoolIncError::Authorization(_)));
    }

    #[tokio::test]
    async fn test_student_may_resolve_own_scope_only() {
        let storage = storage_with_fixtures();
        let student = make_student(2);

        let resolved = resolve_scope(Some(&student), StatsScope::Student(2), &storage)
            .await
            .unwrap();
        assert_eq!(resolved.target_id, 2);
        assert_eq!(resolved.selector, GradeSelector::ByStudent(2));

        let err = resolve_scope(Some(&student), StatsScope::Student(3), &storage)
            .await
            .unwrap_err();
        assert!(matches!(err, SchoolIncError::Authorization(_)));
    }

    #[tokio::test]
    async fn test_professor_resolves_class_to_course_id_set() {
        let storage = storage_with_fixtures();
        let professor = make_professor(1);

        let resolved = resolve_scope(Some(&professor), StatsScope::Class(10), &storage)
            .await
            .unwrap();
        assert_eq!(resolved.target_id, 10);
        assert_eq!(resolved.target_name, "Terminale A");
        assert_eq!(resolved.selector, GradeSelector::ByCourseIds(vec![100, 101]));
    }

    #[tokio::test]
    async fn test_professor_resolves_course_scope() {
        let storage = storage_with_fixtures();
        let professor = make_professor(1);

        let resolved = resolve_scope(Some(&professor), StatsScope::Course(100), &storage)
            .await
            .unwrap();
        assert_eq!(resolved.target_name, "Maths");
        assert_eq!(resolved.selector, GradeSelector::ByCourseIds(vec![100]));
    }

    #[tokio::test]
    async fn test_missing_target_is_not_found() {
        let storage = storage_with_fixtures();
        let professor = make_professor(1);

        for scope in [
            StatsScope::Class(999),
            StatsScope::Course(999),
            StatsScope::Student(999),
        ] {
            let err = resolve_scope(Some(&professor), scope, &storage)
                .await
                .unwrap_err();
            assert!(matches!(err, SchoolIncError::NotFound(_)));
        }
    }

    #[tokio::test]
    async fn test_student_name_uses_pseudo() {
        let storage = storage_with_fixtures();
        let professor = make_professor(1);

        let resolved = resolve_scope(Some(&professor), StatsScope::Student(2), &storage)
            .await
            .unwrap();
        assert_eq!(resolved.target_name, "student2");
    }
}
