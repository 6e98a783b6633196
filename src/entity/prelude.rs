//! 预导入模块，方便使用

pub use super::class_students::{
    ActiveModel as ClassStudentActiveModel, Entity as ClassStudents, Model as ClassStudentModel,
};
pub use super::classes::{ActiveModel as ClassActiveModel, Entity as Classes, Model as ClassModel};
pub use super::courses::{
    ActiveModel as CourseActiveModel, Entity as Courses, Model as CourseModel,
};
pub use super::grades::{ActiveModel as GradeActiveModel, Entity as Grades, Model as GradeModel};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
