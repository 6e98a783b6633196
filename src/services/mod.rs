pub mod auth;
pub mod classes;
pub mod courses;
pub mod grades;
pub mod stats;
pub mod system;
pub mod users;

pub use auth::AuthService;
pub use classes::ClassService;
pub use courses::CourseService;
pub use grades::GradeService;
pub use stats::StatsService;
pub use system::SystemService;
pub use users::UserService;
