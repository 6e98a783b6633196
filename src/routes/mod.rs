pub mod auth;

pub mod users;

pub mod classes;

pub mod courses;

pub mod grades;

pub mod stats;

pub mod system;

pub use auth::configure_auth_routes;
pub use classes::{configure_class_students_routes, configure_classes_routes};
pub use courses::configure_courses_routes;
pub use grades::configure_grades_routes;
pub use stats::configure_stats_routes;
pub use system::configure_system_routes;
pub use users::configure_user_routes;
