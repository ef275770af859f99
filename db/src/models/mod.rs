pub mod course;
pub mod course_content;
pub mod course_enrollment;
pub mod course_stats;
pub mod review;
pub mod user;

pub use course::Entity as Course;
pub use course_content::Entity as CourseContent;
pub use course_enrollment::Entity as CourseEnrollment;
pub use course_stats::Entity as CourseStats;
pub use review::Entity as Review;
pub use user::Entity as User;
