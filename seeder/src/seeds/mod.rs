pub mod course;
pub mod course_content;
pub mod course_stats;
pub mod enrollment;
pub mod review;
pub mod user;
