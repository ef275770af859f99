pub mod m202601100001_create_users;
pub mod m202601100002_create_courses;
pub mod m202601100003_create_course_contents;
pub mod m202601100004_create_course_enrollments;
pub mod m202601100005_create_course_stats;
pub mod m202601100006_create_reviews;
