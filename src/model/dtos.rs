use serde::Serialize;

/// Body of `POST /enroll/{userId}/{courseId}`.
#[derive(Debug, Clone, Serialize)]
pub struct EnrollParams {
    pub course_id: u64,
}

/// Body of `PUT /enrollments/{id}`. The grade is passed through as typed.
#[derive(Debug, Clone, Serialize)]
pub struct GradeUpdateParams<'a> {
    pub grade: &'a str,
}

/// Body of `PUT /courses/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct CourseUpdateParams {
    pub capacity: i64,
}
