//! Teacher-side student rosters and grade edits.

use futures::future::join_all;

use super::state::{ListView, StudentRow, ViewUpdate, NOT_GRADED, NO_STUDENTS_ENROLLED};
use super::App;
use crate::error::{ErrorKind, Result};
use crate::interface::{RequestApi, SessionStore};
use crate::model::dtos::GradeUpdateParams;
use crate::model::Enrollment;

impl<C: RequestApi, S: SessionStore> App<C, S> {
    /// Students enrolled in `course_id`, one row each, in enrollment order.
    /// Returns an empty roster when the enrollment listing can't be read.
    pub async fn fetch_students(&self, course_id: u64) -> Vec<StudentRow> {
        let enrollments = match self.client.get_enrollments().await {
            Ok(enrollments) => enrollments,
            Err(e) => {
                log::error!("Error fetching students for course ID {course_id}: {e}");
                return Vec::new();
            }
        };

        let in_course: Vec<Enrollment> = enrollments
            .into_iter()
            .filter(|e| e.course_id == course_id)
            .collect();
        log::debug!("Enrollments for course ID {course_id}: {in_course:?}");

        join_all(in_course.iter().map(|e| self.fetch_name_and_grade(e))).await
    }

    /// Resolves the enrolled user's name. Falls back to an "Unknown" row
    /// when the lookup fails.
    pub async fn fetch_name_and_grade(&self, enrollment: &Enrollment) -> StudentRow {
        match self.lookup_username(enrollment.user_id).await {
            Ok(username) => StudentRow {
                username,
                grade_field: enrollment
                    .grade
                    .as_ref()
                    .map_or_else(|| NOT_GRADED.to_string(), ToString::to_string),
                enrollment_id: Some(enrollment.enrollment_id),
            },
            Err(e) => {
                log::error!(
                    "Error fetching user name for ID {}: {e}",
                    enrollment.user_id
                );
                StudentRow {
                    username: "Unknown".to_string(),
                    grade_field: "N/A".to_string(),
                    enrollment_id: None,
                }
            }
        }
    }

    async fn lookup_username(&self, user_id: u64) -> Result<String> {
        let users = self.client.get_users().await?;
        users
            .into_iter()
            .find(|u| u.id == user_id)
            .map(|u| u.username)
            .ok_or_else(|| ErrorKind::NotFound(format!("User with ID {user_id}")).into())
    }

    /// Sends `value` as the new grade. The value is not validated, the
    /// outcome is only logged, and the confirmation alert is raised either
    /// way. No list is refreshed.
    pub async fn update_grade(&mut self, enrollment_id: Option<u64>, value: &str) {
        match enrollment_id {
            Some(id) => {
                let params = GradeUpdateParams { grade: value };
                match self.client.update_enrollment(id, params).await {
                    Ok(data) => log::info!("Grade updated successfully: {data}"),
                    Err(e) => log::error!("Error updating grade: {e}"),
                }
            }
            None => log::error!("Error updating grade: unknown enrollment"),
        }
        self.alert(format!("Grade updated to: {value}"));
    }

    /// Submits the grade field of roster row `row` under `course_id`, as
    /// currently shown in the view.
    pub async fn submit_grade(&mut self, course_id: u64, row: usize) {
        let Some(r) = self.state.student_row(course_id, row) else {
            log::warn!("no grade row {row} under course {course_id}");
            return;
        };
        let (enrollment_id, value) = (r.enrollment_id, r.grade_field.clone());
        self.update_grade(enrollment_id, &value).await;
    }

    /// Convenience for hosts: replace the field content, then submit it.
    pub async fn edit_and_submit_grade(&mut self, course_id: u64, row: usize, value: &str) {
        self.update(ViewUpdate::EditGrade {
            course_id,
            row,
            value: value.to_string(),
        });
        self.submit_grade(course_id, row).await;
    }
}

pub(crate) fn roster_view(students: Vec<StudentRow>) -> ListView<StudentRow> {
    if students.is_empty() {
        ListView::Placeholder(NO_STUDENTS_ENROLLED)
    } else {
        ListView::Items(students)
    }
}
