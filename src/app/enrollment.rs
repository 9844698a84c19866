//! Adding and dropping classes.

use super::state::CourseAction;
use super::App;
use crate::interface::{RequestApi, SessionStore};
use crate::model::dtos::EnrollParams;

pub const ENROLLED: &str = "Successfully enrolled in the class!";
pub const TIME_CONFLICT: &str = "Time Conflict";
pub const REMOVED: &str = "Successfully removed from the class!";
pub const REMOVE_FAILED: &str = "Failed to remove from the class.";

impl<C: RequestApi, S: SessionStore> App<C, S> {
    /// Enrolls the user. Any rejection from the backend is reported as a
    /// time conflict; on success both student lists are fetched again.
    pub async fn add_class(&mut self, user_id: u64, course_id: u64) {
        let result = self
            .client
            .enroll(user_id, course_id, EnrollParams { course_id })
            .await;

        match result {
            Ok(_) => {
                self.alert(ENROLLED);
                self.refresh_student_lists(user_id).await;
            }
            Err(e) if e.is_status() => {
                log::warn!("Enrollment of user {user_id} in course {course_id} rejected: {e}");
                self.alert(TIME_CONFLICT);
            }
            Err(e) => log::error!("Error enrolling in the class: {e}"),
        }
    }

    pub async fn remove_class(&mut self, user_id: u64, course_id: u64) {
        match self.client.unenroll(user_id, course_id).await {
            Ok(_) => {
                self.alert(REMOVED);
                self.refresh_student_lists(user_id).await;
            }
            Err(e) if e.is_status() => {
                log::warn!("Removal of user {user_id} from course {course_id} rejected: {e}");
                self.alert(REMOVE_FAILED);
            }
            Err(e) => log::error!("Error removing from the class: {e}"),
        }
    }

    /// Clicks the control of the available-course row for `course_id`.
    /// Returns the action taken, or `None` when there is no such row or the
    /// control is disabled.
    pub async fn activate(&mut self, course_id: u64) -> Option<CourseAction> {
        let Some(row) = self.state.course_row(course_id) else {
            log::warn!("no course row for course {course_id}");
            return None;
        };
        let (user_id, action) = (row.user_id, row.action);

        match action {
            CourseAction::Add => self.add_class(user_id, course_id).await,
            CourseAction::Remove => self.remove_class(user_id, course_id).await,
            CourseAction::Full => return None,
        }
        Some(action)
    }

    async fn refresh_student_lists(&mut self, user_id: u64) {
        self.fetch_courses(user_id).await;
        self.fetch_user_courses(user_id).await;
    }
}
