//! Course lists for students and teachers.

use futures::future::join_all;

use super::state::{
    CourseAction, CourseRow, ListView, TeachingCourse, ViewUpdate, NO_COURSES_FOUND,
    NO_ENROLLED_COURSES,
};
use super::App;
use crate::interface::{RequestApi, SessionStore};
use crate::model::Course;

impl<C: RequestApi, S: SessionStore> App<C, S> {
    /// Renders every course with the control the student can use on it.
    ///
    /// Enrollment is checked per course, concurrently; rows keep the order
    /// of the course listing.
    pub async fn fetch_courses(&mut self, user_id: u64) {
        let courses = match self.client.get_courses().await {
            Ok(courses) => courses,
            Err(e) => {
                log::error!("Error fetching courses: {e}");
                return;
            }
        };

        let checks = courses
            .iter()
            .map(|course| self.check_enrollment(user_id, course.id));
        let enrolled = join_all(checks).await;

        let rows = courses
            .iter()
            .zip(enrolled)
            .map(|(course, is_enrolled)| course_row(course, user_id, is_enrolled))
            .collect();

        self.update(ViewUpdate::SetAvailable(ListView::Items(rows)));
    }

    /// Whether `user_id` holds an enrollment in `course_id`. Lookup failures
    /// count as not enrolled.
    pub async fn check_enrollment(&self, user_id: u64, course_id: u64) -> bool {
        match self.client.get_enrollments().await {
            Ok(enrollments) => enrollments.iter().any(|e| e.is_for(user_id, course_id)),
            Err(e) => {
                log::error!("Error checking enrollment: {e}");
                false
            }
        }
    }

    pub async fn fetch_user_courses(&mut self, user_id: u64) {
        let courses = match self.client.get_user_courses(user_id).await {
            Ok(courses) => courses,
            Err(e) => {
                log::error!("Error fetching user courses: {e}");
                return;
            }
        };

        let list = if courses.is_empty() {
            ListView::Placeholder(NO_ENROLLED_COURSES)
        } else {
            ListView::Items(courses.iter().map(enrolled_line).collect())
        };
        self.update(ViewUpdate::SetEnrolled(list));
    }

    /// Renders the courses taught by `username`, each with its students.
    pub async fn fetch_courses_teacher(&mut self, username: &str) {
        let courses = match self.client.get_courses().await {
            Ok(courses) => courses,
            Err(e) => {
                log::error!("Error fetching courses: {e}");
                return;
            }
        };

        if courses.is_empty() {
            self.update(ViewUpdate::SetTeaching(ListView::Placeholder(NO_COURSES_FOUND)));
            return;
        }

        let taught: Vec<&Course> = courses.iter().filter(|c| c.teacher == username).collect();
        let rosters = join_all(taught.iter().map(|c| self.fetch_students(c.id))).await;

        let blocks = taught
            .iter()
            .zip(rosters)
            .map(|(course, students)| TeachingCourse {
                course_id: course.id,
                summary: teaching_summary(course),
                students: super::grades::roster_view(students),
            })
            .collect();

        self.update(ViewUpdate::SetTeaching(ListView::Items(blocks)));
    }
}

fn course_row(course: &Course, user_id: u64, is_enrolled: bool) -> CourseRow {
    let action = if is_enrolled {
        CourseAction::Remove
    } else if course.is_full() {
        CourseAction::Full
    } else {
        CourseAction::Add
    };

    CourseRow {
        course_id: course.id,
        user_id,
        name: course.name.clone(),
        info: format!(
            "Teacher: {} | Capacity: {} | Enrolled: {}/{}",
            course.teacher, course.capacity, course.nofstudents, course.capacity
        ),
        time: format!("Time: {} to {}", course.start_time, course.end_time),
        action,
    }
}

fn enrolled_line(course: &Course) -> String {
    format!(
        "{} - Teacher: {} - Enrolled: {}/{} - Time: {} to {}",
        course.name,
        course.teacher,
        course.nofstudents,
        course.capacity,
        course.start_time,
        course.end_time
    )
}

fn teaching_summary(course: &Course) -> String {
    format!(
        "{} - No. of Students / Capacity: {}/{} - Time: {} to {}",
        course.name, course.nofstudents, course.capacity, course.start_time, course.end_time
    )
}
