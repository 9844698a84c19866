#![allow(dead_code)]

use std::cell::{Cell, RefCell};

use enroll_client::error::{ErrorKind, Result};
use enroll_client::interface::{RequestApi, SessionStore};
use enroll_client::model::dtos::{CourseUpdateParams, EnrollParams, GradeUpdateParams};
use enroll_client::model::{Course, Enrollment, Grade, Role, User};
use enroll_client::store::MemoryStore;
use enroll_client::{App, Config};
use serde_json::{json, Value};

/// In-memory stand-in for the enrollment backend. Records every request as
/// `"METHOD /path"` plus the JSON body of mutations.
#[derive(Default)]
pub struct FakeBackend {
    pub users: RefCell<Vec<User>>,
    pub courses: RefCell<Vec<Course>>,
    pub enrollments: RefCell<Vec<Enrollment>>,
    pub requests: RefCell<Vec<String>>,
    pub bodies: RefCell<Vec<Value>>,
    /// Raw `/users` rows served after the typed users, e.g. an unknown role.
    pub extra_user_rows: RefCell<Vec<Value>>,
    /// Makes `GET /users` fail as if the server were unreachable.
    pub users_offline: Cell<bool>,
    /// Makes `GET /courses` fail as if the server were unreachable.
    pub courses_offline: Cell<bool>,
    /// Makes `GET /enrollments` fail as if the server were unreachable.
    pub enrollments_offline: Cell<bool>,
    /// Makes enroll and unenroll requests fail before any reply arrives.
    pub mutations_offline: Cell<bool>,
    /// Makes every enroll request fail with a 400, like a time conflict.
    pub reject_enroll: Cell<bool>,
    /// Course id whose capacity update fails with a 500.
    pub broken_course: Cell<Option<u64>>,
}

fn user(id: u64, username: &str, password: &str, role: Role) -> User {
    User {
        id,
        username: username.to_string(),
        password: password.to_string(),
        role,
    }
}

fn course(id: u64, name: &str, teacher: &str, capacity: i64, nofstudents: i64) -> Course {
    Course {
        id,
        name: name.to_string(),
        teacher: teacher.to_string(),
        capacity,
        nofstudents,
        start_time: "04:00 PM".to_string(),
        end_time: "05:00 PM".to_string(),
    }
}

fn enrollment(enrollment_id: u64, user_id: u64, course_id: u64, grade: Option<Grade>) -> Enrollment {
    Enrollment {
        enrollment_id,
        user_id,
        course_id,
        grade,
        user_username: None,
        course_name: None,
        course_teacher: None,
        start_time: None,
        end_time: None,
    }
}

impl FakeBackend {
    /// jimmy (1) takes History 202; jimbo (8) takes History 202 and CSE 234;
    /// enrollment 4 points at a user that no longer exists.
    pub fn seeded() -> Self {
        let backend = FakeBackend::default();
        *backend.users.borrow_mut() = vec![
            user(1, "jimmy", "1", Role::Student),
            user(2, "Amon Hepworth", "2", Role::Teacher),
            user(3, "Stephanian Haik", "2", Role::Teacher),
            user(8, "jimbo", "3", Role::Student),
            user(9, "admin", "5", Role::Admin),
        ];
        *backend.courses.borrow_mut() = vec![
            course(1, "Math 101", "Amon Hepworth", 30, 0),
            course(2, "History 202", "Stephanian Haik", 25, 2),
            course(3, "CSE 234", "Amon Hepworth", 2, 2),
            course(4, "EE 111", "Juan Meza", 0, 0),
        ];
        *backend.enrollments.borrow_mut() = vec![
            enrollment(1, 1, 2, Some(Grade::Score(93.0))),
            enrollment(2, 8, 2, Some(Grade::Score(21.0))),
            enrollment(3, 8, 3, Some(Grade::Label("Not graded".to_string()))),
            enrollment(4, 42, 3, None),
        ];
        backend
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    pub fn clear_requests(&self) {
        self.requests.borrow_mut().clear();
        self.bodies.borrow_mut().clear();
    }

    fn record(&self, line: String) {
        self.requests.borrow_mut().push(line);
    }

    fn offline() -> enroll_client::Error {
        ErrorKind::StdIoError(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "connection refused",
        ))
        .into()
    }

    fn status(status: u16, body: Value) -> enroll_client::Error {
        ErrorKind::Status {
            status,
            body: body.to_string(),
        }
        .into()
    }
}

impl RequestApi for FakeBackend {
    async fn get_users(&self) -> Result<Vec<User>> {
        self.record("GET /users".to_string());
        if self.users_offline.get() {
            return Err(Self::offline());
        }
        let mut rows = self
            .users
            .borrow()
            .iter()
            .map(serde_json::to_value)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        rows.extend(self.extra_user_rows.borrow().iter().cloned());
        Ok(User::from_rows(rows))
    }

    async fn get_user_courses(&self, user_id: u64) -> Result<Vec<Course>> {
        self.record(format!("GET /users/{user_id}/courses"));
        if !self.users.borrow().iter().any(|u| u.id == user_id) {
            return Err(Self::status(404, json!({"error": "User not found"})));
        }
        let courses = self.courses.borrow();
        Ok(self
            .enrollments
            .borrow()
            .iter()
            .filter(|e| e.user_id == user_id)
            .filter_map(|e| courses.iter().find(|c| c.id == e.course_id).cloned())
            .collect())
    }

    async fn get_courses(&self) -> Result<Vec<Course>> {
        self.record("GET /courses".to_string());
        if self.courses_offline.get() {
            return Err(Self::offline());
        }
        Ok(self.courses.borrow().clone())
    }

    async fn update_course(&self, course_id: u64, params: CourseUpdateParams) -> Result<Value> {
        self.record(format!("PUT /courses/{course_id}"));
        self.bodies.borrow_mut().push(serde_json::to_value(&params)?);
        if self.broken_course.get() == Some(course_id) {
            return Err(Self::status(500, json!({"error": "boom"})));
        }
        let mut courses = self.courses.borrow_mut();
        let course = courses
            .iter_mut()
            .find(|c| c.id == course_id)
            .ok_or_else(|| Self::status(404, json!({"error": "Course not found"})))?;
        course.capacity = params.capacity;
        Ok(json!({"message": format!("Capacity for course {} updated to {}", course.name, course.capacity)}))
    }

    async fn get_enrollments(&self) -> Result<Vec<Enrollment>> {
        self.record("GET /enrollments".to_string());
        if self.enrollments_offline.get() {
            return Err(Self::offline());
        }
        Ok(self.enrollments.borrow().clone())
    }

    async fn update_enrollment(
        &self,
        enrollment_id: u64,
        params: GradeUpdateParams<'_>,
    ) -> Result<Value> {
        self.record(format!("PUT /enrollments/{enrollment_id}"));
        self.bodies.borrow_mut().push(serde_json::to_value(&params)?);
        let grade: f64 = params
            .grade
            .parse()
            .map_err(|_| Self::status(400, json!({"error": "Invalid grade value"})))?;
        let mut enrollments = self.enrollments.borrow_mut();
        let e = enrollments
            .iter_mut()
            .find(|e| e.enrollment_id == enrollment_id)
            .ok_or_else(|| Self::status(404, json!({"error": "Enrollment not found"})))?;
        e.grade = Some(Grade::Score(grade));
        Ok(json!({"message": format!("Grade updated to {grade}")}))
    }

    async fn enroll(&self, user_id: u64, course_id: u64, params: EnrollParams) -> Result<Value> {
        self.record(format!("POST /enroll/{user_id}/{course_id}"));
        self.bodies.borrow_mut().push(serde_json::to_value(&params)?);
        if self.mutations_offline.get() {
            return Err(Self::offline());
        }
        if self.reject_enroll.get() {
            return Err(Self::status(
                400,
                json!({"error": "Time conflict with another enrolled course"}),
            ));
        }
        let mut courses = self.courses.borrow_mut();
        let course = courses
            .iter_mut()
            .find(|c| c.id == course_id)
            .ok_or_else(|| Self::status(404, json!({"error": "Invalid user or course"})))?;
        if course.nofstudents >= course.capacity {
            return Err(Self::status(400, json!({"error": "Course is full"})));
        }
        course.nofstudents += 1;
        let mut enrollments = self.enrollments.borrow_mut();
        let next = enrollments.iter().map(|e| e.enrollment_id).max().unwrap_or(0) + 1;
        enrollments.push(enrollment(next, user_id, course_id, None));
        Ok(json!({"message": "enrolled"}))
    }

    async fn unenroll(&self, user_id: u64, course_id: u64) -> Result<Value> {
        self.record(format!("DELETE /enroll/{user_id}/{course_id}"));
        if self.mutations_offline.get() {
            return Err(Self::offline());
        }
        let mut enrollments = self.enrollments.borrow_mut();
        let Some(pos) = enrollments.iter().position(|e| e.is_for(user_id, course_id)) else {
            return Err(Self::status(500, json!({"error": "no enrollment"})));
        };
        enrollments.remove(pos);
        if let Some(c) = self.courses.borrow_mut().iter_mut().find(|c| c.id == course_id) {
            c.nofstudents -= 1;
        }
        Ok(json!({"message": "Enrollment removed successfully"}))
    }
}

/// `MemoryStore` that also counts `set` calls.
#[derive(Debug, Default)]
pub struct CountingStore {
    inner: MemoryStore,
    writes: usize,
}

impl CountingStore {
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl SessionStore for CountingStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.writes += 1;
        self.inner.set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.inner.remove(key)
    }
}

pub fn app() -> App<FakeBackend, CountingStore> {
    App::new(FakeBackend::seeded(), CountingStore::default(), Config::default())
}
