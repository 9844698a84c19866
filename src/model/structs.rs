use serde::{Deserialize, Serialize};

/// Account role, sent by the backend as a lowercase string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Student,
    Teacher,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let token = match self {
            Role::Admin => "admin",
            Role::Student => "student",
            Role::Teacher => "teacher",
        };
        write!(f, "{token}")
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub password: String,
    pub role: Role,
}

impl User {
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }

    /// Decodes a `/users` listing row by row. Rows that don't fit `User`
    /// (an unknown role, a missing field) are skipped with a warning so
    /// the remaining accounts stay usable.
    pub fn from_rows(rows: Vec<serde_json::Value>) -> Vec<User> {
        rows.into_iter()
            .filter_map(|row| match serde_json::from_value::<User>(row.clone()) {
                Ok(user) => Some(user),
                Err(e) => {
                    log::warn!("Skipping user row {row}: {e}");
                    None
                }
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Course {
    pub id: u64,
    pub name: String,
    /// Username of the teacher running the course.
    pub teacher: String,
    pub capacity: i64,
    pub nofstudents: i64,
    pub start_time: String,
    pub end_time: String,
}

impl Course {
    pub fn is_full(&self) -> bool {
        self.nofstudents >= self.capacity
    }
}

/// A grade as reported by the enrollment listing: either a number or a
/// label such as `"Not graded"`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Grade {
    Score(f64),
    Label(String),
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Grade::Score(v) if v.fract() == 0.0 => write!(f, "{v:.0}"),
            Grade::Score(v) => write!(f, "{v}"),
            Grade::Label(s) => write!(f, "{s}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Enrollment {
    pub enrollment_id: u64,
    pub user_id: u64,
    pub course_id: u64,
    #[serde(default)]
    pub grade: Option<Grade>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_teacher: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

impl Enrollment {
    pub fn is_for(&self, user_id: u64, course_id: u64) -> bool {
        self.user_id == user_id && self.course_id == course_id
    }
}
