//! View state and the single function that mutates it.
//!
//! Hosts (terminal or browser) read `AppState` to draw, and only ever
//! change it through [`AppState::apply`].

use std::collections::VecDeque;

pub const NO_ENROLLED_COURSES: &str = "No enrolled courses";
pub const NO_COURSES_FOUND: &str = "No courses found";
pub const NO_STUDENTS_ENROLLED: &str = "No students enrolled.";
pub const NOT_GRADED: &str = "Not graded";

/// Which page regions are visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panels {
    pub login_form: bool,
    pub logout_button: bool,
    /// Enrolled courses for students, taught courses for teachers.
    pub enrolled: bool,
    pub available: bool,
}

impl Panels {
    pub const fn logged_out() -> Self {
        Self {
            login_form: true,
            logout_button: false,
            enrolled: false,
            available: false,
        }
    }

    pub const fn student() -> Self {
        Self {
            login_form: false,
            logout_button: true,
            enrolled: true,
            available: true,
        }
    }

    pub const fn teacher() -> Self {
        Self {
            login_form: false,
            logout_button: true,
            enrolled: true,
            available: false,
        }
    }
}

impl Default for Panels {
    fn default() -> Self {
        Self::logged_out()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Enrolled,
    Available,
}

/// A render target: untouched/cleared, showing a placeholder line, or rows.
#[derive(Debug, Clone, PartialEq)]
pub enum ListView<T> {
    Cleared,
    Placeholder(&'static str),
    Items(Vec<T>),
}

impl<T> Default for ListView<T> {
    fn default() -> Self {
        ListView::Cleared
    }
}

impl<T> ListView<T> {
    pub fn items(&self) -> &[T] {
        match self {
            ListView::Items(v) => v,
            _ => &[],
        }
    }

    pub fn is_cleared(&self) -> bool {
        matches!(self, ListView::Cleared)
    }
}

/// The control rendered next to an available course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseAction {
    Add,
    Remove,
    Full,
}

impl CourseAction {
    pub fn label(&self) -> &'static str {
        match self {
            CourseAction::Add => "Add Class",
            CourseAction::Remove => "Remove Class",
            CourseAction::Full => "Class Full",
        }
    }

    pub fn enabled(&self) -> bool {
        !matches!(self, CourseAction::Full)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CourseRow {
    pub course_id: u64,
    /// User the row was rendered for; its control acts on this user.
    pub user_id: u64,
    pub name: String,
    pub info: String,
    pub time: String,
    pub action: CourseAction,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StudentRow {
    pub username: String,
    /// Current content of the editable grade field.
    pub grade_field: String,
    /// `None` when the row is a lookup fallback.
    pub enrollment_id: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeachingCourse {
    pub course_id: u64,
    pub summary: String,
    pub students: ListView<StudentRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewUpdate {
    ShowPanels(Panels),
    ShowTab(Tab),
    SetAvailable(ListView<CourseRow>),
    SetEnrolled(ListView<String>),
    SetTeaching(ListView<TeachingCourse>),
    EditGrade {
        course_id: u64,
        row: usize,
        value: String,
    },
    Alert(String),
    OpenExternal(String),
    /// Back to the logged-out page with every list emptied.
    Reset,
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub panels: Panels,
    pub active_tab: Option<Tab>,
    pub available: ListView<CourseRow>,
    pub enrolled: ListView<String>,
    pub teaching: ListView<TeachingCourse>,
    alerts: VecDeque<String>,
    external: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, update: ViewUpdate) {
        match update {
            ViewUpdate::ShowPanels(panels) => self.panels = panels,
            ViewUpdate::ShowTab(tab) => self.active_tab = Some(tab),
            ViewUpdate::SetAvailable(list) => self.available = list,
            ViewUpdate::SetEnrolled(list) => self.enrolled = list,
            ViewUpdate::SetTeaching(list) => self.teaching = list,
            ViewUpdate::EditGrade {
                course_id,
                row,
                value,
            } => match self.student_row_mut(course_id, row) {
                Some(r) => r.grade_field = value,
                None => log::warn!("no grade row {row} under course {course_id}"),
            },
            ViewUpdate::Alert(msg) => self.alerts.push_back(msg),
            ViewUpdate::OpenExternal(url) => self.external = Some(url),
            ViewUpdate::Reset => {
                self.panels = Panels::logged_out();
                self.active_tab = None;
                self.available = ListView::Cleared;
                self.enrolled = ListView::Cleared;
                self.teaching = ListView::Cleared;
            }
        }
    }

    pub fn alerts(&self) -> impl Iterator<Item = &str> {
        self.alerts.iter().map(String::as_str)
    }

    pub fn take_alerts(&mut self) -> Vec<String> {
        self.alerts.drain(..).collect()
    }

    /// URL the host should open in a new tab, if any.
    pub fn take_external(&mut self) -> Option<String> {
        self.external.take()
    }

    /// Whether the given tabbed section is visible. With no tab chosen every
    /// section follows its panel flag.
    pub fn tab_visible(&self, tab: Tab) -> bool {
        let panel = match tab {
            Tab::Enrolled => self.panels.enrolled,
            Tab::Available => self.panels.available,
        };
        panel && self.active_tab.map_or(true, |t| t == tab)
    }

    pub fn course_row(&self, course_id: u64) -> Option<&CourseRow> {
        self.available
            .items()
            .iter()
            .find(|r| r.course_id == course_id)
    }

    pub fn student_row(&self, course_id: u64, row: usize) -> Option<&StudentRow> {
        self.teaching
            .items()
            .iter()
            .find(|c| c.course_id == course_id)
            .and_then(|c| c.students.items().get(row))
    }

    fn student_row_mut(&mut self, course_id: u64, row: usize) -> Option<&mut StudentRow> {
        match &mut self.teaching {
            ListView::Items(courses) => courses
                .iter_mut()
                .find(|c| c.course_id == course_id)
                .and_then(|c| match &mut c.students {
                    ListView::Items(rows) => rows.get_mut(row),
                    _ => None,
                }),
            _ => None,
        }
    }
}
