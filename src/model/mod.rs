pub mod dtos;
pub mod structs;

pub use structs::{Course, Enrollment, Grade, Role, User};
