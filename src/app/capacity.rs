//! Batch capacity decrement.
//!
//! Not wired to any view or schedule; callers decide when to run it.

use futures::future::join_all;

use crate::error::Result;
use crate::interface::RequestApi;
use crate::model::dtos::CourseUpdateParams;
use crate::model::Course;

#[derive(Debug, Clone, PartialEq)]
pub enum CapacityOutcome {
    Decreased { course_id: u64, name: String, capacity: i64 },
    AlreadyZero { course_id: u64, name: String },
    Failed { course_id: u64, name: String, reason: String },
}

/// Lowers every positive course capacity by one, one `PUT` per course.
///
/// Requests are independent: if some fail, the others still apply. Only a
/// failure to list the courses is returned as an error.
pub async fn decrease_capacities<C: RequestApi>(client: &C) -> Result<Vec<CapacityOutcome>> {
    let courses = client.get_courses().await.map_err(|e| {
        log::error!("Error fetching courses: {e}");
        e
    })?;

    Ok(join_all(courses.iter().map(|c| decrease_one(client, c))).await)
}

async fn decrease_one<C: RequestApi>(client: &C, course: &Course) -> CapacityOutcome {
    if course.capacity <= 0 {
        log::info!("Course {} already has zero capacity", course.name);
        return CapacityOutcome::AlreadyZero {
            course_id: course.id,
            name: course.name.clone(),
        };
    }

    let capacity = course.capacity - 1;
    match client
        .update_course(course.id, CourseUpdateParams { capacity })
        .await
    {
        Ok(_) => {
            log::info!("Course {} capacity reduced to {capacity}", course.name);
            CapacityOutcome::Decreased {
                course_id: course.id,
                name: course.name.clone(),
                capacity,
            }
        }
        Err(e) => {
            log::error!("Failed to update capacity for course {}: {e}", course.name);
            CapacityOutcome::Failed {
                course_id: course.id,
                name: course.name.clone(),
                reason: e.to_string(),
            }
        }
    }
}
