use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::AppError;

use super::{coerce_int, require};

#[derive(Debug, Clone, FromRow)]
pub struct Course {
    pub id: i64,
    pub subject_name: String,
    pub subject_code: String,
    pub room_number: String,
    pub slots: String,
    pub credits: i64,
    pub created_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewCourseRequest {
    pub subject_name: Option<String>,
    pub subject_code: Option<String>,
    pub room_number: Option<String>,
    pub slots: Option<String>,
    pub credits: Option<serde_json::Value>,
}

#[derive(Debug, Clone)]
pub struct NewCourse {
    pub subject_name: String,
    pub subject_code: String,
    pub room_number: String,
    pub slots: String,
    pub credits: i64,
}

impl NewCourseRequest {
    pub fn validate(self) -> Result<NewCourse, AppError> {
        Ok(NewCourse {
            subject_name: require(self.subject_name, "subject_name")?,
            subject_code: require(self.subject_code, "subject_code")?,
            room_number: require(self.room_number, "room_number")?,
            slots: require(self.slots, "slots")?,
            credits: coerce_int(require(self.credits, "credits")?, "credits")?,
        })
    }
}

/// Course rows go out in snake_case, without `created_at`.
#[derive(Debug, Clone, Serialize)]
pub struct CourseResponse {
    pub id: i64,
    pub subject_name: String,
    pub subject_code: String,
    pub room_number: String,
    pub slots: String,
    pub credits: i64,
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        Self {
            id: course.id,
            subject_name: course.subject_name,
            subject_code: course.subject_code,
            room_number: course.room_number,
            slots: course.slots,
            credits: course.credits,
        }
    }
}
