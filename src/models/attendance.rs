use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::AppError;

use super::{coerce_int, parse_date, require};

#[derive(Debug, Clone, FromRow)]
pub struct Attendance {
    pub id: i64,
    pub course_id: i64,
    pub date: String,
    pub slot: String,
    pub created_at: String,
}

/// Wire payload for POST /api/attendance. `course_id` arrives as a
/// number or a numeric string, like the other integer fields.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkAttendanceRequest {
    pub course_id: Option<serde_json::Value>,
    pub date: Option<String>,
    pub slot: Option<String>,
}

/// The (course, date, slot) key the toggle operates on.
#[derive(Debug, Clone)]
pub struct AttendanceMark {
    pub course_id: i64,
    pub date: String,
    pub slot: String,
}

impl MarkAttendanceRequest {
    pub fn validate(self) -> Result<AttendanceMark, AppError> {
        Ok(AttendanceMark {
            course_id: coerce_int(require(self.course_id, "course_id")?, "course_id")?,
            date: parse_date(&require(self.date, "date")?)?,
            slot: require(self.slot, "slot")?,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AttendanceResponse {
    pub course_id: i64,
    pub slot: String,
    pub date: String,
}

impl From<Attendance> for AttendanceResponse {
    fn from(att: Attendance) -> Self {
        Self {
            course_id: att.course_id,
            slot: att.slot,
            date: att.date,
        }
    }
}
