pub mod attendance;
pub mod course;
pub mod exam;
pub mod task;

pub use attendance::{Attendance, AttendanceMark, AttendanceResponse, MarkAttendanceRequest};
pub use course::{Course, CourseResponse, NewCourse, NewCourseRequest};
pub use exam::{Exam, ExamResponse, NewExam, NewExamRequest};
pub use task::{NewTask, NewTaskRequest, Task, TaskResponse};

use chrono::NaiveDate;

use crate::error::AppError;

pub(crate) fn require<T>(value: Option<T>, field: &str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::BadRequest(format!("Missing required field: {field}")))
}

/// Accepts only `YYYY-MM-DD` and returns the string in that canonical form.
pub(crate) fn parse_date(value: &str) -> Result<String, AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|d| d.format("%Y-%m-%d").to_string())
        .map_err(|_| AppError::BadRequest("Invalid date format".to_string()))
}

/// Clients send integer fields either as JSON numbers or numeric strings.
pub(crate) fn coerce_int(value: serde_json::Value, field: &str) -> Result<i64, AppError> {
    let invalid = || AppError::BadRequest(format!("Invalid integer value for field: {field}"));
    match value {
        serde_json::Value::Number(n) => n.as_i64().ok_or_else(invalid),
        serde_json::Value::String(s) => s.trim().parse::<i64>().map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_date_accepts_iso_dates() {
        assert_eq!(parse_date("2024-05-01").unwrap(), "2024-05-01");
    }

    #[test]
    fn parse_date_rejects_other_formats() {
        assert!(parse_date("01/05/2024").is_err());
        assert!(parse_date("2024-13-01").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn coerce_int_accepts_numbers_and_numeric_strings() {
        assert_eq!(coerce_int(json!(90), "duration").unwrap(), 90);
        assert_eq!(coerce_int(json!("90"), "duration").unwrap(), 90);
        assert_eq!(coerce_int(json!(" 4 "), "credits").unwrap(), 4);
    }

    #[test]
    fn coerce_int_rejects_non_integers() {
        assert!(coerce_int(json!("ninety"), "duration").is_err());
        assert!(coerce_int(json!(1.5), "duration").is_err());
        assert!(coerce_int(json!(null), "duration").is_err());
    }

    #[test]
    fn require_names_the_missing_field() {
        let err = require::<String>(None, "dueDate").unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: dueDate");
    }
}
