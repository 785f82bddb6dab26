use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::AppError;

use super::{coerce_int, parse_date, require};

#[derive(Debug, Clone, FromRow)]
pub struct Exam {
    pub id: i64,
    pub subject: String,
    pub module_number: String,
    pub exam_date: String,
    pub start_time: String,
    pub duration: i64,
    pub seat_number: String,
    pub room_number: String,
    pub created_at: String,
}

/// Wire payload for POST /api/exams. All seven business fields are
/// required; duration arrives as a number or a numeric string.
#[derive(Debug, Clone, Deserialize)]
pub struct NewExamRequest {
    pub subject: Option<String>,
    #[serde(rename = "moduleNumber")]
    pub module_number: Option<String>,
    #[serde(rename = "examDate")]
    pub exam_date: Option<String>,
    #[serde(rename = "startTime")]
    pub start_time: Option<String>,
    pub duration: Option<serde_json::Value>,
    #[serde(rename = "seatNumber")]
    pub seat_number: Option<String>,
    #[serde(rename = "roomNumber")]
    pub room_number: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewExam {
    pub subject: String,
    pub module_number: String,
    pub exam_date: String,
    pub start_time: String,
    pub duration: i64,
    pub seat_number: String,
    pub room_number: String,
}

impl NewExamRequest {
    pub fn validate(self) -> Result<NewExam, AppError> {
        Ok(NewExam {
            subject: require(self.subject, "subject")?,
            module_number: require(self.module_number, "moduleNumber")?,
            exam_date: parse_date(&require(self.exam_date, "examDate")?)?,
            start_time: require(self.start_time, "startTime")?,
            duration: coerce_int(require(self.duration, "duration")?, "duration")?,
            seat_number: require(self.seat_number, "seatNumber")?,
            room_number: require(self.room_number, "roomNumber")?,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ExamResponse {
    pub id: i64,
    pub subject: String,
    #[serde(rename = "moduleNumber")]
    pub module_number: String,
    #[serde(rename = "examDate")]
    pub exam_date: String,
    #[serde(rename = "startTime")]
    pub start_time: String,
    pub duration: i64,
    #[serde(rename = "seatNumber")]
    pub seat_number: String,
    #[serde(rename = "roomNumber")]
    pub room_number: String,
}

impl From<Exam> for ExamResponse {
    fn from(exam: Exam) -> Self {
        Self {
            id: exam.id,
            subject: exam.subject,
            module_number: exam.module_number,
            exam_date: exam.exam_date,
            start_time: exam.start_time,
            duration: exam.duration,
            seat_number: exam.seat_number,
            room_number: exam.room_number,
        }
    }
}
