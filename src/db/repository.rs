use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::{
    Attendance, AttendanceMark, Course, Exam, NewCourse, NewExam, NewTask, Task,
};

pub async fn fetch_tasks(
    db: &SqlitePool,
    due_date: Option<&str>,
) -> Result<Vec<Task>, sqlx::Error> {
    match due_date {
        Some(date) => {
            sqlx::query_as::<_, Task>(
                "SELECT id, title, detail, due_date, start_time, end_time, task_type, subject, created_at FROM tasks WHERE due_date = ?",
            )
            .bind(date)
            .fetch_all(db)
            .await
        }
        None => {
            sqlx::query_as::<_, Task>(
                "SELECT id, title, detail, due_date, start_time, end_time, task_type, subject, created_at FROM tasks",
            )
            .fetch_all(db)
            .await
        }
    }
}

pub async fn insert_task(db: &SqlitePool, new: NewTask) -> Result<Task, sqlx::Error> {
    let created_at = Utc::now().to_rfc3339();

    let result = sqlx::query(
        "INSERT INTO tasks (title, detail, due_date, start_time, end_time, task_type, subject, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&new.title)
    .bind(&new.detail)
    .bind(&new.due_date)
    .bind(&new.start_time)
    .bind(&new.end_time)
    .bind(&new.task_type)
    .bind(&new.subject)
    .bind(&created_at)
    .execute(db)
    .await?;

    Ok(Task {
        id: result.last_insert_rowid(),
        title: new.title,
        detail: new.detail,
        due_date: new.due_date,
        start_time: new.start_time,
        end_time: new.end_time,
        task_type: new.task_type,
        subject: new.subject,
        created_at,
    })
}

pub async fn delete_task(db: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
        .bind(id)
        .execute(db)
        .await?
        .rows_affected();

    Ok(result > 0)
}

pub async fn fetch_exams(db: &SqlitePool) -> Result<Vec<Exam>, sqlx::Error> {
    sqlx::query_as::<_, Exam>(
        "SELECT id, subject, module_number, exam_date, start_time, duration, seat_number, room_number, created_at FROM exams",
    )
    .fetch_all(db)
    .await
}

pub async fn insert_exam(db: &SqlitePool, new: NewExam) -> Result<Exam, sqlx::Error> {
    let created_at = Utc::now().to_rfc3339();

    let result = sqlx::query(
        "INSERT INTO exams (subject, module_number, exam_date, start_time, duration, seat_number, room_number, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&new.subject)
    .bind(&new.module_number)
    .bind(&new.exam_date)
    .bind(&new.start_time)
    .bind(new.duration)
    .bind(&new.seat_number)
    .bind(&new.room_number)
    .bind(&created_at)
    .execute(db)
    .await?;

    Ok(Exam {
        id: result.last_insert_rowid(),
        subject: new.subject,
        module_number: new.module_number,
        exam_date: new.exam_date,
        start_time: new.start_time,
        duration: new.duration,
        seat_number: new.seat_number,
        room_number: new.room_number,
        created_at,
    })
}

pub async fn delete_exam(db: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM exams WHERE id = ?")
        .bind(id)
        .execute(db)
        .await?
        .rows_affected();

    Ok(result > 0)
}

pub async fn fetch_courses(db: &SqlitePool) -> Result<Vec<Course>, sqlx::Error> {
    sqlx::query_as::<_, Course>(
        "SELECT id, subject_name, subject_code, room_number, slots, credits, created_at FROM courses",
    )
    .fetch_all(db)
    .await
}

pub async fn insert_course(db: &SqlitePool, new: NewCourse) -> Result<Course, sqlx::Error> {
    let created_at = Utc::now().to_rfc3339();

    let result = sqlx::query(
        "INSERT INTO courses (subject_name, subject_code, room_number, slots, credits, created_at) VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&new.subject_name)
    .bind(&new.subject_code)
    .bind(&new.room_number)
    .bind(&new.slots)
    .bind(new.credits)
    .bind(&created_at)
    .execute(db)
    .await?;

    Ok(Course {
        id: result.last_insert_rowid(),
        subject_name: new.subject_name,
        subject_code: new.subject_code,
        room_number: new.room_number,
        slots: new.slots,
        credits: new.credits,
        created_at,
    })
}

pub async fn delete_course(db: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM courses WHERE id = ?")
        .bind(id)
        .execute(db)
        .await?
        .rows_affected();

    Ok(result > 0)
}

#[derive(Debug)]
pub enum AttendanceToggle {
    Marked(Attendance),
    Unmarked,
}

/// Lookup and write run in one transaction so two identical requests
/// cannot both insert; the UNIQUE key on (course_id, date, slot) backs
/// this up at the schema level.
pub async fn toggle_attendance(
    db: &SqlitePool,
    mark: AttendanceMark,
) -> Result<AttendanceToggle, sqlx::Error> {
    let mut tx = db.begin().await?;

    let existing: Option<(i64,)> = sqlx::query_as(
        "SELECT id FROM attendance WHERE course_id = ? AND date = ? AND slot = ?",
    )
    .bind(mark.course_id)
    .bind(&mark.date)
    .bind(&mark.slot)
    .fetch_optional(&mut *tx)
    .await?;

    match existing {
        Some((id,)) => {
            sqlx::query("DELETE FROM attendance WHERE id = ?")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            tx.commit().await?;
            Ok(AttendanceToggle::Unmarked)
        }
        None => {
            let created_at = Utc::now().to_rfc3339();
            let result = sqlx::query(
                "INSERT INTO attendance (course_id, date, slot, created_at) VALUES (?, ?, ?, ?)",
            )
            .bind(mark.course_id)
            .bind(&mark.date)
            .bind(&mark.slot)
            .bind(&created_at)
            .execute(&mut *tx)
            .await?;
            let id = result.last_insert_rowid();
            tx.commit().await?;
            Ok(AttendanceToggle::Marked(Attendance {
                id,
                course_id: mark.course_id,
                date: mark.date,
                slot: mark.slot,
                created_at,
            }))
        }
    }
}

pub async fn fetch_attendance_by_date(
    db: &SqlitePool,
    date: &str,
) -> Result<Vec<Attendance>, sqlx::Error> {
    sqlx::query_as::<_, Attendance>(
        "SELECT id, course_id, date, slot, created_at FROM attendance WHERE date = ?",
    )
    .bind(date)
    .fetch_all(db)
    .await
}
