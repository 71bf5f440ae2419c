use chrono::NaiveDate;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::info;

use crate::{auth::password::hash_password, errors::AppError};

const SAMPLE_PASSWORD: &str = "changeme";

struct SampleStudent {
    full_name: &'static str,
    email: &'static str,
    major: &'static str,
}

const SAMPLE_STUDENTS: &[SampleStudent] = &[
    SampleStudent { full_name: "Sakura Haruno", email: "sakura@konoha.com", major: "Medical Ninjutsu" },
    SampleStudent { full_name: "Shikamaru Nara", email: "shikamaru@konoha.com", major: "Strategy" },
];

const SAMPLE_EMPLOYERS: &[(&str, &str, Option<&str>)] = &[
    ("Capsule Corp", "Technology", Some("https://capsule.example")),
    ("Stark Industries", "Manufacturing", None),
];

const SAMPLE_MENTORS: &[(&str, &str, Option<&str>)] = &[
    ("Kakashi Hatake", "kakashi@konoha.com", Some("Ninjutsu Division")),
    ("Might Guy", "gai@konoha.com", Some("Taijutsu Division")),
];

/// Inserts sample rows when students, employers and mentors are all empty.
/// Returns whether anything was written.
pub async fn seed_if_empty(pool: &PgPool) -> Result<bool, AppError> {
    let existing: i64 = sqlx::query_scalar(
        r#"
        SELECT (SELECT COUNT(*) FROM students)
             + (SELECT COUNT(*) FROM employers)
             + (SELECT COUNT(*) FROM mentors)
        "#
    )
    .fetch_one(pool)
    .await?;

    if existing > 0 {
        info!("Sample data skipped, tables already hold {} rows", existing);
        return Ok(false);
    }

    let mut tx = pool.begin().await?;
    let password_hash = hash_password(SAMPLE_PASSWORD)?;

    let mut student_ids = Vec::with_capacity(SAMPLE_STUDENTS.len());
    for student in SAMPLE_STUDENTS {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO students (full_name, email, major, password_hash) VALUES ($1, $2, $3, $4) RETURNING id"
        )
        .bind(student.full_name)
        .bind(student.email)
        .bind(student.major)
        .bind(&password_hash)
        .fetch_one(&mut *tx)
        .await?;
        student_ids.push(id);
    }

    let mut employer_ids = Vec::with_capacity(SAMPLE_EMPLOYERS.len());
    for (name, industry, website) in SAMPLE_EMPLOYERS {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO employers (name, industry, website) VALUES ($1, $2, $3) RETURNING id"
        )
        .bind(*name)
        .bind(*industry)
        .bind(*website)
        .fetch_one(&mut *tx)
        .await?;
        employer_ids.push(id);
    }

    let mut mentor_ids = Vec::with_capacity(SAMPLE_MENTORS.len());
    for (full_name, email, field) in SAMPLE_MENTORS {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO mentors (full_name, email, field) VALUES ($1, $2, $3) RETURNING id"
        )
        .bind(*full_name)
        .bind(*email)
        .bind(*field)
        .fetch_one(&mut *tx)
        .await?;
        mentor_ids.push(id);
    }

    let placement_id = insert_sample_placement(
        &mut tx,
        student_ids[0],
        employer_ids[0],
        mentor_ids[0],
    )
    .await?;

    sqlx::query("INSERT INTO evaluations (placement_id, rating, comments) VALUES ($1, $2, $3)")
        .bind(placement_id)
        .bind(5_i16)
        .bind("Excellent work.")
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    info!(
        "Seeded {} students, {} employers, {} mentors and 1 placement",
        student_ids.len(),
        employer_ids.len(),
        mentor_ids.len()
    );
    Ok(true)
}

async fn insert_sample_placement(
    tx: &mut Transaction<'static, Postgres>,
    student_id: i64,
    employer_id: i64,
    mentor_id: i64,
) -> Result<i64, AppError> {
    let start = NaiveDate::from_ymd_opt(2024, 6, 1)
        .ok_or_else(|| AppError::InternalError("invalid sample start date".into()))?;
    let end = NaiveDate::from_ymd_opt(2024, 8, 31)
        .ok_or_else(|| AppError::InternalError("invalid sample end date".into()))?;

    let id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO placements (student_id, employer_id, mentor_id, job_title, description, start_date, end_date, status)
        VALUES ($1, $2, $3, $4, $5, $6, $7, 'active')
        RETURNING id
        "#
    )
    .bind(student_id)
    .bind(employer_id)
    .bind(mentor_id)
    .bind("Summer Internship")
    .bind("A great learning experience.")
    .bind(start)
    .bind(end)
    .fetch_one(&mut **tx)
    .await?;

    Ok(id)
}
