// src/common/migrations.rs
//! Database migration and schema management

use sqlx::SqlitePool;
use std::env;
use tracing::{info, warn};

/// Run all database migrations
///
/// Tables are created idempotently; an existing database is left untouched
/// unless RESET_DB=true asks for a clean slate.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let should_reset_db = env::var("RESET_DB").unwrap_or_else(|_| "false".to_string()) == "true";

    if should_reset_db {
        warn!("⚠️  RESET_DB=true - Dropping all tables and recreating schema...");
        drop_all_tables(pool).await?;
        info!("✅ Dropped old tables");
    } else {
        info!("ℹ️  Skipping table drop (RESET_DB not set). Tables will be created if they don't exist.");
    }

    create_account_tables(pool).await?;
    create_company_tables(pool).await?;
    create_job_tables(pool).await?;
    create_pipeline_tables(pool).await?;
    create_profile_tables(pool).await?;
    create_messaging_tables(pool).await?;
    create_indexes(pool).await?;

    info!("✅ Database migration completed successfully!");

    Ok(())
}

/// Drop all tables in reverse dependency order
async fn drop_all_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let tables = vec![
        "notifications",
        "messages",
        "resumes",
        "work_experiences",
        "lang_abilities",
        "skills",
        "educations",
        "successful_candidates",
        "shortlisted_candidates",
        "applicants",
        "jobs",
        "officers",
        "companies",
        "candidate_profiles",
        "users",
    ];

    for table in tables {
        let _ = sqlx::query(&format!("DROP TABLE IF EXISTS {}", table))
            .execute(pool)
            .await;
    }

    Ok(())
}

async fn create_account_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    // Users table; password holds the full PHC hash string
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT UNIQUE NOT NULL,
            password TEXT NOT NULL,
            role TEXT NOT NULL DEFAULT 'applicant',
            created_at TEXT DEFAULT (datetime('now'))
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Candidate profiles table, one per user
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS candidate_profiles (
            id TEXT PRIMARY KEY,
            gender TEXT,
            location TEXT,
            date_of_birth TEXT,
            nationality TEXT,
            preferred_salary REAL,
            about TEXT,
            user_id TEXT NOT NULL UNIQUE,
            FOREIGN KEY(user_id) REFERENCES users(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_company_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    // Companies table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS companies (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            website TEXT UNIQUE NOT NULL,
            description TEXT NOT NULL,
            address_line1 TEXT NOT NULL,
            address_line2 TEXT NOT NULL DEFAULT '',
            postal_code TEXT NOT NULL,
            state TEXT NOT NULL,
            city TEXT NOT NULL,
            country TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Officers table, the HR accounts attached to a company
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS officers (
            id TEXT PRIMARY KEY,
            position TEXT NOT NULL,
            is_resigned INTEGER NOT NULL DEFAULT 0,
            user_id TEXT NOT NULL,
            company_id TEXT NOT NULL,
            FOREIGN KEY(user_id) REFERENCES users(id) ON DELETE CASCADE,
            FOREIGN KEY(company_id) REFERENCES companies(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_job_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    // Jobs table; job_type holds a comma-separated tag list
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS jobs (
            id TEXT PRIMARY KEY,
            designation TEXT NOT NULL,
            department TEXT NOT NULL,
            min_monthly_salary REAL NOT NULL,
            max_monthly_salary REAL NOT NULL,
            candidate_nationality TEXT NOT NULL,
            candidate_min_edu_level TEXT NOT NULL,
            candidate_min_of_exp INTEGER NOT NULL,
            candidate_lang_req TEXT NOT NULL,
            candidate_other_req TEXT NOT NULL DEFAULT '',
            job_responsibilities TEXT NOT NULL,
            other_info TEXT NOT NULL DEFAULT '',
            created_date TEXT NOT NULL,
            last_modified_date TEXT NOT NULL,
            recruitment_status TEXT NOT NULL,
            job_type TEXT NOT NULL,
            job_field TEXT NOT NULL,
            company_id TEXT NOT NULL,
            FOREIGN KEY(company_id) REFERENCES companies(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_pipeline_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    // Applicants table; is_only_wish=1 rows are wishlist entries
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS applicants (
            id TEXT PRIMARY KEY,
            notes TEXT NOT NULL DEFAULT '',
            is_only_wish INTEGER NOT NULL DEFAULT 0,
            is_viewed INTEGER NOT NULL DEFAULT 0,
            candidate_profile_id TEXT NOT NULL,
            job_id TEXT NOT NULL,
            FOREIGN KEY(candidate_profile_id) REFERENCES candidate_profiles(id) ON DELETE CASCADE,
            FOREIGN KEY(job_id) REFERENCES jobs(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Shortlisted candidates table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS shortlisted_candidates (
            id TEXT PRIMARY KEY,
            notes TEXT NOT NULL DEFAULT '',
            is_qualified_interview INTEGER NOT NULL DEFAULT 0,
            interview_datetime TEXT,
            interview_platform TEXT,
            candidate_profile_id TEXT NOT NULL,
            job_id TEXT NOT NULL,
            FOREIGN KEY(candidate_profile_id) REFERENCES candidate_profiles(id) ON DELETE CASCADE,
            FOREIGN KEY(job_id) REFERENCES jobs(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Successful candidates table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS successful_candidates (
            id TEXT PRIMARY KEY,
            notes TEXT NOT NULL DEFAULT '',
            monthly_salary REAL NOT NULL,
            confirmation_status TEXT NOT NULL,
            candidate_profile_id TEXT NOT NULL,
            job_id TEXT NOT NULL,
            FOREIGN KEY(candidate_profile_id) REFERENCES candidate_profiles(id) ON DELETE CASCADE,
            FOREIGN KEY(job_id) REFERENCES jobs(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_profile_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    // Educations table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS educations (
            id TEXT PRIMARY KEY,
            graduation_date TEXT NOT NULL,
            qualification TEXT NOT NULL,
            institute_name TEXT NOT NULL,
            institute_address TEXT NOT NULL,
            study_field TEXT NOT NULL,
            grade TEXT NOT NULL,
            candidate_profile_id TEXT NOT NULL,
            FOREIGN KEY(candidate_profile_id) REFERENCES candidate_profiles(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Skills table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS skills (
            id TEXT PRIMARY KEY,
            skill_name TEXT NOT NULL,
            proficiency TEXT NOT NULL,
            candidate_profile_id TEXT NOT NULL,
            FOREIGN KEY(candidate_profile_id) REFERENCES candidate_profiles(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Language abilities table; scales are 1-10 self ratings
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS lang_abilities (
            id TEXT PRIMARY KEY,
            language_name TEXT NOT NULL,
            scale_of_writing INTEGER NOT NULL,
            scale_of_speaking INTEGER NOT NULL,
            candidate_profile_id TEXT NOT NULL,
            FOREIGN KEY(candidate_profile_id) REFERENCES candidate_profiles(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Work experiences table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS work_experiences (
            id TEXT PRIMARY KEY,
            position TEXT NOT NULL,
            start_date TEXT NOT NULL,
            end_date TEXT,
            duration TEXT NOT NULL,
            company_name TEXT NOT NULL,
            company_address TEXT NOT NULL,
            monthly_salary REAL NOT NULL,
            candidate_profile_id TEXT NOT NULL,
            FOREIGN KEY(candidate_profile_id) REFERENCES candidate_profiles(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Resumes table, one per profile; path points at the file host
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS resumes (
            id TEXT PRIMARY KEY,
            path TEXT NOT NULL,
            candidate_profile_id TEXT NOT NULL UNIQUE,
            FOREIGN KEY(candidate_profile_id) REFERENCES candidate_profiles(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_messaging_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    // Messages table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS messages (
            id TEXT PRIMARY KEY,
            content TEXT NOT NULL,
            is_read INTEGER NOT NULL DEFAULT 0,
            created_date TEXT NOT NULL,
            recipient_id TEXT NOT NULL,
            sender_id TEXT NOT NULL,
            FOREIGN KEY(recipient_id) REFERENCES users(id) ON DELETE CASCADE,
            FOREIGN KEY(sender_id) REFERENCES users(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Notifications table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS notifications (
            id TEXT PRIMARY KEY,
            content TEXT NOT NULL,
            category TEXT NOT NULL,
            is_read INTEGER NOT NULL DEFAULT 0,
            user_id TEXT NOT NULL,
            FOREIGN KEY(user_id) REFERENCES users(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_indexes(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let indexes = vec![
        // Account indexes
        "CREATE INDEX IF NOT EXISTS idx_candidate_profiles_user_id ON candidate_profiles(user_id)",
        // Company indexes
        "CREATE INDEX IF NOT EXISTS idx_officers_user_id ON officers(user_id)",
        "CREATE INDEX IF NOT EXISTS idx_officers_company_id ON officers(company_id)",
        // Job indexes
        "CREATE INDEX IF NOT EXISTS idx_jobs_company_id ON jobs(company_id)",
        "CREATE INDEX IF NOT EXISTS idx_jobs_recruitment_status ON jobs(recruitment_status)",
        "CREATE INDEX IF NOT EXISTS idx_jobs_job_field ON jobs(job_field)",
        // Pipeline indexes
        "CREATE INDEX IF NOT EXISTS idx_applicants_job_id ON applicants(job_id)",
        "CREATE INDEX IF NOT EXISTS idx_applicants_pair ON applicants(job_id, candidate_profile_id)",
        "CREATE INDEX IF NOT EXISTS idx_applicants_profile ON applicants(candidate_profile_id)",
        "CREATE INDEX IF NOT EXISTS idx_shortlisted_job_id ON shortlisted_candidates(job_id)",
        "CREATE INDEX IF NOT EXISTS idx_shortlisted_pair ON shortlisted_candidates(job_id, candidate_profile_id)",
        "CREATE INDEX IF NOT EXISTS idx_successful_job_id ON successful_candidates(job_id)",
        "CREATE INDEX IF NOT EXISTS idx_successful_pair ON successful_candidates(job_id, candidate_profile_id)",
        // Profile record indexes
        "CREATE INDEX IF NOT EXISTS idx_educations_profile ON educations(candidate_profile_id)",
        "CREATE INDEX IF NOT EXISTS idx_skills_profile ON skills(candidate_profile_id)",
        "CREATE INDEX IF NOT EXISTS idx_lang_abilities_profile ON lang_abilities(candidate_profile_id)",
        "CREATE INDEX IF NOT EXISTS idx_work_experiences_profile ON work_experiences(candidate_profile_id)",
        // Messaging indexes
        "CREATE INDEX IF NOT EXISTS idx_messages_recipient ON messages(recipient_id, is_read)",
        "CREATE INDEX IF NOT EXISTS idx_messages_pair ON messages(sender_id, recipient_id)",
        "CREATE INDEX IF NOT EXISTS idx_notifications_user_id ON notifications(user_id)",
    ];

    for index in indexes {
        sqlx::query(index).execute(pool).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn memory_pool() -> SqlitePool {
        SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory pool")
    }

    #[tokio::test]
    async fn test_migrations_run_twice() {
        let pool = memory_pool().await;
        run_migrations(&pool).await.expect("first run");
        run_migrations(&pool).await.expect("second run");

        // every table answers a trivial query after both runs
        for table in [
            "users",
            "candidate_profiles",
            "companies",
            "officers",
            "jobs",
            "applicants",
            "shortlisted_candidates",
            "successful_candidates",
            "educations",
            "skills",
            "lang_abilities",
            "work_experiences",
            "resumes",
            "messages",
            "notifications",
        ] {
            let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {}", table))
                .fetch_one(&pool)
                .await
                .expect("table exists");
            assert_eq!(count.0, 0);
        }
    }
}
