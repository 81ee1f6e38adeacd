//! Tests for users module
//!
//! These tests verify account updates and the deletion cascade:
//! - Info update persists and returns the new row
//! - Password change checks the current password first
//! - Deleting a user removes every dependent row and nothing else

#[cfg(test)]
mod tests {
    use super::super::services::UserService;
    use crate::common::migrations::run_migrations;
    use crate::common::ApiError;
    use crate::services::passwords;
    use sqlx::sqlite::SqlitePoolOptions;
    use sqlx::SqlitePool;

    async fn memory_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory pool");
        run_migrations(&pool).await.expect("migrations");
        pool
    }

    async fn seed_user(pool: &SqlitePool, id: &str, name: &str, email: &str, password: &str) {
        sqlx::query("INSERT INTO users (id, name, email, password) VALUES (?, ?, ?, ?)")
            .bind(id)
            .bind(name)
            .bind(email)
            .bind(password)
            .execute(pool)
            .await
            .expect("seed user");
    }

    async fn count(pool: &SqlitePool, table: &str) -> i64 {
        let row: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(pool)
            .await
            .expect("count");
        row.0
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let pool = memory_pool().await;
        let err = UserService::new(pool.clone())
            .get_user("/api/user/U_MISSING", "U_MISSING")
            .await
            .expect_err("missing user");

        match err {
            ApiError::NotFound { message, .. } => {
                assert_eq!(message, "User id is not found.");
            }
            other => panic!("expected not found, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_update_info_persists() {
        let pool = memory_pool().await;
        seed_user(&pool, "U_AAAAAA", "Jane", "jane@example.com", "hash").await;

        let updated = UserService::new(pool.clone())
            .update_info(
                "/api/user/U_AAAAAA/info",
                "U_AAAAAA",
                "jane.doe@example.com",
                "Jane Doe",
            )
            .await
            .expect("update info");

        assert_eq!(updated.email, "jane.doe@example.com");
        assert_eq!(updated.name, "Jane Doe");

        let stored: (String, String) =
            sqlx::query_as("SELECT email, name FROM users WHERE id = 'U_AAAAAA'")
                .fetch_one(&pool)
                .await
                .expect("stored row");
        assert_eq!(stored.0, "jane.doe@example.com");
        assert_eq!(stored.1, "Jane Doe");
    }

    #[tokio::test]
    async fn test_change_password_rejects_wrong_current() {
        let pool = memory_pool().await;
        let hash = passwords::hash_password("OldPassw0rd").expect("hash");
        seed_user(&pool, "U_AAAAAA", "Jane", "jane@example.com", &hash).await;

        let err = UserService::new(pool.clone())
            .change_password(
                "/api/user/U_AAAAAA/password",
                "U_AAAAAA",
                "WrongPassw0rd",
                "NewPassw0rd",
            )
            .await
            .expect_err("wrong current password");

        match err {
            ApiError::Unauthorized { message, .. } => {
                assert_eq!(message, "Current password is incorrect.");
            }
            other => panic!("expected unauthorized, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_change_password_stores_new_hash() {
        let pool = memory_pool().await;
        let hash = passwords::hash_password("OldPassw0rd").expect("hash");
        seed_user(&pool, "U_AAAAAA", "Jane", "jane@example.com", &hash).await;

        UserService::new(pool.clone())
            .change_password(
                "/api/user/U_AAAAAA/password",
                "U_AAAAAA",
                "OldPassw0rd",
                "NewPassw0rd",
            )
            .await
            .expect("change password");

        let stored: (String,) = sqlx::query_as("SELECT password FROM users WHERE id = 'U_AAAAAA'")
            .fetch_one(&pool)
            .await
            .expect("stored hash");
        assert!(passwords::verify_password("NewPassw0rd", &stored.0).expect("verify"));
        assert!(!passwords::verify_password("OldPassw0rd", &stored.0).expect("verify"));
    }

    #[tokio::test]
    async fn test_delete_user_cascades_without_orphans() {
        let pool = memory_pool().await;
        seed_user(&pool, "U_AAAAAA", "Jane", "jane@example.com", "hash").await;
        seed_user(&pool, "U_BBBBBB", "Bob", "bob@example.com", "hash").await;
        seed_user(&pool, "U_CCCCCC", "Carol", "carol@example.com", "hash").await;

        sqlx::query(
            r#"
            INSERT INTO companies (id, name, website, description, address_line1,
                                   postal_code, state, city, country)
            VALUES ('C_AAAAAA', 'Acme', 'https://acme.example', 'Widgets', '1 Acme Way',
                    '00100', 'Central', 'Metro', 'Freedonia')
            "#,
        )
        .execute(&pool)
        .await
        .expect("seed company");

        sqlx::query(
            r#"
            INSERT INTO candidate_profiles (id, gender, location, date_of_birth, nationality,
                                            preferred_salary, about, user_id)
            VALUES ('CP_AAAAAA', 'female', 'Metro', '1995-04-02', 'Freedonian',
                    3200.0, 'About Jane', 'U_AAAAAA')
            "#,
        )
        .execute(&pool)
        .await
        .expect("seed profile");

        sqlx::query(
            r#"
            INSERT INTO jobs (id, designation, department, min_monthly_salary, max_monthly_salary,
                              candidate_nationality, candidate_min_edu_level, candidate_min_of_exp,
                              candidate_lang_req, candidate_other_req, job_responsibilities,
                              other_info, created_date, last_modified_date, recruitment_status,
                              job_type, job_field, company_id)
            VALUES ('J_AAAAAA', 'Engineer', 'R&D', 3000.0, 5000.0,
                    'Any', 'Bachelor', 2, 'English', '', 'Build things',
                    '', '2026-01-10', '2026-01-10', 'Active',
                    'Full-Time', 'Engineering', 'C_AAAAAA')
            "#,
        )
        .execute(&pool)
        .await
        .expect("seed job");

        for (sql, label) in [
            (
                "INSERT INTO applicants (id, candidate_profile_id, job_id) VALUES ('A_AAAAAA', 'CP_AAAAAA', 'J_AAAAAA')",
                "applicant",
            ),
            (
                "INSERT INTO shortlisted_candidates (id, candidate_profile_id, job_id) VALUES ('SC_AAAAAA', 'CP_AAAAAA', 'J_AAAAAA')",
                "shortlisted",
            ),
            (
                "INSERT INTO successful_candidates (id, notes, monthly_salary, confirmation_status, candidate_profile_id, job_id) VALUES ('HC_AAAAAA', '', 4200.0, 'Accepted', 'CP_AAAAAA', 'J_AAAAAA')",
                "successful",
            ),
            (
                "INSERT INTO educations (id, graduation_date, qualification, institute_name, institute_address, study_field, grade, candidate_profile_id) VALUES ('E_AAAAAA', '2017-06-01', 'BSc', 'Metro U', 'Metro', 'CS', 'A', 'CP_AAAAAA')",
                "education",
            ),
            (
                "INSERT INTO skills (id, skill_name, proficiency, candidate_profile_id) VALUES ('SK_AAAAAA', 'Rust', 'Advanced', 'CP_AAAAAA')",
                "skill",
            ),
            (
                "INSERT INTO lang_abilities (id, language_name, scale_of_writing, scale_of_speaking, candidate_profile_id) VALUES ('LG_AAAAAA', 'English', 9, 8, 'CP_AAAAAA')",
                "lang ability",
            ),
            (
                "INSERT INTO work_experiences (id, position, start_date, end_date, duration, company_name, company_address, monthly_salary, candidate_profile_id) VALUES ('W_AAAAAA', 'Dev', '2018-01-01', '2020-01-01', '2 years', 'OldCo', 'Metro', 2800.0, 'CP_AAAAAA')",
                "work experience",
            ),
            (
                "INSERT INTO resumes (id, path, candidate_profile_id) VALUES ('R_AAAAAA', 'https://files.example/r/1', 'CP_AAAAAA')",
                "resume",
            ),
            (
                "INSERT INTO messages (id, content, created_date, recipient_id, sender_id) VALUES ('M_AAAAAA', 'hi bob', '2026-02-01', 'U_BBBBBB', 'U_AAAAAA')",
                "sent message",
            ),
            (
                "INSERT INTO messages (id, content, created_date, recipient_id, sender_id) VALUES ('M_BBBBBB', 'hi jane', '2026-02-01', 'U_AAAAAA', 'U_BBBBBB')",
                "received message",
            ),
            (
                "INSERT INTO messages (id, content, created_date, recipient_id, sender_id) VALUES ('M_CCCCCC', 'unrelated', '2026-02-01', 'U_CCCCCC', 'U_BBBBBB')",
                "unrelated message",
            ),
            (
                "INSERT INTO notifications (id, content, category, user_id) VALUES ('N_AAAAAA', 'welcome', 'system', 'U_AAAAAA')",
                "notification",
            ),
            (
                "INSERT INTO notifications (id, content, category, user_id) VALUES ('N_BBBBBB', 'welcome', 'system', 'U_BBBBBB')",
                "other notification",
            ),
            (
                "INSERT INTO officers (id, position, user_id, company_id) VALUES ('HO_AAAAAA', 'HR Lead', 'U_AAAAAA', 'C_AAAAAA')",
                "officer",
            ),
            (
                "INSERT INTO officers (id, position, user_id, company_id) VALUES ('HO_BBBBBB', 'HR', 'U_BBBBBB', 'C_AAAAAA')",
                "other officer",
            ),
        ] {
            sqlx::query(sql).execute(&pool).await.unwrap_or_else(|e| {
                panic!("seed {}: {}", label, e);
            });
        }

        UserService::new(pool.clone())
            .delete_user("/api/user/U_AAAAAA", "U_AAAAAA")
            .await
            .expect("delete user");

        // everything hanging off Jane is gone
        assert_eq!(count(&pool, "candidate_profiles").await, 0);
        assert_eq!(count(&pool, "applicants").await, 0);
        assert_eq!(count(&pool, "shortlisted_candidates").await, 0);
        assert_eq!(count(&pool, "successful_candidates").await, 0);
        assert_eq!(count(&pool, "educations").await, 0);
        assert_eq!(count(&pool, "skills").await, 0);
        assert_eq!(count(&pool, "lang_abilities").await, 0);
        assert_eq!(count(&pool, "work_experiences").await, 0);
        assert_eq!(count(&pool, "resumes").await, 0);

        // rows not involving Jane survive
        assert_eq!(count(&pool, "users").await, 2);
        assert_eq!(count(&pool, "messages").await, 1);
        assert_eq!(count(&pool, "notifications").await, 1);
        assert_eq!(count(&pool, "officers").await, 1);
        assert_eq!(count(&pool, "companies").await, 1);
        assert_eq!(count(&pool, "jobs").await, 1);

        let survivor: (String,) = sqlx::query_as("SELECT id FROM messages")
            .fetch_one(&pool)
            .await
            .expect("surviving message");
        assert_eq!(survivor.0, "M_CCCCCC");
    }
}
