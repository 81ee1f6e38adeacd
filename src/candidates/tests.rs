//! Tests for candidates module
//!
//! Covers the profile expansion the pipeline routes return, the wishlist
//! split on `is_only_wish`, the duplicate guard on apply, and the cascades
//! a profile delete relies on.

#[cfg(test)]
mod tests {
    use crate::candidates::handlers::applicants::create_applicant;
    use crate::candidates::models::{Applicant, ApplicantWithProfile, CreateApplicantRequest};
    use crate::candidates::services::CandidateService;
    use crate::common::migrations::run_migrations;
    use crate::common::{ApiError, AppState, SharedState};
    use crate::messages::services::ChatHub;
    use crate::services::{CodeCache, FileHostClient, Mailer, TokenService};
    use axum::extract::{Extension, Json, OriginalUri};
    use axum::http::Uri;
    use reqwest::Client;
    use sqlx::sqlite::SqlitePoolOptions;
    use sqlx::SqlitePool;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    async fn memory_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory pool");
        run_migrations(&pool).await.expect("migrations");
        pool
    }

    fn test_state(pool: SqlitePool) -> SharedState {
        Arc::new(RwLock::new(AppState {
            db: pool,
            frontend_base_url: "http://localhost:5173".to_string(),
            tokens: Arc::new(TokenService::new(
                "access-secret".to_string(),
                "refresh-secret".to_string(),
            )),
            codes: Arc::new(CodeCache::new()),
            mailer: Arc::new(Mailer::new("no-reply@recruit.local".to_string())),
            file_host: Arc::new(FileHostClient::new(Client::new(), None, None)),
            chat_hub: ChatHub::new(),
        }))
    }

    async fn seed_candidate(pool: &SqlitePool) {
        sqlx::query(
            r#"
            INSERT INTO users (id, name, email, password)
            VALUES ('U_AAAAAA', 'Dina', 'dina@example.com', 'hash')
            "#,
        )
        .execute(pool)
        .await
        .expect("seed user");

        sqlx::query(
            r#"
            INSERT INTO candidate_profiles
                (id, gender, location, date_of_birth, nationality, preferred_salary,
                 about, user_id)
            VALUES ('CP_AAAAAA', 'F', 'Metro', '1999-05-02', 'Freedonian', 2500.0,
                    'Backend developer', 'U_AAAAAA')
            "#,
        )
        .execute(pool)
        .await
        .expect("seed profile");
    }

    async fn seed_job(pool: &SqlitePool, job_id: &str) {
        sqlx::query(
            r#"
            INSERT OR IGNORE INTO companies
                (id, name, website, description, address_line1, postal_code,
                 state, city, country)
            VALUES ('C_AAAAAA', 'Acme', 'https://acme.example', 'Widgets', '1 Acme Way',
                    '00100', 'Central', 'Metro', 'Freedonia')
            "#,
        )
        .execute(pool)
        .await
        .expect("seed company");

        sqlx::query(
            r#"
            INSERT INTO jobs
                (id, designation, department, min_monthly_salary, max_monthly_salary,
                 candidate_nationality, candidate_min_edu_level, candidate_min_of_exp,
                 candidate_lang_req, candidate_other_req, job_responsibilities,
                 other_info, created_date, last_modified_date, recruitment_status,
                 job_type, job_field, company_id)
            VALUES (?, 'Backend Engineer', 'Engineering', 2000.0, 4000.0,
                    'Any', 'Bachelor', 2, 'English', '', 'Build APIs',
                    '', '2024-03-01', '2024-03-01', 'Advertised',
                    'Full-time', 'Software', 'C_AAAAAA')
            "#,
        )
        .bind(job_id)
        .execute(pool)
        .await
        .expect("seed job");
    }

    #[tokio::test]
    async fn test_expand_profile_bundles_every_record_type() {
        let pool = memory_pool().await;
        seed_candidate(&pool).await;

        sqlx::query(
            r#"
            INSERT INTO educations
                (id, graduation_date, qualification, institute_name, institute_address,
                 study_field, grade, candidate_profile_id)
            VALUES ('E_AAAAAA', '2021-06-30', 'BSc', 'Metro University', 'Metro',
                    'Computing', 'A', 'CP_AAAAAA')
            "#,
        )
        .execute(&pool)
        .await
        .expect("seed education");

        sqlx::query(
            "INSERT INTO skills (id, skill_name, proficiency, candidate_profile_id) VALUES ('SK_AAAAAA', 'Rust', 'Advanced', 'CP_AAAAAA')",
        )
        .execute(&pool)
        .await
        .expect("seed skill");

        sqlx::query(
            r#"
            INSERT INTO lang_abilities
                (id, language_name, scale_of_writing, scale_of_speaking, candidate_profile_id)
            VALUES ('LG_AAAAAA', 'Spanish', 7, 8, 'CP_AAAAAA')
            "#,
        )
        .execute(&pool)
        .await
        .expect("seed lang ability");

        sqlx::query(
            r#"
            INSERT INTO work_experiences
                (id, position, start_date, end_date, duration, company_name,
                 company_address, monthly_salary, candidate_profile_id)
            VALUES ('W_AAAAAA', 'Clerk', '2020-01-01', '2021-01-01', '1 year', 'Acme',
                    '1 Acme Way', 2000.0, 'CP_AAAAAA')
            "#,
        )
        .execute(&pool)
        .await
        .expect("seed work experience");

        let detail = CandidateService::new(pool.clone())
            .expand_profile_by_id("CP_AAAAAA")
            .await
            .expect("expand profile");

        assert_eq!(detail.user.id, "U_AAAAAA");
        assert_eq!(detail.education.len(), 1);
        assert_eq!(detail.lang_ability.len(), 1);
        assert_eq!(detail.skill.len(), 1);
        assert_eq!(detail.work_experience.len(), 1);
        assert!(detail.resume.is_none());

        // Profile fields flatten to the top; the user serializes without password
        let json = serde_json::to_value(&detail).expect("serialize detail");
        assert_eq!(json["gender"], "F");
        assert_eq!(json["user"]["email"], "dina@example.com");
        assert!(json["user"].get("password").is_none());
        assert!(json["resume"].is_null());
        assert_eq!(json["skill"][0]["skill_name"], "Rust");
    }

    #[tokio::test]
    async fn test_applicant_with_profile_nests_under_candidate_profile() {
        let pool = memory_pool().await;
        seed_candidate(&pool).await;
        seed_job(&pool, "J_AAAAAA").await;

        sqlx::query(
            r#"
            INSERT INTO applicants (id, notes, is_only_wish, is_viewed, candidate_profile_id, job_id)
            VALUES ('A_AAAAAA', 'strong CV', 0, 0, 'CP_AAAAAA', 'J_AAAAAA')
            "#,
        )
        .execute(&pool)
        .await
        .expect("seed applicant");

        let applicant = sqlx::query_as::<_, Applicant>("SELECT * FROM applicants WHERE id = ?")
            .bind("A_AAAAAA")
            .fetch_one(&pool)
            .await
            .expect("fetch applicant");
        let candidate_profile = CandidateService::new(pool.clone())
            .expand_profile_by_id("CP_AAAAAA")
            .await
            .expect("expand profile");

        let json = serde_json::to_value(&ApplicantWithProfile {
            applicant,
            candidate_profile,
        })
        .expect("serialize applicant");

        assert_eq!(json["notes"], "strong CV");
        assert_eq!(json["is_only_wish"], false);
        assert_eq!(json["candidate_profile"]["id"], "CP_AAAAAA");
        assert_eq!(json["candidate_profile"]["user"]["name"], "Dina");
    }

    #[tokio::test]
    async fn test_wishlist_and_applications_split_on_flag() {
        let pool = memory_pool().await;
        seed_candidate(&pool).await;
        seed_job(&pool, "J_AAAAAA").await;
        seed_job(&pool, "J_BBBBBB").await;

        sqlx::query(
            "INSERT INTO applicants (id, candidate_profile_id, job_id, is_only_wish) VALUES ('A_AAAAAA', 'CP_AAAAAA', 'J_AAAAAA', 1)",
        )
        .execute(&pool)
        .await
        .expect("seed wishlist row");
        sqlx::query(
            "INSERT INTO applicants (id, candidate_profile_id, job_id, is_only_wish) VALUES ('A_BBBBBB', 'CP_AAAAAA', 'J_BBBBBB', 0)",
        )
        .execute(&pool)
        .await
        .expect("seed applied row");

        let wishlist: Vec<Applicant> = sqlx::query_as(
            "SELECT * FROM applicants WHERE candidate_profile_id = ? AND is_only_wish = 1",
        )
        .bind("CP_AAAAAA")
        .fetch_all(&pool)
        .await
        .expect("wishlist rows");
        let applied: Vec<Applicant> = sqlx::query_as(
            "SELECT * FROM applicants WHERE candidate_profile_id = ? AND is_only_wish = 0",
        )
        .bind("CP_AAAAAA")
        .fetch_all(&pool)
        .await
        .expect("applied rows");

        assert_eq!(wishlist.len(), 1);
        assert_eq!(wishlist[0].job_id, "J_AAAAAA");
        assert!(wishlist[0].is_only_wish);
        assert_eq!(applied.len(), 1);
        assert_eq!(applied[0].job_id, "J_BBBBBB");
        assert!(!applied[0].is_viewed);
    }

    #[tokio::test]
    async fn test_second_application_for_same_pair_conflicts() {
        let pool = memory_pool().await;
        seed_candidate(&pool).await;
        seed_job(&pool, "J_AAAAAA").await;
        let state = test_state(pool);
        let uri: Uri = "/api/applicant".parse().expect("uri");

        let first = create_applicant(
            Extension(state.clone()),
            OriginalUri(uri.clone()),
            Json(CreateApplicantRequest {
                notes: Some("keen".to_string()),
                is_only_wish: None,
                candidate_profile_id: Some("CP_AAAAAA".to_string()),
                job_id: Some("J_AAAAAA".to_string()),
            }),
        )
        .await
        .expect("first application");

        assert_eq!(first.status, "201 - Created");
        assert_eq!(first.message, "New applicant list successfully created.");
        let created = first.data.expect("created applicant");
        assert!(!created.is_only_wish);
        assert_eq!(created.notes, "keen");

        // The guard ignores the wish flag, so re-adding the pair as a
        // wishlist entry still collides with the existing application
        let second = create_applicant(
            Extension(state),
            OriginalUri(uri),
            Json(CreateApplicantRequest {
                notes: None,
                is_only_wish: Some(true),
                candidate_profile_id: Some("CP_AAAAAA".to_string()),
                job_id: Some("J_AAAAAA".to_string()),
            }),
        )
        .await;

        match second {
            Err(ApiError::Conflict { endpoint, message }) => {
                assert_eq!(endpoint, "/api/applicant");
                assert_eq!(
                    message,
                    "Candidate CP_AAAAAA is already in job J_AAAAAA as applicant."
                );
            }
            other => panic!("expected Conflict, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_pipeline_rows_cascade_with_profile() {
        let pool = memory_pool().await;
        seed_candidate(&pool).await;
        seed_job(&pool, "J_AAAAAA").await;

        sqlx::query(
            "INSERT INTO applicants (id, candidate_profile_id, job_id) VALUES ('A_AAAAAA', 'CP_AAAAAA', 'J_AAAAAA')",
        )
        .execute(&pool)
        .await
        .expect("seed applicant");
        sqlx::query(
            "INSERT INTO shortlisted_candidates (id, candidate_profile_id, job_id) VALUES ('SC_AAAAAA', 'CP_AAAAAA', 'J_AAAAAA')",
        )
        .execute(&pool)
        .await
        .expect("seed shortlisted");
        sqlx::query(
            r#"
            INSERT INTO successful_candidates
                (id, monthly_salary, confirmation_status, candidate_profile_id, job_id)
            VALUES ('HC_AAAAAA', 3000.0, 'Confirmed', 'CP_AAAAAA', 'J_AAAAAA')
            "#,
        )
        .execute(&pool)
        .await
        .expect("seed successful");

        sqlx::query("DELETE FROM candidate_profiles WHERE id = 'CP_AAAAAA'")
            .execute(&pool)
            .await
            .expect("delete profile");

        let (applicants,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM applicants")
            .fetch_one(&pool)
            .await
            .expect("applicant count");
        let (shortlisted,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM shortlisted_candidates")
            .fetch_one(&pool)
            .await
            .expect("shortlisted count");
        let (successful,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM successful_candidates")
            .fetch_one(&pool)
            .await
            .expect("successful count");

        assert_eq!(applicants, 0);
        assert_eq!(shortlisted, 0);
        assert_eq!(successful, 0);

        // The job itself is untouched by a candidate leaving
        let (jobs,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM jobs")
            .fetch_one(&pool)
            .await
            .expect("job count");
        assert_eq!(jobs, 1);
    }
}
