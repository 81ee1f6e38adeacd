//! Tests for profile records module
//!
//! Covers the validator messages clients match on and the schema rules
//! the handlers rely on (one resume per profile, cascade on profile
//! delete).

#[cfg(test)]
mod tests {
    use crate::common::migrations::run_migrations;
    use crate::common::Validator;
    use crate::profile::models::{
        CreateLangAbilityRequest, CreateWorkExperienceRequest, LangAbility, WorkExperience,
    };
    use crate::profile::validators::{LangAbilityValidator, WorkExperienceValidator};
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

    async fn seed_profile(pool: &SqlitePool) {
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
                (id, about, gender, location, date_of_birth, nationality,
                 preferred_salary, user_id)
            VALUES ('CP_AAAAAA', '', 'F', 'Metro', '1999-05-02', 'Freedonian',
                    2500.0, 'U_AAAAAA')
            "#,
        )
        .execute(pool)
        .await
        .expect("seed profile");
    }

    #[tokio::test]
    async fn test_lang_ability_requires_both_scales() {
        let body = CreateLangAbilityRequest {
            language_name: Some("Spanish".to_string()),
            scale_of_writing: Some(7),
            scale_of_speaking: None,
            candidate_profile_id: Some("CP_AAAAAA".to_string()),
        };

        let result = LangAbilityValidator.validate(&body);
        assert!(!result.is_valid);
        assert_eq!(
            result.first_message(),
            Some("Language name, Scale of writing, Scale of speaking and Candidate profile id is required.")
        );
    }

    #[tokio::test]
    async fn test_work_experience_rejects_negative_salary() {
        let body = CreateWorkExperienceRequest {
            position: Some("Clerk".to_string()),
            start_date: Some("2020-01-01".to_string()),
            end_date: Some("2021-01-01".to_string()),
            duration: Some("1 year".to_string()),
            company_name: Some("Acme".to_string()),
            company_address: Some("1 Acme Way".to_string()),
            monthly_salary: Some(-10.0),
            candidate_profile_id: Some("CP_AAAAAA".to_string()),
        };

        let result = WorkExperienceValidator.validate(&body);
        assert!(!result.is_valid);
        assert_eq!(
            result.first_message(),
            Some("Position, Duration, Company name, Company address, Monthly salary and Candidate profile id is required.")
        );

        let mut valid_body = body;
        valid_body.monthly_salary = Some(0.0);
        assert!(WorkExperienceValidator.validate(&valid_body).is_valid);
    }

    #[tokio::test]
    async fn test_one_resume_per_profile() {
        let pool = memory_pool().await;
        seed_profile(&pool).await;

        sqlx::query("INSERT INTO resumes (id, path, candidate_profile_id) VALUES (?, ?, ?)")
            .bind("R_AAAAAA")
            .bind("https://files.example.com/0b5cf01c-9e31-4f52-8e6b-1bd32a7c55aa/cv.pdf")
            .bind("CP_AAAAAA")
            .execute(&pool)
            .await
            .expect("first resume");

        let second =
            sqlx::query("INSERT INTO resumes (id, path, candidate_profile_id) VALUES (?, ?, ?)")
                .bind("R_BBBBBB")
                .bind("https://files.example.com/aa11cf01-0000-4f52-8e6b-1bd32a7c55aa/cv2.pdf")
                .bind("CP_AAAAAA")
                .execute(&pool)
                .await;

        assert!(second.is_err());
    }

    #[tokio::test]
    async fn test_records_cascade_with_profile() {
        let pool = memory_pool().await;
        seed_profile(&pool).await;

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
            VALUES ('W_AAAAAA', 'Clerk', '2020-01-01', NULL, '1 year', 'Acme',
                    '1 Acme Way', 2000.0, 'CP_AAAAAA')
            "#,
        )
        .execute(&pool)
        .await
        .expect("seed work experience");

        sqlx::query("DELETE FROM candidate_profiles WHERE id = 'CP_AAAAAA'")
            .execute(&pool)
            .await
            .expect("delete profile");

        let lang_rows: Vec<LangAbility> = sqlx::query_as("SELECT * FROM lang_abilities")
            .fetch_all(&pool)
            .await
            .expect("lang rows");
        let work_rows: Vec<WorkExperience> = sqlx::query_as("SELECT * FROM work_experiences")
            .fetch_all(&pool)
            .await
            .expect("work rows");

        assert!(lang_rows.is_empty());
        assert!(work_rows.is_empty());
    }

    #[tokio::test]
    async fn test_work_experience_end_date_may_be_null() {
        let pool = memory_pool().await;
        seed_profile(&pool).await;

        sqlx::query(
            r#"
            INSERT INTO work_experiences
                (id, position, start_date, end_date, duration, company_name,
                 company_address, monthly_salary, candidate_profile_id)
            VALUES ('W_BBBBBB', 'Clerk', '2022-01-01', NULL, 'ongoing', 'Acme',
                    '1 Acme Way', 2100.0, 'CP_AAAAAA')
            "#,
        )
        .execute(&pool)
        .await
        .expect("insert open-ended experience");

        let row: WorkExperience = sqlx::query_as("SELECT * FROM work_experiences WHERE id = ?")
            .bind("W_BBBBBB")
            .fetch_one(&pool)
            .await
            .expect("fetch row");

        assert_eq!(row.end_date, None);
        assert_eq!(row.monthly_salary, 2100.0);
    }
}
