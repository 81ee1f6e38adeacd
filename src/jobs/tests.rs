//! Tests for jobs module
//!
//! Exercises the search ranking, the request validators and the
//! company scoping the pair routes rely on.

#[cfg(test)]
mod tests {
    use crate::common::migrations::run_migrations;
    use crate::common::Validator;
    use crate::companies::models::Company;
    use crate::jobs::handlers::find_company_job;
    use crate::jobs::models::{CreateJobRequest, Job, JobWithCompany};
    use crate::jobs::services::{rank_listings, JobService};
    use crate::jobs::validators::JobValidator;
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

    fn make_listing(id: &str, designation: &str, responsibilities: &str) -> JobWithCompany {
        JobWithCompany {
            job: Job {
                id: id.to_string(),
                designation: designation.to_string(),
                department: "Engineering".to_string(),
                min_monthly_salary: 2000.0,
                max_monthly_salary: 4000.0,
                candidate_nationality: "Any".to_string(),
                candidate_min_edu_level: "Bachelor".to_string(),
                candidate_min_of_exp: 2,
                candidate_lang_req: "English".to_string(),
                candidate_other_req: String::new(),
                job_responsibilities: responsibilities.to_string(),
                other_info: String::new(),
                created_date: "2024-03-01".to_string(),
                last_modified_date: "2024-03-01".to_string(),
                recruitment_status: "Advertised".to_string(),
                job_type: "Full-time".to_string(),
                job_field: "Software".to_string(),
                company_id: "C_AAAAAA".to_string(),
            },
            company: Company {
                id: "C_AAAAAA".to_string(),
                name: "Acme".to_string(),
                website: "https://acme.example".to_string(),
                description: "Widgets".to_string(),
                address_line1: "1 Acme Way".to_string(),
                address_line2: String::new(),
                postal_code: "00100".to_string(),
                state: "Central".to_string(),
                city: "Metro".to_string(),
                country: "Freedonia".to_string(),
            },
        }
    }

    async fn seed_company(pool: &SqlitePool, id: &str, website: &str) {
        sqlx::query(
            r#"
            INSERT INTO companies
                (id, name, website, description, address_line1, postal_code,
                 state, city, country)
            VALUES (?, 'Acme', ?, 'Widgets', '1 Acme Way', '00100',
                    'Central', 'Metro', 'Freedonia')
            "#,
        )
        .bind(id)
        .bind(website)
        .execute(pool)
        .await
        .expect("seed company");
    }

    async fn seed_job(pool: &SqlitePool, id: &str, company_id: &str) {
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
                    'Full-time', 'Software', ?)
            "#,
        )
        .bind(id)
        .bind(company_id)
        .execute(pool)
        .await
        .expect("seed job");
    }

    #[test]
    fn test_rank_listings_orders_best_match_first() {
        let listings = vec![
            make_listing("J_CCCCCC", "Florist", "Arrange flowers"),
            make_listing("J_BBBBBB", "Backend Developer", "Ship Rust services"),
            make_listing("J_AAAAAA", "Senior Rust Engineer", "Own the platform"),
        ];

        let hits = rank_listings("rust engineer", listings);

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].item.job.id, "J_AAAAAA");
        assert_eq!(hits[0].score, 0.0);
        assert_eq!(hits[1].item.job.id, "J_BBBBBB");
        assert_eq!(hits[1].score, 0.5);
    }

    #[test]
    fn test_rank_listings_is_case_insensitive() {
        let listings = vec![make_listing("J_AAAAAA", "RUST ENGINEER", "")];

        let hits = rank_listings("Rust", listings);

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].score, 0.0);
    }

    #[test]
    fn test_rank_listings_empty_query_returns_nothing() {
        let listings = vec![make_listing("J_AAAAAA", "Backend Engineer", "Build APIs")];

        assert!(rank_listings("", listings).is_empty());
    }

    #[test]
    fn test_job_validator_rejects_missing_and_negative_fields() {
        let valid = CreateJobRequest {
            designation: Some("Backend Engineer".to_string()),
            department: Some("Engineering".to_string()),
            min_monthly_salary: Some(2000.0),
            max_monthly_salary: Some(4000.0),
            candidate_nationality: Some("Any".to_string()),
            candidate_min_edu_level: Some("Bachelor".to_string()),
            candidate_min_of_exp: Some(2),
            candidate_lang_req: Some("English".to_string()),
            candidate_other_req: None,
            job_responsibilities: Some("Build APIs".to_string()),
            other_info: None,
            created_date: Some("2024-03-01".to_string()),
            last_modified_date: Some("2024-03-01".to_string()),
            recruitment_status: Some("Advertised".to_string()),
            job_type: Some("Full-time".to_string()),
            job_field: Some("Software".to_string()),
            officer_id: Some("HO_AAAAAA".to_string()),
        };
        assert!(JobValidator.validate(&valid).is_valid);

        let negative_salary = CreateJobRequest {
            min_monthly_salary: Some(-1.0),
            ..valid
        };
        let result = JobValidator.validate(&negative_salary);
        assert!(!result.is_valid);
        assert!(result
            .first_message()
            .expect("message")
            .starts_with("Designation, Department, Minimum monthly salary"));

        let missing_exp = CreateJobRequest {
            min_monthly_salary: Some(2000.0),
            candidate_min_of_exp: None,
            ..negative_salary
        };
        assert!(!JobValidator.validate(&missing_exp).is_valid);
    }

    #[tokio::test]
    async fn test_find_company_job_scopes_to_the_company() {
        let pool = memory_pool().await;
        seed_company(&pool, "C_AAAAAA", "https://acme.example").await;
        seed_company(&pool, "C_BBBBBB", "https://globex.example").await;
        seed_job(&pool, "J_AAAAAA", "C_AAAAAA").await;

        let scoped = find_company_job(&pool, "J_AAAAAA", "C_AAAAAA")
            .await
            .expect("scoped lookup");
        assert!(scoped.is_some());

        let foreign = find_company_job(&pool, "J_AAAAAA", "C_BBBBBB")
            .await
            .expect("foreign lookup");
        assert!(foreign.is_none());
    }

    #[tokio::test]
    async fn test_expand_all_joins_the_company_row() {
        let pool = memory_pool().await;
        seed_company(&pool, "C_AAAAAA", "https://acme.example").await;
        seed_job(&pool, "J_AAAAAA", "C_AAAAAA").await;
        seed_job(&pool, "J_BBBBBB", "C_AAAAAA").await;

        let jobs = sqlx::query_as::<_, Job>("SELECT * FROM jobs ORDER BY id")
            .fetch_all(&pool)
            .await
            .expect("jobs");
        let expanded = JobService::new(pool.clone())
            .expand_all(jobs)
            .await
            .expect("expand");

        assert_eq!(expanded.len(), 2);
        assert_eq!(expanded[0].company.name, "Acme");

        // Job fields flatten to the top, the company nests under its own key
        let json = serde_json::to_value(&expanded[0]).expect("serialize listing");
        assert_eq!(json["designation"], "Backend Engineer");
        assert_eq!(json["company"]["country"], "Freedonia");
    }
}
