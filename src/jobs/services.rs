//! Company joins and search ranking for job listings

use std::cmp::Ordering;

use sqlx::SqlitePool;

use super::models::{Job, JobWithCompany, SearchHit};
use crate::companies::models::Company;

/// Joins company rows onto job rows for the listing responses
pub struct JobService {
    db: SqlitePool,
}

impl JobService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn with_company(&self, job: Job) -> Result<JobWithCompany, sqlx::Error> {
        let company = sqlx::query_as::<_, Company>("SELECT * FROM companies WHERE id = ?")
            .bind(&job.company_id)
            .fetch_one(&self.db)
            .await?;

        Ok(JobWithCompany { job, company })
    }

    pub async fn expand_all(&self, jobs: Vec<Job>) -> Result<Vec<JobWithCompany>, sqlx::Error> {
        let mut expanded = Vec::with_capacity(jobs.len());
        for job in jobs {
            expanded.push(self.with_company(job).await?);
        }
        Ok(expanded)
    }
}

/// Ranks listings against a free-text query.
///
/// The query splits into lowercase tokens and each listing keeps its
/// best-matching text field (designation, responsibilities, other info
/// or field name). A score of 0.0 means every token landed in one
/// field; listings no token touched drop out entirely. Results come
/// back sorted best-first, ties keeping their fetch order.
pub fn rank_listings(query: &str, listings: Vec<JobWithCompany>) -> Vec<SearchHit> {
    let tokens: Vec<String> = query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect();
    if tokens.is_empty() {
        return Vec::new();
    }

    let mut hits: Vec<SearchHit> = listings
        .into_iter()
        .filter_map(|listing| {
            score_listing(&tokens, &listing).map(|score| SearchHit {
                item: listing,
                score,
            })
        })
        .collect();

    hits.sort_by(|a, b| a.score.partial_cmp(&b.score).unwrap_or(Ordering::Equal));
    hits
}

fn score_listing(tokens: &[String], listing: &JobWithCompany) -> Option<f64> {
    let fields = [
        &listing.job.designation,
        &listing.job.job_responsibilities,
        &listing.job.other_info,
        &listing.job.job_field,
    ];

    let mut best = 0;
    for field in fields {
        let haystack = field.to_lowercase();
        let matched = tokens
            .iter()
            .filter(|token| haystack.contains(token.as_str()))
            .count();
        best = best.max(matched);
    }

    if best == 0 {
        return None;
    }

    Some(1.0 - best as f64 / tokens.len() as f64)
}
