//! Job board search

use axum::extract::{Extension, OriginalUri, Query};
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

use crate::common::{endpoint_path, ApiError, ApiResponse, SharedState};
use crate::jobs::models::{Job, JobSearchData, JobSearchQuery};
use crate::jobs::services::{rank_listings, JobService};

/// GET /api/job/search
///
/// Ranks advertised postings against `q`, then narrows by the optional
/// filters: `f` wants an exact field, `t` a comma list matched against
/// the posting's own type tags, `loc` a "State, Country" pair and
/// `post` a recency window in days.
pub async fn search_jobs(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Query(params): Query<JobSearchQuery>,
) -> Result<ApiResponse<JobSearchData>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    let advertised = sqlx::query_as::<_, Job>(
        "SELECT * FROM jobs WHERE recruitment_status = 'Advertised'",
    )
    .fetch_all(&state.db)
    .await?;
    let listings = JobService::new(state.db.clone()).expand_all(advertised).await?;

    let query = params.q.as_deref().unwrap_or("");
    let mut list = rank_listings(query, listings);

    if let Some(field) = params.f.as_deref() {
        list.retain(|hit| hit.item.job.job_field == field);
    }

    if let Some(wanted) = params.t.as_deref() {
        if wanted != "any" {
            let criteria: Vec<&str> = wanted.split(',').map(str::trim).collect();
            list.retain(|hit| {
                let tags: Vec<&str> = hit.item.job.job_type.split(',').map(str::trim).collect();
                criteria.iter().any(|criterion| tags.contains(criterion))
            });
        }
    }

    if let Some(location) = params.loc.as_deref() {
        match location.split_once(", ") {
            Some((state_name, country)) => list.retain(|hit| {
                hit.item.company.state == state_name && hit.item.company.country == country
            }),
            // Not a "State, Country" pair, so nothing can match it
            None => list.clear(),
        }
    }

    if let Some(posted) = params.post.as_deref() {
        if let Some(days) = recency_window(posted) {
            let cutoff = Utc::now() - Duration::days(days);
            list.retain(|hit| {
                parse_listing_date(&hit.item.job.last_modified_date)
                    .map(|date| date >= cutoff)
                    .unwrap_or(false)
            });
        }
    }

    let mut unique_locations: Vec<String> = Vec::new();
    for hit in &list {
        let location = format!("{}, {}", hit.item.company.state, hit.item.company.country);
        if !unique_locations.contains(&location) {
            unique_locations.push(location);
        }
    }

    let mut unique_status: Vec<String> = Vec::new();
    for hit in &list {
        if !unique_status.contains(&hit.item.job.recruitment_status) {
            unique_status.push(hit.item.job.recruitment_status.clone());
        }
    }

    Ok(ApiResponse::ok(
        &endpoint,
        &format!("List of jobs for search query {}", query),
        JobSearchData {
            list,
            unique_locations,
            unique_status,
        },
    ))
}

/// "any" and unrecognized values disable the window
fn recency_window(posted: &str) -> Option<i64> {
    match posted {
        "1" => Some(1),
        "7" => Some(7),
        "14" => Some(14),
        "30" => Some(30),
        _ => None,
    }
}

/// Listing dates arrive as client strings, RFC 3339 or a bare date
fn parse_listing_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| Utc.from_utc_datetime(&midnight))
}
