//! Job routes

use axum::{
    routing::{get, patch, post},
    Router,
};

use super::handlers::{listings, search};

/// Creates and returns the job router
///
/// # Routes
/// - `GET /api/job/search` - Ranked search over advertised postings
/// - `GET /api/job/:id` - Single job with its company
/// - `GET /api/job/company/:company_id` - Jobs for a company, optional `?status=`
/// - `GET /api/job/company/:company_id/field/:field` - Advertised jobs in a field
/// - `GET /api/job/company/:company_id/recruitment_status/:recruitment_status` - Jobs by status
/// - `POST /api/job` - Create a job under the posting officer's company
/// - `PATCH /api/job/:company_id/:job_id` - Full update of a posting
/// - `PATCH /api/job/recruitment-status/:company_id/:job_id` - Status only
/// - `DELETE /api/job/:company_id/:job_id` - Delete a posting
pub fn job_routes() -> Router {
    Router::new()
        .route("/api/job", post(listings::create_job))
        .route("/api/job/search", get(search::search_jobs))
        .route("/api/job/:id", get(listings::get_job))
        .route(
            "/api/job/company/:company_id",
            get(listings::list_company_jobs),
        )
        .route(
            "/api/job/company/:company_id/field/:field",
            get(listings::list_company_jobs_by_field),
        )
        .route(
            "/api/job/company/:company_id/recruitment_status/:recruitment_status",
            get(listings::list_company_jobs_by_status),
        )
        .route(
            "/api/job/:id/:job_id",
            patch(listings::update_job).delete(listings::delete_job),
        )
        .route(
            "/api/job/recruitment-status/:company_id/:job_id",
            patch(listings::update_recruitment_status),
        )
}
