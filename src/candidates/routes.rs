//! Candidate profile and recruitment pipeline routes

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use super::handlers::{applicants, profile, shortlisted, successful};

/// Creates and returns the candidate router
///
/// # Routes
/// - `GET /api/candidate-profile/:user_id` - Profile by user id
/// - `POST /api/candidate-profile` - Create a profile (one per user)
/// - `PATCH /api/candidate-profile/:id` - Update profile attributes
/// - `DELETE /api/candidate-profile/:id` - Delete a profile
/// - `GET /api/applicant/:job_id` - Applications for a job with full profiles
/// - `GET /api/applicant/wishlist/:candidate_profile_id` - Wishlist rows
/// - `GET /api/applicant/applied-job/:candidate_profile_id` - Applied rows
/// - `GET /api/applicant/:job_id/:candidate_profile_id` - Single application
/// - `POST /api/applicant` - Create an application or wishlist entry
/// - `PATCH /api/applicant/:job_id/:candidate_profile_id/notes` - Update notes
/// - `PATCH /api/applicant/:job_id/:candidate_profile_id/apply-status` - Wishlist to application
/// - `PATCH /api/applicant/:job_id/:candidate_profile_id/view-application` - Mark viewed
/// - `DELETE /api/applicant/wishlist/:candidate_profile_id/:job_id` - Remove wishlist entry
/// - `DELETE /api/applicant/applied-job/:candidate_profile_id/:job_id` - Remove application
/// - `GET /api/shortlisted-candidate/:job_id` - Shortlist for a job
/// - `GET /api/shortlisted-candidate/:job_id/interview` - Qualified rows only
/// - `GET /api/shortlisted-candidate/:job_id/interview/:candidate_profile_id` - Single qualified row
/// - `GET /api/shortlisted-candidate/:job_id/:candidate_profile_id` - Single row any state
/// - `POST /api/shortlisted-candidate` - Shortlist a candidate
/// - `PATCH /api/shortlisted-candidate/:job_id/:candidate_profile_id/notes` - Update notes
/// - `PATCH /api/shortlisted-candidate/:job_id/interview-status/:candidate_profile_id` - Qualify
/// - `PATCH /api/shortlisted-candidate/:job_id/interview-detail/:candidate_profile_id` - Schedule
/// - `DELETE /api/shortlisted-candidate/:job_id/:candidate_profile_id` - Remove from shortlist
/// - `GET /api/successful-candidate/:job_id` - Hires for a job
/// - `GET /api/successful-candidate/:job_id/:candidate_profile_id` - Single hire
/// - `POST /api/successful-candidate` - Record a hire
/// - `PATCH /api/successful-candidate/:job_id/:candidate_profile_id` - Offer terms
/// - `PATCH /api/successful-candidate/:job_id/:candidate_profile_id/notes` - Update notes
/// - `DELETE /api/successful-candidate/:job_id/:candidate_profile_id` - Remove a hire
pub fn candidate_routes() -> Router {
    Router::new()
        // Candidate profile routes
        .route("/api/candidate-profile", post(profile::create_profile))
        .route(
            "/api/candidate-profile/:id",
            get(profile::get_profile_by_user)
                .patch(profile::update_profile)
                .delete(profile::delete_profile),
        )
        // Applicant routes
        .route("/api/applicant", post(applicants::create_applicant))
        .route("/api/applicant/:job_id", get(applicants::list_job_applicants))
        .route(
            "/api/applicant/wishlist/:candidate_profile_id",
            get(applicants::list_wishlist),
        )
        .route(
            "/api/applicant/applied-job/:candidate_profile_id",
            get(applicants::list_applied_jobs),
        )
        .route(
            "/api/applicant/:job_id/:candidate_profile_id",
            get(applicants::get_job_applicant),
        )
        .route(
            "/api/applicant/:job_id/:candidate_profile_id/notes",
            patch(applicants::update_notes),
        )
        .route(
            "/api/applicant/:job_id/:candidate_profile_id/apply-status",
            patch(applicants::update_apply_status),
        )
        .route(
            "/api/applicant/:job_id/:candidate_profile_id/view-application",
            patch(applicants::view_application),
        )
        .route(
            "/api/applicant/wishlist/:candidate_profile_id/:job_id",
            delete(applicants::delete_wishlist_entry),
        )
        .route(
            "/api/applicant/applied-job/:candidate_profile_id/:job_id",
            delete(applicants::delete_applied_entry),
        )
        // Shortlisted candidate routes
        .route(
            "/api/shortlisted-candidate",
            post(shortlisted::create_shortlisted),
        )
        .route(
            "/api/shortlisted-candidate/:job_id",
            get(shortlisted::list_shortlisted),
        )
        .route(
            "/api/shortlisted-candidate/:job_id/interview",
            get(shortlisted::list_interview_candidates),
        )
        .route(
            "/api/shortlisted-candidate/:job_id/interview/:candidate_profile_id",
            get(shortlisted::get_interview_candidate),
        )
        .route(
            "/api/shortlisted-candidate/:job_id/:candidate_profile_id",
            get(shortlisted::get_shortlisted_candidate).delete(shortlisted::delete_shortlisted),
        )
        .route(
            "/api/shortlisted-candidate/:job_id/:candidate_profile_id/notes",
            patch(shortlisted::update_notes),
        )
        .route(
            "/api/shortlisted-candidate/:job_id/interview-status/:candidate_profile_id",
            patch(shortlisted::update_interview_status),
        )
        .route(
            "/api/shortlisted-candidate/:job_id/interview-detail/:candidate_profile_id",
            patch(shortlisted::update_interview_detail),
        )
        // Successful candidate routes
        .route(
            "/api/successful-candidate",
            post(successful::create_successful),
        )
        .route(
            "/api/successful-candidate/:job_id",
            get(successful::list_successful),
        )
        .route(
            "/api/successful-candidate/:job_id/:candidate_profile_id",
            get(successful::get_successful_candidate)
                .patch(successful::update_successful)
                .delete(successful::delete_successful),
        )
        .route(
            "/api/successful-candidate/:job_id/:candidate_profile_id/notes",
            patch(successful::update_notes),
        )
}
