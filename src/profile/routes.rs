//! Routes for the record types hanging off a candidate profile

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{education, lang_ability, resume, skill, work_experience};

/// Creates and returns the profile record router
///
/// Every entity follows the same shape: list by candidate profile id,
/// create from a JSON body, delete by record id.
///
/// # Routes
/// - `GET /api/education/:candidate_profile_id` - Educations of a profile
/// - `POST /api/education` - Create a new education
/// - `DELETE /api/education/:id` - Delete an education
/// - `GET /api/skill/:candidate_profile_id` - Skills of a profile
/// - `POST /api/skill` - Create a new skill
/// - `DELETE /api/skill/:id` - Delete a skill
/// - `GET /api/lang-ability/:candidate_profile_id` - Language abilities of a profile
/// - `POST /api/lang-ability` - Create a new language ability
/// - `DELETE /api/lang-ability/:id` - Delete a language ability
/// - `GET /api/work-experience/:candidate_profile_id` - Work experiences of a profile
/// - `POST /api/work-experience` - Create a new work experience
/// - `DELETE /api/work-experience/:id` - Delete a work experience
/// - `GET /api/resume/:candidate_profile_id` - Resume of a profile
/// - `POST /api/resume` - Create a new resume
/// - `DELETE /api/resume/:id` - Delete a resume and its hosted file
pub fn profile_routes() -> Router {
    Router::new()
        .route("/api/education", post(education::create_education))
        .route(
            "/api/education/:id",
            get(education::list_educations).delete(education::delete_education),
        )
        .route("/api/skill", post(skill::create_skill))
        .route(
            "/api/skill/:id",
            get(skill::list_skills).delete(skill::delete_skill),
        )
        .route("/api/lang-ability", post(lang_ability::create_lang_ability))
        .route(
            "/api/lang-ability/:id",
            get(lang_ability::list_lang_abilities).delete(lang_ability::delete_lang_ability),
        )
        .route(
            "/api/work-experience",
            post(work_experience::create_work_experience),
        )
        .route(
            "/api/work-experience/:id",
            get(work_experience::list_work_experiences)
                .delete(work_experience::delete_work_experience),
        )
        .route("/api/resume", post(resume::create_resume))
        .route(
            "/api/resume/:id",
            get(resume::get_resume).delete(resume::delete_resume),
        )
}
