// src/candidates/models.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::auth::models::User;
use crate::profile::models::{Education, LangAbility, Resume, Skill, WorkExperience};

// ============================================================================
// Candidate Profile Models
// ============================================================================

#[derive(FromRow, Serialize, Debug, Clone)]
pub struct CandidateProfile {
    pub id: String,
    pub gender: Option<String>,
    pub location: Option<String>,
    pub date_of_birth: Option<String>,
    pub nationality: Option<String>,
    pub preferred_salary: Option<f64>,
    pub about: Option<String>,
    pub user_id: String,
}

#[derive(Deserialize, Debug)]
pub struct CreateCandidateProfileRequest {
    pub gender: Option<String>,
    pub location: Option<String>,
    pub date_of_birth: Option<String>,
    pub nationality: Option<String>,
    pub preferred_salary: Option<f64>,
    pub about: Option<String>,
    pub user_id: Option<String>,
}

/// PATCH body; `about` is intentionally not updatable here
#[derive(Deserialize, Debug)]
pub struct UpdateCandidateProfileRequest {
    pub gender: Option<String>,
    pub location: Option<String>,
    pub date_of_birth: Option<String>,
    pub nationality: Option<String>,
    pub preferred_salary: Option<f64>,
}

/// A profile with every record type attached, as recruitment views need it
///
/// Serialized field names are the singular relation names clients already
/// consume: `user`, `education`, `lang_ability`, `resume`, `skill`,
/// `work_experience`.
#[derive(Serialize, Debug)]
pub struct CandidateProfileDetail {
    #[serde(flatten)]
    pub profile: CandidateProfile,
    pub user: User,
    pub education: Vec<Education>,
    pub lang_ability: Vec<LangAbility>,
    pub resume: Option<Resume>,
    pub skill: Vec<Skill>,
    pub work_experience: Vec<WorkExperience>,
}

// ============================================================================
// Applicant Models
// ============================================================================

/// Applicant database model; `is_only_wish` rows are wishlist entries
#[derive(FromRow, Serialize, Debug, Clone)]
pub struct Applicant {
    pub id: String,
    pub notes: String,
    pub is_only_wish: bool,
    pub is_viewed: bool,
    pub candidate_profile_id: String,
    pub job_id: String,
}

#[derive(Deserialize, Debug)]
pub struct CreateApplicantRequest {
    pub notes: Option<String>,
    pub is_only_wish: Option<bool>,
    pub candidate_profile_id: Option<String>,
    pub job_id: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct UpdateNotesRequest {
    pub notes: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct UpdateApplyStatusRequest {
    pub is_only_wish: Option<bool>,
}

#[derive(Serialize, Debug)]
pub struct ApplicantWithProfile {
    #[serde(flatten)]
    pub applicant: Applicant,
    pub candidate_profile: CandidateProfileDetail,
}

// ============================================================================
// Shortlisted Candidate Models
// ============================================================================

#[derive(FromRow, Serialize, Debug, Clone)]
pub struct ShortlistedCandidate {
    pub id: String,
    pub notes: String,
    pub is_qualified_interview: bool,
    pub interview_datetime: Option<String>,
    pub interview_platform: Option<String>,
    pub candidate_profile_id: String,
    pub job_id: String,
}

#[derive(Deserialize, Debug)]
pub struct CreateShortlistedRequest {
    pub notes: Option<String>,
    pub is_qualified_interview: Option<bool>,
    pub candidate_profile_id: Option<String>,
    pub job_id: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct UpdateInterviewStatusRequest {
    pub is_qualified_interview: Option<bool>,
}

#[derive(Deserialize, Debug)]
pub struct UpdateInterviewDetailRequest {
    pub interview_datetime: Option<String>,
    pub interview_platform: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct ShortlistedWithProfile {
    #[serde(flatten)]
    pub shortlisted: ShortlistedCandidate,
    pub candidate_profile: CandidateProfileDetail,
}

// ============================================================================
// Successful Candidate Models
// ============================================================================

#[derive(FromRow, Serialize, Debug, Clone)]
pub struct SuccessfulCandidate {
    pub id: String,
    pub notes: String,
    pub monthly_salary: f64,
    pub confirmation_status: String,
    pub candidate_profile_id: String,
    pub job_id: String,
}

#[derive(Deserialize, Debug)]
pub struct CreateSuccessfulRequest {
    pub notes: Option<String>,
    pub monthly_salary: Option<f64>,
    pub confirmation_status: Option<String>,
    pub candidate_profile_id: Option<String>,
    pub job_id: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct UpdateSuccessfulRequest {
    pub confirmation_status: Option<String>,
    pub monthly_salary: Option<f64>,
}

#[derive(Serialize, Debug)]
pub struct SuccessfulWithProfile {
    #[serde(flatten)]
    pub successful: SuccessfulCandidate,
    pub candidate_profile: CandidateProfileDetail,
}
