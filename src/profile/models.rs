//! Candidate profile record models
//!
//! The five child-record types hanging off a candidate profile, plus the
//! request bodies of their create routes.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Education database model
#[derive(FromRow, Serialize, Debug, Clone)]
pub struct Education {
    pub id: String,
    pub graduation_date: String,
    pub qualification: String,
    pub institute_name: String,
    pub institute_address: String,
    pub study_field: String,
    pub grade: String,
    pub candidate_profile_id: String,
}

/// Skill database model
#[derive(FromRow, Serialize, Debug, Clone)]
pub struct Skill {
    pub id: String,
    pub skill_name: String,
    pub proficiency: String,
    pub candidate_profile_id: String,
}

/// Language ability database model; scales are 1-10 self ratings
#[derive(FromRow, Serialize, Debug, Clone)]
pub struct LangAbility {
    pub id: String,
    pub language_name: String,
    pub scale_of_writing: i64,
    pub scale_of_speaking: i64,
    pub candidate_profile_id: String,
}

/// Work experience database model
#[derive(FromRow, Serialize, Debug, Clone)]
pub struct WorkExperience {
    pub id: String,
    pub position: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub duration: String,
    pub company_name: String,
    pub company_address: String,
    pub monthly_salary: f64,
    pub candidate_profile_id: String,
}

/// Resume database model, one per profile; path points at the file host
#[derive(FromRow, Serialize, Debug, Clone)]
pub struct Resume {
    pub id: String,
    pub path: String,
    pub candidate_profile_id: String,
}

/// POST /api/education request body
#[derive(Deserialize, Debug)]
pub struct CreateEducationRequest {
    pub graduation_date: Option<String>,
    pub qualification: Option<String>,
    pub institute_name: Option<String>,
    pub institute_address: Option<String>,
    pub study_field: Option<String>,
    pub grade: Option<String>,
    pub candidate_profile_id: Option<String>,
}

/// POST /api/skill request body
#[derive(Deserialize, Debug)]
pub struct CreateSkillRequest {
    pub skill_name: Option<String>,
    pub proficiency: Option<String>,
    pub candidate_profile_id: Option<String>,
}

/// POST /api/lang-ability request body
#[derive(Deserialize, Debug)]
pub struct CreateLangAbilityRequest {
    pub language_name: Option<String>,
    pub scale_of_writing: Option<i64>,
    pub scale_of_speaking: Option<i64>,
    pub candidate_profile_id: Option<String>,
}

/// POST /api/work-experience request body
#[derive(Deserialize, Debug)]
pub struct CreateWorkExperienceRequest {
    pub position: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub duration: Option<String>,
    pub company_name: Option<String>,
    pub company_address: Option<String>,
    pub monthly_salary: Option<f64>,
    pub candidate_profile_id: Option<String>,
}

/// POST /api/resume request body
#[derive(Deserialize, Debug)]
pub struct CreateResumeRequest {
    pub path: Option<String>,
    pub candidate_profile_id: Option<String>,
}
