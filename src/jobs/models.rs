//! Job data models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::companies::models::Company;

/// Job database model
#[derive(FromRow, Serialize, Debug, Clone)]
pub struct Job {
    pub id: String,
    pub designation: String,
    pub department: String,
    pub min_monthly_salary: f64,
    pub max_monthly_salary: f64,
    pub candidate_nationality: String,
    pub candidate_min_edu_level: String,
    pub candidate_min_of_exp: i64,
    pub candidate_lang_req: String,
    pub candidate_other_req: String,
    pub job_responsibilities: String,
    pub other_info: String,
    pub created_date: String,
    pub last_modified_date: String,
    pub recruitment_status: String,
    /// Comma-separated tag list, e.g. "Full-time, Remote"
    pub job_type: String,
    pub job_field: String,
    pub company_id: String,
}

/// Job with its company row joined in
#[derive(Serialize, Debug, Clone)]
pub struct JobWithCompany {
    #[serde(flatten)]
    pub job: Job,
    pub company: Company,
}

/// One scored search result, best matches carry the lowest score
#[derive(Serialize, Debug)]
pub struct SearchHit {
    pub item: JobWithCompany,
    pub score: f64,
}

/// GET /api/job/search query string
#[derive(Deserialize, Debug)]
pub struct JobSearchQuery {
    pub q: Option<String>,
    pub f: Option<String>,
    pub t: Option<String>,
    pub loc: Option<String>,
    pub post: Option<String>,
}

/// GET /api/job/search response payload
#[derive(Serialize, Debug)]
pub struct JobSearchData {
    pub list: Vec<SearchHit>,
    #[serde(rename = "uniqueLocations")]
    pub unique_locations: Vec<String>,
    #[serde(rename = "uniqueStatus")]
    pub unique_status: Vec<String>,
}

/// GET /api/job/company/:company_id query string
#[derive(Deserialize, Debug)]
pub struct CompanyJobsQuery {
    pub status: Option<String>,
}

/// GET /api/job/company/:company_id response payload
#[derive(Serialize, Debug)]
pub struct CompanyJobsData {
    #[serde(rename = "jobList")]
    pub job_list: Vec<JobWithCompany>,
    #[serde(rename = "uniqueField")]
    pub unique_field: Vec<String>,
}

/// POST /api/job request body
///
/// The posting officer stands in for the company; the job lands under
/// whatever company that officer belongs to.
#[derive(Deserialize, Debug)]
pub struct CreateJobRequest {
    pub designation: Option<String>,
    pub department: Option<String>,
    pub min_monthly_salary: Option<f64>,
    pub max_monthly_salary: Option<f64>,
    pub candidate_nationality: Option<String>,
    pub candidate_min_edu_level: Option<String>,
    pub candidate_min_of_exp: Option<i64>,
    pub candidate_lang_req: Option<String>,
    pub candidate_other_req: Option<String>,
    pub job_responsibilities: Option<String>,
    pub other_info: Option<String>,
    pub created_date: Option<String>,
    pub last_modified_date: Option<String>,
    pub recruitment_status: Option<String>,
    pub job_type: Option<String>,
    pub job_field: Option<String>,
    pub officer_id: Option<String>,
}

/// PATCH /api/job/:company_id/:job_id request body
#[derive(Deserialize, Debug)]
pub struct UpdateJobRequest {
    pub designation: Option<String>,
    pub department: Option<String>,
    pub min_monthly_salary: Option<f64>,
    pub max_monthly_salary: Option<f64>,
    pub candidate_nationality: Option<String>,
    pub candidate_min_edu_level: Option<String>,
    pub candidate_min_of_exp: Option<i64>,
    pub candidate_lang_req: Option<String>,
    pub candidate_other_req: Option<String>,
    pub job_responsibilities: Option<String>,
    pub other_info: Option<String>,
    pub last_modified_date: Option<String>,
    pub recruitment_status: Option<String>,
    pub job_type: Option<String>,
    pub job_field: Option<String>,
}

/// PATCH /api/job/recruitment-status/:company_id/:job_id request body
#[derive(Deserialize, Debug)]
pub struct UpdateRecruitmentStatusRequest {
    pub recruitment_status: Option<String>,
}
