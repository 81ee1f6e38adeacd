// src/jobs/validators.rs

use super::models::{CreateJobRequest, UpdateJobRequest, UpdateRecruitmentStatusRequest};
use crate::common::{ValidationResult, Validator};

pub struct JobValidator;

impl Validator<CreateJobRequest> for JobValidator {
    fn validate(&self, data: &CreateJobRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        let required = [
            data.designation.as_deref().unwrap_or(""),
            data.department.as_deref().unwrap_or(""),
            data.candidate_nationality.as_deref().unwrap_or(""),
            data.candidate_min_edu_level.as_deref().unwrap_or(""),
            data.candidate_lang_req.as_deref().unwrap_or(""),
            data.job_responsibilities.as_deref().unwrap_or(""),
            data.created_date.as_deref().unwrap_or(""),
            data.last_modified_date.as_deref().unwrap_or(""),
            data.recruitment_status.as_deref().unwrap_or(""),
            data.job_type.as_deref().unwrap_or(""),
            data.job_field.as_deref().unwrap_or(""),
            data.officer_id.as_deref().unwrap_or(""),
        ];

        if required.iter().any(|field| field.is_empty())
            || !data.min_monthly_salary.is_some_and(|salary| salary >= 0.0)
            || !data.max_monthly_salary.is_some_and(|salary| salary >= 0.0)
            || data.candidate_min_of_exp.is_none()
        {
            result.add_error(
                "body",
                "Designation, Department, Minimum monthly salary, Maximum monthly salary, Candidate nationality, Candidate minimum education level, Candidate minimum work experience, Candidate language requirement(s), Job responsibilities, Created date, Last modified date, Recruitment status, Job type, Job field and Officer id is required.",
            );
        }

        result
    }
}

pub struct JobUpdateValidator;

impl Validator<UpdateJobRequest> for JobUpdateValidator {
    fn validate(&self, data: &UpdateJobRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        let required = [
            data.designation.as_deref().unwrap_or(""),
            data.department.as_deref().unwrap_or(""),
            data.candidate_nationality.as_deref().unwrap_or(""),
            data.candidate_min_edu_level.as_deref().unwrap_or(""),
            data.candidate_lang_req.as_deref().unwrap_or(""),
            data.job_responsibilities.as_deref().unwrap_or(""),
            data.last_modified_date.as_deref().unwrap_or(""),
            data.recruitment_status.as_deref().unwrap_or(""),
            data.job_type.as_deref().unwrap_or(""),
            data.job_field.as_deref().unwrap_or(""),
        ];

        if required.iter().any(|field| field.is_empty())
            || !data.min_monthly_salary.is_some_and(|salary| salary >= 0.0)
            || !data.max_monthly_salary.is_some_and(|salary| salary >= 0.0)
            || data.candidate_min_of_exp.is_none()
        {
            result.add_error(
                "body",
                "Designation, Department, Minimum monthly salary, Maximum monthly salary, Candidate nationality, Candidate minimum education level, Candidate minimum work experience, Candidate language requirement(s), Job responsibilities, Last modified date, Recruitment status, Job type and Job field is required.",
            );
        }

        result
    }
}

pub struct RecruitmentStatusValidator;

impl Validator<UpdateRecruitmentStatusRequest> for RecruitmentStatusValidator {
    fn validate(&self, data: &UpdateRecruitmentStatusRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.recruitment_status.as_deref().unwrap_or("").is_empty() {
            result.add_error("recruitment_status", "Recruitment status is required.");
        }

        result
    }
}
