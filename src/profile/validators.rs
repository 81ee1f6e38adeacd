// src/profile/validators.rs

use super::models::{
    CreateEducationRequest, CreateLangAbilityRequest, CreateResumeRequest, CreateSkillRequest,
    CreateWorkExperienceRequest,
};
use crate::common::{ValidationResult, Validator};

pub struct EducationValidator;

impl Validator<CreateEducationRequest> for EducationValidator {
    fn validate(&self, data: &CreateEducationRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        let required = [
            data.graduation_date.as_deref().unwrap_or(""),
            data.qualification.as_deref().unwrap_or(""),
            data.institute_name.as_deref().unwrap_or(""),
            data.institute_address.as_deref().unwrap_or(""),
            data.study_field.as_deref().unwrap_or(""),
            data.grade.as_deref().unwrap_or(""),
            data.candidate_profile_id.as_deref().unwrap_or(""),
        ];

        if required.iter().any(|field| field.is_empty()) {
            result.add_error(
                "body",
                "Garduation date, Qualification, Institute name, Institue address, Study field, Grade and Candidate profile id is required.",
            );
        }

        result
    }
}

pub struct SkillValidator;

impl Validator<CreateSkillRequest> for SkillValidator {
    fn validate(&self, data: &CreateSkillRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        let required = [
            data.skill_name.as_deref().unwrap_or(""),
            data.proficiency.as_deref().unwrap_or(""),
            data.candidate_profile_id.as_deref().unwrap_or(""),
        ];

        if required.iter().any(|field| field.is_empty()) {
            result.add_error(
                "body",
                "Skill name, Proficiency and Candidate profile id is required.",
            );
        }

        result
    }
}

pub struct LangAbilityValidator;

impl Validator<CreateLangAbilityRequest> for LangAbilityValidator {
    fn validate(&self, data: &CreateLangAbilityRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.language_name.as_deref().unwrap_or("").is_empty()
            || data.scale_of_writing.is_none()
            || data.scale_of_speaking.is_none()
            || data.candidate_profile_id.as_deref().unwrap_or("").is_empty()
        {
            result.add_error(
                "body",
                "Language name, Scale of writing, Scale of speaking and Candidate profile id is required.",
            );
        }

        result
    }
}

pub struct WorkExperienceValidator;

impl Validator<CreateWorkExperienceRequest> for WorkExperienceValidator {
    fn validate(&self, data: &CreateWorkExperienceRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        let required = [
            data.position.as_deref().unwrap_or(""),
            data.start_date.as_deref().unwrap_or(""),
            data.end_date.as_deref().unwrap_or(""),
            data.duration.as_deref().unwrap_or(""),
            data.company_name.as_deref().unwrap_or(""),
            data.company_address.as_deref().unwrap_or(""),
            data.candidate_profile_id.as_deref().unwrap_or(""),
        ];

        if required.iter().any(|field| field.is_empty())
            || !data.monthly_salary.is_some_and(|salary| salary >= 0.0)
        {
            result.add_error(
                "body",
                "Position, Duration, Company name, Company address, Monthly salary and Candidate profile id is required.",
            );
        }

        result
    }
}

pub struct ResumeValidator;

impl Validator<CreateResumeRequest> for ResumeValidator {
    fn validate(&self, data: &CreateResumeRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.path.as_deref().unwrap_or("").is_empty()
            || data.candidate_profile_id.as_deref().unwrap_or("").is_empty()
        {
            result.add_error("body", "Path and Candidate profile id is required.");
        }

        result
    }
}
