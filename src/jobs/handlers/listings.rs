//! Job listing handlers, the read and mutation routes around one posting

use axum::extract::{Extension, Json, OriginalUri, Path, Query};
use axum::http::StatusCode;
use tracing::info;

use super::{check_company, find_company_job};
use crate::common::{
    endpoint_path, generate_job_id, ApiError, ApiResponse, SharedState, Validator,
};
use crate::jobs::models::{
    CompanyJobsData, CompanyJobsQuery, CreateJobRequest, Job, JobWithCompany, UpdateJobRequest,
    UpdateRecruitmentStatusRequest,
};
use crate::jobs::services::JobService;
use crate::jobs::validators::{JobUpdateValidator, JobValidator, RecruitmentStatusValidator};
use crate::officers::models::Officer;

/// GET /api/job/:id
pub async fn get_job(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
) -> Result<ApiResponse<JobWithCompany>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    let job = sqlx::query_as::<_, Job>("SELECT * FROM jobs WHERE id = ?")
        .bind(&id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found(&endpoint, "Job id not found."))?;

    let detail = JobService::new(state.db.clone()).with_company(job).await?;

    Ok(ApiResponse::ok(
        &endpoint,
        &format!("Job {} successfully retrieved.", id),
        detail,
    ))
}

/// GET /api/job/company/:company_id
pub async fn list_company_jobs(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path(company_id): Path<String>,
    Query(query): Query<CompanyJobsQuery>,
) -> Result<ApiResponse<CompanyJobsData>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    check_company(&state.db, &endpoint, &company_id).await?;

    let jobs = match query.status.as_deref() {
        Some(status) => sqlx::query_as::<_, Job>(
            "SELECT * FROM jobs WHERE company_id = ? AND recruitment_status = ?",
        )
        .bind(&company_id)
        .bind(status)
        .fetch_all(&state.db)
        .await?,
        None => sqlx::query_as::<_, Job>("SELECT * FROM jobs WHERE company_id = ?")
            .bind(&company_id)
            .fetch_all(&state.db)
            .await?,
    };

    let mut unique_field: Vec<String> = Vec::new();
    for job in &jobs {
        if !unique_field.contains(&job.job_field) {
            unique_field.push(job.job_field.clone());
        }
    }

    let job_list = JobService::new(state.db.clone()).expand_all(jobs).await?;

    Ok(ApiResponse::ok(
        &endpoint,
        &format!(
            "List of jobs for company {} successfully retrieved.",
            company_id
        ),
        CompanyJobsData {
            job_list,
            unique_field,
        },
    ))
}

/// GET /api/job/company/:company_id/field/:field
pub async fn list_company_jobs_by_field(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path((company_id, field)): Path<(String, String)>,
) -> Result<ApiResponse<Vec<Job>>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    check_company(&state.db, &endpoint, &company_id).await?;

    // Public board view, so only advertised postings count here
    let jobs = sqlx::query_as::<_, Job>(
        "SELECT * FROM jobs WHERE company_id = ? AND job_field = ? AND recruitment_status = 'Advertised'",
    )
    .bind(&company_id)
    .bind(&field)
    .fetch_all(&state.db)
    .await?;

    Ok(ApiResponse::ok(
        &endpoint,
        &format!(
            "List of jobs for company {} from {} field successfully retrieved.",
            company_id, field
        ),
        jobs,
    ))
}

/// GET /api/job/company/:company_id/recruitment_status/:recruitment_status
pub async fn list_company_jobs_by_status(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path((company_id, recruitment_status)): Path<(String, String)>,
) -> Result<ApiResponse<Vec<Job>>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    check_company(&state.db, &endpoint, &company_id).await?;

    let jobs = sqlx::query_as::<_, Job>(
        "SELECT * FROM jobs WHERE company_id = ? AND recruitment_status = ?",
    )
    .bind(&company_id)
    .bind(&recruitment_status)
    .fetch_all(&state.db)
    .await?;

    Ok(ApiResponse::ok(
        &endpoint,
        &format!(
            "List of jobs for company {} that currently {} status successfully retrieved.",
            company_id, recruitment_status
        ),
        jobs,
    ))
}

/// POST /api/job
pub async fn create_job(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Json(payload): Json<CreateJobRequest>,
) -> Result<ApiResponse<Job>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    let validation = JobValidator.validate(&payload);
    if !validation.is_valid {
        return Err(ApiError::from_validation(&endpoint, validation));
    }

    let officer_id = payload.officer_id.as_deref().unwrap_or("");
    let officer = sqlx::query_as::<_, Officer>("SELECT * FROM officers WHERE id = ?")
        .bind(officer_id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found(&endpoint, "Officer id not found"))?;

    if officer.company_id.is_empty() {
        return Err(ApiError::not_found(
            &endpoint,
            &format!("Company for officer {} is not found.", officer_id),
        ));
    }

    let company: Option<(String,)> = sqlx::query_as("SELECT id FROM companies WHERE id = ?")
        .bind(&officer.company_id)
        .fetch_optional(&state.db)
        .await?;
    if company.is_none() {
        return Err(ApiError::not_found(&endpoint, "Company id not found."));
    }

    let id = generate_job_id();
    sqlx::query(
        r#"
        INSERT INTO jobs
            (id, designation, department, min_monthly_salary, max_monthly_salary,
             candidate_nationality, candidate_min_edu_level, candidate_min_of_exp,
             candidate_lang_req, candidate_other_req, job_responsibilities, other_info,
             created_date, last_modified_date, recruitment_status, job_type, job_field,
             company_id)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(&payload.designation)
    .bind(&payload.department)
    .bind(payload.min_monthly_salary)
    .bind(payload.max_monthly_salary)
    .bind(&payload.candidate_nationality)
    .bind(&payload.candidate_min_edu_level)
    .bind(payload.candidate_min_of_exp)
    .bind(&payload.candidate_lang_req)
    .bind(payload.candidate_other_req.as_deref().unwrap_or(""))
    .bind(&payload.job_responsibilities)
    .bind(payload.other_info.as_deref().unwrap_or(""))
    .bind(&payload.created_date)
    .bind(&payload.last_modified_date)
    .bind(&payload.recruitment_status)
    .bind(&payload.job_type)
    .bind(&payload.job_field)
    .bind(&officer.company_id)
    .execute(&state.db)
    .await?;

    let new_job = sqlx::query_as::<_, Job>("SELECT * FROM jobs WHERE id = ?")
        .bind(&id)
        .fetch_one(&state.db)
        .await?;

    info!(job_id = %id, company_id = %officer.company_id, "Created job");

    Ok(ApiResponse::created(
        &endpoint,
        "New job successfully created.",
        new_job,
    ))
}

/// PATCH /api/job/:company_id/:job_id
pub async fn update_job(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path((company_id, job_id)): Path<(String, String)>,
    Json(payload): Json<UpdateJobRequest>,
) -> Result<ApiResponse<Job>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    let validation = JobUpdateValidator.validate(&payload);
    if !validation.is_valid {
        return Err(ApiError::from_validation(&endpoint, validation));
    }

    check_company(&state.db, &endpoint, &company_id).await?;

    if find_company_job(&state.db, &job_id, &company_id)
        .await?
        .is_none()
    {
        return Err(ApiError::not_found(&endpoint, "Job not found."));
    }

    sqlx::query(
        r#"
        UPDATE jobs
        SET designation = COALESCE(?, designation),
            department = COALESCE(?, department),
            min_monthly_salary = COALESCE(?, min_monthly_salary),
            max_monthly_salary = COALESCE(?, max_monthly_salary),
            candidate_nationality = COALESCE(?, candidate_nationality),
            candidate_min_edu_level = COALESCE(?, candidate_min_edu_level),
            candidate_min_of_exp = COALESCE(?, candidate_min_of_exp),
            candidate_lang_req = COALESCE(?, candidate_lang_req),
            candidate_other_req = COALESCE(?, candidate_other_req),
            job_responsibilities = COALESCE(?, job_responsibilities),
            other_info = COALESCE(?, other_info),
            last_modified_date = COALESCE(?, last_modified_date),
            recruitment_status = COALESCE(?, recruitment_status),
            job_type = COALESCE(?, job_type),
            job_field = COALESCE(?, job_field)
        WHERE id = ?
        "#,
    )
    .bind(&payload.designation)
    .bind(&payload.department)
    .bind(payload.min_monthly_salary)
    .bind(payload.max_monthly_salary)
    .bind(&payload.candidate_nationality)
    .bind(&payload.candidate_min_edu_level)
    .bind(payload.candidate_min_of_exp)
    .bind(&payload.candidate_lang_req)
    .bind(&payload.candidate_other_req)
    .bind(&payload.job_responsibilities)
    .bind(&payload.other_info)
    .bind(&payload.last_modified_date)
    .bind(&payload.recruitment_status)
    .bind(&payload.job_type)
    .bind(&payload.job_field)
    .bind(&job_id)
    .execute(&state.db)
    .await?;

    let updated = sqlx::query_as::<_, Job>("SELECT * FROM jobs WHERE id = ?")
        .bind(&job_id)
        .fetch_one(&state.db)
        .await?;

    info!(job_id = %job_id, company_id = %company_id, "Updated job");

    Ok(ApiResponse::ok(
        &endpoint,
        &format!(
            "Job {} from company {} successfully updated.",
            job_id, company_id
        ),
        updated,
    ))
}

/// PATCH /api/job/recruitment-status/:company_id/:job_id
pub async fn update_recruitment_status(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path((company_id, job_id)): Path<(String, String)>,
    Json(payload): Json<UpdateRecruitmentStatusRequest>,
) -> Result<ApiResponse<Job>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    let validation = RecruitmentStatusValidator.validate(&payload);
    if !validation.is_valid {
        return Err(ApiError::from_validation(&endpoint, validation));
    }

    check_company(&state.db, &endpoint, &company_id).await?;

    if find_company_job(&state.db, &job_id, &company_id)
        .await?
        .is_none()
    {
        return Err(ApiError::not_found(&endpoint, "Job not found."));
    }

    sqlx::query("UPDATE jobs SET recruitment_status = ? WHERE id = ?")
        .bind(&payload.recruitment_status)
        .bind(&job_id)
        .execute(&state.db)
        .await?;

    let updated = sqlx::query_as::<_, Job>("SELECT * FROM jobs WHERE id = ?")
        .bind(&job_id)
        .fetch_one(&state.db)
        .await?;

    info!(job_id = %job_id, status = ?payload.recruitment_status, "Updated recruitment status");

    Ok(ApiResponse::ok(
        &endpoint,
        &format!(
            "Recruitment status for job {} from company {} successfully updated.",
            job_id, company_id
        ),
        updated,
    ))
}

/// DELETE /api/job/:company_id/:job_id
pub async fn delete_job(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path((company_id, job_id)): Path<(String, String)>,
) -> Result<ApiResponse<()>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    check_company(&state.db, &endpoint, &company_id).await?;

    if find_company_job(&state.db, &job_id, &company_id)
        .await?
        .is_none()
    {
        return Err(ApiError::not_found(&endpoint, "Job not found."));
    }

    sqlx::query("DELETE FROM jobs WHERE id = ?")
        .bind(&job_id)
        .execute(&state.db)
        .await?;

    info!(job_id = %job_id, company_id = %company_id, "Deleted job");

    Ok(ApiResponse::new(
        StatusCode::OK,
        &endpoint,
        &format!(
            "Job {} from company {} successfully deleted.",
            job_id, company_id
        ),
        None,
    ))
}
