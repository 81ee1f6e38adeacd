//! Officer handlers

use axum::extract::{Extension, Json, OriginalUri, Path};
use axum::http::StatusCode;
use sqlx::SqlitePool;
use tracing::info;

use super::models::{CreateOfficerRequest, Officer, OfficerWithUser, UpdateOfficerRequest};
use crate::auth::models::User;
use crate::common::{endpoint_path, generate_officer_id, ApiError, ApiResponse, SharedState};

async fn check_company(db: &SqlitePool, endpoint: &str, company_id: &str) -> Result<(), ApiError> {
    let company: Option<(String,)> = sqlx::query_as("SELECT id FROM companies WHERE id = ?")
        .bind(company_id)
        .fetch_optional(db)
        .await?;
    if company.is_none() {
        return Err(ApiError::not_found(endpoint, "Company id not found."));
    }
    Ok(())
}

/// GET /api/officer/company/:company_id
pub async fn list_company_officers(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path(company_id): Path<String>,
) -> Result<ApiResponse<Vec<OfficerWithUser>>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    check_company(&state.db, &endpoint, &company_id).await?;

    let officers = sqlx::query_as::<_, Officer>("SELECT * FROM officers WHERE company_id = ?")
        .bind(&company_id)
        .fetch_all(&state.db)
        .await?;

    let mut officer_list = Vec::with_capacity(officers.len());
    for officer in officers {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(&officer.user_id)
            .fetch_one(&state.db)
            .await?;
        officer_list.push(OfficerWithUser { officer, user });
    }

    Ok(ApiResponse::ok(
        &endpoint,
        &format!(
            "List of officers from company {} successfully retrieved.",
            company_id
        ),
        officer_list,
    ))
}

/// GET /api/officer/resign/:company_id
pub async fn list_resigned_officers(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path(company_id): Path<String>,
) -> Result<ApiResponse<Vec<Officer>>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    check_company(&state.db, &endpoint, &company_id).await?;

    let officers = sqlx::query_as::<_, Officer>(
        "SELECT * FROM officers WHERE company_id = ? AND is_resigned = 1",
    )
    .bind(&company_id)
    .fetch_all(&state.db)
    .await?;

    Ok(ApiResponse::ok(
        &endpoint,
        &format!(
            "List of officers from company {} that want to resign successfully retrieved.",
            company_id
        ),
        officers,
    ))
}

/// GET /api/officer/:user_id
pub async fn get_officer_by_user(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path(user_id): Path<String>,
) -> Result<ApiResponse<Officer>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    let officer = sqlx::query_as::<_, Officer>("SELECT * FROM officers WHERE user_id = ?")
        .bind(&user_id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found(&endpoint, "Officer id not found."))?;

    Ok(ApiResponse::ok(
        &endpoint,
        "Officer successfully retrieved.",
        officer,
    ))
}

/// POST /api/officer
pub async fn create_officer(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Json(payload): Json<CreateOfficerRequest>,
) -> Result<ApiResponse<Officer>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    let position = payload.position.as_deref().unwrap_or("");
    let user_id = payload.user_id.as_deref().unwrap_or("");
    let company_id = payload.company_id.as_deref().unwrap_or("");

    if position.is_empty() || user_id.is_empty() || company_id.is_empty() {
        return Err(ApiError::bad_request(
            &endpoint,
            "Position, User id and Company id is required.",
        ));
    }

    let user: Option<(String,)> = sqlx::query_as("SELECT id FROM users WHERE id = ?")
        .bind(user_id)
        .fetch_optional(&state.db)
        .await?;
    if user.is_none() {
        return Err(ApiError::not_found(&endpoint, "User id not found."));
    }

    check_company(&state.db, &endpoint, company_id).await?;

    let existing: Option<(String,)> =
        sqlx::query_as("SELECT id FROM officers WHERE user_id = ? AND company_id = ?")
            .bind(user_id)
            .bind(company_id)
            .fetch_optional(&state.db)
            .await?;
    if existing.is_some() {
        return Err(ApiError::conflict(
            &endpoint,
            &format!("User id {} already included in {}.", user_id, company_id),
        ));
    }

    let id = generate_officer_id();
    sqlx::query(
        "INSERT INTO officers (id, position, is_resigned, user_id, company_id) VALUES (?, ?, 0, ?, ?)",
    )
    .bind(&id)
    .bind(position)
    .bind(user_id)
    .bind(company_id)
    .execute(&state.db)
    .await?;

    let new_officer = sqlx::query_as::<_, Officer>("SELECT * FROM officers WHERE id = ?")
        .bind(&id)
        .fetch_one(&state.db)
        .await?;

    info!(officer_id = %id, company_id = %company_id, "Created officer");

    Ok(ApiResponse::created(
        &endpoint,
        "New officer successfully created.",
        new_officer,
    ))
}

/// PATCH /api/officer/:id
pub async fn update_officer(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
    Json(payload): Json<UpdateOfficerRequest>,
) -> Result<ApiResponse<Officer>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    let existing: Option<(String,)> = sqlx::query_as("SELECT id FROM officers WHERE id = ?")
        .bind(&id)
        .fetch_optional(&state.db)
        .await?;
    if existing.is_none() {
        return Err(ApiError::not_found(
            &endpoint,
            &format!("Officer {} is not found.", id),
        ));
    }

    sqlx::query(
        r#"
        UPDATE officers
        SET position = COALESCE(?, position),
            is_resigned = COALESCE(?, is_resigned),
            user_id = COALESCE(?, user_id),
            company_id = COALESCE(?, company_id)
        WHERE id = ?
        "#,
    )
    .bind(&payload.position)
    .bind(payload.is_resigned)
    .bind(&payload.user_id)
    .bind(&payload.company_id)
    .bind(&id)
    .execute(&state.db)
    .await?;

    let updated = sqlx::query_as::<_, Officer>("SELECT * FROM officers WHERE id = ?")
        .bind(&id)
        .fetch_one(&state.db)
        .await?;

    info!(officer_id = %id, "Updated officer");

    Ok(ApiResponse::ok(
        &endpoint,
        &format!("Officer {} successfully updated.", id),
        updated,
    ))
}

/// DELETE /api/officer/:id
pub async fn delete_officer(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
) -> Result<ApiResponse<()>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    let existing: Option<(String,)> = sqlx::query_as("SELECT id FROM officers WHERE id = ?")
        .bind(&id)
        .fetch_optional(&state.db)
        .await?;
    if existing.is_none() {
        return Err(ApiError::not_found(
            &endpoint,
            &format!("Officer {} is not found.", id),
        ));
    }

    sqlx::query("DELETE FROM officers WHERE id = ?")
        .bind(&id)
        .execute(&state.db)
        .await?;

    info!(officer_id = %id, "Deleted officer");

    Ok(ApiResponse::new(
        StatusCode::OK,
        &endpoint,
        &format!("Officer {} successfully deleted.", id),
        None,
    ))
}
