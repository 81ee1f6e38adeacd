//! Company handlers

use axum::extract::{Extension, Json, OriginalUri, Path};
use axum::http::StatusCode;
use tracing::info;

use super::models::{Company, CreateCompanyRequest, UpdateCompanyRequest};
use super::validators::CreateCompanyValidator;
use crate::common::{
    endpoint_path, generate_company_id, ApiError, ApiResponse, SharedState, Validator,
};

async fn find_company(
    db: &sqlx::SqlitePool,
    endpoint: &str,
    id: &str,
) -> Result<Company, ApiError> {
    sqlx::query_as::<_, Company>("SELECT * FROM companies WHERE id = ?")
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| ApiError::not_found(endpoint, "Company id not found."))
}

/// GET /api/company/:id
pub async fn get_company(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
) -> Result<ApiResponse<Company>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    let company = find_company(&state.db, &endpoint, &id).await?;

    Ok(ApiResponse::ok(
        &endpoint,
        &format!("Company {} successfully retrieved.", id),
        company,
    ))
}

/// POST /api/company
pub async fn create_company(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Json(payload): Json<CreateCompanyRequest>,
) -> Result<ApiResponse<Company>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    let check = CreateCompanyValidator.validate(&payload);
    if !check.is_valid {
        return Err(ApiError::from_validation(&endpoint, check));
    }

    let website = payload.website.as_deref().unwrap_or("");
    let taken: Option<(String,)> = sqlx::query_as("SELECT id FROM companies WHERE website = ?")
        .bind(website)
        .fetch_optional(&state.db)
        .await?;
    if taken.is_some() {
        return Err(ApiError::conflict(&endpoint, "Website is already exists."));
    }

    let id = generate_company_id();
    sqlx::query(
        r#"
        INSERT INTO companies (id, name, website, description, address_line1, address_line2,
                               postal_code, state, city, country)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(payload.name.as_deref().unwrap_or(""))
    .bind(website)
    .bind(payload.description.as_deref().unwrap_or(""))
    .bind(payload.address_line1.as_deref().unwrap_or(""))
    .bind(payload.address_line2.as_deref().unwrap_or(""))
    .bind(payload.postal_code.as_deref().unwrap_or(""))
    .bind(payload.state.as_deref().unwrap_or(""))
    .bind(payload.city.as_deref().unwrap_or(""))
    .bind(payload.country.as_deref().unwrap_or(""))
    .execute(&state.db)
    .await?;

    let new_company = sqlx::query_as::<_, Company>("SELECT * FROM companies WHERE id = ?")
        .bind(&id)
        .fetch_one(&state.db)
        .await?;

    info!(company_id = %id, "Created company");

    Ok(ApiResponse::created(
        &endpoint,
        "New company successfully created.",
        new_company,
    ))
}

/// PATCH /api/company/:id
pub async fn update_company(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
    Json(payload): Json<UpdateCompanyRequest>,
) -> Result<ApiResponse<Company>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    find_company(&state.db, &endpoint, &id).await?;

    sqlx::query(
        r#"
        UPDATE companies
        SET name = COALESCE(?, name),
            website = COALESCE(?, website),
            description = COALESCE(?, description),
            address_line1 = COALESCE(?, address_line1),
            address_line2 = ?,
            postal_code = COALESCE(?, postal_code),
            state = COALESCE(?, state),
            city = COALESCE(?, city),
            country = COALESCE(?, country)
        WHERE id = ?
        "#,
    )
    .bind(&payload.name)
    .bind(&payload.website)
    .bind(&payload.description)
    .bind(&payload.address_line1)
    .bind(payload.address_line2.as_deref().unwrap_or(""))
    .bind(&payload.postal_code)
    .bind(&payload.state)
    .bind(&payload.city)
    .bind(&payload.country)
    .bind(&id)
    .execute(&state.db)
    .await?;

    let updated = sqlx::query_as::<_, Company>("SELECT * FROM companies WHERE id = ?")
        .bind(&id)
        .fetch_one(&state.db)
        .await?;

    info!(company_id = %id, "Updated company");

    Ok(ApiResponse::ok(
        &endpoint,
        &format!("Company {} successfully updated.", id),
        updated,
    ))
}

/// DELETE /api/company/:id
pub async fn delete_company(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
) -> Result<ApiResponse<()>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    find_company(&state.db, &endpoint, &id).await?;

    sqlx::query("DELETE FROM companies WHERE id = ?")
        .bind(&id)
        .execute(&state.db)
        .await?;

    info!(company_id = %id, "Deleted company");

    Ok(ApiResponse::new(
        StatusCode::OK,
        &endpoint,
        &format!("Company {} successfully deleted.", id),
        None,
    ))
}
