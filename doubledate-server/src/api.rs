use std::str::FromStr;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};

use doubledate_core::{Locale, PublicUser, UserPatch, UserStats};

use crate::errors::ServerError;
use crate::AppState;

pub const ADMIN_CODE_HEADER: &str = "x-admin-code";

fn admin_code(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(ADMIN_CODE_HEADER)
        .and_then(|value| value.to_str().ok())
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    message: &'static str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub openai_key: String,
}

/// Patch body for `/{id}/admin-update`. Each field is independently
/// optional; absent fields leave the record untouched.
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AdminUpdateRequest {
    pub openai_key: Option<String>,
    pub locale: Option<String>,
}

#[derive(Serialize)]
pub struct DeleteResponse {
    ok: bool,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        message: "Double Date API",
    })
}

/// The admin page is a collaborator asset, read from disk at request time
/// so it can be edited without a restart.
pub async fn admin_page(State(state): State<Arc<AppState>>) -> Result<Html<String>, ServerError> {
    let page = tokio::fs::read_to_string(&state.admin_page).await?;
    Ok(Html(page))
}

pub async fn create_user(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<CreateUserRequest>,
) -> Result<Json<PublicUser>, ServerError> {
    state.auth.check(admin_code(&headers))?;

    let user = state.registry.create(&req.id, &req.openai_key)?;
    tracing::info!(id = %user.id, "Created user");

    Ok(Json(user))
}

pub async fn list_users(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<PublicUser>>, ServerError> {
    state.auth.check(admin_code(&headers))?;

    Ok(Json(state.registry.list()))
}

pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<DeleteResponse>, ServerError> {
    state.auth.check(admin_code(&headers))?;

    state.registry.delete(&id)?;
    tracing::info!(%id, "Deleted user");

    Ok(Json(DeleteResponse { ok: true }))
}

pub async fn admin_update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(req): Json<AdminUpdateRequest>,
) -> Result<Json<PublicUser>, ServerError> {
    state.auth.check(admin_code(&headers))?;

    let patch = UserPatch {
        secret_key: req.openai_key,
        // Anything other than an exact locale name is silently ignored
        locale: req
            .locale
            .as_deref()
            .and_then(|value| Locale::from_str(value).ok()),
    };

    let user = state.registry.update(&id, patch)?;
    tracing::info!(%id, "Updated user");

    Ok(Json(user))
}

/// Public read path, deliberately unauthenticated and infallible: unknown
/// ids get the same sentinel payload as blank records.
pub async fn user_stats(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Json<UserStats> {
    Json(state.registry.stats(&id))
}
