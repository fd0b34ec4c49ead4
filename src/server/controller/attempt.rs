use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        attempt::{AttemptDto, SubmitAttemptDto, SubmittedAttemptDto},
    },
    server::{
        error::AppError,
        middleware::auth::{authorize, AuthGuard, Permission},
        model::attempt::{Attempt, SubmitAttemptParams},
        service::attempt::AttemptService,
        state::AppState,
    },
};

/// Tag for grouping attempt endpoints in OpenAPI documentation
pub static ATTEMPT_TAG: &str = "attempt";

#[derive(Deserialize)]
pub struct AttemptFilter {
    pub dictation_id: Option<i32>,
    pub user_id: Option<i32>,
}

/// Submit a typed attempt for scoring.
///
/// The attempt is scored against the dictation's current text and the caller's
/// performance summary for that dictation is updated in the same transaction.
///
/// # Returns
/// - `201 Created` - Stored attempt and the updated summary figures
/// - `400 Bad Request` - `time_spent` negative or not finite
/// - `404 Not Found` - Dictation does not exist
/// - `503 Service Unavailable` - Deadline exceeded or concurrent writers kept winning
#[utoipa::path(
    post,
    path = "/api/attempts",
    tag = ATTEMPT_TAG,
    request_body = SubmitAttemptDto,
    responses(
        (status = 201, description = "Successfully submitted attempt", body = SubmittedAttemptDto),
        (status = 400, description = "Invalid attempt data", body = ErrorDto),
        (status = 401, description = "Caller not identified", body = ErrorDto),
        (status = 404, description = "Dictation not found", body = ErrorDto),
        (status = 503, description = "Transaction aborted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_attempt(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SubmitAttemptDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let params = SubmitAttemptParams::from_dto(user.id, payload)?;

    let submitted = AttemptService::new(&state.db)
        .with_timeout(state.transaction_timeout)
        .submit(params)
        .await?;

    Ok((StatusCode::CREATED, Json(submitted.into_dto())))
}

/// List attempts for a dictation, or for a user when no dictation is given.
///
/// Without either filter the caller's own attempts are returned.
#[utoipa::path(
    get,
    path = "/api/attempts",
    tag = ATTEMPT_TAG,
    params(
        ("dictation_id" = Option<i32>, Query, description = "List attempts for this dictation"),
        ("user_id" = Option<i32>, Query, description = "List attempts by this user (default: caller)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved attempts", body = Vec<AttemptDto>),
        (status = 401, description = "Caller not identified", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_attempts(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(filter): Query<AttemptFilter>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let service = AttemptService::new(&state.db);

    let attempts = match filter.dictation_id {
        Some(dictation_id) => service.get_by_dictation(dictation_id).await?,
        None => service.get_by_user(filter.user_id.unwrap_or(user.id)).await?,
    };

    let dtos: Vec<AttemptDto> = attempts.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get one of the caller's attempts.
///
/// # Access Control
/// - `Owner` - Only the user who submitted the attempt
#[utoipa::path(
    get,
    path = "/api/attempts/{id}",
    tag = ATTEMPT_TAG,
    params(
        ("id" = i32, Path, description = "Attempt ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved attempt", body = AttemptDto),
        (status = 401, description = "Caller not identified", body = ErrorDto),
        (status = 403, description = "Caller did not submit the attempt", body = ErrorDto),
        (status = 404, description = "Attempt not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_attempt(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let attempt = owned_attempt(&state, &headers, id).await?;

    Ok((StatusCode::OK, Json(attempt.into_dto())))
}

/// Rescore an attempt against its dictation's current text.
///
/// Only the attempt's own figures change; the performance summary keeps the values
/// recorded at submission time.
///
/// # Access Control
/// - `Owner` - Only the user who submitted the attempt
#[utoipa::path(
    post,
    path = "/api/attempts/{id}/recompute",
    tag = ATTEMPT_TAG,
    params(
        ("id" = i32, Path, description = "Attempt ID")
    ),
    responses(
        (status = 200, description = "Successfully rescored attempt", body = AttemptDto),
        (status = 401, description = "Caller not identified", body = ErrorDto),
        (status = 403, description = "Caller did not submit the attempt", body = ErrorDto),
        (status = 404, description = "Attempt or dictation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn recompute_attempt(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let attempt = owned_attempt(&state, &headers, id).await?;

    let attempt = AttemptService::new(&state.db).recompute(attempt).await?;

    Ok((StatusCode::OK, Json(attempt.into_dto())))
}

async fn owned_attempt(state: &AppState, headers: &HeaderMap, id: i32) -> Result<Attempt, AppError> {
    let user = AuthGuard::new(&state.db, headers).require(&[]).await?;

    let attempt = AttemptService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Attempt {} not found", id)))?;

    authorize(&user, &[Permission::Owner(attempt.user_id)])?;

    Ok(attempt)
}
