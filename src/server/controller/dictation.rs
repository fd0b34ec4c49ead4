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
        dictation::{CreateDictationDto, DictationDto},
    },
    server::{
        error::AppError,
        middleware::auth::{authorize, AuthGuard, Permission},
        model::dictation::{CreateDictationParams, DictationKind},
        service::dictation::DictationService,
        state::AppState,
    },
};

/// Tag for grouping dictation endpoints in OpenAPI documentation
pub static DICTATION_TAG: &str = "dictation";

#[derive(Deserialize)]
pub struct DictationFilter {
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Create a dictation owned by the caller.
///
/// # Returns
/// - `201 Created` - Dictation created
/// - `400 Bad Request` - Unknown type, or the content/audio URL the type needs is missing
/// - `401 Unauthorized` - Missing or unknown caller identity
#[utoipa::path(
    post,
    path = "/api/dictations",
    tag = DICTATION_TAG,
    request_body = CreateDictationDto,
    responses(
        (status = 201, description = "Successfully created dictation", body = DictationDto),
        (status = 400, description = "Invalid dictation data", body = ErrorDto),
        (status = 401, description = "Caller not identified", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_dictation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateDictationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let params = CreateDictationParams::from_dto(user.id, payload)?;

    let dictation = DictationService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(dictation.into_dto())))
}

/// List the caller's dictations, newest first.
#[utoipa::path(
    get,
    path = "/api/dictations",
    tag = DICTATION_TAG,
    params(
        ("type" = Option<String>, Query, description = "Restrict to `text` or `audio`")
    ),
    responses(
        (status = 200, description = "Successfully retrieved dictations", body = Vec<DictationDto>),
        (status = 400, description = "Unknown dictation type", body = ErrorDto),
        (status = 401, description = "Caller not identified", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dictations(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(filter): Query<DictationFilter>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let kind = filter
        .kind
        .as_deref()
        .map(DictationKind::parse)
        .transpose()?;

    let dictations = DictationService::new(&state.db)
        .get_by_user(user.id, kind)
        .await?;

    let dtos: Vec<DictationDto> = dictations.into_iter().map(|d| d.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a single dictation.
#[utoipa::path(
    get,
    path = "/api/dictations/{id}",
    tag = DICTATION_TAG,
    params(
        ("id" = i32, Path, description = "Dictation ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved dictation", body = DictationDto),
        (status = 401, description = "Caller not identified", body = ErrorDto),
        (status = 404, description = "Dictation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dictation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let dictation = DictationService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Dictation {} not found", id)))?;

    Ok((StatusCode::OK, Json(dictation.into_dto())))
}

/// Delete a dictation together with its attempts and performance summaries.
///
/// # Access Control
/// - `Owner` - Only the user who created the dictation
///
/// # Returns
/// - `204 No Content` - Dictation and dependents deleted
/// - `403 Forbidden` - Caller does not own the dictation
/// - `404 Not Found` - No dictation with that ID
/// - `503 Service Unavailable` - Deadline exceeded; nothing was deleted
#[utoipa::path(
    delete,
    path = "/api/dictations/{id}",
    tag = DICTATION_TAG,
    params(
        ("id" = i32, Path, description = "Dictation ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted dictation"),
        (status = 401, description = "Caller not identified", body = ErrorDto),
        (status = 403, description = "Caller does not own the dictation", body = ErrorDto),
        (status = 404, description = "Dictation not found", body = ErrorDto),
        (status = 503, description = "Transaction aborted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_dictation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let service = DictationService::new(&state.db).with_timeout(state.transaction_timeout);

    let dictation = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Dictation {} not found", id)))?;

    authorize(&user, &[Permission::Owner(dictation.user_id)])?;

    if !service.delete(id).await? {
        return Err(AppError::NotFound(format!("Dictation {} not found", id)));
    }

    Ok(StatusCode::NO_CONTENT)
}
