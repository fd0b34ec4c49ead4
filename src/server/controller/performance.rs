use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{api::ErrorDto, performance::PerformanceSummaryDto},
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::performance::PerformanceSummary,
        service::performance::PerformanceService,
        state::AppState,
    },
};

/// Tag for grouping performance endpoints in OpenAPI documentation
pub static PERFORMANCE_TAG: &str = "performance";

#[derive(Deserialize)]
pub struct PerformanceFilter {
    pub user_id: Option<i32>,
    pub limit: Option<u64>,
}

/// List every performance summary for a user.
#[utoipa::path(
    get,
    path = "/api/performance",
    tag = PERFORMANCE_TAG,
    params(
        ("user_id" = Option<i32>, Query, description = "User to list (default: caller)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved summaries", body = Vec<PerformanceSummaryDto>),
        (status = 401, description = "Caller not identified", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_performance(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(filter): Query<PerformanceFilter>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let summaries = PerformanceService::new(&state.db)
        .get_by_user(filter.user_id.unwrap_or(user.id))
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(summaries))))
}

/// List a user's most recently practiced dictations.
///
/// `limit` defaults to 10 and is clamped to 1..=100.
#[utoipa::path(
    get,
    path = "/api/performance/recent",
    tag = PERFORMANCE_TAG,
    params(
        ("user_id" = Option<i32>, Query, description = "User to list (default: caller)"),
        ("limit" = Option<u64>, Query, description = "Maximum entries (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved summaries", body = Vec<PerformanceSummaryDto>),
        (status = 401, description = "Caller not identified", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_recent_performance(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(filter): Query<PerformanceFilter>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let summaries = PerformanceService::new(&state.db)
        .get_recent(filter.user_id.unwrap_or(user.id), filter.limit)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(summaries))))
}

fn into_dtos(summaries: Vec<PerformanceSummary>) -> Vec<PerformanceSummaryDto> {
    summaries.into_iter().map(|s| s.into_dto()).collect()
}
