//! Route table and API documentation.

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        attempt::{AttemptDto, PerformanceUpdateDto, SubmitAttemptDto, SubmittedAttemptDto},
        dictation::{CreateDictationDto, DictationDto},
        performance::PerformanceSummaryDto,
        user::{CreateUserDto, UserDto},
    },
    server::{
        controller::{
            attempt::{self, ATTEMPT_TAG},
            dictation::{self, DICTATION_TAG},
            performance::{self, PERFORMANCE_TAG},
            user::{self, USER_TAG},
        },
        error::{config::ConfigError, AppError},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        user::create_user,
        user::get_user,
        dictation::create_dictation,
        dictation::get_dictations,
        dictation::get_dictation,
        dictation::delete_dictation,
        attempt::submit_attempt,
        attempt::get_attempts,
        attempt::get_attempt,
        attempt::recompute_attempt,
        performance::get_performance,
        performance::get_recent_performance,
    ),
    components(schemas(
        ErrorDto,
        UserDto,
        CreateUserDto,
        DictationDto,
        CreateDictationDto,
        AttemptDto,
        SubmitAttemptDto,
        SubmittedAttemptDto,
        PerformanceUpdateDto,
        PerformanceSummaryDto,
    )),
    tags(
        (name = USER_TAG, description = "User registration and lookup"),
        (name = DICTATION_TAG, description = "Dictation management"),
        (name = ATTEMPT_TAG, description = "Attempt submission and scoring"),
        (name = PERFORMANCE_TAG, description = "Per-dictation performance summaries"),
    )
)]
pub struct ApiDoc;

/// Builds the API router.
///
/// # Arguments
/// - `cors_allowed_origin` - Single origin allowed by CORS, or any origin when `None`
///
/// # Returns
/// - `Ok(Router)` - Router awaiting its `AppState`
/// - `Err(AppError::ConfigErr)` - Origin is not a valid header value
pub fn router(cors_allowed_origin: Option<&str>) -> Result<Router<AppState>, AppError> {
    let cors = match cors_allowed_origin {
        Some(origin) => {
            let origin = HeaderValue::from_str(origin).map_err(|e| ConfigError::InvalidEnvVar {
                name: "CORS_ALLOWED_ORIGIN".to_string(),
                reason: e.to_string(),
            })?;
            CorsLayer::new().allow_origin(origin)
        }
        None => CorsLayer::new().allow_origin(Any),
    }
    .allow_methods(Any)
    .allow_headers(Any);

    let router = Router::new()
        .route("/api/users", post(user::create_user))
        .route("/api/users/{username}", get(user::get_user))
        .route(
            "/api/dictations",
            post(dictation::create_dictation).get(dictation::get_dictations),
        )
        .route(
            "/api/dictations/{id}",
            get(dictation::get_dictation).delete(dictation::delete_dictation),
        )
        .route(
            "/api/attempts",
            post(attempt::submit_attempt).get(attempt::get_attempts),
        )
        .route("/api/attempts/{id}", get(attempt::get_attempt))
        .route(
            "/api/attempts/{id}/recompute",
            post(attempt::recompute_attempt),
        )
        .route("/api/performance", get(performance::get_performance))
        .route(
            "/api/performance/recent",
            get(performance::get_recent_performance),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    Ok(router)
}
