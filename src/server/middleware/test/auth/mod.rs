use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission, USER_ID_HEADER},
};
use axum::http::{HeaderMap, HeaderValue};
use test_utils::{builder::TestBuilder, factory};

mod require;

fn identity(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_ID_HEADER, HeaderValue::from_str(value).unwrap());
    headers
}
