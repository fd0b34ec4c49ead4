//! API data transfer objects shared by controllers and the OpenAPI document.

pub mod api;
pub mod attempt;
pub mod dictation;
pub mod performance;
pub mod user;
