//! HTTP request handlers.
//!
//! Controllers resolve the caller, convert DTOs into params, call a service and turn the
//! resulting domain model back into a DTO.

pub mod attempt;
pub mod dictation;
pub mod performance;
pub mod user;
