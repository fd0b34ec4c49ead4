//! SeaORM entities for the dictation practice schema.

pub mod prelude;

pub mod attempt;
pub mod dictation;
pub mod performance_summary;
pub mod user;
