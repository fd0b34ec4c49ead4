pub use super::attempt::Entity as Attempt;
pub use super::dictation::Entity as Dictation;
pub use super::performance_summary::Entity as PerformanceSummary;
pub use super::user::Entity as User;
