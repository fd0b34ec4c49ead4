mod attempt;
mod dictation;
mod performance;
mod user;
