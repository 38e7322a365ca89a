//! HTTP request handlers, one module per resource.

pub mod auth;
pub mod exercises;
pub mod plans;
pub mod user;
pub mod workout_exercises;
pub mod workout_logs;
