//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` DTOs for the requests that touch the entity

pub mod exercise;
pub mod user;
pub mod workout_exercise;
pub mod workout_log;
pub mod workout_plan;
