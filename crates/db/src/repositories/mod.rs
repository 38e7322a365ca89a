//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod exercise_repo;
pub mod user_repo;
pub mod workout_exercise_repo;
pub mod workout_log_repo;
pub mod workout_plan_repo;

pub use exercise_repo::ExerciseRepo;
pub use user_repo::UserRepo;
pub use workout_exercise_repo::WorkoutExerciseRepo;
pub use workout_log_repo::WorkoutLogRepo;
pub use workout_plan_repo::WorkoutPlanRepo;
