//! Exercise catalog domain rules.
//!
//! Pure logic only: difficulty-level parsing and target-muscle
//! normalization. Persistence lives in `ironlog-db`.

use std::str::FromStr;

/// Difficulty rating of a catalog exercise.
///
/// Stored as its canonical string form in the `difficulty_level` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifficultyLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl DifficultyLevel {
    /// Canonical string form, matching what clients send and the DB stores.
    pub fn as_str(self) -> &'static str {
        match self {
            DifficultyLevel::Beginner => "Beginner",
            DifficultyLevel::Intermediate => "Intermediate",
            DifficultyLevel::Advanced => "Advanced",
        }
    }
}

impl FromStr for DifficultyLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Beginner" => Ok(DifficultyLevel::Beginner),
            "Intermediate" => Ok(DifficultyLevel::Intermediate),
            "Advanced" => Ok(DifficultyLevel::Advanced),
            other => Err(format!(
                "unknown difficulty level '{other}', expected Beginner, Intermediate or Advanced"
            )),
        }
    }
}

/// Split a comma-separated muscle string into a list.
///
/// Each entry is trimmed; entries are otherwise kept verbatim. Callers
/// that already have a list pass it through untouched (the split rule
/// applies only to single-string input).
pub fn split_muscle_list(raw: &str) -> Vec<String> {
    raw.split(',').map(|m| m.trim().to_string()).collect()
}
