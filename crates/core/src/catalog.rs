//! Enumerated value constants and validation functions.
//!
//! These must match the CHECK constraints in the table definitions in
//! `renovese-db`. Both the seed catalog and the schema DDL reference these
//! sets, so a mismatch shows up in unit tests rather than at runtime.

/// Entry-level module, no prerequisites.
pub const DIFFICULTY_BEGINNER: &str = "beginner";

/// Assumes the beginner modules have been completed.
pub const DIFFICULTY_INTERMEDIATE: &str = "intermediate";

/// Deep-dive module for experienced users.
pub const DIFFICULTY_ADVANCED: &str = "advanced";

/// All valid `difficulty_level` values.
pub const VALID_DIFFICULTY_LEVELS: &[&str] = &[
    DIFFICULTY_BEGINNER,
    DIFFICULTY_INTERMEDIATE,
    DIFFICULTY_ADVANCED,
];

pub const CONTENT_TYPE_ARTICLE: &str = "article";
pub const CONTENT_TYPE_VIDEO: &str = "video";
pub const CONTENT_TYPE_EXERCISE: &str = "exercise";
pub const CONTENT_TYPE_MEDITATION: &str = "meditation";

/// All valid `content_type` values for modules and template types.
pub const VALID_CONTENT_TYPES: &[&str] = &[
    CONTENT_TYPE_ARTICLE,
    CONTENT_TYPE_VIDEO,
    CONTENT_TYPE_EXERCISE,
    CONTENT_TYPE_MEDITATION,
];

pub const SECTION_TYPE_TEXT: &str = "text";
pub const SECTION_TYPE_VIDEO: &str = "video";
pub const SECTION_TYPE_EXERCISE: &str = "exercise";
pub const SECTION_TYPE_REFLECTION: &str = "reflection";
pub const SECTION_TYPE_QUIZ: &str = "quiz";

/// All valid `section_type` values.
pub const VALID_SECTION_TYPES: &[&str] = &[
    SECTION_TYPE_TEXT,
    SECTION_TYPE_VIDEO,
    SECTION_TYPE_EXERCISE,
    SECTION_TYPE_REFLECTION,
    SECTION_TYPE_QUIZ,
];

/// All valid `user_module_progress.status` values.
pub const VALID_PROGRESS_STATUSES: &[&str] = &["not_started", "in_progress", "completed"];

/// All valid `goals.status` values.
pub const VALID_GOAL_STATUSES: &[&str] = &["active", "completed", "paused"];

/// Inclusive bounds for `user_module_progress.progress_percentage`.
pub const PROGRESS_PERCENTAGE_RANGE: std::ops::RangeInclusive<i32> = 0..=100;

/// Inclusive bounds for `daily_reflections.mood_rating`.
pub const MOOD_RATING_RANGE: std::ops::RangeInclusive<i32> = 1..=10;

/// Validate that a difficulty level is one of the accepted values.
pub fn validate_difficulty_level(level: &str) -> Result<(), String> {
    if VALID_DIFFICULTY_LEVELS.contains(&level) {
        Ok(())
    } else {
        Err(format!(
            "Invalid difficulty_level '{level}'. Must be one of: {}",
            VALID_DIFFICULTY_LEVELS.join(", ")
        ))
    }
}

/// Validate that a content type is one of the accepted values.
pub fn validate_content_type(content_type: &str) -> Result<(), String> {
    if VALID_CONTENT_TYPES.contains(&content_type) {
        Ok(())
    } else {
        Err(format!(
            "Invalid content_type '{content_type}'. Must be one of: {}",
            VALID_CONTENT_TYPES.join(", ")
        ))
    }
}

/// Validate that a section type is one of the accepted values.
pub fn validate_section_type(section_type: &str) -> Result<(), String> {
    if VALID_SECTION_TYPES.contains(&section_type) {
        Ok(())
    } else {
        Err(format!(
            "Invalid section_type '{section_type}'. Must be one of: {}",
            VALID_SECTION_TYPES.join(", ")
        ))
    }
}

/// Validate a progress percentage against the 0..=100 bound.
pub fn validate_progress_percentage(value: i32) -> Result<(), String> {
    if PROGRESS_PERCENTAGE_RANGE.contains(&value) {
        Ok(())
    } else {
        Err(format!(
            "progress_percentage must be between 0 and 100, got {value}"
        ))
    }
}

/// Validate a mood rating against the 1..=10 bound.
pub fn validate_mood_rating(value: i32) -> Result<(), String> {
    if MOOD_RATING_RANGE.contains(&value) {
        Ok(())
    } else {
        Err(format!("mood_rating must be between 1 and 10, got {value}"))
    }
}
