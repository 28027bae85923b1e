//! Category fixtures for creating in-memory test data.

use chrono::Utc;
use entity::category;
use uuid::Uuid;

/// Default test category description.
pub const DEFAULT_DESCRIPTION: &str = "Ales";

/// Creates a category entity model with the given description.
pub fn entity_with_description(description: impl Into<String>) -> category::Model {
    let now = Utc::now();

    category::Model {
        id: Uuid::new_v4().to_string(),
        version: 1,
        description: description.into(),
        created_date: now,
        last_modified_date: now,
    }
}

/// Creates a category entity model with default values.
pub fn entity() -> category::Model {
    entity_with_description(DEFAULT_DESCRIPTION)
}
