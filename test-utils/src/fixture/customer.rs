//! Customer fixtures for creating in-memory test data.

use chrono::Utc;
use entity::customer;
use uuid::Uuid;

/// Default test customer name.
pub const DEFAULT_NAME: &str = "Customer 1";

/// Default test customer email.
pub const DEFAULT_EMAIL: &str = "customer1@example.com";

/// Creates a customer entity model with the given name and default email.
pub fn entity_with_name(name: impl Into<String>) -> customer::Model {
    let now = Utc::now();

    customer::Model {
        id: Uuid::new_v4().to_string(),
        version: 1,
        name: name.into(),
        email: Some(DEFAULT_EMAIL.to_string()),
        created_date: now,
        updated_date: now,
    }
}

/// Creates a customer entity model with default values.
pub fn entity() -> customer::Model {
    entity_with_name(DEFAULT_NAME)
}
