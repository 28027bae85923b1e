use sea_orm::DbErr;
use uuid::Uuid;

/// Parses a UUID stored as `CHAR(36)` text.
///
/// # Arguments
/// - `value` - The column value to parse
///
/// # Returns
/// - `Ok(Uuid)` - Successfully parsed identifier
/// - `Err(DbErr::Custom)` - The stored text is not a valid UUID
pub fn parse_uuid(value: &str) -> Result<Uuid, DbErr> {
    Uuid::parse_str(value)
        .map_err(|e| DbErr::Custom(format!("Failed to parse UUID from '{}': {}", value, e)))
}
