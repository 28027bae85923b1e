//! Category domain models and parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use uuid::Uuid;

use crate::{model::category::CategoryDto, server::util::parse::parse_uuid};

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: Uuid,
    pub version: i32,
    pub description: String,
    pub created_date: DateTime<Utc>,
    pub last_modified_date: DateTime<Utc>,
}

impl Category {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::category::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: parse_uuid(&entity.id)?,
            version: entity.version,
            description: entity.description,
            created_date: entity.created_date,
            last_modified_date: entity.last_modified_date,
        })
    }

    pub fn into_dto(self) -> CategoryDto {
        CategoryDto {
            id: Some(self.id),
            version: Some(self.version),
            description: Some(self.description),
            created_date: Some(self.created_date),
            last_modified_date: Some(self.last_modified_date),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryParams {
    pub version: Option<i32>,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryPatch {
    pub version: Option<i32>,
    pub description: Option<String>,
}
