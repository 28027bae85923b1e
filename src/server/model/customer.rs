//! Customer domain models and parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use uuid::Uuid;

use crate::{model::customer::CustomerDto, server::util::parse::parse_uuid};

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: Uuid,
    pub version: i32,
    pub name: String,
    pub email: Option<String>,
    pub created_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
}

impl Customer {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::customer::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: parse_uuid(&entity.id)?,
            version: entity.version,
            name: entity.name,
            email: entity.email,
            created_date: entity.created_date,
            updated_date: entity.updated_date,
        })
    }

    pub fn into_dto(self) -> CustomerDto {
        CustomerDto {
            id: Some(self.id),
            version: Some(self.version),
            name: Some(self.name),
            email: self.email,
            created_date: Some(self.created_date),
            update_date: Some(self.updated_date),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CustomerParams {
    pub version: Option<i32>,
    pub name: String,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerPatch {
    pub version: Option<i32>,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl CustomerPatch {
    /// Copies the supplied fields onto `customer`.
    pub fn apply_to(&self, customer: &mut Customer) {
        if let Some(name) = &self.name {
            customer.name = name.clone();
        }
        if let Some(email) = &self.email {
            customer.email = Some(email.clone());
        }
    }
}
