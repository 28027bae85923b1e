use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::data::next_version;
use crate::server::model::{
    customer::{Customer, CustomerParams, CustomerPatch},
    page::PageRequest,
};

pub struct CustomerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CustomerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Customer>, DbErr> {
        entity::prelude::Customer::find_by_id(id.to_string())
            .one(self.db)
            .await?
            .map(Customer::from_entity)
            .transpose()
    }

    pub async fn exists(&self, id: Uuid) -> Result<bool, DbErr> {
        let count = entity::prelude::Customer::find_by_id(id.to_string())
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets a page of customers ordered by name with the total count
    pub async fn get_paginated(&self, page: PageRequest) -> Result<(Vec<Customer>, u64), DbErr> {
        let paginator = entity::prelude::Customer::find()
            .order_by_asc(entity::customer::Column::Name)
            .order_by_asc(entity::customer::Column::Id)
            .paginate(self.db, page.page_size);

        let total = paginator.num_items().await?;
        let customers = paginator
            .fetch_page(page.index())
            .await?
            .into_iter()
            .map(Customer::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((customers, total))
    }

    pub async fn create(&self, params: CustomerParams) -> Result<Customer, DbErr> {
        let now = Utc::now();

        let customer = entity::customer::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            version: ActiveValue::Set(1),
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            created_date: ActiveValue::Set(now),
            updated_date: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Customer::from_entity(customer)
    }

    /// Replaces name and email. `Err(DbErr::RecordNotUpdated)` on version mismatch.
    pub async fn update(
        &self,
        id: Uuid,
        params: CustomerParams,
    ) -> Result<Option<Customer>, DbErr> {
        let Some(existing) = entity::prelude::Customer::find_by_id(id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };
        let expected = params.version.unwrap_or(existing.version);

        let active = entity::customer::ActiveModel {
            version: ActiveValue::Set(next_version(expected)?),
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            updated_date: ActiveValue::Set(Utc::now()),
            ..Default::default()
        };

        self.update_versioned(id, expected, active).await
    }

    /// Overwrites the supplied fields. `Err(DbErr::RecordNotUpdated)` on version mismatch.
    pub async fn patch(&self, id: Uuid, patch: CustomerPatch) -> Result<Option<Customer>, DbErr> {
        let Some(existing) = entity::prelude::Customer::find_by_id(id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };
        let expected = patch.version.unwrap_or(existing.version);

        let mut active = entity::customer::ActiveModel {
            version: ActiveValue::Set(next_version(expected)?),
            updated_date: ActiveValue::Set(Utc::now()),
            ..Default::default()
        };
        if let Some(name) = patch.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(email) = patch.email {
            active.email = ActiveValue::Set(Some(email));
        }

        self.update_versioned(id, expected, active).await
    }

    /// Deletes a customer, returning false when the id was unknown
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::Customer::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn update_versioned(
        &self,
        id: Uuid,
        expected: i32,
        active: entity::customer::ActiveModel,
    ) -> Result<Option<Customer>, DbErr> {
        let result = entity::prelude::Customer::update_many()
            .set(active)
            .filter(entity::customer::Column::Id.eq(id.to_string()))
            .filter(entity::customer::Column::Version.eq(expected))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DbErr::RecordNotUpdated);
        }

        self.get_by_id(id).await
    }
}
