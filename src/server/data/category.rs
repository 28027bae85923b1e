use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::data::next_version;
use crate::server::model::{
    category::{Category, CategoryParams, CategoryPatch},
    page::PageRequest,
};

pub struct CategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CategoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Category>, DbErr> {
        entity::prelude::Category::find_by_id(id.to_string())
            .one(self.db)
            .await?
            .map(Category::from_entity)
            .transpose()
    }

    pub async fn exists(&self, id: Uuid) -> Result<bool, DbErr> {
        let count = entity::prelude::Category::find_by_id(id.to_string())
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets a page of categories ordered by description with the total count
    pub async fn get_paginated(&self, page: PageRequest) -> Result<(Vec<Category>, u64), DbErr> {
        let paginator = entity::prelude::Category::find()
            .order_by_asc(entity::category::Column::Description)
            .order_by_asc(entity::category::Column::Id)
            .paginate(self.db, page.page_size);

        let total = paginator.num_items().await?;
        let categories = paginator
            .fetch_page(page.index())
            .await?
            .into_iter()
            .map(Category::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((categories, total))
    }

    pub async fn create(&self, params: CategoryParams) -> Result<Category, DbErr> {
        let now = Utc::now();

        let category = entity::category::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            version: ActiveValue::Set(1),
            description: ActiveValue::Set(params.description),
            created_date: ActiveValue::Set(now),
            last_modified_date: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Category::from_entity(category)
    }

    /// Replaces the description. `Err(DbErr::RecordNotUpdated)` on version mismatch.
    pub async fn update(
        &self,
        id: Uuid,
        params: CategoryParams,
    ) -> Result<Option<Category>, DbErr> {
        self.patch(
            id,
            CategoryPatch {
                version: params.version,
                description: Some(params.description),
            },
        )
        .await
    }

    /// Overwrites the supplied fields. `Err(DbErr::RecordNotUpdated)` on version mismatch.
    pub async fn patch(&self, id: Uuid, patch: CategoryPatch) -> Result<Option<Category>, DbErr> {
        let Some(existing) = entity::prelude::Category::find_by_id(id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };
        let expected = patch.version.unwrap_or(existing.version);

        let mut active = entity::category::ActiveModel {
            version: ActiveValue::Set(next_version(expected)?),
            last_modified_date: ActiveValue::Set(Utc::now()),
            ..Default::default()
        };
        if let Some(description) = patch.description {
            active.description = ActiveValue::Set(description);
        }

        let result = entity::prelude::Category::update_many()
            .set(active)
            .filter(entity::category::Column::Id.eq(id.to_string()))
            .filter(entity::category::Column::Version.eq(expected))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DbErr::RecordNotUpdated);
        }

        self.get_by_id(id).await
    }

    /// Deletes a category, returning false when the id was unknown
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::Category::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
