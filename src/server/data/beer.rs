use chrono::Utc;
use sea_orm::{
    sea_query::LikeExpr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::data::next_version;
use crate::server::model::{
    beer::{Beer, BeerFilter, BeerParams, BeerPatch},
    page::PageRequest,
};

pub struct BeerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BeerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets a beer by ID, `None` when unknown
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Beer>, DbErr> {
        entity::prelude::Beer::find_by_id(id.to_string())
            .one(self.db)
            .await?
            .map(Beer::from_entity)
            .transpose()
    }

    pub async fn exists(&self, id: Uuid) -> Result<bool, DbErr> {
        let count = entity::prelude::Beer::find_by_id(id.to_string())
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets a page of beers matching the filter, ordered by name, with the total match count
    pub async fn get_paginated(
        &self,
        filter: &BeerFilter,
        page: PageRequest,
    ) -> Result<(Vec<Beer>, u64), DbErr> {
        let mut query = entity::prelude::Beer::find();

        // SQLite LIKE folds ASCII case only; wildcards in the input match literally
        if let Some(beer_name) = &filter.beer_name {
            let pattern =
                LikeExpr::new(format!("%{}%", escape_like(beer_name))).escape(LIKE_ESCAPE);
            query = query.filter(entity::beer::Column::BeerName.like(pattern));
        }
        if let Some(beer_style) = filter.beer_style {
            query = query.filter(entity::beer::Column::BeerStyle.eq(beer_style));
        }

        let paginator = query
            .order_by_asc(entity::beer::Column::BeerName)
            .order_by_asc(entity::beer::Column::Id)
            .paginate(self.db, page.page_size);

        let total = paginator.num_items().await?;
        let beers = paginator
            .fetch_page(page.index())
            .await?
            .into_iter()
            .map(Beer::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((beers, total))
    }

    /// Inserts a new beer with a generated id, version 1 and current timestamps
    pub async fn create(&self, params: BeerParams) -> Result<Beer, DbErr> {
        let now = Utc::now();

        let beer = entity::beer::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            version: ActiveValue::Set(1),
            beer_name: ActiveValue::Set(params.beer_name),
            beer_style: ActiveValue::Set(params.beer_style),
            upc: ActiveValue::Set(params.upc),
            quantity_on_hand: ActiveValue::Set(params.quantity_on_hand),
            price: ActiveValue::Set(params.price),
            created_date: ActiveValue::Set(now),
            updated_date: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Beer::from_entity(beer)
    }

    /// Replaces every mutable field of a beer
    ///
    /// # Returns
    /// - `Ok(Some(Beer))` - Updated beer with its version incremented
    /// - `Ok(None)` - No beer with this id
    /// - `Err(DbErr::RecordNotUpdated)` - Version mismatch
    pub async fn update(&self, id: Uuid, params: BeerParams) -> Result<Option<Beer>, DbErr> {
        let Some(existing) = entity::prelude::Beer::find_by_id(id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };
        let expected = params.version.unwrap_or(existing.version);

        let active = entity::beer::ActiveModel {
            version: ActiveValue::Set(next_version(expected)?),
            beer_name: ActiveValue::Set(params.beer_name),
            beer_style: ActiveValue::Set(params.beer_style),
            upc: ActiveValue::Set(params.upc),
            quantity_on_hand: ActiveValue::Set(params.quantity_on_hand),
            price: ActiveValue::Set(params.price),
            updated_date: ActiveValue::Set(Utc::now()),
            ..Default::default()
        };

        self.update_versioned(id, expected, active).await
    }

    /// Overwrites only the fields present in the patch
    ///
    /// # Returns
    /// - `Ok(Some(Beer))` - Patched beer with its version incremented
    /// - `Ok(None)` - No beer with this id
    /// - `Err(DbErr::RecordNotUpdated)` - Version mismatch
    pub async fn patch(&self, id: Uuid, patch: BeerPatch) -> Result<Option<Beer>, DbErr> {
        let Some(existing) = entity::prelude::Beer::find_by_id(id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };
        let expected = patch.version.unwrap_or(existing.version);

        let mut active = entity::beer::ActiveModel {
            version: ActiveValue::Set(next_version(expected)?),
            updated_date: ActiveValue::Set(Utc::now()),
            ..Default::default()
        };
        if let Some(beer_name) = patch.beer_name {
            active.beer_name = ActiveValue::Set(beer_name);
        }
        if let Some(beer_style) = patch.beer_style {
            active.beer_style = ActiveValue::Set(beer_style);
        }
        if let Some(upc) = patch.upc {
            active.upc = ActiveValue::Set(upc);
        }
        if let Some(quantity_on_hand) = patch.quantity_on_hand {
            active.quantity_on_hand = ActiveValue::Set(Some(quantity_on_hand));
        }
        if let Some(price) = patch.price {
            active.price = ActiveValue::Set(price);
        }

        self.update_versioned(id, expected, active).await
    }

    /// Deletes a beer, returning false when the id was unknown
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::Beer::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Applies `active` only if the stored version still equals `expected`
    async fn update_versioned(
        &self,
        id: Uuid,
        expected: i32,
        active: entity::beer::ActiveModel,
    ) -> Result<Option<Beer>, DbErr> {
        let result = entity::prelude::Beer::update_many()
            .set(active)
            .filter(entity::beer::Column::Id.eq(id.to_string()))
            .filter(entity::beer::Column::Version.eq(expected))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DbErr::RecordNotUpdated);
        }

        self.get_by_id(id).await
    }
}

/// Escape character for `LIKE` name patterns.
const LIKE_ESCAPE: char = '!';

/// Escapes `LIKE` wildcards so the value matches as a plain substring.
fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, LIKE_ESCAPE | '%' | '_') {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}
