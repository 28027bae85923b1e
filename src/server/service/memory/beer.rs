use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::check_version;
use crate::server::{
    data::memory::MemoryStore,
    error::AppError,
    model::{
        beer::{Beer, BeerFilter, BeerParams, BeerPatch},
        category::Category,
        page::{Page, PageRequest},
    },
    service::beer::BeerService,
};

pub struct MemoryBeerService {
    store: MemoryStore,
}

impl MemoryBeerService {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BeerService for MemoryBeerService {
    async fn list_beers(
        &self,
        filter: BeerFilter,
        page: PageRequest,
    ) -> Result<Page<Beer>, AppError> {
        let graph = self.store.read().await;

        let mut beers: Vec<Beer> = graph
            .beers
            .values()
            .filter(|beer| filter.matches(beer))
            .cloned()
            .collect();
        beers.sort_by(|a, b| a.beer_name.cmp(&b.beer_name).then(a.id.cmp(&b.id)));

        let page = Page::from_sorted(beers, page);
        if filter.show_inventory {
            Ok(page)
        } else {
            Ok(page.map(Beer::without_inventory))
        }
    }

    async fn get_beer_by_id(&self, id: Uuid) -> Result<Option<Beer>, AppError> {
        Ok(self.store.read().await.beers.get(&id).cloned())
    }

    async fn save_new_beer(&self, params: BeerParams) -> Result<Beer, AppError> {
        let beer = self.store.write().await.insert_beer(params);

        tracing::info!("Created beer {} ({})", beer.id, beer.beer_name);

        Ok(beer)
    }

    async fn update_beer_by_id(
        &self,
        id: Uuid,
        params: BeerParams,
    ) -> Result<Option<Beer>, AppError> {
        let mut graph = self.store.write().await;
        let Some(beer) = graph.beers.get_mut(&id) else {
            return Ok(None);
        };
        check_version("Beer", id, params.version, beer.version)?;

        beer.beer_name = params.beer_name;
        beer.beer_style = params.beer_style;
        beer.upc = params.upc;
        beer.quantity_on_hand = params.quantity_on_hand;
        beer.price = params.price;
        beer.version += 1;
        beer.updated_date = Utc::now();

        Ok(Some(beer.clone()))
    }

    async fn patch_beer_by_id(
        &self,
        id: Uuid,
        patch: BeerPatch,
    ) -> Result<Option<Beer>, AppError> {
        let mut graph = self.store.write().await;
        let Some(beer) = graph.beers.get_mut(&id) else {
            return Ok(None);
        };
        check_version("Beer", id, patch.version, beer.version)?;

        patch.apply_to(beer);
        beer.version += 1;
        beer.updated_date = Utc::now();

        Ok(Some(beer.clone()))
    }

    async fn delete_beer_by_id(&self, id: Uuid) -> Result<bool, AppError> {
        let mut graph = self.store.write().await;

        if graph.beer_has_lines(&id) {
            return Err(AppError::Conflict(format!(
                "Beer {} is referenced by order lines",
                id
            )));
        }

        Ok(graph.remove_beer(&id))
    }

    async fn list_categories(&self, beer_id: Uuid) -> Result<Option<Vec<Category>>, AppError> {
        let graph = self.store.read().await;

        if !graph.beers.contains_key(&beer_id) {
            return Ok(None);
        }

        Ok(Some(graph.categories_of(&beer_id)))
    }

    async fn add_category(&self, beer_id: Uuid, category_id: Uuid) -> Result<bool, AppError> {
        Ok(self.store.write().await.add_category(beer_id, category_id))
    }

    async fn remove_category(
        &self,
        beer_id: Uuid,
        category_id: Uuid,
    ) -> Result<bool, AppError> {
        Ok(self.store.write().await.remove_category(beer_id, category_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity::sea_orm_active_enums::BeerStyle;
    use rust_decimal::Decimal;

    fn params(name: &str, style: BeerStyle) -> BeerParams {
        BeerParams {
            version: None,
            beer_name: name.to_string(),
            beer_style: style,
            upc: "23423424234".to_string(),
            quantity_on_hand: Some(5),
            price: Decimal::new(1199, 2),
        }
    }

    #[tokio::test]
    async fn saves_new_beer_with_version_one() -> Result<(), AppError> {
        let service = MemoryBeerService::new(MemoryStore::new());

        let beer = service
            .save_new_beer(params("My Beer", BeerStyle::PaleAle))
            .await?;

        assert_eq!(beer.version, 1);
        assert_eq!(service.get_beer_by_id(beer.id).await?, Some(beer));

        Ok(())
    }

    #[tokio::test]
    async fn filters_by_name_case_insensitively() -> Result<(), AppError> {
        let service = MemoryBeerService::new(MemoryStore::new());
        service.save_new_beer(params("Hazy IPA", BeerStyle::Ipa)).await?;
        service.save_new_beer(params("Session ipa", BeerStyle::Ipa)).await?;
        service.save_new_beer(params("Stout", BeerStyle::Stout)).await?;

        let filter = BeerFilter {
            beer_name: Some("IPA".to_string()),
            ..Default::default()
        };
        let page = service.list_beers(filter, PageRequest::default()).await?;

        assert_eq!(page.total, 2);
        assert!(page
            .items
            .iter()
            .all(|b| b.beer_name.to_lowercase().contains("ipa")));

        Ok(())
    }

    #[tokio::test]
    async fn pages_sorted_by_name() -> Result<(), AppError> {
        let service = MemoryBeerService::new(MemoryStore::new());
        for name in ["C", "A", "B"] {
            service.save_new_beer(params(name, BeerStyle::Ale)).await?;
        }

        let page = service
            .list_beers(BeerFilter::default(), PageRequest::new(Some(2), Some(2)))
            .await?;

        assert_eq!(page.total, 3);
        assert_eq!(page.total_pages(), 2);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].beer_name, "C");

        Ok(())
    }

    #[tokio::test]
    async fn update_rejects_stale_version() -> Result<(), AppError> {
        let service = MemoryBeerService::new(MemoryStore::new());
        let beer = service.save_new_beer(params("Old", BeerStyle::Ale)).await?;

        let updated = service
            .update_beer_by_id(beer.id, params("New", BeerStyle::Ale))
            .await?
            .unwrap();
        assert_eq!(updated.version, 2);

        let mut stale = params("Newer", BeerStyle::Ale);
        stale.version = Some(1);
        let result = service.update_beer_by_id(beer.id, stale).await;

        assert!(matches!(result, Err(AppError::Conflict(_))));

        Ok(())
    }

    #[tokio::test]
    async fn patch_only_overwrites_supplied_fields() -> Result<(), AppError> {
        let service = MemoryBeerService::new(MemoryStore::new());
        let beer = service.save_new_beer(params("Keep", BeerStyle::Ale)).await?;

        let patched = service
            .patch_beer_by_id(
                beer.id,
                BeerPatch {
                    price: Some(Decimal::new(500, 2)),
                    ..Default::default()
                },
            )
            .await?
            .unwrap();

        assert_eq!(patched.beer_name, "Keep");
        assert_eq!(patched.price, Decimal::new(500, 2));
        assert_eq!(patched.quantity_on_hand, Some(5));

        Ok(())
    }

    #[tokio::test]
    async fn unknown_ids_are_absent() -> Result<(), AppError> {
        let service = MemoryBeerService::new(MemoryStore::new());
        let id = Uuid::new_v4();

        assert!(service.get_beer_by_id(id).await?.is_none());
        assert!(service
            .update_beer_by_id(id, params("X", BeerStyle::Ale))
            .await?
            .is_none());
        assert!(service
            .patch_beer_by_id(id, BeerPatch::default())
            .await?
            .is_none());
        assert!(!service.delete_beer_by_id(id).await?);
        assert!(service.list_categories(id).await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn out_of_range_versions_conflict() -> Result<(), AppError> {
        let service = MemoryBeerService::new(MemoryStore::new());
        let beer = service.save_new_beer(params("Old", BeerStyle::Ale)).await?;

        for version in [i32::MAX, -1] {
            let mut update = params("New", BeerStyle::Ale);
            update.version = Some(version);
            let result = service.update_beer_by_id(beer.id, update).await;
            assert!(matches!(result, Err(AppError::Conflict(_))));

            let patch = BeerPatch {
                version: Some(version),
                ..Default::default()
            };
            let result = service.patch_beer_by_id(beer.id, patch).await;
            assert!(matches!(result, Err(AppError::Conflict(_))));
        }
        assert_eq!(service.get_beer_by_id(beer.id).await?.unwrap().version, 1);

        Ok(())
    }

    #[tokio::test]
    async fn name_filter_folds_ascii_case_only() -> Result<(), AppError> {
        let service = MemoryBeerService::new(MemoryStore::new());
        for name in ["Äpfel Weisse", "Hop_Head", "Hop Head"] {
            service.save_new_beer(params(name, BeerStyle::Ale)).await?;
        }

        let totals = [("äpfel", 0), ("Äpfel WEISSE", 1), ("p_h", 1), ("%", 0)];
        for (beer_name, expected) in totals {
            let filter = BeerFilter {
                beer_name: Some(beer_name.to_string()),
                ..Default::default()
            };
            let page = service.list_beers(filter, PageRequest::default()).await?;

            assert_eq!(page.total, expected, "filter {:?}", beer_name);
        }

        Ok(())
    }
}
