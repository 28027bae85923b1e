use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::check_version;
use crate::server::{
    data::memory::MemoryStore,
    error::AppError,
    model::{
        beer::Beer,
        category::{Category, CategoryParams, CategoryPatch},
        page::{Page, PageRequest},
    },
    service::category::CategoryService,
};

pub struct MemoryCategoryService {
    store: MemoryStore,
}

impl MemoryCategoryService {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CategoryService for MemoryCategoryService {
    async fn list_categories(&self, page: PageRequest) -> Result<Page<Category>, AppError> {
        let graph = self.store.read().await;

        let mut categories: Vec<Category> = graph.categories.values().cloned().collect();
        categories.sort_by(|a, b| a.description.cmp(&b.description).then(a.id.cmp(&b.id)));

        Ok(Page::from_sorted(categories, page))
    }

    async fn get_category_by_id(&self, id: Uuid) -> Result<Option<Category>, AppError> {
        Ok(self.store.read().await.categories.get(&id).cloned())
    }

    async fn save_new_category(&self, params: CategoryParams) -> Result<Category, AppError> {
        let now = Utc::now();
        let category = Category {
            id: Uuid::new_v4(),
            version: 1,
            description: params.description,
            created_date: now,
            last_modified_date: now,
        };

        self.store
            .write()
            .await
            .categories
            .insert(category.id, category.clone());

        tracing::info!("Created category {} ({})", category.id, category.description);

        Ok(category)
    }

    async fn update_category_by_id(
        &self,
        id: Uuid,
        params: CategoryParams,
    ) -> Result<Option<Category>, AppError> {
        self.patch_category_by_id(
            id,
            CategoryPatch {
                version: params.version,
                description: Some(params.description),
            },
        )
        .await
    }

    async fn patch_category_by_id(
        &self,
        id: Uuid,
        patch: CategoryPatch,
    ) -> Result<Option<Category>, AppError> {
        let mut graph = self.store.write().await;
        let Some(category) = graph.categories.get_mut(&id) else {
            return Ok(None);
        };
        check_version("Category", id, patch.version, category.version)?;

        if let Some(description) = patch.description {
            category.description = description;
        }
        category.version += 1;
        category.last_modified_date = Utc::now();

        Ok(Some(category.clone()))
    }

    async fn delete_category_by_id(&self, id: Uuid) -> Result<bool, AppError> {
        Ok(self.store.write().await.remove_category_record(&id))
    }

    async fn list_beers(&self, category_id: Uuid) -> Result<Option<Vec<Beer>>, AppError> {
        let graph = self.store.read().await;

        if !graph.categories.contains_key(&category_id) {
            return Ok(None);
        }

        Ok(Some(graph.beers_of(&category_id)))
    }
}
