use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;

use catalog_core::ProductId;
use catalog_products::{Product, ProductRepository, RepositoryError, RepositoryResult};

#[derive(Debug)]
struct State {
    rows: BTreeMap<ProductId, Product>,
    last_id: i64,
}

/// In-memory product repository.
///
/// Intended for tests/dev. Mirrors the Postgres semantics: serial ids starting
/// at 1, ids never reused, reads ordered by id.
#[derive(Debug)]
pub struct InMemoryProductRepository {
    state: RwLock<State>,
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self {
            state: RwLock::new(State {
                rows: BTreeMap::new(),
                last_id: 0,
            }),
        }
    }
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.state.read().map(|s| s.rows.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<T>(_: T) -> RepositoryError {
    RepositoryError::store("lock poisoned")
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn get(&self, category: i32) -> RepositoryResult<Vec<Product>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state
            .rows
            .values()
            .filter(|p| p.category == category)
            .cloned()
            .collect())
    }

    async fn add(&self, product: &mut Product) -> RepositoryResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.last_id += 1;
        product.id = ProductId::new(state.last_id);
        product.created_at = Some(Utc::now());
        state.rows.insert(product.id, product.clone());
        Ok(())
    }

    async fn update(&self, product: &Product) -> RepositoryResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        let row = state
            .rows
            .get_mut(&product.id)
            .ok_or(RepositoryError::NotFound(product.id))?;

        row.name = product.name.clone();
        row.category = product.category;
        row.price = product.price;
        row.description = product.description.clone();
        row.image_link = product.image_link.clone();
        Ok(())
    }

    async fn delete(&self, id: ProductId) -> RepositoryResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.rows.remove(&id);
        Ok(())
    }
}
