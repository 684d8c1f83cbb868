//! Recording repository double shared by the unit tests of this crate.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use catalog_core::ProductId;

use crate::product::Product;
use crate::repository::{ProductRepository, RepositoryError, RepositoryResult};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Get(i32),
    Add(Product),
    Update(Product),
    Delete(ProductId),
}

#[derive(Debug, Default)]
pub(crate) struct FakeProductRepository {
    rows: Mutex<Vec<Product>>,
    calls: Mutex<Vec<Call>>,
    failure: Option<RepositoryError>,
}

impl FakeProductRepository {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Every call records itself, then fails with `err`.
    pub(crate) fn failing(err: RepositoryError) -> Self {
        Self {
            failure: Some(err),
            ..Self::default()
        }
    }

    pub(crate) fn with_rows(rows: Vec<Product>) -> Self {
        Self {
            rows: Mutex::new(rows),
            ..Self::default()
        }
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn rows(&self) -> Vec<Product> {
        self.rows.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> RepositoryResult<()> {
        self.calls.lock().unwrap().push(call);
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

pub(crate) fn stored(id: i64, name: &str, category: i32, price: f64) -> Product {
    let mut p = Product::transient(
        name.to_string(),
        category,
        price,
        format!("{name} description"),
        format!("https://example.com/{id}.jpg"),
    );
    p.id = ProductId::new(id);
    p.created_at = Some(Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap());
    p
}

#[async_trait]
impl ProductRepository for FakeProductRepository {
    async fn get(&self, category: i32) -> RepositoryResult<Vec<Product>> {
        self.record(Call::Get(category))?;
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect())
    }

    async fn add(&self, product: &mut Product) -> RepositoryResult<()> {
        self.record(Call::Add(product.clone()))?;
        let mut rows = self.rows.lock().unwrap();
        let next = rows.iter().map(|p| p.id.value()).max().unwrap_or(0) + 1;
        product.id = ProductId::new(next);
        product.created_at = Some(Utc::now());
        rows.push(product.clone());
        Ok(())
    }

    async fn update(&self, product: &Product) -> RepositoryResult<()> {
        self.record(Call::Update(product.clone()))?;
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|p| p.id == product.id) {
            Some(row) => {
                let created_at = row.created_at;
                *row = product.clone();
                row.created_at = created_at;
                Ok(())
            }
            None => Err(RepositoryError::NotFound(product.id)),
        }
    }

    async fn delete(&self, id: ProductId) -> RepositoryResult<()> {
        self.record(Call::Delete(id))?;
        self.rows.lock().unwrap().retain(|p| p.id != id);
        Ok(())
    }
}
