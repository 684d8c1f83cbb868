use async_trait::async_trait;

use crate::commands::AddProductCommand;
use crate::product::Product;
use crate::repository::{ProductRepository, RepositoryResult};

#[async_trait]
pub trait AddProductUseCase: Send + Sync {
    /// Persist a new product and return it with its store-assigned identity.
    async fn execute(&self, command: AddProductCommand) -> RepositoryResult<Product>;
}

pub struct AddProductUseCaseImpl<R> {
    repository: R,
}

impl<R> AddProductUseCaseImpl<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> AddProductUseCase for AddProductUseCaseImpl<R>
where
    R: ProductRepository,
{
    async fn execute(&self, command: AddProductCommand) -> RepositoryResult<Product> {
        let mut product = command.into_product();
        self.repository.add(&mut product).await?;
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use catalog_core::Entity;

    use super::*;
    use crate::repository::RepositoryError;
    use crate::testing::{Call, FakeProductRepository};

    #[tokio::test]
    async fn add_passes_all_fields_to_repository() {
        let repo = Arc::new(FakeProductRepository::new());
        let use_case = AddProductUseCaseImpl::new(repo.clone());

        let created = use_case
            .execute(AddProductCommand::new("Hamburguer", 1, 34.99, "Hamburguer com salada", "https://example.com/image.jpg"))
            .await
            .unwrap();

        assert!(created.is_persisted());
        assert_eq!(created.name, "Hamburguer");

        match repo.calls().as_slice() {
            [Call::Add(p)] => {
                assert_eq!(p.name, "Hamburguer");
                assert_eq!(p.category, 1);
                assert_eq!(p.price, 34.99);
                assert_eq!(p.description, "Hamburguer com salada");
                assert_eq!(p.image_link, "https://example.com/image.jpg");
                assert!(!p.id.is_assigned());
            }
            other => panic!("expected a single add call, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn add_accepts_zero_values() {
        let repo = Arc::new(FakeProductRepository::new());
        let use_case = AddProductUseCaseImpl::new(repo.clone());

        let created = use_case
            .execute(AddProductCommand::new("", 0, 0.0, "", ""))
            .await
            .unwrap();

        assert!(created.id.is_assigned());
        assert_eq!(repo.rows().len(), 1);
    }

    #[tokio::test]
    async fn add_returns_repository_error_verbatim() {
        let err = RepositoryError::store("database connection error");
        let repo = Arc::new(FakeProductRepository::failing(err.clone()));
        let use_case = AddProductUseCaseImpl::new(repo.clone());

        let got = use_case
            .execute(AddProductCommand::new("Pizza", 1, 45.99, "", ""))
            .await
            .unwrap_err();

        assert_eq!(got, err);
        assert_eq!(repo.calls().len(), 1);
    }
}
