//! Products module: the product record and its request-handling layers.
//!
//! Layers, leaf to root:
//! - `product`: the entity and the informational category taxonomy
//! - `repository`: store abstraction (`ProductRepository`)
//! - `commands` + `use_cases`: one application service per operation
//! - `presenter`: entity → response mapping
//! - `dto` + `controller`: wire shapes and the application-facing entrypoint
//!
//! Nothing here performs IO directly; storage lives behind `ProductRepository`.

pub mod commands;
pub mod controller;
pub mod dto;
pub mod presenter;
pub mod product;
pub mod repository;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod testing;

pub use commands::{AddProductCommand, DeleteProductCommand, GetProductCommand, UpdateProductCommand};
pub use controller::{ProductController, ProductControllerImpl};
pub use dto::{AddProductRequest, ProductResponse, UpdateProductRequest};
pub use presenter::{ProductPresenter, ProductPresenterImpl};
pub use product::{Category, Product};
pub use repository::{ProductRepository, RepositoryError, RepositoryResult};
pub use use_cases::{
    AddProductUseCase, AddProductUseCaseImpl, DeleteProductUseCase, DeleteProductUseCaseImpl,
    GetProductUseCase, GetProductUseCaseImpl, UpdateProductUseCase, UpdateProductUseCaseImpl,
};
