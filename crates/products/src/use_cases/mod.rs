//! Application services: one operation each, no state across calls.
//!
//! Every use case is a trait plus a single implementation that is generic over
//! the repository. The implementations do no validation and no retries; they
//! turn a command into a repository call and hand the outcome back untouched.

mod add;
mod delete;
mod get;
mod update;

pub use add::{AddProductUseCase, AddProductUseCaseImpl};
pub use delete::{DeleteProductUseCase, DeleteProductUseCaseImpl};
pub use get::{GetProductUseCase, GetProductUseCaseImpl};
pub use update::{UpdateProductUseCase, UpdateProductUseCaseImpl};
