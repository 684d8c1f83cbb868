//! Command and query objects handed from the controller to the use cases.

use catalog_core::{ProductId, ValueObject};

use crate::product::Product;

/// Query: list products in one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetProductCommand {
    pub category: i32,
}

impl GetProductCommand {
    pub fn new(category: i32) -> Self {
        Self { category }
    }
}

/// Command: create a product.
#[derive(Debug, Clone, PartialEq)]
pub struct AddProductCommand {
    pub name: String,
    pub category: i32,
    pub price: f64,
    pub description: String,
    pub image_link: String,
}

impl AddProductCommand {
    pub fn new(
        name: impl Into<String>,
        category: i32,
        price: f64,
        description: impl Into<String>,
        image_link: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            price,
            description: description.into(),
            image_link: image_link.into(),
        }
    }

    pub fn into_product(self) -> Product {
        Product::transient(self.name, self.category, self.price, self.description, self.image_link)
    }
}

/// Command: replace every caller-owned field of an existing product.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateProductCommand {
    pub id: ProductId,
    pub name: String,
    pub category: i32,
    pub price: f64,
    pub description: String,
    pub image_link: String,
}

impl UpdateProductCommand {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: i32,
        price: f64,
        description: impl Into<String>,
        image_link: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            price,
            description: description.into(),
            image_link: image_link.into(),
        }
    }

    pub fn into_product(self) -> Product {
        Product::replacement(
            self.id,
            self.name,
            self.category,
            self.price,
            self.description,
            self.image_link,
        )
    }
}

/// Command: remove a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteProductCommand {
    pub id: ProductId,
}

impl DeleteProductCommand {
    pub fn new(id: ProductId) -> Self {
        Self { id }
    }
}

impl ValueObject for GetProductCommand {}
impl ValueObject for AddProductCommand {}
impl ValueObject for UpdateProductCommand {}
impl ValueObject for DeleteProductCommand {}
