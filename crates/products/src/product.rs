use chrono::{DateTime, Utc};

use catalog_core::{Entity, ProductId};

/// Menu category taxonomy.
///
/// Informational only: products carry the raw integer code and nothing in the
/// request path rejects codes outside this list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Snack,
    Side,
    Beverage,
    Dessert,
}

impl Category {
    pub const ALL: [Category; 4] = [Category::Snack, Category::Side, Category::Beverage, Category::Dessert];

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Category::Snack),
            2 => Some(Category::Side),
            3 => Some(Category::Beverage),
            4 => Some(Category::Dessert),
            _ => None,
        }
    }

    pub fn code(self) -> i32 {
        match self {
            Category::Snack => 1,
            Category::Side => 2,
            Category::Beverage => 3,
            Category::Dessert => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Snack => "snack",
            Category::Side => "side",
            Category::Beverage => "beverage",
            Category::Dessert => "dessert",
        }
    }
}

/// A product record.
///
/// `id` and `created_at` belong to the store: they stay unassigned until the
/// record is written and are never changed afterwards. Every other field is
/// caller-supplied and unconstrained.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub created_at: Option<DateTime<Utc>>,
    pub name: String,
    pub category: i32,
    pub price: f64,
    pub description: String,
    pub image_link: String,
}

impl Product {
    /// Build a not-yet-persisted product.
    pub fn transient(
        name: String,
        category: i32,
        price: f64,
        description: String,
        image_link: String,
    ) -> Self {
        Self {
            id: ProductId::UNASSIGNED,
            created_at: None,
            name,
            category,
            price,
            description,
            image_link,
        }
    }

    /// Build the replacement state for an existing record.
    pub fn replacement(
        id: ProductId,
        name: String,
        category: i32,
        price: f64,
        description: String,
        image_link: String,
    ) -> Self {
        Self {
            id,
            ..Self::transient(name, category, price, description, image_link)
        }
    }

    /// Taxonomy entry for `category`, if the code is a known one.
    pub fn category_kind(&self) -> Option<Category> {
        Category::from_code(self.category)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn is_persisted(&self) -> bool {
        self.id.is_assigned() && self.created_at.is_some()
    }
}
