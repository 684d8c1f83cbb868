//! Wire shapes for the product endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use catalog_core::ProductId;

/// Body of a create request.
///
/// Missing and `null` fields decode to their zero value; nothing here rejects
/// empty or zero input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct AddProductRequest {
    #[serde(deserialize_with = "null_as_default")]
    #[schema(example = "Hamburguer")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    #[schema(example = 1)]
    pub category: i32,
    #[serde(deserialize_with = "null_as_default")]
    #[schema(example = 34.99)]
    pub price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub image_link: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of an update request (full replace; same shape as create).
pub type UpdateProductRequest = AddProductRequest;

/// One element of the list returned by a category query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    #[schema(value_type = i64, example = 1)]
    pub id: ProductId,
    pub created_at: DateTime<Utc>,
    pub name: String,
    pub category: i32,
    pub price: f64,
    pub description: String,
    pub image_link: String,
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;

    #[test]
    fn request_decodes_all_fields() {
        let raw = r#"{"name":"Pizza","category":1,"price":45.99,"description":"Pizza margherita","image_link":"https://example.com/pizza.jpg"}"#;
        let req: AddProductRequest = serde_json::from_str(raw).unwrap();

        assert_eq!(req.name, "Pizza");
        assert_eq!(req.category, 1);
        assert_eq!(req.price, 45.99);
        assert_eq!(req.description, "Pizza margherita");
        assert_eq!(req.image_link, "https://example.com/pizza.jpg");
    }

    #[test]
    fn missing_fields_become_zero_values() {
        let req: UpdateProductRequest = serde_json::from_str(r#"{"name":"Hamburguer","price":34.99}"#).unwrap();
        assert_eq!(req.name, "Hamburguer");
        assert_eq!(req.price, 34.99);
        assert_eq!(req.category, 0);
        assert_eq!(req.description, "");
        assert_eq!(req.image_link, "");

        let empty: AddProductRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, AddProductRequest::default());
    }

    #[test]
    fn explicit_nulls_become_zero_values() {
        let raw = r#"{"name":"Hamburguer","category":null,"price":34.99,"description":null,"image_link":null}"#;
        let req: AddProductRequest = serde_json::from_str(raw).unwrap();
        assert_eq!(req.name, "Hamburguer");
        assert_eq!(req.category, 0);
        assert_eq!(req.price, 34.99);
        assert_eq!(req.description, "");
        assert_eq!(req.image_link, "");
    }

    #[test]
    fn wrong_types_fail_to_decode() {
        assert!(serde_json::from_str::<AddProductRequest>(r#"{"category":"snack"}"#).is_err());
        assert!(serde_json::from_str::<AddProductRequest>(r#"{"price":"cheap"}"#).is_err());
        assert!(serde_json::from_str::<AddProductRequest>("{not json").is_err());
    }

    #[test]
    fn response_uses_snake_case_field_names() {
        let resp = ProductResponse {
            id: ProductId::new(1),
            created_at: Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap(),
            name: "Hamburguer".into(),
            category: 1,
            price: 34.99,
            description: "Hamburguer com salada".into(),
            image_link: "https://example.com/image.jpg".into(),
        };

        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 1,
                "created_at": "2024-01-15T10:30:00Z",
                "name": "Hamburguer",
                "category": 1,
                "price": 34.99,
                "description": "Hamburguer com salada",
                "image_link": "https://example.com/image.jpg",
            })
        );
    }
}
