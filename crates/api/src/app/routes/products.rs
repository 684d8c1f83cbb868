use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, QueryRejection},
        Extension, Path, Query,
    },
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use catalog_core::ProductId;
use catalog_products::{AddProductRequest, Category, ProductResponse, UpdateProductRequest};

use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products).post(add_product))
        .route("/:id", put(update_product).delete(delete_product))
}

#[derive(Debug, Deserialize)]
pub struct CategoryQuery {
    pub category: Option<String>,
}

/// List the products of one category.
#[utoipa::path(
    get,
    path = "/v1/product",
    tag = "product",
    params(("category" = u64, Query, description = "Category code")),
    responses(
        (status = 200, description = "Products in the category, ordered by id", body = [ProductResponse]),
        (status = 400, description = "Missing or non-numeric category"),
        (status = 500, description = "Store failure"),
    )
)]
pub async fn list_products(
    Extension(services): Extension<AppServices>,
    query: Result<Query<CategoryQuery>, QueryRejection>,
) -> axum::response::Response {
    let raw = match query {
        Ok(Query(q)) => q.category,
        Err(_) => None,
    };
    let requested = match parse_category(raw.as_deref()) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    // Stored codes are 32-bit; anything wider cannot match a row.
    let Ok(category) = i32::try_from(requested) else {
        tracing::debug!(category = requested, "category outside stored range");
        return (StatusCode::OK, Json(Vec::<ProductResponse>::new())).into_response();
    };

    tracing::debug!(
        category,
        kind = Category::from_code(category).map(Category::label).unwrap_or("unclassified"),
        "listing products"
    );

    match services.controller().get(category).await {
        Ok(products) => (StatusCode::OK, Json(products)).into_response(),
        Err(e) => errors::repository_error_to_response(e),
    }
}

/// Create a product.
#[utoipa::path(
    post,
    path = "/v1/product",
    tag = "product",
    request_body = AddProductRequest,
    responses(
        (status = 201, description = "Created"),
        (status = 400, description = "Body is not a valid product"),
        (status = 500, description = "Store failure"),
    )
)]
pub async fn add_product(
    Extension(services): Extension<AppServices>,
    body: Result<Bytes, BytesRejection>,
) -> axum::response::Response {
    let request: AddProductRequest = match decode_body(body) {
        Ok(r) => r,
        Err(resp) => return resp,
    };

    match services.controller().add(request).await {
        Ok(()) => StatusCode::CREATED.into_response(),
        Err(e) => errors::repository_error_to_response(e),
    }
}

/// Replace every field of an existing product.
#[utoipa::path(
    put,
    path = "/v1/product/{id}",
    tag = "product",
    params(("id" = u64, Path, description = "Product id")),
    request_body = AddProductRequest,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Non-numeric id or invalid body"),
        (status = 500, description = "Unknown id or store failure"),
    )
)]
pub async fn update_product(
    Extension(services): Extension<AppServices>,
    Path(id): Path<String>,
    body: Result<Bytes, BytesRejection>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let request: UpdateProductRequest = match decode_body(body) {
        Ok(r) => r,
        Err(resp) => return resp,
    };

    match services.controller().update(id, request).await {
        Ok(()) => StatusCode::OK.into_response(),
        Err(e) => errors::repository_error_to_response(e),
    }
}

/// Delete a product. Unknown ids succeed.
#[utoipa::path(
    delete,
    path = "/v1/product/{id}",
    tag = "product",
    params(("id" = u64, Path, description = "Product id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Non-numeric id"),
        (status = 500, description = "Store failure"),
    )
)]
pub async fn delete_product(
    Extension(services): Extension<AppServices>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.controller().delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::repository_error_to_response(e),
    }
}

/// Bodies are JSON whatever the `Content-Type` header says.
fn decode_body<T: DeserializeOwned>(
    body: Result<Bytes, BytesRejection>,
) -> Result<T, axum::response::Response> {
    let bytes = body.map_err(|rejection| errors::invalid_payload(rejection.body_text()))?;
    serde_json::from_slice(&bytes).map_err(errors::invalid_payload)
}

fn parse_id(raw: &str) -> Result<ProductId, axum::response::Response> {
    raw.parse::<ProductId>()
        .map_err(|_| errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", errors::INVALID_PARAMETER))
}

/// Missing/empty and non-numeric are reported separately; anything that is
/// not an unsigned 64-bit decimal is non-numeric.
fn parse_category(raw: Option<&str>) -> Result<u64, axum::response::Response> {
    let raw = match raw {
        Some(s) if !s.is_empty() => s,
        _ => {
            return Err(errors::json_error(
                StatusCode::BAD_REQUEST,
                "invalid_parameter",
                errors::INVALID_PARAMETER,
            ));
        }
    };

    let invalid = || errors::json_error(StatusCode::BAD_REQUEST, "invalid_category", errors::INVALID_CATEGORY);
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    raw.parse::<u64>().map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_must_be_present() {
        assert_eq!(parse_category(None).unwrap_err().status(), StatusCode::BAD_REQUEST);
        assert_eq!(parse_category(Some("")).unwrap_err().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn category_must_be_unsigned_decimal() {
        assert_eq!(parse_category(Some("1")).unwrap(), 1);
        assert_eq!(parse_category(Some("0")).unwrap(), 0);
        assert_eq!(parse_category(Some("4294967296")).unwrap(), 4_294_967_296);
        for bad in ["abc", "-1", "+1", "1.0", " 1", "18446744073709551616"] {
            assert!(parse_category(Some(bad)).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn id_must_be_unsigned_decimal() {
        assert_eq!(parse_id("15").unwrap(), ProductId::new(15));
        assert_eq!(parse_id("abc").unwrap_err().status(), StatusCode::BAD_REQUEST);
        assert_eq!(parse_id("-3").unwrap_err().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn body_decodes_regardless_of_content_type() {
        let body = Ok(Bytes::from_static(br#"{"name":"Hamburguer","category":1,"price":34.99}"#));
        let req: AddProductRequest = decode_body(body).unwrap();
        assert_eq!(req.name, "Hamburguer");

        let bad: Result<AddProductRequest, _> = decode_body(Ok(Bytes::from_static(b"name=Hamburguer")));
        assert_eq!(bad.unwrap_err().status(), StatusCode::BAD_REQUEST);
    }
}
