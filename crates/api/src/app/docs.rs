//! OpenAPI document for the product routes, served with Swagger UI.

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use catalog_products::{AddProductRequest, ProductResponse};

use crate::app::routes::products;

pub const SWAGGER_PATH: &str = "/swagger";
pub const OPENAPI_PATH: &str = "/swagger/doc.json";

#[derive(OpenApi)]
#[openapi(
    info(title = "Product catalog API", description = "Product CRUD by category"),
    paths(
        products::list_products,
        products::add_product,
        products::update_product,
        products::delete_product,
    ),
    components(schemas(AddProductRequest, ProductResponse)),
    tags((name = "product", description = "Product records"))
)]
pub struct ApiDoc;

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new(SWAGGER_PATH).url(OPENAPI_PATH, ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_covers_every_product_route() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let paths = doc["paths"].as_object().unwrap();

        let collection = &paths["/v1/product"];
        assert!(collection.get("get").is_some());
        assert!(collection.get("post").is_some());

        let item = &paths["/v1/product/{id}"];
        assert!(item.get("put").is_some());
        assert!(item.get("delete").is_some());

        assert!(doc["components"]["schemas"].get("ProductResponse").is_some());
    }
}
