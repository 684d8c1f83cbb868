//! Entity → response mapping for the read path.

use crate::dto::ProductResponse;
use crate::product::Product;

pub trait ProductPresenter: Send + Sync {
    /// Field-by-field, order-preserving mapping. Empty in, empty out.
    fn present(&self, products: Vec<Product>) -> Vec<ProductResponse>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ProductPresenterImpl;

impl ProductPresenterImpl {
    pub fn new() -> Self {
        Self
    }
}

impl ProductPresenter for ProductPresenterImpl {
    fn present(&self, products: Vec<Product>) -> Vec<ProductResponse> {
        products.into_iter().map(to_response).collect()
    }
}

fn to_response(p: Product) -> ProductResponse {
    ProductResponse {
        id: p.id,
        created_at: p.created_at.unwrap_or_default(),
        name: p.name,
        category: p.category,
        price: p.price,
        description: p.description,
        image_link: p.image_link,
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::testing::stored;

    #[test]
    fn present_maps_every_field() {
        let p = stored(1, "Hamburguer", 1, 34.99);
        let out = ProductPresenterImpl::new().present(vec![p.clone()]);

        assert_eq!(out.len(), 1);
        let r = &out[0];
        assert_eq!(r.id, p.id);
        assert_eq!(Some(r.created_at), p.created_at);
        assert_eq!(r.name, p.name);
        assert_eq!(r.category, p.category);
        assert_eq!(r.price, p.price);
        assert_eq!(r.description, p.description);
        assert_eq!(r.image_link, p.image_link);
    }

    #[test]
    fn present_empty_is_empty() {
        assert!(ProductPresenterImpl::new().present(Vec::new()).is_empty());
    }

    proptest! {
        #[test]
        fn present_preserves_order_and_length(ids in proptest::collection::vec(1i64..10_000, 0..32)) {
            let products: Vec<Product> = ids
                .iter()
                .map(|id| stored(*id, &format!("p{id}"), 1, *id as f64 / 100.0))
                .collect();

            let out = ProductPresenterImpl::new().present(products);

            prop_assert_eq!(out.len(), ids.len());
            for (resp, id) in out.iter().zip(ids.iter()) {
                prop_assert_eq!(resp.id.value(), *id);
                prop_assert_eq!(&resp.name, &format!("p{id}"));
            }
        }
    }
}
