use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::{products, wishes};

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct WishRequest {
    pub product_id: i64,
    /// Desired quantity. On update, `0` removes the wish.
    pub count: i32,
}

/// A wish joined with the display fields of its product.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct WishResponse {
    pub wish_id: i64,
    pub product_id: i64,
    pub product_name: String,
    pub product_price: i64,
    pub product_image: String,
    pub count: i32,
}

impl WishResponse {
    pub fn from_parts(wish: &wishes::Model, product: &products::Model) -> Self {
        Self {
            wish_id: wish.id,
            product_id: product.id,
            product_name: product.name.clone(),
            product_price: product.price,
            product_image: product.image_url.clone(),
            count: wish.count,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct WishList {
    #[schema(value_type = Vec<WishResponse>)]
    pub items: Vec<WishResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_takes_display_fields_from_product() {
        let wish = wishes::Model {
            id: 7,
            user_id: 1,
            product_id: 3,
            count: 2,
        };
        let product = products::Model {
            id: 3,
            name: "Mug".into(),
            price: 4500,
            image_url: "https://img.example.com/mug.png".into(),
        };

        let resp = WishResponse::from_parts(&wish, &product);
        assert_eq!(resp.wish_id, 7);
        assert_eq!(resp.product_id, 3);
        assert_eq!(resp.product_name, "Mug");
        assert_eq!(resp.product_price, 4500);
        assert_eq!(resp.product_image, "https://img.example.com/mug.png");
        assert_eq!(resp.count, 2);
    }
}
