use sea_orm::{ConnectionTrait, EntityTrait};

use crate::{
    entity::{Products, products},
    error::AppResult,
};

pub async fn find_by_id<C: ConnectionTrait>(
    db: &C,
    product_id: i64,
) -> AppResult<Option<products::Model>> {
    Ok(Products::find_by_id(product_id).one(db).await?)
}
