use sea_orm::{ConnectionTrait, EntityTrait};

use crate::{
    entity::{Users, users},
    error::AppResult,
};

pub async fn find_by_id<C: ConnectionTrait>(db: &C, user_id: i64) -> AppResult<Option<users::Model>> {
    Ok(Users::find_by_id(user_id).one(db).await?)
}
