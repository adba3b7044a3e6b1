use sea_orm::{ActiveValue::NotSet, ConnectionTrait, IntoActiveModel, Set, TransactionTrait};

use crate::{
    audit,
    dto::wishes::{WishRequest, WishResponse},
    entity::{products, users, wishes},
    error::{AppError, AppResult},
    repository::{
        self,
        wishes::PageSpec,
    },
    response::PageResponse,
    state::AppState,
};

async fn require_user<C: ConnectionTrait>(db: &C, user_id: i64) -> AppResult<users::Model> {
    repository::users::find_by_id(db, user_id)
        .await?
        .ok_or(AppError::UserNotFound)
}

async fn require_product<C: ConnectionTrait>(db: &C, product_id: i64) -> AppResult<products::Model> {
    repository::products::find_by_id(db, product_id)
        .await?
        .ok_or(AppError::ProductNotFound)
}

/// A page of the user's wishes, newest first, each joined with its product.
///
/// A wish pointing at a missing product is reported as `ProductNotFound`
/// rather than skipped.
pub async fn find_all_wish(
    state: &AppState,
    user_id: i64,
    page: i64,
    size: i64,
) -> AppResult<PageResponse<WishResponse>> {
    let page = page.max(1);
    let size = size.max(1);
    require_user(&state.orm, user_id).await?;

    let wish_page =
        repository::wishes::find_by_user_id(&state.orm, user_id, PageSpec::from_page(page, size))
            .await?;

    let mut items = Vec::with_capacity(wish_page.items.len());
    for wish in &wish_page.items {
        let product = require_product(&state.orm, wish.product_id).await?;
        items.push(WishResponse::from_parts(wish, &product));
    }

    Ok(PageResponse {
        items,
        page,
        size,
        total_count: wish_page.total as i64,
    })
}

pub async fn add_wish_list(state: &AppState, user_id: i64, payload: WishRequest) -> AppResult<()> {
    let txn = state.orm.begin().await?;

    require_user(&txn, user_id).await?;
    let product = require_product(&txn, payload.product_id).await?;

    if repository::wishes::exists_by_user_and_product(&txn, user_id, product.id).await? {
        return Err(AppError::WishAlreadyExists);
    }

    let wish = repository::wishes::save(
        &txn,
        wishes::ActiveModel {
            id: NotSet,
            user_id: Set(user_id),
            product_id: Set(product.id),
            count: Set(payload.count),
        },
    )
    .await?;

    txn.commit().await?;
    tracing::debug!(user_id, product_id = product.id, wish_id = wish.id, "wish added");

    audit::record(
        &state.orm,
        user_id,
        "wish_add",
        serde_json::json!({ "product_id": product.id, "count": payload.count }),
    )
    .await;

    Ok(())
}

/// Set the count of an existing wish. A count of `0` removes the wish.
pub async fn update_wish_list(
    state: &AppState,
    user_id: i64,
    payload: WishRequest,
) -> AppResult<()> {
    let txn = state.orm.begin().await?;

    require_user(&txn, user_id).await?;
    require_product(&txn, payload.product_id).await?;

    let wish = repository::wishes::find_by_user_and_product(&txn, user_id, payload.product_id)
        .await?
        .ok_or(AppError::WishNotFound)?;

    let action = if payload.count == 0 {
        remove_wish(&txn, user_id, payload.product_id).await?;
        "wish_remove"
    } else {
        let mut active = wish.into_active_model();
        active.count = Set(payload.count);
        repository::wishes::save(&txn, active).await?;
        "wish_update"
    };

    txn.commit().await?;
    tracing::debug!(user_id, product_id = payload.product_id, count = payload.count, "wish updated");

    audit::record(
        &state.orm,
        user_id,
        action,
        serde_json::json!({ "product_id": payload.product_id, "count": payload.count }),
    )
    .await;

    Ok(())
}

pub async fn delete_wish_list(state: &AppState, user_id: i64, product_id: i64) -> AppResult<()> {
    let txn = state.orm.begin().await?;
    remove_wish(&txn, user_id, product_id).await?;
    txn.commit().await?;
    tracing::debug!(user_id, product_id, "wish removed");

    audit::record(
        &state.orm,
        user_id,
        "wish_remove",
        serde_json::json!({ "product_id": product_id }),
    )
    .await;

    Ok(())
}

// Shared by delete and update-to-zero; re-runs every existence check on the
// caller's connection.
async fn remove_wish<C: ConnectionTrait>(db: &C, user_id: i64, product_id: i64) -> AppResult<()> {
    require_user(db, user_id).await?;
    require_product(db, product_id).await?;

    if !repository::wishes::exists_by_user_and_product(db, user_id, product_id).await? {
        return Err(AppError::WishNotFound);
    }

    repository::wishes::delete_by_user_and_product(db, user_id, product_id).await?;
    Ok(())
}
