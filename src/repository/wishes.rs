use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, SqlErr, TryIntoModel,
};

use crate::{
    entity::{
        Wishes,
        wishes::{self, Column as WishCol},
    },
    error::{AppError, AppResult},
};

/// Zero-based page request. Results are always ordered by wish id, newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSpec {
    pub page_index: u64,
    pub size: u64,
}

impl PageSpec {
    /// Build from a one-based page number. Values below 1 are raised to 1.
    pub fn from_page(page: i64, size: i64) -> Self {
        Self {
            page_index: (page.max(1) - 1) as u64,
            size: size.max(1) as u64,
        }
    }

    /// Row offset of the page, or `None` when it cannot be bound as an SQL
    /// `BIGINT`. Such a page lies past any stored data.
    pub fn offset(&self) -> Option<u64> {
        self.page_index
            .checked_mul(self.size)
            .filter(|offset| *offset <= i64::MAX as u64)
    }
}

#[derive(Debug)]
pub struct WishPage {
    pub items: Vec<wishes::Model>,
    /// Matching rows across all pages.
    pub total: u64,
}

fn user_and_product(user_id: i64, product_id: i64) -> Condition {
    Condition::all()
        .add(WishCol::UserId.eq(user_id))
        .add(WishCol::ProductId.eq(product_id))
}

pub async fn find_by_user_id<C: ConnectionTrait>(
    db: &C,
    user_id: i64,
    spec: PageSpec,
) -> AppResult<WishPage> {
    let finder = Wishes::find()
        .filter(WishCol::UserId.eq(user_id))
        .order_by_desc(WishCol::Id);

    let total = finder.clone().count(db).await?;
    let offset = match spec.offset() {
        Some(offset) if offset < total => offset,
        _ => {
            return Ok(WishPage {
                items: Vec::new(),
                total,
            });
        }
    };
    let items = finder.offset(offset).limit(spec.size).all(db).await?;

    Ok(WishPage { items, total })
}

pub async fn exists_by_user_and_product<C: ConnectionTrait>(
    db: &C,
    user_id: i64,
    product_id: i64,
) -> AppResult<bool> {
    let count = Wishes::find()
        .filter(user_and_product(user_id, product_id))
        .count(db)
        .await?;
    Ok(count > 0)
}

pub async fn find_by_user_and_product<C: ConnectionTrait>(
    db: &C,
    user_id: i64,
    product_id: i64,
) -> AppResult<Option<wishes::Model>> {
    Ok(Wishes::find()
        .filter(user_and_product(user_id, product_id))
        .one(db)
        .await?)
}

/// Insert when `id` is unset, update the set columns otherwise.
///
/// A unique-index violation on `(user_id, product_id)` surfaces as
/// [`AppError::WishAlreadyExists`], covering the window between the
/// existence check and the insert.
pub async fn save<C: ConnectionTrait>(db: &C, wish: wishes::ActiveModel) -> AppResult<wishes::Model> {
    let saved = wish.save(db).await.map_err(map_unique_violation)?;
    Ok(saved.try_into_model()?)
}

/// Returns the number of rows removed.
pub async fn delete_by_user_and_product<C: ConnectionTrait>(
    db: &C,
    user_id: i64,
    product_id: i64,
) -> AppResult<u64> {
    let result = Wishes::delete_many()
        .filter(user_and_product(user_id, product_id))
        .exec(db)
        .await?;
    Ok(result.rows_affected)
}

fn map_unique_violation(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::WishAlreadyExists,
        _ => AppError::OrmError(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_spec_is_zero_based() {
        let spec = PageSpec::from_page(1, 10);
        assert_eq!(spec.page_index, 0);
        assert_eq!(spec.offset(), Some(0));

        let spec = PageSpec::from_page(3, 20);
        assert_eq!(spec.page_index, 2);
        assert_eq!(spec.offset(), Some(40));
    }

    #[test]
    fn page_spec_offset_out_of_bigint_range_is_none() {
        assert_eq!(PageSpec::from_page(i64::MAX, 100).offset(), None);

        let spec = PageSpec {
            page_index: i64::MAX as u64,
            size: 2,
        };
        assert_eq!(spec.offset(), None);

        let spec = PageSpec {
            page_index: i64::MAX as u64,
            size: 1,
        };
        assert_eq!(spec.offset(), Some(i64::MAX as u64));
    }

    #[test]
    fn page_spec_raises_non_positive_input() {
        let spec = PageSpec::from_page(0, 0);
        assert_eq!(spec, PageSpec { page_index: 0, size: 1 });

        let spec = PageSpec::from_page(-4, 5);
        assert_eq!(spec.page_index, 0);
        assert_eq!(spec.size, 5);
    }
}
