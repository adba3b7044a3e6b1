use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get},
};

use crate::{
    dto::wishes::{WishList, WishRequest},
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    services::wish_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_wishes).post(add_wish).put(update_wish))
        .route("/{product_id}", delete(remove_wish))
}

#[utoipa::path(
    get,
    path = "/api/wishes",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("size" = Option<i64>, Query, description = "Items per page, default 10, max 100")
    ),
    responses(
        (status = 200, description = "List wishes, newest first", body = ApiResponse<WishList>),
        (status = 404, description = "User or product not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Wishes"
)]
pub async fn list_wishes(
    State(state): State<AppState>,
    user: AuthUser,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<WishList>>> {
    let (page, size) = pagination.normalize();
    let result = wish_service::find_all_wish(&state, user.user_id, page, size).await?;
    let meta = result.meta();
    let data = WishList {
        items: result.items,
    };

    Ok(Json(ApiResponse::success("OK", data, Some(meta))))
}

#[utoipa::path(
    post,
    path = "/api/wishes",
    request_body = WishRequest,
    responses(
        (status = 201, description = "Added to wish list", body = ApiResponse<serde_json::Value>),
        (status = 400, description = "Bad Request"),
        (status = 404, description = "User or product not found"),
        (status = 409, description = "Wish already exists")
    ),
    security(("bearer_auth" = [])),
    tag = "Wishes"
)]
pub async fn add_wish(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<WishRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<serde_json::Value>>)> {
    if payload.count < 1 {
        return Err(AppError::BadRequest("count must be at least 1".into()));
    }
    wish_service::add_wish_list(&state, user.user_id, payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Added to wish list",
            serde_json::json!({}),
            Some(Meta::empty()),
        )),
    ))
}

#[utoipa::path(
    put,
    path = "/api/wishes",
    request_body = WishRequest,
    responses(
        (status = 200, description = "Wish count updated; count 0 removes it", body = ApiResponse<serde_json::Value>),
        (status = 400, description = "Bad Request"),
        (status = 404, description = "User, product or wish not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Wishes"
)]
pub async fn update_wish(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<WishRequest>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    if payload.count < 0 {
        return Err(AppError::BadRequest("count must not be negative".into()));
    }
    wish_service::update_wish_list(&state, user.user_id, payload).await?;

    Ok(Json(ApiResponse::success(
        "Wish list updated",
        serde_json::json!({}),
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    delete,
    path = "/api/wishes/{product_id}",
    params(
        ("product_id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Removed from wish list", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "User, product or wish not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Wishes"
)]
pub async fn remove_wish(
    State(state): State<AppState>,
    user: AuthUser,
    Path(product_id): Path<i64>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    wish_service::delete_wish_list(&state, user.user_id, product_id).await?;

    Ok(Json(ApiResponse::success(
        "Removed from wish list",
        serde_json::json!({}),
        Some(Meta::empty()),
    )))
}
