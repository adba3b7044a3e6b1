#![allow(dead_code)]

use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, ConnectOptions, Database, Set};
use wishlist_api::{
    config::AppConfig,
    db::run_migrations,
    entity::{products, users},
    state::AppState,
};

pub const JWT_SECRET: &str = "test-secret";

/// Fresh in-memory SQLite database with the schema applied. A single pooled
/// connection keeps every query on the same in-memory database.
pub async fn setup_state() -> anyhow::Result<AppState> {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let orm = Database::connect(opts).await?;
    run_migrations(&orm).await?;

    let config = AppConfig {
        database_url: "sqlite::memory:".into(),
        host: "127.0.0.1".into(),
        port: 0,
        jwt_secret: JWT_SECRET.into(),
    };
    Ok(AppState::new(orm, config))
}

pub async fn create_user(state: &AppState, email: &str) -> anyhow::Result<i64> {
    let user = users::ActiveModel {
        id: NotSet,
        email: Set(email.to_string()),
        name: Set(email.split('@').next().unwrap_or(email).to_string()),
    }
    .insert(&state.orm)
    .await?;
    Ok(user.id)
}

pub async fn create_product(state: &AppState, name: &str, price: i64) -> anyhow::Result<i64> {
    let product = products::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        price: Set(price),
        image_url: Set(format!("https://img.example.com/{}.png", name.to_lowercase())),
    }
    .insert(&state.orm)
    .await?;
    Ok(product.id)
}
