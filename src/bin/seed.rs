use chrono::Duration;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
    ActiveValue::NotSet,
};
use wishlist_api::{
    config::AppConfig,
    db::{create_orm_conn, drop_all, run_migrations},
    entity::{Products, Users, products, users},
    middleware::auth::issue_token,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;
    let orm = create_orm_conn(&config.database_url).await?;

    if std::env::args().any(|arg| arg == "--reset") {
        drop_all(&orm).await?;
        println!("Dropped existing tables");
    }
    run_migrations(&orm).await?;

    let alice = ensure_user(&orm, "alice@example.com", "Alice").await?;
    let bob = ensure_user(&orm, "bob@example.com", "Bob").await?;
    seed_products(&orm).await?;

    let token = issue_token(&config.jwt_secret, alice, Duration::hours(24))?;
    println!("Seed completed. User IDs: alice={alice}, bob={bob}");
    println!("Token for alice: Bearer {token}");
    Ok(())
}

async fn ensure_user(orm: &DatabaseConnection, email: &str, name: &str) -> anyhow::Result<i64> {
    if let Some(existing) = Users::find()
        .filter(users::Column::Email.eq(email))
        .one(orm)
        .await?
    {
        return Ok(existing.id);
    }

    let user = users::ActiveModel {
        id: NotSet,
        email: Set(email.to_string()),
        name: Set(name.to_string()),
    }
    .insert(orm)
    .await?;

    println!("Ensured user {email}");
    Ok(user.id)
}

async fn seed_products(orm: &DatabaseConnection) -> anyhow::Result<()> {
    let catalog = [
        ("Axum Hoodie", 550000, "https://img.example.com/hoodie.png"),
        ("Ferris Mug", 120000, "https://img.example.com/mug.png"),
        ("Rust Sticker Pack", 50000, "https://img.example.com/stickers.png"),
        ("E-book: Async Rust", 250000, "https://img.example.com/ebook.png"),
    ];

    for (name, price, image_url) in catalog {
        let exists = Products::find()
            .filter(products::Column::Name.eq(name))
            .one(orm)
            .await?
            .is_some();
        if exists {
            continue;
        }

        products::ActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
            price: Set(price),
            image_url: Set(image_url.to_string()),
        }
        .insert(orm)
        .await?;
    }

    println!("Seeded products");
    Ok(())
}
