use anyhow::Result;
use sea_orm::{
    ConnectionTrait, Database, DatabaseConnection, EntityName, Schema,
    sea_query::{Index, IndexCreateStatement},
};

use crate::entity::{AuditLogs, Products, Users, Wishes, wishes};

/// Storage-level backstop for the one-wish-per-(user, product) rule.
pub const WISH_UNIQUE_INDEX: &str = "idx_wishes_user_product";

/// Create a SeaORM connection.
pub async fn create_orm_conn(database_url: &str) -> Result<DatabaseConnection> {
    let conn = Database::connect(database_url).await?;
    Ok(conn)
}

/// Idempotent schema setup derived from the entity definitions, so the same
/// tables come out on Postgres and SQLite.
pub async fn run_migrations(conn: &DatabaseConnection) -> Result<()> {
    let backend = conn.get_database_backend();
    let schema = Schema::new(backend);

    // Parents first, foreign keys point backwards.
    let tables = [
        schema.create_table_from_entity(Users),
        schema.create_table_from_entity(Products),
        schema.create_table_from_entity(Wishes),
        schema.create_table_from_entity(AuditLogs),
    ];
    for mut table in tables {
        table.if_not_exists();
        conn.execute(backend.build(&table)).await?;
    }

    conn.execute(backend.build(&wish_unique_index())).await?;

    tracing::info!("schema is up to date");
    Ok(())
}

fn wish_unique_index() -> IndexCreateStatement {
    Index::create()
        .name(WISH_UNIQUE_INDEX)
        .table(Wishes)
        .col(wishes::Column::UserId)
        .col(wishes::Column::ProductId)
        .unique()
        .if_not_exists()
        .to_owned()
}

/// Drop every table, children first. Used by the seed binary's `--reset` flag.
pub async fn drop_all(conn: &DatabaseConnection) -> Result<()> {
    let backend = conn.get_database_backend();
    for table in [
        Wishes.table_ref(),
        AuditLogs.table_ref(),
        Products.table_ref(),
        Users.table_ref(),
    ] {
        let stmt = sea_orm::sea_query::Table::drop()
            .table(table)
            .if_exists()
            .to_owned();
        conn.execute(backend.build(&stmt)).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::DbBackend;

    #[test]
    fn unique_index_covers_user_and_product() {
        let sql = DbBackend::Postgres.build(&wish_unique_index()).to_string();
        assert!(sql.contains("UNIQUE"), "{sql}");
        assert!(sql.contains(WISH_UNIQUE_INDEX), "{sql}");
        assert!(sql.contains("\"user_id\", \"product_id\""), "{sql}");
    }
}
