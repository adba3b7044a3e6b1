use chrono::Utc;
use sea_orm::{ActiveModelTrait, ConnectionTrait, Set};
use serde_json::Value;
use uuid::Uuid;

use crate::{entity::audit_logs, error::AppResult};

pub async fn log_audit<C: ConnectionTrait>(
    db: &C,
    user_id: Option<i64>,
    action: &str,
    resource: Option<&str>,
    metadata: Option<Value>,
) -> AppResult<()> {
    audit_logs::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        action: Set(action.to_string()),
        resource: Set(resource.map(str::to_string)),
        metadata: Set(metadata),
        created_at: Set(Utc::now().fixed_offset()),
    }
    .insert(db)
    .await?;

    Ok(())
}

/// Record a committed write. Audit failures are logged and never fail the caller.
pub async fn record<C: ConnectionTrait>(db: &C, user_id: i64, action: &str, metadata: Value) {
    if let Err(err) = log_audit(db, Some(user_id), action, Some("wishes"), Some(metadata)).await {
        tracing::warn!(error = %err, action, "audit log failed");
    }
}
