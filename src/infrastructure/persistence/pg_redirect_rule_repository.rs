//! PostgreSQL implementation of the redirect rule repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{NewRedirectRule, PublicUser, RedirectRule, RedirectRulePatch};
use crate::domain::repositories::RedirectRuleRepository;
use crate::error::AppError;

/// PostgreSQL repository for redirect rules.
///
/// Every read joins `users` so the owner's public fields travel with the rule.
/// Writes are single statements; concurrent updates to one row are serialized
/// by PostgreSQL row locks.
pub struct PgRedirectRuleRepository {
    pool: Arc<PgPool>,
}

impl PgRedirectRuleRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct RedirectRuleRow {
    id: Uuid,
    created_at: DateTime<Utc>,
    modified_at: DateTime<Utc>,
    redirect_url: String,
    is_private: bool,
    redirect_identifier: String,
    user_id: Option<i64>,
    username: Option<String>,
}

impl From<RedirectRuleRow> for RedirectRule {
    fn from(r: RedirectRuleRow) -> Self {
        RedirectRule {
            id: r.id,
            created_at: r.created_at,
            modified_at: r.modified_at,
            redirect_url: r.redirect_url,
            is_private: r.is_private,
            redirect_identifier: r.redirect_identifier,
            owner_id: r.user_id,
            owner: r.username.map(|username| PublicUser { username }),
        }
    }
}

#[async_trait]
impl RedirectRuleRepository for PgRedirectRuleRepository {
    async fn create(&self, new_rule: NewRedirectRule) -> Result<RedirectRule, AppError> {
        let row = sqlx::query_as::<_, RedirectRuleRow>(
            r#"
            WITH inserted AS (
                INSERT INTO redirect_rules (id, redirect_url, is_private, redirect_identifier, user_id)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id, created_at, modified_at, redirect_url, is_private, redirect_identifier, user_id
            )
            SELECT
                i.id,
                i.created_at,
                i.modified_at,
                i.redirect_url,
                i.is_private,
                i.redirect_identifier,
                i.user_id,
                u.username
            FROM inserted i
            LEFT JOIN users u ON u.id = i.user_id
            "#,
        )
        .bind(new_rule.id)
        .bind(&new_rule.redirect_url)
        .bind(new_rule.is_private)
        .bind(&new_rule.redirect_identifier)
        .bind(new_rule.owner_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: Uuid, owner_id: i64) -> Result<Option<RedirectRule>, AppError> {
        let row = sqlx::query_as::<_, RedirectRuleRow>(
            r#"
            SELECT r.id, r.created_at, r.modified_at, r.redirect_url, r.is_private,
                   r.redirect_identifier, r.user_id, u.username
            FROM redirect_rules r
            LEFT JOIN users u ON u.id = r.user_id
            WHERE r.id = $1 AND r.user_id = $2
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(RedirectRule::from))
    }

    async fn find_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<RedirectRule>, AppError> {
        let row = sqlx::query_as::<_, RedirectRuleRow>(
            r#"
            SELECT r.id, r.created_at, r.modified_at, r.redirect_url, r.is_private,
                   r.redirect_identifier, r.user_id, u.username
            FROM redirect_rules r
            LEFT JOIN users u ON u.id = r.user_id
            WHERE r.redirect_identifier = $1
            "#,
        )
        .bind(identifier)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(RedirectRule::from))
    }

    async fn list_by_owner(&self, owner_id: i64) -> Result<Vec<RedirectRule>, AppError> {
        let rows = sqlx::query_as::<_, RedirectRuleRow>(
            r#"
            SELECT r.id, r.created_at, r.modified_at, r.redirect_url, r.is_private,
                   r.redirect_identifier, r.user_id, u.username
            FROM redirect_rules r
            LEFT JOIN users u ON u.id = r.user_id
            WHERE r.user_id = $1
            ORDER BY r.created_at DESC
            "#,
        )
        .bind(owner_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(RedirectRule::from).collect())
    }

    async fn update(
        &self,
        id: Uuid,
        owner_id: i64,
        patch: RedirectRulePatch,
    ) -> Result<Option<RedirectRule>, AppError> {
        // clock_timestamp() so a patch inside the creating transaction still moves forward.
        let row = sqlx::query_as::<_, RedirectRuleRow>(
            r#"
            WITH updated AS (
                UPDATE redirect_rules
                SET redirect_url = COALESCE($3, redirect_url),
                    is_private   = COALESCE($4, is_private),
                    modified_at  = clock_timestamp()
                WHERE id = $1 AND user_id = $2
                RETURNING id, created_at, modified_at, redirect_url, is_private, redirect_identifier, user_id
            )
            SELECT
                d.id,
                d.created_at,
                d.modified_at,
                d.redirect_url,
                d.is_private,
                d.redirect_identifier,
                d.user_id,
                u.username
            FROM updated d
            LEFT JOIN users u ON u.id = d.user_id
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .bind(patch.redirect_url)
        .bind(patch.is_private)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(RedirectRule::from))
    }

    async fn delete(&self, id: Uuid, owner_id: i64) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            DELETE FROM redirect_rules
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
