use crate::{ConnectionManager, DirectoryStore, Result as DbErrorResult};

use tzd_core::{UserRecord, UserUpdate};

use std::path::Path;

use async_trait::async_trait;
use log::{debug, info};
use sqlx::SqlitePool;

const SELECT_COLUMNS: &str = "SELECT user_id, timezone, languages, is_mod FROM users";

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: String,
    timezone: Option<String>,
    languages: Option<String>,
    is_mod: bool,
}

impl From<UserRow> for UserRecord {
    fn from(row: UserRow) -> Self {
        Self {
            identity: row.user_id,
            timezone: row.timezone,
            languages: row.languages,
            is_operator: row.is_mod,
        }
    }
}

/// SQLite-backed [`DirectoryStore`].
#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open the database file at `path`, migrating it if needed.
    pub async fn open(path: impl AsRef<Path>) -> DbErrorResult<Self> {
        let pool = ConnectionManager::new(path.as_ref()).connect().await?;
        Ok(Self::new(pool))
    }

    pub async fn open_in_memory() -> DbErrorResult<Self> {
        let pool = ConnectionManager::connect_in_memory().await?;
        Ok(Self::new(pool))
    }

    /// Release every pooled connection. Later calls fail with a storage error.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Directory database closed");
    }

    pub async fn find_by_identity(&self, identity: &str) -> DbErrorResult<Option<UserRecord>> {
        let row = sqlx::query_as::<_, UserRow>(&format!("{SELECT_COLUMNS} WHERE user_id = ?"))
            .bind(identity)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(UserRecord::from))
    }

    /// Insert-or-update in one statement.
    ///
    /// The primary key makes a racing second insert turn into the update
    /// branch, so two writers for the same identity can never produce two
    /// rows. Absent fields bind as NULL and `COALESCE` keeps the stored value.
    pub async fn upsert(&self, identity: &str, update: &UserUpdate) -> DbErrorResult<UserRecord> {
        debug!(
            "Upserting {} (timezone={}, languages={}, is_mod={:?})",
            identity,
            update.timezone.is_some(),
            update.languages.is_some(),
            update.is_operator
        );

        let row = sqlx::query_as::<_, UserRow>(
            r#"
              INSERT INTO users (user_id, timezone, languages, is_mod)
              VALUES (?, ?, ?, COALESCE(?, FALSE))
              ON CONFLICT(user_id) DO UPDATE SET
                  timezone = COALESCE(?, timezone),
                  languages = COALESCE(?, languages),
                  is_mod = COALESCE(?, is_mod)
              RETURNING user_id, timezone, languages, is_mod
              "#,
        )
        .bind(identity)
        .bind(update.timezone.as_deref())
        .bind(update.languages.as_deref())
        .bind(update.is_operator)
        .bind(update.timezone.as_deref())
        .bind(update.languages.as_deref())
        .bind(update.is_operator)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    pub async fn find_operators(&self, timezone: Option<&str>) -> DbErrorResult<Vec<UserRecord>> {
        let rows = match timezone {
            Some(tz) => {
                sqlx::query_as::<_, UserRow>(&format!(
                    "{SELECT_COLUMNS} WHERE is_mod = TRUE AND timezone = ? ORDER BY timezone, rowid"
                ))
                .bind(tz)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, UserRow>(&format!(
                    "{SELECT_COLUMNS} WHERE is_mod = TRUE ORDER BY timezone, rowid"
                ))
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(rows.into_iter().map(UserRecord::from).collect())
    }

    /// Case-insensitive substring match on the stored language string.
    ///
    /// `%` and `_` in `language` are matched literally.
    pub async fn find_by_language(&self, language: &str) -> DbErrorResult<Vec<UserRecord>> {
        let pattern = format!("%{}%", escape_like(language));

        let rows = sqlx::query_as::<_, UserRow>(&format!(
            r"{SELECT_COLUMNS} WHERE languages LIKE ? ESCAPE '\' ORDER BY is_mod DESC, timezone, rowid"
        ))
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(UserRecord::from).collect())
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[async_trait]
impl DirectoryStore for UserRepository {
    async fn upsert(&self, identity: &str, update: &UserUpdate) -> DbErrorResult<UserRecord> {
        UserRepository::upsert(self, identity, update).await
    }

    async fn get(&self, identity: &str) -> DbErrorResult<Option<UserRecord>> {
        self.find_by_identity(identity).await
    }

    async fn find_operators(&self, timezone: Option<&str>) -> DbErrorResult<Vec<UserRecord>> {
        UserRepository::find_operators(self, timezone).await
    }

    async fn find_by_language(&self, language: &str) -> DbErrorResult<Vec<UserRecord>> {
        UserRepository::find_by_language(self, language).await
    }
}

fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
