//! Durable record store on SQLite.
//!
//! One table, `analyzed_strings`, with the record id as primary key.
//! The frequency map is stored as a JSON text column; every scalar
//! filter is pushed down into the WHERE clause, while
//! `contains_character` stays a post-filter over the decoded rows.

use std::path::Path;

use async_trait::async_trait;
use sqlx::error::DatabaseError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::{QueryBuilder, Row, Sqlite};
use tracing::info;

use strand_core::{AnalyzedRecord, Error, FilterSet, RecordStore, Result};

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS analyzed_strings (
    id TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    length INTEGER NOT NULL,
    is_palindrome INTEGER NOT NULL,
    unique_characters INTEGER NOT NULL,
    word_count INTEGER NOT NULL,
    character_frequency_map TEXT NOT NULL,
    created_at TEXT NOT NULL
)";

const COLUMNS: &str = "id, value, length, is_palindrome, unique_characters, \
                       word_count, character_frequency_map, created_at";

/// SQLite-backed store. The primary-key constraint makes the
/// conditional insert a single atomic statement.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open a database file, creating it if missing, and ensure the
    /// schema exists.
    pub async fn new(path: impl AsRef<Path>) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        Self::connect(options).await
    }

    /// Open a fresh private in-memory database, for tests and
    /// ephemeral runs.
    pub async fn in_memory() -> Result<Self> {
        // Default options point at :memory:.
        Self::connect(SqliteConnectOptions::new()).await
    }

    async fn connect(options: SqliteConnectOptions) -> Result<Self> {
        // SQLite is single-writer, and the in-memory form only exists
        // for as long as its one connection does.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(storage_error)?;
        sqlx::query(SCHEMA)
            .execute(&pool)
            .await
            .map_err(storage_error)?;
        info!("SQLite record store ready");
        Ok(Self { pool })
    }
}

fn storage_error(e: sqlx::Error) -> Error {
    Error::Storage(e.to_string())
}

fn record_from_row(row: &SqliteRow) -> Result<AnalyzedRecord> {
    let frequency_json: String = row
        .try_get("character_frequency_map")
        .map_err(storage_error)?;
    let character_frequency_map = serde_json::from_str(&frequency_json)
        .map_err(|e| Error::Storage(format!("corrupt character_frequency_map column: {e}")))?;
    Ok(AnalyzedRecord {
        id: row.try_get("id").map_err(storage_error)?,
        value: row.try_get("value").map_err(storage_error)?,
        length: row.try_get::<i64, _>("length").map_err(storage_error)? as usize,
        is_palindrome: row.try_get("is_palindrome").map_err(storage_error)?,
        unique_characters: row
            .try_get::<i64, _>("unique_characters")
            .map_err(storage_error)? as usize,
        word_count: row.try_get::<i64, _>("word_count").map_err(storage_error)? as usize,
        character_frequency_map,
        created_at: row.try_get("created_at").map_err(storage_error)?,
    })
}

#[async_trait]
impl RecordStore for SqliteStore {
    async fn exists(&self, id: &str) -> Result<bool> {
        let found: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM analyzed_strings WHERE id = ?)")
                .bind(id)
                .fetch_one(&self.pool)
                .await
                .map_err(storage_error)?;
        Ok(found)
    }

    async fn insert(&self, record: &AnalyzedRecord) -> Result<()> {
        let frequency_json = serde_json::to_string(&record.character_frequency_map)
            .map_err(|e| Error::Storage(format!("character_frequency_map failed to encode: {e}")))?;
        sqlx::query(
            "INSERT INTO analyzed_strings \
             (id, value, length, is_palindrome, unique_characters, \
              word_count, character_frequency_map, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&record.id)
        .bind(&record.value)
        .bind(record.length as i64)
        .bind(record.is_palindrome)
        .bind(record.unique_characters as i64)
        .bind(record.word_count as i64)
        .bind(frequency_json)
        .bind(record.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if e.as_database_error()
                .is_some_and(DatabaseError::is_unique_violation)
            {
                Error::Duplicate(record.id.clone())
            } else {
                storage_error(e)
            }
        })?;
        Ok(())
    }

    async fn find_by_value(&self, value: &str) -> Result<Option<AnalyzedRecord>> {
        let sql = format!("SELECT {COLUMNS} FROM analyzed_strings WHERE value = ? LIMIT 1");
        let row = sqlx::query(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)?;
        row.as_ref().map(record_from_row).transpose()
    }

    async fn delete_by_value(&self, value: &str) -> Result<()> {
        let result = sqlx::query("DELETE FROM analyzed_strings WHERE value = ?")
            .bind(value)
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;
        if result.rows_affected() == 0 {
            return Err(Error::NotFound);
        }
        Ok(())
    }

    async fn list(&self, filters: &FilterSet) -> Result<Vec<AnalyzedRecord>> {
        let mut builder: QueryBuilder<'_, Sqlite> =
            QueryBuilder::new(format!("SELECT {COLUMNS} FROM analyzed_strings WHERE 1 = 1"));
        if let Some(count) = filters.word_count {
            builder.push(" AND word_count = ").push_bind(count);
        }
        if let Some(palindrome) = filters.is_palindrome {
            builder.push(" AND is_palindrome = ").push_bind(palindrome);
        }
        if let Some(min) = filters.min_length {
            builder.push(" AND length >= ").push_bind(min);
        }
        if let Some(max) = filters.max_length {
            builder.push(" AND length <= ").push_bind(max);
        }
        // rowid follows insertion, which is the creation order callers see
        builder.push(" ORDER BY rowid");

        let rows = builder
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;
        let mut records = rows
            .iter()
            .map(record_from_row)
            .collect::<Result<Vec<_>>>()?;

        // Substring membership over the original value cannot be answered
        // by the scalar columns, so it stays a post-filter.
        if let Some(ch) = filters.contains_character {
            records.retain(|record| record.value.contains(ch));
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    async fn round_trips_a_record() {
        let store = SqliteStore::in_memory().await.expect("store opens");
        let record = AnalyzedRecord::from_value("héllo wörld");
        store.insert(&record).await.expect("insert succeeds");

        let found = store
            .find_by_value("héllo wörld")
            .await
            .expect("lookup succeeds")
            .expect("record is present");
        assert_eq!(found, record);
    }

    #[tokio::test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    async fn duplicate_insert_maps_the_constraint() {
        let store = SqliteStore::in_memory().await.expect("store opens");
        let record = AnalyzedRecord::from_value("twice");
        store.insert(&record).await.expect("first insert succeeds");

        let err = store
            .insert(&record)
            .await
            .expect_err("second insert must fail");
        assert!(matches!(err, Error::Duplicate(ref id) if *id == record.id));
    }

    #[tokio::test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    async fn filters_push_down_and_post_filter() {
        let store = SqliteStore::in_memory().await.expect("store opens");
        for value in ["noon day", "noon", "evening"] {
            store
                .insert(&AnalyzedRecord::from_value(value))
                .await
                .expect("insert succeeds");
        }

        let filters = FilterSet {
            word_count: Some(1),
            contains_character: Some('n'),
            ..FilterSet::default()
        };
        let listed = store.list(&filters).await.expect("list succeeds");
        let values: Vec<&str> = listed.iter().map(|r| r.value.as_str()).collect();
        assert_eq!(values, vec!["noon", "evening"]);
    }
}
