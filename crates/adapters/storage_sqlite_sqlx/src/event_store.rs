//! `SQLite` implementation of [`EventStore`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use sprout_app::ports::EventStore;
use sprout_domain::alert::Alert;
use sprout_domain::error::SproutError;
use sprout_domain::payload::Payload;
use sprout_domain::reading::Reading;

use crate::error::StorageError;

struct ReadingRow(Reading);

impl<'r> FromRow<'r, SqliteRow> for ReadingRow {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let ts: String = row.try_get("ts")?;
        let topic: String = row.try_get("topic")?;
        let payload_json: String = row.try_get("payload")?;

        let timestamp = chrono::DateTime::parse_from_rfc3339(&ts)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?
            .to_utc();
        let value: serde_json::Value = serde_json::from_str(&payload_json)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Reading {
            timestamp,
            topic,
            // The log keeps the persisted form, so a raw fallback comes
            // back as the wrapped `{"raw": ...}` object.
            payload: Payload::Json(value),
        }))
    }
}

struct AlertRow(Alert);

impl<'r> FromRow<'r, SqliteRow> for AlertRow {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let ts: String = row.try_get("ts")?;
        let message: String = row.try_get("alert")?;

        let timestamp = chrono::DateTime::parse_from_rfc3339(&ts)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?
            .to_utc();

        Ok(Self(Alert { timestamp, message }))
    }
}

const INSERT_READING: &str = r"
    INSERT INTO sensor_data (ts, topic, payload)
    VALUES (?, ?, ?)
";

const INSERT_ALERT: &str = r"
    INSERT INTO alerts (ts, alert)
    VALUES (?, ?)
";

const SELECT_RECENT_READINGS: &str = "SELECT * FROM sensor_data ORDER BY id DESC LIMIT ?";
const SELECT_RECENT_ALERTS: &str = "SELECT * FROM alerts ORDER BY id DESC LIMIT ?";

/// `SQLite`-backed append-only event store.
#[derive(Clone)]
pub struct SqliteEventStore {
    pool: SqlitePool,
}

impl SqliteEventStore {
    /// Create a new event store using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl EventStore for SqliteEventStore {
    async fn append_reading(&self, reading: &Reading) -> Result<(), SproutError> {
        let payload_json =
            serde_json::to_string(&reading.payload.to_stored_json()).map_err(StorageError::from)?;

        sqlx::query(INSERT_READING)
            .bind(reading.timestamp.to_rfc3339())
            .bind(&reading.topic)
            .bind(&payload_json)
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(())
    }

    async fn append_alert(&self, alert: &Alert) -> Result<(), SproutError> {
        sqlx::query(INSERT_ALERT)
            .bind(alert.timestamp.to_rfc3339())
            .bind(&alert.message)
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(())
    }

    async fn recent_readings(&self, limit: usize) -> Result<Vec<Reading>, SproutError> {
        let limit = i32::try_from(limit).unwrap_or(i32::MAX);
        let rows: Vec<ReadingRow> = sqlx::query_as(SELECT_RECENT_READINGS)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|row| row.0).collect())
    }

    async fn recent_alerts(&self, limit: usize) -> Result<Vec<Alert>, SproutError> {
        let limit = i32::try_from(limit).unwrap_or(i32::MAX);
        let rows: Vec<AlertRow> = sqlx::query_as(SELECT_RECENT_ALERTS)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|row| row.0).collect())
    }
}
