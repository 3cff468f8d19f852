//! Event store port — append-only persistence for readings and alerts.

use std::future::Future;

use sprout_domain::alert::Alert;
use sprout_domain::error::SproutError;
use sprout_domain::reading::Reading;

/// Append-only log of [`Reading`]s and [`Alert`]s.
///
/// Appends are atomic; records are never updated or deleted. The query
/// side exists for inspection and tests, not for automation decisions.
pub trait EventStore {
    /// Append one reading.
    fn append_reading(
        &self,
        reading: &Reading,
    ) -> impl Future<Output = Result<(), SproutError>> + Send;

    /// Append one alert.
    fn append_alert(&self, alert: &Alert) -> impl Future<Output = Result<(), SproutError>> + Send;

    /// The most recent readings, newest first.
    fn recent_readings(
        &self,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<Reading>, SproutError>> + Send;

    /// The most recent alerts, newest first.
    fn recent_alerts(
        &self,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<Alert>, SproutError>> + Send;
}

impl<T: EventStore + Send + Sync> EventStore for std::sync::Arc<T> {
    fn append_reading(
        &self,
        reading: &Reading,
    ) -> impl Future<Output = Result<(), SproutError>> + Send {
        (**self).append_reading(reading)
    }

    fn append_alert(&self, alert: &Alert) -> impl Future<Output = Result<(), SproutError>> + Send {
        (**self).append_alert(alert)
    }

    fn recent_readings(
        &self,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<Reading>, SproutError>> + Send {
        (**self).recent_readings(limit)
    }

    fn recent_alerts(
        &self,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<Alert>, SproutError>> + Send {
        (**self).recent_alerts(limit)
    }
}
