// Stats poller - Periodic refresh of the per-window request chart
use crate::application::status_repository::StatusRepository;
use crate::presentation::traffic_chart::TrafficChart;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

pub struct StatsPoller {
    repository: Arc<dyn StatusRepository>,
    chart: Arc<Mutex<TrafficChart>>,
}

impl StatsPoller {
    pub fn new(repository: Arc<dyn StatusRepository>, chart: Arc<Mutex<TrafficChart>>) -> Self {
        Self { repository, chart }
    }

    /// One refresh attempt. Failures leave the chart in its last-rendered
    /// state; a success either builds the chart (first time) or mutates the
    /// existing one in place.
    pub async fn tick(&self) {
        match self.repository.fetch_stats().await {
            Ok(snapshot) => {
                tracing::debug!("stats refreshed, {} windows", snapshot.labels.len());
                self.chart.lock().apply(snapshot);
            }
            Err(e) => {
                tracing::warn!("stats refresh skipped: {e:#}");
            }
        }
    }

    /// Run forever on a fixed interval, first tick immediate. Same
    /// single-request-in-flight property as the MAC poller.
    pub async fn run(self, period: Duration) {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            self.tick().await;
        }
    }
}
