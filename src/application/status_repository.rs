// Repository trait for access-point status data
use crate::domain::clients::ClientList;
use crate::domain::stats::TrafficSnapshot;
use async_trait::async_trait;

#[async_trait]
pub trait StatusRepository: Send + Sync {
    /// Fetch the current list of associated client MACs
    async fn fetch_clients(&self) -> anyhow::Result<ClientList>;

    /// Fetch the per-window request counters
    async fn fetch_stats(&self) -> anyhow::Result<TrafficSnapshot>;

    /// Ask the device to end the current session
    async fn logout(&self) -> anyhow::Result<()>;
}
