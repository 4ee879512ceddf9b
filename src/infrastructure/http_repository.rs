// HTTP repository implementation backed by the access point's status endpoints
use crate::application::status_repository::StatusRepository;
use crate::domain::clients::ClientList;
use crate::domain::stats::TrafficSnapshot;
use crate::infrastructure::config::DashboardConfig;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct HttpStatusRepository {
    client: reqwest::Client,
    base_url: String,
    clients_path: String,
    stats_path: String,
    logout_path: String,
}

impl HttpStatusRepository {
    pub fn new(config: &DashboardConfig) -> Result<Self> {
        // Redirects are not followed: the device answers a stale session
        // with a redirect to its login page, and following it would hand a
        // poller an HTML body. A redirect status is just a failed tick.
        let client = reqwest::Client::builder()
            .timeout(config.poll.request_timeout())
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: config.device.base_url.trim_end_matches('/').to_string(),
            clients_path: config.device.clients_path.clone(),
            stats_path: config.device.stats_path.clone(),
            logout_path: config.device.logout_path.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get(&self, path: &str) -> Result<reqwest::Response> {
        let url = self.endpoint(path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", url))?;

        if !response.status().is_success() {
            anyhow::bail!("{} returned status {}", url, response.status());
        }

        Ok(response)
    }
}

/// Turn the raw stats body into a snapshot. The body must be a JSON object;
/// each value is probed for an unsigned `count` and anything else (missing
/// field, null, negative, wrong type) contributes 0, so a window with no
/// traffic and a window with no counter render the same.
pub fn snapshot_from_body(body: &Value) -> Result<TrafficSnapshot> {
    let windows = body
        .as_object()
        .context("stats body is not a JSON object")?;

    let mut snapshot = TrafficSnapshot::default();
    for (label, record) in windows {
        let count = record.get("count").and_then(Value::as_u64).unwrap_or(0);
        snapshot.push_window(label.clone(), count);
    }
    Ok(snapshot)
}

#[async_trait]
impl StatusRepository for HttpStatusRepository {
    async fn fetch_clients(&self) -> Result<ClientList> {
        let response = self.get(&self.clients_path).await?;
        let macs: Vec<String> = response
            .json()
            .await
            .context("clients body is not a JSON array of strings")?;
        Ok(ClientList::new(macs))
    }

    async fn fetch_stats(&self) -> Result<TrafficSnapshot> {
        let response = self.get(&self.stats_path).await?;
        let body: Value = response
            .json()
            .await
            .context("stats body is not valid JSON")?;
        snapshot_from_body(&body)
    }

    async fn logout(&self) -> Result<()> {
        self.get(&self.logout_path).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn counts_follow_label_order_and_default_to_zero() {
        let body = json!({
            "12:00": { "count": 5 },
            "12:05": {},
            "12:10": { "count": null },
            "12:15": { "count": 2, "bytes": 9000 }
        });

        let snapshot = snapshot_from_body(&body).unwrap();

        assert_eq!(snapshot.labels, ["12:00", "12:05", "12:10", "12:15"]);
        assert_eq!(snapshot.counts, [5, 0, 0, 2]);
    }

    #[test]
    fn non_integer_counts_coerce_to_zero() {
        let body = json!({
            "a": { "count": -3 },
            "b": { "count": "7" },
            "c": 42
        });

        let snapshot = snapshot_from_body(&body).unwrap();

        assert_eq!(snapshot.counts, [0, 0, 0]);
    }

    #[test]
    fn a_non_object_body_is_rejected() {
        assert!(snapshot_from_body(&json!(["12:00"])).is_err());
        assert!(snapshot_from_body(&json!("nope")).is_err());
    }

    #[test]
    fn an_empty_object_yields_an_empty_snapshot() {
        let snapshot = snapshot_from_body(&json!({})).unwrap();
        assert!(snapshot.is_empty());
    }

    #[test]
    fn endpoint_join_tolerates_a_trailing_slash() {
        let mut config = DashboardConfig::default();
        config.device.base_url = "http://10.0.0.1/".to_string();
        let repository = HttpStatusRepository::new(&config).unwrap();

        assert_eq!(repository.endpoint("/clients"), "http://10.0.0.1/clients");
    }
}
