// MAC poller - Periodic refresh of the connected-client table
use crate::application::status_repository::StatusRepository;
use crate::presentation::mac_table::MacTable;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

pub struct MacPoller {
    repository: Arc<dyn StatusRepository>,
    table: Arc<Mutex<MacTable>>,
}

impl MacPoller {
    pub fn new(repository: Arc<dyn StatusRepository>, table: Arc<Mutex<MacTable>>) -> Self {
        Self { repository, table }
    }

    /// One refresh attempt. Any failure (transport, bad status, malformed
    /// body) abandons the tick and leaves the table exactly as it was; the
    /// next interval retries anyway.
    pub async fn tick(&self) {
        match self.repository.fetch_clients().await {
            Ok(clients) => {
                tracing::debug!("client list refreshed, {} entries", clients.len());
                self.table.lock().replace(clients);
            }
            Err(e) => {
                tracing::warn!("client list refresh skipped: {e:#}");
            }
        }
    }

    /// Run forever on a fixed interval. The first tick fires immediately so
    /// the table is populated without waiting a full period. Awaiting the
    /// fetch inside the tick body means at most one request is ever in
    /// flight for this poller.
    pub async fn run(self, period: Duration) {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            self.tick().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clients::ClientList;
    use crate::domain::stats::TrafficSnapshot;
    use async_trait::async_trait;
    use std::collections::VecDeque;

    struct ScriptedRepository {
        responses: Mutex<VecDeque<anyhow::Result<ClientList>>>,
    }

    impl ScriptedRepository {
        fn new(responses: Vec<anyhow::Result<ClientList>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
            }
        }
    }

    #[async_trait]
    impl StatusRepository for ScriptedRepository {
        async fn fetch_clients(&self) -> anyhow::Result<ClientList> {
            self.responses
                .lock()
                .pop_front()
                .expect("no scripted response left")
        }

        async fn fetch_stats(&self) -> anyhow::Result<TrafficSnapshot> {
            unimplemented!("not exercised by the MAC poller")
        }

        async fn logout(&self) -> anyhow::Result<()> {
            unimplemented!("not exercised by the MAC poller")
        }
    }

    fn poller_with(responses: Vec<anyhow::Result<ClientList>>) -> (MacPoller, Arc<Mutex<MacTable>>) {
        let table = Arc::new(Mutex::new(MacTable::new()));
        let repository = Arc::new(ScriptedRepository::new(responses));
        (MacPoller::new(repository, table.clone()), table)
    }

    #[tokio::test]
    async fn successful_tick_replaces_the_table() {
        let (poller, table) = poller_with(vec![Ok(ClientList::new(vec![
            "11:22:33:44:55:66".to_string(),
            "aa:bb:cc:dd:ee:ff".to_string(),
        ]))]);

        poller.tick().await;

        let rows = table.lock().rows().to_vec();
        assert_eq!(
            rows,
            vec![
                (1, "11:22:33:44:55:66".to_string()),
                (2, "aa:bb:cc:dd:ee:ff".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn failed_tick_leaves_prior_rows_untouched() {
        let (poller, table) = poller_with(vec![
            Ok(ClientList::new(vec!["aa:bb".to_string()])),
            Err(anyhow::anyhow!("device returned 500")),
        ]);

        poller.tick().await;
        poller.tick().await;

        let rows = table.lock().rows().to_vec();
        assert_eq!(rows, vec![(1, "aa:bb".to_string())]);
    }

    #[tokio::test]
    async fn empty_list_clears_the_table() {
        let (poller, table) = poller_with(vec![
            Ok(ClientList::new(vec!["aa:bb".to_string(), "cc:dd".to_string()])),
            Ok(ClientList::default()),
        ]);

        poller.tick().await;
        poller.tick().await;

        assert!(table.lock().rows().is_empty());
    }
}
