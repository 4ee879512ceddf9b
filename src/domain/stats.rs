// Traffic statistics domain model

/// One full refresh of the per-window request counters. `labels` and
/// `counts` are parallel: `counts[i]` is the request count for window
/// `labels[i]`. Label order follows the device's payload; nothing is
/// accumulated across snapshots, each one replaces the last wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrafficSnapshot {
    pub labels: Vec<String>,
    pub counts: Vec<u64>,
}

impl TrafficSnapshot {
    pub fn new(labels: Vec<String>, counts: Vec<u64>) -> Self {
        Self { labels, counts }
    }

    pub fn push_window(&mut self, label: String, count: u64) {
        self.labels.push(label);
        self.counts.push(count);
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
