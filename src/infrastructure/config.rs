use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DashboardConfig {
    #[serde(default)]
    pub device: DeviceSettings,
    #[serde(default)]
    pub poll: PollSettings,
    #[serde(default)]
    pub ui: UiSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DeviceSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_clients_path")]
    pub clients_path: String,
    #[serde(default = "default_stats_path")]
    pub stats_path: String,
    #[serde(default = "default_logout_path")]
    pub logout_path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PollSettings {
    #[serde(default = "default_clients_interval_ms")]
    pub clients_interval_ms: u64,
    #[serde(default = "default_stats_interval_ms")]
    pub stats_interval_ms: u64,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UiSettings {
    #[serde(default = "default_render_tick_ms")]
    pub render_tick_ms: u64,
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

fn default_base_url() -> String {
    // The usual soft-AP address for these devices
    "http://192.168.4.1".to_string()
}

fn default_clients_path() -> String {
    "/clients".to_string()
}

fn default_stats_path() -> String {
    "/get-stats".to_string()
}

fn default_logout_path() -> String {
    "/logout".to_string()
}

fn default_clients_interval_ms() -> u64 {
    3000
}

fn default_stats_interval_ms() -> u64 {
    5000
}

fn default_request_timeout_ms() -> u64 {
    10_000
}

fn default_render_tick_ms() -> u64 {
    250
}

fn default_log_file() -> String {
    "ap-dashboard.log".to_string()
}

impl Default for DeviceSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            clients_path: default_clients_path(),
            stats_path: default_stats_path(),
            logout_path: default_logout_path(),
        }
    }
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            clients_interval_ms: default_clients_interval_ms(),
            stats_interval_ms: default_stats_interval_ms(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            render_tick_ms: default_render_tick_ms(),
            log_file: default_log_file(),
        }
    }
}

impl PollSettings {
    pub fn clients_interval(&self) -> Duration {
        Duration::from_millis(self.clients_interval_ms)
    }

    pub fn stats_interval(&self) -> Duration {
        Duration::from_millis(self.stats_interval_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl UiSettings {
    pub fn render_tick(&self) -> Duration {
        Duration::from_millis(self.render_tick_ms)
    }
}

/// Load `config/dashboard.toml` if present; every field has a default so a
/// missing file just means the stock soft-AP address and cadences.
pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard").required(false))
        .build()?;

    Ok(settings.try_deserialize()?)
}
