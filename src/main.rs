// Main entry point - Dependency injection and the reload loop
use std::sync::Arc;

use anyhow::Result;
use parking_lot::Mutex;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;
use tracing_subscriber::EnvFilter;

use ap_dashboard::application::mac_poller::MacPoller;
use ap_dashboard::application::stats_poller::StatsPoller;
use ap_dashboard::application::status_repository::StatusRepository;
use ap_dashboard::infrastructure::config::{load_dashboard_config, DashboardConfig};
use ap_dashboard::infrastructure::http_repository::HttpStatusRepository;
use ap_dashboard::presentation::app::{restore_terminal, setup_terminal, DashboardApp, Outcome};
use ap_dashboard::presentation::mac_table::MacTable;
use ap_dashboard::presentation::traffic_chart::TrafficChart;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = load_dashboard_config()?;

    // Logs go to a file; the TUI owns the screen
    let file_appender = tracing_appender::rolling::never(".", &config.ui.log_file);
    let (writer, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    // Create repository (infrastructure layer)
    let repository: Arc<dyn StatusRepository> = Arc::new(HttpStatusRepository::new(&config)?);

    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, repository, &config).await;
    restore_terminal()?;
    result
}

/// One iteration per "page load": fresh widgets, fresh poller tasks. A
/// logout comes back as `Reload`, which drops everything and goes around
/// again with empty state, the same as a browser reload would.
async fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    repository: Arc<dyn StatusRepository>,
    config: &DashboardConfig,
) -> Result<()> {
    loop {
        let mac_table = Arc::new(Mutex::new(MacTable::new()));
        let traffic_chart = Arc::new(Mutex::new(TrafficChart::new()));

        let mac_task = tokio::spawn(
            MacPoller::new(repository.clone(), mac_table.clone())
                .run(config.poll.clients_interval()),
        );
        let stats_task = tokio::spawn(
            StatsPoller::new(repository.clone(), traffic_chart.clone())
                .run(config.poll.stats_interval()),
        );

        let app = DashboardApp::new(
            mac_table,
            traffic_chart,
            repository.clone(),
            config.ui.render_tick(),
        );
        let outcome = app.run(terminal).await;

        mac_task.abort();
        stats_task.abort();

        match outcome? {
            Outcome::Reload => {
                tracing::info!("logged out, reloading the dashboard");
            }
            Outcome::Quit => return Ok(()),
        }
    }
}
