// Dashboard application - Render loop, key handling, terminal lifecycle
use crate::application::session;
use crate::application::status_repository::StatusRepository;
use crate::presentation::mac_table::MacTable;
use crate::presentation::traffic_chart::TrafficChart;
use crate::presentation::ui;
use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use parking_lot::Mutex;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

/// Why the app loop returned: a logout "reloads" the dashboard (all widget
/// state is discarded and the pollers restart fresh), a quit ends it.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Reload,
    Quit,
}

pub struct DashboardApp {
    mac_table: Arc<Mutex<MacTable>>,
    traffic_chart: Arc<Mutex<TrafficChart>>,
    repository: Arc<dyn StatusRepository>,
    render_tick: Duration,
}

impl DashboardApp {
    pub fn new(
        mac_table: Arc<Mutex<MacTable>>,
        traffic_chart: Arc<Mutex<TrafficChart>>,
        repository: Arc<dyn StatusRepository>,
        render_tick: Duration,
    ) -> Self {
        Self {
            mac_table,
            traffic_chart,
            repository,
            render_tick,
        }
    }

    /// Draw at the render cadence until the user quits or logs out. The
    /// pollers run on their own tasks and only share the widget mutexes
    /// with this loop, so a draw always sees a complete refresh, never a
    /// half-applied one.
    pub async fn run(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<Outcome> {
        loop {
            terminal.draw(|frame| {
                let mac_table = self.mac_table.lock();
                let traffic_chart = self.traffic_chart.lock();
                ui::draw(frame, &mac_table, &traffic_chart);
            })?;

            if !event::poll(self.render_tick)? {
                continue;
            }
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(Outcome::Quit),
                    KeyCode::Char('l') => {
                        session::logout(&self.repository).await;
                        return Ok(Outcome::Reload);
                    }
                    _ => {}
                }
            }
        }
    }
}

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    io::stdout()
        .execute(EnterAlternateScreen)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(io::stdout());
    Terminal::new(backend).context("Failed to create terminal")
}

pub fn restore_terminal() -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    io::stdout()
        .execute(LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    Ok(())
}
