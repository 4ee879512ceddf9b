// Requests-per-window bar chart widget
use crate::domain::stats::TrafficSnapshot;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders};
use ratatui::Frame;

/// The chart data proper: window labels on the x-axis, one series of
/// request counts. Built on the first successful refresh and mutated in
/// place after that, never torn down and rebuilt.
#[derive(Debug, PartialEq, Eq)]
struct ChartState {
    labels: Vec<String>,
    counts: Vec<u64>,
}

#[derive(Debug, Default)]
pub struct TrafficChart {
    state: Option<ChartState>,
    builds: u32,
}

impl TrafficChart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one snapshot. Initializes the chart state on first use and
    /// replaces labels and counts in place thereafter; labels missing from
    /// the latest snapshot simply disappear.
    pub fn apply(&mut self, snapshot: TrafficSnapshot) {
        match &mut self.state {
            Some(state) => {
                state.labels = snapshot.labels;
                state.counts = snapshot.counts;
            }
            None => {
                self.state = Some(ChartState {
                    labels: snapshot.labels,
                    counts: snapshot.counts,
                });
                self.builds += 1;
            }
        }
    }

    /// How many times the underlying chart state has been constructed.
    /// Stays at 1 for the whole life of the dashboard once data arrives.
    pub fn builds(&self) -> u32 {
        self.builds
    }

    pub fn labels(&self) -> &[String] {
        self.state.as_ref().map(|s| s.labels.as_slice()).unwrap_or(&[])
    }

    pub fn counts(&self) -> &[u64] {
        self.state.as_ref().map(|s| s.counts.as_slice()).unwrap_or(&[])
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title("Requests / window")
            .borders(Borders::ALL);

        let Some(state) = &self.state else {
            // Nothing fetched yet; just the frame.
            frame.render_widget(block, area);
            return;
        };

        let bars: Vec<Bar> = state
            .labels
            .iter()
            .zip(&state.counts)
            .map(|(label, count)| {
                Bar::default()
                    .value(*count)
                    .label(Line::from(label.clone()))
            })
            .collect();

        let chart = BarChart::default()
            .data(BarGroup::default().bars(&bars))
            .block(block)
            .bar_width(7)
            .bar_gap(1);

        frame.render_widget(chart, area);
    }
}
