// Frame layout - Table on the left, chart on the right, key hints below
use crate::presentation::mac_table::MacTable;
use crate::presentation::traffic_chart::TrafficChart;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub fn draw(frame: &mut Frame, mac_table: &MacTable, traffic_chart: &TrafficChart) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Length(1)])
        .split(frame.area());

    let widgets = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(outer[0]);

    mac_table.render(frame, widgets[0]);
    traffic_chart.render(frame, widgets[1]);

    let hints = Paragraph::new(" l logout · q quit").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hints, outer[1]);
}
