// Presentation layer - Widgets and the terminal UI
pub mod app;
pub mod mac_table;
pub mod traffic_chart;
pub mod ui;
