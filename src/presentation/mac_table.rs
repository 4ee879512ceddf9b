// Connected-client table widget
use crate::domain::clients::ClientList;
use chrono::{DateTime, Local};
use ratatui::layout::{Constraint, Rect};
use ratatui::widgets::{Block, Borders, Row, Table};
use ratatui::Frame;

/// Table of associated clients, one row per MAC with a 1-based index.
/// Every refresh replaces the rows wholesale; there is no diffing, and
/// applying the same list twice leaves the rows identical.
#[derive(Debug, Default)]
pub struct MacTable {
    rows: Vec<(usize, String)>,
    updated_at: Option<DateTime<Local>>,
}

impl MacTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every existing row and rebuild from `clients` in server order.
    pub fn replace(&mut self, clients: ClientList) {
        self.rows.clear();
        self.rows.extend(
            clients
                .macs
                .into_iter()
                .enumerate()
                .map(|(i, mac)| (i + 1, mac)),
        );
        self.updated_at = Some(Local::now());
    }

    pub fn rows(&self) -> &[(usize, String)] {
        &self.rows
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let title = match self.updated_at {
            Some(at) => format!("Connected Clients ({})", at.format("%H:%M:%S")),
            None => "Connected Clients".to_string(),
        };

        // Cells are plain text content; a hostile identifier renders as-is
        // instead of being interpreted as markup.
        let rows: Vec<Row> = self
            .rows
            .iter()
            .map(|(index, mac)| Row::new(vec![index.to_string(), mac.clone()]))
            .collect();

        let table = Table::new(rows, [Constraint::Length(4), Constraint::Fill(1)])
            .header(Row::new(vec!["#", "MAC"]))
            .block(Block::default().title(title).borders(Borders::ALL));

        frame.render_widget(table, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(macs: &[&str]) -> ClientList {
        ClientList::new(macs.iter().map(|m| m.to_string()).collect())
    }

    #[test]
    fn rows_are_numbered_from_one_in_server_order() {
        let mut table = MacTable::new();

        table.replace(list(&["11:22:33:44:55:66", "aa:bb:cc:dd:ee:ff"]));

        assert_eq!(
            table.rows(),
            [
                (1, "11:22:33:44:55:66".to_string()),
                (2, "aa:bb:cc:dd:ee:ff".to_string()),
            ]
        );
    }

    #[test]
    fn a_shorter_list_leaves_no_leftover_rows() {
        let mut table = MacTable::new();

        table.replace(list(&["aa:aa", "bb:bb", "cc:cc"]));
        table.replace(list(&["dd:dd"]));

        assert_eq!(table.rows(), [(1, "dd:dd".to_string())]);
    }

    #[test]
    fn replacing_with_the_same_list_is_idempotent() {
        let mut table = MacTable::new();

        table.replace(list(&["aa:bb", "cc:dd"]));
        let first = table.rows().to_vec();
        table.replace(list(&["aa:bb", "cc:dd"]));

        assert_eq!(table.rows(), first.as_slice());
    }

    #[test]
    fn an_empty_list_empties_the_table() {
        let mut table = MacTable::new();

        table.replace(list(&["aa:bb"]));
        table.replace(list(&[]));

        assert!(table.rows().is_empty());
    }

    #[test]
    fn duplicate_identifiers_are_kept_as_sent() {
        let mut table = MacTable::new();

        table.replace(list(&["aa:bb", "aa:bb"]));

        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.rows()[0].1, table.rows()[1].1);
    }
}
