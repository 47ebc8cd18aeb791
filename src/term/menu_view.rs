//! MenuView: maps a `SupplySnapshot` into terminal lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::SupplySnapshot;
use crate::types::Piece;

/// Renders the supply state and the action menu as plain lines.
#[derive(Debug, Default)]
pub struct MenuView;

impl MenuView {
    /// Render a snapshot plus an optional status message from the last
    /// action.
    pub fn render(&self, snapshot: &SupplySnapshot, status: Option<&str>) -> Vec<String> {
        let mut lines = Vec::with_capacity(16);

        lines.push("== Piece Rack ==".to_string());
        lines.push(String::new());
        lines.push("Upcoming pieces (front -> back):".to_string());
        lines.push(format!("  {}", render_row(&snapshot.queue)));
        lines.push("Reserve (top -> bottom):".to_string());
        lines.push(format!("  {}", render_row(&snapshot.reserve)));
        lines.push(String::new());

        if let Some(status) = status {
            lines.push(format!("> {status}"));
            lines.push(String::new());
        }

        lines.push("1 - play front piece".to_string());
        lines.push("2 - reserve front piece".to_string());
        lines.push("3 - use reserved piece".to_string());
        lines.push("4 - swap front with reserve top".to_string());
        lines.push("5 - swap 3 from queue with 3 from reserve".to_string());
        lines.push("0/q - quit".to_string());

        lines
    }
}

fn render_row(pieces: &[Piece]) -> String {
    if pieces.is_empty() {
        return "(empty)".to_string();
    }
    let mut row = String::new();
    for (i, piece) in pieces.iter().enumerate() {
        if i > 0 {
            row.push(' ');
        }
        row.push_str(&piece.to_string());
    }
    row
}
