//! Interactive piece-rack runner (default binary).
//!
//! Drives the menu loop: renders the current supply state, reads one key,
//! applies the chosen operation, and shows the outcome as a status line.
//! Failures are reported, never fatal.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use tui_piecerack::core::GameSession;
use tui_piecerack::term::{MenuView, Screen};
use tui_piecerack::types::{Piece, SupplyError};

fn main() -> Result<()> {
    let mut screen = Screen::new();
    screen.enter()?;

    let result = run(&mut screen);

    // Always try to restore terminal state.
    let _ = screen.exit();
    result
}

fn run(screen: &mut Screen) -> Result<()> {
    let mut session = GameSession::new(wall_clock_seed());
    let view = MenuView;
    let mut status: Option<String> = None;

    loop {
        let snapshot = session.snapshot();
        let lines = view.render(&snapshot, status.as_deref());
        screen.draw(&lines)?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('1') => {
                    status = Some(describe_piece(session.play_front(), "played"));
                }
                KeyCode::Char('2') => {
                    status = Some(describe_piece(session.reserve_front(), "reserved"));
                }
                KeyCode::Char('3') => {
                    status = Some(describe_piece(session.use_reserved(), "used"));
                }
                KeyCode::Char('4') => {
                    status = Some(describe_swap(
                        session.swap_front_top(),
                        "swapped queue front with reserve top",
                    ));
                }
                KeyCode::Char('5') => {
                    status = Some(describe_swap(
                        session.swap_block_of_three(),
                        "swapped 3 queue pieces with 3 reserve pieces",
                    ));
                }
                KeyCode::Char('0') | KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                _ => {}
            }
        }
    }
}

fn describe_piece(result: Result<Piece, SupplyError>, verb: &str) -> String {
    match result {
        Ok(piece) => format!("Piece {verb}: {piece}"),
        Err(err) => format!("Cannot: {err}"),
    }
}

fn describe_swap(result: Result<(), SupplyError>, done: &str) -> String {
    match result {
        Ok(()) => done.to_string(),
        Err(err) => format!("Cannot: {err}"),
    }
}

/// Seed from wall-clock time; sessions are not reproducible across runs.
fn wall_clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| (d.as_secs() as u32) ^ d.subsec_nanos())
        .unwrap_or(1)
}
