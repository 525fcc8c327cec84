//! Terminal frontend glue (crossterm + ratatui).
//!
//! Kept apart from `kernel`/`models` so the editor core builds without terminal crates
//! (`--no-default-features`).

pub mod crossterm;
pub mod terminal_guard;
