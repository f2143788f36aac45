// NOTE: onoma Pipeline Rationale
//
// Why derive the visible set (not maintain it)?
// - The visible list is a pure function of (records, search_term)
// - Recomputing after every mutation means it can never drift out of sync
// - Trade-off: redundant work per keystroke, irrelevant at this scale
//
// Why a one-shot loader thread (not an async runtime)?
// - Exactly one load happens per session, at startup
// - A thread plus an mpsc channel keeps the UI loop free to draw the
//   loading frame without pulling in a runtime for a single suspension point

pub mod error;
pub mod filter;
pub mod loader;
pub mod parser;
pub mod state;

pub use error::{Error, Result};
pub use filter::compute_visible;
pub use loader::{load_dataset, spawn_load};
pub use parser::parse_dataset;
pub use state::{Status, ViewState};
