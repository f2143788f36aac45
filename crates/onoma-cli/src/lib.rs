// NOTE: onoma CLI Architecture
//
// Why presenters between handlers and renderers?
// - Handlers own control flow and domain state, presenters are pure
//   ViewModel builders, renderers only map ViewModels to a medium
// - The TUI and the console list share one presenter, so the "Showing X
//   of N" contract cannot diverge between the two surfaces
//
// Why a TTY guard on browse (not a silent fallback)?
// - Piped stdout means the user wanted scripted output; guessing a
//   degraded interactive mode helps nobody. `onoma list` is the
//   explicit non-interactive surface.

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod presentation;

pub use args::{Cli, Commands, OutputFormat};
pub use commands::run;
