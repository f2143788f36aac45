use anyhow::{Result, bail};
use is_terminal::IsTerminal;
use std::path::Path;

use crate::presentation::renderers::tui;
use onoma_engine::spawn_load;

/// Interactive browse: start the one-shot dataset load in the background
/// and hand its channel to the TUI, which draws the loading frame until
/// the result arrives.
pub fn handle(dataset: &Path) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        bail!("interactive browse needs a terminal; use `onoma list` for scripted output");
    }

    let load_rx = spawn_load(dataset.to_path_buf());
    tui::run(load_rx)
}
