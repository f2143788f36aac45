use anyhow::Result;
use std::path::Path;

use crate::args::OutputFormat;
use crate::presentation::presenters::browse::build_screen_view_model;
use crate::presentation::renderers::console::ScreenView;
use onoma_engine::{ViewState, load_dataset};

/// Non-interactive filter+sort: one load, one recompute, one print.
pub fn handle(
    dataset: &Path,
    prefix: &str,
    limit: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    let records = load_dataset(dataset)?;

    let mut state = ViewState::new();
    state.apply_load(Ok(records));
    state.set_search_term(prefix);

    if format == OutputFormat::Json {
        let shown = limit.unwrap_or(state.visible().len());
        let visible = &state.visible()[..shown.min(state.visible().len())];
        println!("{}", serde_json::to_string_pretty(visible)?);
    } else {
        let screen = build_screen_view_model(&state, limit);
        print!("{}", ScreenView::new(&screen));
    }

    Ok(())
}
