//! Browse Presenter
//!
//! PURE FUNCTIONS that convert the engine's ViewState into ViewModels.
//! The presenter makes every display decision (placeholders, counts,
//! truncation); renderers only map the result to a medium.

use onoma_engine::{Status, ViewState};
use onoma_types::Record;

use crate::presentation::view_models::{CardViewModel, ResultsInfoViewModel, ScreenViewModel};

/// Shown in place of an attribute the dataset left empty.
pub const FIELD_PLACEHOLDER: &str = "N/A";

/// Build the complete screen ViewModel from current domain state.
///
/// `limit` truncates the card list for non-scrolling surfaces; the counts
/// always describe the full visible set.
pub fn build_screen_view_model(state: &ViewState, limit: Option<usize>) -> ScreenViewModel {
    match state.status() {
        Status::Loading => ScreenViewModel::Loading,

        Status::Failed(message) => ScreenViewModel::Failed {
            message: message.clone(),
        },

        Status::Ready => {
            let visible = state.visible();
            let shown = limit.unwrap_or(visible.len()).min(visible.len());

            ScreenViewModel::Ready {
                info: ResultsInfoViewModel {
                    visible: visible.len(),
                    total: state.records().len(),
                },
                no_results: visible.is_empty(),
                cards: visible[..shown].iter().map(record_to_card).collect(),
                more: visible.len() - shown,
            }
        }
    }
}

fn record_to_card(record: &Record) -> CardViewModel {
    CardViewModel {
        name: record.name.clone(),
        length: placeholder_if_empty(&record.length),
        syllables: placeholder_if_empty(&record.syllables_est),
        vowel_ratio: placeholder_if_empty(&record.vowel_ratio),
    }
}

// Only the empty string falls back; whitespace-only values display verbatim.
fn placeholder_if_empty(value: &str) -> String {
    if value.is_empty() {
        FIELD_PLACEHOLDER.to_string()
    } else {
        value.to_string()
    }
}
