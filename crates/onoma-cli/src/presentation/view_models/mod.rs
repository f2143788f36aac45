use serde::Serialize;

/// One rendered name entry. Attribute fields arrive already
/// placeholdered; renderers print them as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardViewModel {
    pub name: String,
    pub length: String,
    pub syllables: String,
    pub vowel_ratio: String,
}

/// The "Showing X of N names" counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResultsInfoViewModel {
    pub visible: usize,
    pub total: usize,
}

/// Complete snapshot of what a screen should display.
///
/// `no_results` distinguishes an empty match from the loading and failed
/// states; `more` counts matches beyond the rendered cards when a limit
/// truncated the list (always zero for the TUI, which scrolls instead).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ScreenViewModel {
    Loading,
    Failed {
        message: String,
    },
    Ready {
        info: ResultsInfoViewModel,
        no_results: bool,
        cards: Vec<CardViewModel>,
        more: usize,
    },
}
