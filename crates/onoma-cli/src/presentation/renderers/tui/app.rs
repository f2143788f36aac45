use onoma_engine::{Result, ViewState};
use onoma_types::Record;

/// Widget-side state: the engine's view state plus the list scroll
/// position. The search term lives in the view state — the renderer edits
/// it through `push_char`/`pop_char` so there is a single source of truth.
pub(crate) struct AppState {
    state: ViewState,
    scroll: usize,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            state: ViewState::new(),
            scroll: 0,
        }
    }

    pub fn apply_load(&mut self, outcome: Result<Vec<Record>>) {
        self.state.apply_load(outcome);
        self.scroll = 0;
    }

    pub fn push_char(&mut self, c: char) {
        let mut term = self.state.search_term().to_string();
        term.push(c);
        self.state.set_search_term(term);
        self.scroll = 0;
    }

    pub fn pop_char(&mut self) {
        let mut term = self.state.search_term().to_string();
        term.pop();
        self.state.set_search_term(term);
        self.scroll = 0;
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        if self.scroll + 1 < self.state.visible().len() {
            self.scroll += 1;
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.state
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }
}
