use std::fmt;

use owo_colors::OwoColorize;

use crate::presentation::view_models::{CardViewModel, ScreenViewModel};

// --------------------------------------------------------
// Screen View (console)
// --------------------------------------------------------

pub struct ScreenView<'a> {
    screen: &'a ScreenViewModel,
}

impl<'a> ScreenView<'a> {
    pub fn new(screen: &'a ScreenViewModel) -> Self {
        Self { screen }
    }
}

impl<'a> fmt::Display for ScreenView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.screen {
            ScreenViewModel::Loading => writeln!(f, "Loading names..."),

            ScreenViewModel::Failed { message } => {
                writeln!(f, "{} {}", "✗".red(), message)
            }

            ScreenViewModel::Ready {
                info,
                no_results,
                cards,
                more,
            } => {
                writeln!(f, "Showing {} of {} names", info.visible, info.total)?;

                if *no_results {
                    return writeln!(f, "No names found matching your search.");
                }

                for card in cards {
                    write_card(f, card)?;
                }

                if *more > 0 {
                    writeln!(f, "{}", format!("... and {} more", more).dimmed())?;
                }

                Ok(())
            }
        }
    }
}

fn write_card(f: &mut fmt::Formatter, card: &CardViewModel) -> fmt::Result {
    writeln!(f, "{}", card.name.bold())?;
    writeln!(
        f,
        "  {} {}  {} {}  {} {}",
        "Length:".dimmed(),
        card.length,
        "Syllables:".dimmed(),
        card.syllables,
        "Vowel Ratio:".dimmed(),
        card.vowel_ratio,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::ResultsInfoViewModel;

    fn card(name: &str) -> CardViewModel {
        CardViewModel {
            name: name.to_string(),
            length: "3".to_string(),
            syllables: "1".to_string(),
            vowel_ratio: "N/A".to_string(),
        }
    }

    #[test]
    fn ready_screen_prints_counts_and_cards() {
        let screen = ScreenViewModel::Ready {
            info: ResultsInfoViewModel {
                visible: 1,
                total: 3,
            },
            no_results: false,
            cards: vec![card("Dev")],
            more: 0,
        };

        let out = ScreenView::new(&screen).to_string();
        assert!(out.contains("Showing 1 of 3 names"));
        assert!(out.contains("Dev"));
        assert!(out.contains("N/A"));
    }

    #[test]
    fn empty_result_prints_the_notice_not_an_error() {
        let screen = ScreenViewModel::Ready {
            info: ResultsInfoViewModel {
                visible: 0,
                total: 3,
            },
            no_results: true,
            cards: vec![],
            more: 0,
        };

        let out = ScreenView::new(&screen).to_string();
        assert!(out.contains("Showing 0 of 3 names"));
        assert!(out.contains("No names found matching your search."));
    }

    #[test]
    fn truncation_note_appears_when_more_remains() {
        let screen = ScreenViewModel::Ready {
            info: ResultsInfoViewModel {
                visible: 5,
                total: 5,
            },
            no_results: false,
            cards: vec![card("Dev")],
            more: 4,
        };

        let out = ScreenView::new(&screen).to_string();
        assert!(out.contains("and 4 more"));
    }

    #[test]
    fn failed_screen_prints_the_message() {
        let screen = ScreenViewModel::Failed {
            message: "no data found in the dataset".to_string(),
        };

        let out = ScreenView::new(&screen).to_string();
        assert!(out.contains("no data found in the dataset"));
    }
}
