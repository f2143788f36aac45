use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::app::AppState;
use crate::presentation::presenters::browse::build_screen_view_model;
use crate::presentation::view_models::{CardViewModel, ResultsInfoViewModel, ScreenViewModel};

pub(crate) fn draw(f: &mut Frame, app: &AppState) {
    let screen = build_screen_view_model(app.view(), None);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Length(3), // Search box (with borders)
            Constraint::Min(0),    // Body
            Constraint::Length(2), // Footer
        ])
        .split(f.area());

    render_title_bar(f, chunks[0]);
    render_search_box(f, chunks[1], app.view().search_term());
    render_body(f, chunks[2], &screen, app.scroll());
    render_footer(f, chunks[3]);
}

fn render_title_bar(f: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            "━━ ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Onoma Name Browser",
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " — type to search by prefix",
            Style::default().fg(Color::White),
        ),
        Span::styled(
            " ━━",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    f.render_widget(Paragraph::new(title), area);
}

fn render_search_box(f: &mut Frame, area: Rect, term: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Span::styled(
            " Search ",
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ));

    let line = Line::from(vec![
        Span::styled(
            term.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("▌", Style::default().fg(Color::Cyan)),
    ]);

    f.render_widget(Paragraph::new(line).block(block), area);
}

fn render_body(f: &mut Frame, area: Rect, screen: &ScreenViewModel, scroll: usize) {
    match screen {
        ScreenViewModel::Loading => {
            let paragraph = Paragraph::new(Line::from(Span::styled(
                "Loading names...",
                Style::default().fg(Color::DarkGray),
            )));
            f.render_widget(paragraph, area);
        }

        ScreenViewModel::Failed { message } => {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::LightRed))
                .title(Span::styled(
                    " Error ",
                    Style::default()
                        .fg(Color::LightRed)
                        .add_modifier(Modifier::BOLD),
                ));

            let paragraph = Paragraph::new(Line::from(Span::styled(
                message.clone(),
                Style::default().fg(Color::Red),
            )))
            .block(block);
            f.render_widget(paragraph, area);
        }

        ScreenViewModel::Ready {
            info,
            no_results,
            cards,
            ..
        } => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1), Constraint::Min(0)])
                .split(area);

            render_results_info(f, chunks[0], info);

            if *no_results {
                let paragraph = Paragraph::new(Line::from(Span::styled(
                    "No names found matching your search.",
                    Style::default().fg(Color::DarkGray),
                )));
                f.render_widget(paragraph, chunks[1]);
            } else {
                render_card_list(f, chunks[1], cards, scroll);
            }
        }
    }
}

fn render_results_info(f: &mut Frame, area: Rect, info: &ResultsInfoViewModel) {
    let line = Line::from(vec![
        Span::styled("Showing ", Style::default().fg(Color::Gray)),
        Span::styled(
            info.visible.to_string(),
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" of ", Style::default().fg(Color::Gray)),
        Span::styled(
            info.total.to_string(),
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" names", Style::default().fg(Color::Gray)),
    ]);

    f.render_widget(Paragraph::new(line), area);
}

fn render_card_list(f: &mut Frame, area: Rect, cards: &[CardViewModel], scroll: usize) {
    let items: Vec<ListItem> = cards
        .iter()
        .skip(scroll)
        .map(|card| {
            let name_line = Line::from(Span::styled(
                card.name.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ));

            let details_line = Line::from(vec![
                Span::styled("  Length: ", Style::default().fg(Color::Gray)),
                Span::styled(card.length.clone(), Style::default().fg(Color::LightCyan)),
                Span::styled("  Syllables: ", Style::default().fg(Color::Gray)),
                Span::styled(card.syllables.clone(), Style::default().fg(Color::LightCyan)),
                Span::styled("  Vowel Ratio: ", Style::default().fg(Color::Gray)),
                Span::styled(
                    card.vowel_ratio.clone(),
                    Style::default().fg(Color::LightCyan),
                ),
            ]);

            ListItem::new(Text::from(vec![name_line, details_line]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    f.render_widget(list, area);
}

fn render_footer(f: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::styled("Type", Style::default().fg(Color::LightCyan)),
        Span::styled(" search  ", Style::default().fg(Color::Gray)),
        Span::styled("Backspace", Style::default().fg(Color::LightCyan)),
        Span::styled(" delete  ", Style::default().fg(Color::Gray)),
        Span::styled("↑/↓", Style::default().fg(Color::LightCyan)),
        Span::styled(" scroll  ", Style::default().fg(Color::Gray)),
        Span::styled("Esc", Style::default().fg(Color::LightCyan)),
        Span::styled(" quit", Style::default().fg(Color::Gray)),
    ]);

    let footer = Paragraph::new(hints).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    f.render_widget(footer, area);
}
