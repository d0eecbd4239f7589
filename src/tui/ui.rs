use crate::faq::{highlight, parse_answer_markup, AnswerSegment};
use crate::tui::app::{App, Mode};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Query input
            Constraint::Length(1), // Category row
            Constraint::Min(10),   // Questions / Answer
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    draw_query_input(f, app, chunks[0]);
    draw_category_row(f, app, chunks[1]);
    draw_main_area(f, app, chunks[2]);
    draw_status_bar(f, app, chunks[3]);
}

fn draw_query_input(f: &mut Frame, app: &App, area: Rect) {
    let input = Paragraph::new(app.query_draft())
        .style(Style::default().fg(Color::Yellow))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search (Tab: category, Enter: search now, F1: help, Esc: quit) "),
        );

    f.render_widget(input, area);

    // Show cursor
    if app.mode == Mode::Search {
        f.set_cursor_position((area.x + app.query_draft().len() as u16 + 1, area.y + 1));
    }
}

fn draw_category_row(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::raw(" ")];

    let active = app.category_name();
    for name in std::iter::once("all").chain(app.categories().iter().map(|c| c.name())) {
        let style = if name == active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} ", name), style));
        spans.push(Span::raw(" "));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_main_area(f: &mut Frame, app: &App, area: Rect) {
    match app.mode {
        Mode::Search => {
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
                .split(area);

            draw_question_list(f, app, chunks[0]);
            draw_answer_pane(f, app, chunks[1]);
        }
        Mode::Help => {
            draw_help(f, area);
        }
    }
}

fn draw_question_list(f: &mut Frame, app: &App, area: Rect) {
    let query = app.committed_query();

    let items: Vec<ListItem> = app
        .results
        .iter()
        .enumerate()
        .filter_map(|(i, &id)| app.index().get(id).map(|r| (i, r)))
        .map(|(i, record)| {
            let style = if i == app.selected {
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let line = Line::from(highlight_spans(&record.question, query, Style::default()));
            ListItem::new(line).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Questions ({}) ", app.results.len())),
    );

    f.render_widget(list, area);
}

fn draw_answer_pane(f: &mut Frame, app: &App, area: Rect) {
    let query = app.committed_query();

    let content = match app.selected_record() {
        Some(record) => {
            let mut lines = Vec::new();

            lines.push(Line::from(Span::styled(
                record.question.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                format!("category: {}", record.category),
                Style::default().fg(Color::Cyan),
            )));
            lines.push(Line::raw(""));
            lines.push(answer_line(&record.answer, query));

            let related = app.related_to_selected();
            if !related.is_empty() {
                lines.push(Line::raw(""));
                lines.push(Line::from(Span::styled(
                    "Related questions:",
                    Style::default().fg(Color::Green),
                )));
                for r in related {
                    lines.push(Line::from(vec![
                        Span::raw("  - "),
                        Span::raw(r.question.clone()),
                    ]));
                }
            }

            Text::from(lines)
        }
        None => Text::raw("No matching questions"),
    };

    let pane = Paragraph::new(content)
        .block(Block::default().borders(Borders::ALL).title(" Answer "))
        .wrap(Wrap { trim: false });

    f.render_widget(pane, area);
}

fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let mut text = app.status_message.clone();
    if app.search_pending() {
        text.push_str("  [typing...]");
    }

    let status = Paragraph::new(text).style(Style::default().fg(Color::Cyan));
    f.render_widget(status, area);
}

fn draw_help(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::raw(""),
        Line::raw("  Type            refine the search (commits after a short pause)"),
        Line::raw("  Enter           search immediately"),
        Line::raw("  Tab             cycle category filter"),
        Line::raw("  Up/Down         move selection (also Ctrl+K / Ctrl+J)"),
        Line::raw("  Home/End        first / last question"),
        Line::raw("  Esc             clear query, or quit when empty"),
        Line::raw("  Ctrl+C, Ctrl+Q  quit"),
        Line::raw(""),
        Line::raw("  Press any key to close this help."),
    ];

    let help = Paragraph::new(Text::from(lines))
        .block(Block::default().borders(Borders::ALL).title(" Help "));

    f.render_widget(help, area);
}

/// Build spans for text with committed-query matches emphasized.
fn highlight_spans(text: &str, query: &str, base: Style) -> Vec<Span<'static>> {
    highlight(text, query)
        .into_iter()
        .map(|span| {
            if span.highlighted {
                Span::styled(
                    span.text,
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(span.text, base)
            }
        })
        .collect()
}

/// Build the answer line: link markup as "label (url)", matches emphasized
/// in the literal text.
fn answer_line(answer: &str, query: &str) -> Line<'static> {
    let mut spans = Vec::new();

    for segment in parse_answer_markup(answer) {
        match segment {
            AnswerSegment::Text(text) => {
                spans.extend(highlight_spans(&text, query, Style::default()));
            }
            AnswerSegment::Link { label, url } => {
                spans.push(Span::styled(
                    label,
                    Style::default()
                        .fg(Color::Blue)
                        .add_modifier(Modifier::UNDERLINED),
                ));
                spans.push(Span::styled(
                    format!(" ({})", url),
                    Style::default().fg(Color::Blue),
                ));
            }
        }
    }

    Line::from(spans)
}
