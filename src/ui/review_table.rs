//! Review table rendering
//!
//! Renders the main view: a table with one row per review (product, user,
//! review text, localized timestamp), a header with title and clock, and a
//! footer with key hints and data freshness. The renderer is a pure
//! function of the application state; it issues no fetches of its own.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::app::App;

/// Converts a server timestamp string to a viewer-local display string.
///
/// Accepts RFC 3339 (with offset or `Z`) and bare `YYYY-MM-DDTHH:MM:SS`
/// timestamps, the latter treated as UTC. Anything else is shown verbatim
/// rather than dropped.
pub fn format_local_timestamp(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string();
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        let utc = Utc.from_utc_datetime(&naive);
        return utc.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string();
    }

    raw.to_string()
}

/// Renders the review table screen
///
/// Displays the header, the review table (or the "No reviews yet."
/// placeholder), and the footer help line.
///
/// # Arguments
/// * `frame` - The ratatui Frame to render to
/// * `app` - The application state containing review data and selection
pub fn render_review_table(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(3),    // Review table
            Constraint::Length(1), // Help text
        ])
        .split(area);

    render_header(frame, app, chunks[0]);

    if app.reviews.is_empty() {
        render_empty_placeholder(frame, chunks[1]);
    } else {
        render_table(frame, app, chunks[1]);
    }

    render_help(frame, chunks[2], app);
}

/// Renders the header line with title, clock, and review count
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let now = Local::now();
    let time_str = now.format("%a %b %d, %H:%M").to_string();

    let count_str = match app.review_count() {
        0 => "no reviews".to_string(),
        1 => "1 review".to_string(),
        n => format!("{} reviews", n),
    };

    let width = area.width as usize;
    let separator = "─".repeat(width.saturating_sub(2));

    let lines = vec![
        Line::from(vec![
            Span::styled(
                "REVBOARD",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(time_str, Style::default().fg(Color::White)),
            Span::raw("  "),
            Span::styled(count_str, Style::default().fg(Color::Yellow)),
        ]),
        Line::from(Span::styled(
            separator,
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

/// Renders the review table with the selected row highlighted
fn render_table(frame: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(vec!["Product", "User", "Review", "Time"]).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = app
        .reviews
        .iter()
        .map(|review| {
            Row::new(vec![
                review.product_name.clone(),
                review.user_name.clone(),
                review.product_review.clone(),
                format_local_timestamp(&review.created_at),
            ])
        })
        .collect();

    let block = Block::default()
        .title(" Customer Reviews ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(20),
            Constraint::Percentage(15),
            Constraint::Percentage(45),
            Constraint::Percentage(20),
        ],
    )
    .header(header)
    .block(block)
    .highlight_style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("\u{25B8} "); // ▸

    let mut state = TableState::default();
    state.select(Some(app.selected_index));

    frame.render_stateful_widget(table, area, &mut state);
}

/// Renders the placeholder shown when the collection is empty
///
/// Covers both "server has zero reviews" and "first fetch never succeeded";
/// the two are indistinguishable by design.
fn render_empty_placeholder(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Customer Reviews ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let placeholder = Paragraph::new("No reviews yet.")
        .style(Style::default().fg(Color::DarkGray))
        .block(block);

    frame.render_widget(placeholder, area);
}

/// Renders the help text at the bottom of the screen with data freshness
fn render_help(frame: &mut Frame, area: Rect, app: &App) {
    let mut help_spans = vec![
        Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
        Span::raw(" Navigate  "),
        Span::styled("r", Style::default().fg(Color::Yellow)),
        Span::raw(" Refresh  "),
        Span::styled("?", Style::default().fg(Color::Yellow)),
        Span::raw(" Help  "),
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::raw(" Quit"),
    ];

    // Data freshness indicator, fed by the last successful fetch
    if let Some(last_refresh) = app.last_refresh {
        let elapsed = Local::now() - last_refresh;
        let mins_ago = elapsed.num_minutes();
        let freshness_text = if mins_ago < 1 {
            " │ Data: just now".to_string()
        } else if mins_ago < 60 {
            format!(" │ Data: {}m ago", mins_ago)
        } else {
            format!(" │ Data: {}h ago", elapsed.num_hours())
        };
        help_spans.push(Span::styled(
            freshness_text,
            Style::default().fg(Color::DarkGray),
        ));
    }

    let paragraph =
        Paragraph::new(Line::from(help_spans)).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(paragraph, area);
}
