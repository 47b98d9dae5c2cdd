//! UI rendering for the explorer.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, List, ListItem},
    style::{Color, Style, Modifier},
};
use crate::TilingKind;
use super::app::{CellRole, ExplorerApp};

/// Characters per grid cell.
const CELL_WIDTH: usize = 6;

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &ExplorerApp) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(65),
            Constraint::Percentage(35),
        ])
        .split(frame.area());

    // Left side: grid and status
    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(chunks[0]);

    draw_grid(frame, left_chunks[0], app);
    draw_status(frame, left_chunks[1], app);

    // Right side: details, curve trail and help
    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),
            Constraint::Min(5),
            Constraint::Length(5),
        ])
        .split(chunks[1]);

    draw_details(frame, right_chunks[0], app);
    draw_trail(frame, right_chunks[1], app);
    draw_help(frame, right_chunks[2]);
}

/// Draw the lattice around the cursor, each cell labelled with its curve index.
fn draw_grid(frame: &mut Frame, area: Rect, app: &ExplorerApp) {
    let inner_width = (area.width as usize).saturating_sub(2);
    let rows = (area.height as usize).saturating_sub(2);
    let cols = match app.tiling {
        // odd rows are indented by half a cell
        TilingKind::Hex => inner_width.saturating_sub(CELL_WIDTH / 2) / CELL_WIDTH,
        TilingKind::Square => inner_width / CELL_WIDTH,
    };

    let lines: Vec<Line> = app
        .grid(cols, rows)
        .into_iter()
        .map(|row| {
            let mut spans = Vec::with_capacity(row.len() + 1);
            let odd = row.first().map(|c| c.coord.1 & 1 == 1).unwrap_or(false);
            if app.tiling == TilingKind::Hex && odd {
                spans.push(Span::raw(" ".repeat(CELL_WIDTH / 2)));
            }
            for cell in row {
                let label = if cell.label.len() >= CELL_WIDTH {
                    format!("{:>w$}", "…", w = CELL_WIDTH)
                } else {
                    format!("{:^w$}", cell.label, w = CELL_WIDTH)
                };
                spans.push(Span::styled(label, role_style(cell.role)));
            }
            Line::from(spans)
        })
        .collect();

    let title = format!(" {} lattice ", app.tiling);
    let paragraph = Paragraph::new(lines)
        .block(Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)));

    frame.render_widget(paragraph, area);
}

/// Draw the three names of the selected cell.
fn draw_details(frame: &mut Frame, area: Rect, app: &ExplorerApp) {
    let content = match app.selected() {
        Ok(report) => vec![
            Line::from(vec![
                Span::raw("Coord:      "),
                Span::styled(
                    format!("({}, {})", report.coord[0], report.coord[1]),
                    Style::default().fg(Color::Yellow),
                ),
            ]),
            Line::from(vec![
                Span::raw("Positional: "),
                Span::styled(format!("{}", report.positional), Style::default().fg(Color::White)),
                Span::raw(format!(" ({})", report.positional_digits)),
            ]),
            Line::from(vec![
                Span::raw("Curve:      "),
                Span::styled(report.curve.clone(), Style::default().fg(Color::Green)),
                Span::raw(format!(" = {}", report.curve_value)),
            ]),
            Line::from(vec![
                Span::raw("Base:       "),
                Span::styled(format!("{}", app.tiling.base()), Style::default().fg(Color::Cyan)),
            ]),
        ],
        Err(e) => vec![Line::from(Span::styled(
            format!("{}", e),
            Style::default().fg(Color::Red),
        ))],
    };

    let paragraph = Paragraph::new(content)
        .block(Block::default()
            .title(" Cell ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)));

    frame.render_widget(paragraph, area);
}

/// Draw the stretch of curve around the cursor.
fn draw_trail(frame: &mut Frame, area: Rect, app: &ExplorerApp) {
    let window = app.curve_window((area.height as usize).saturating_sub(2));

    let items: Vec<ListItem> = window
        .iter()
        .map(|(value, curve, (a, b), is_current)| {
            let prefix = if *is_current { "▶ " } else { "  " };
            let text = format!("{}{:>6} {:>8}  ({}, {})", prefix, value, curve, a, b);

            let style = if *is_current {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            ListItem::new(text).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(Block::default()
            .title(" Curve ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta)));

    frame.render_widget(list, area);
}

/// Draw status bar.
fn draw_status(frame: &mut Frame, area: Rect, app: &ExplorerApp) {
    let status = Paragraph::new(app.status.clone())
        .style(Style::default().fg(Color::White))
        .block(Block::default()
            .title(" Status ")
            .borders(Borders::ALL));

    frame.render_widget(status, area);
}

/// Draw help panel.
fn draw_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(vec![
        Line::from("←→↑↓: Move  n/p: Next/Prev on curve"),
        Line::from("N/P: Jump one unit  t: Tiling"),
        Line::from("x: Reset  q: Quit"),
    ])
    .style(Style::default().fg(Color::DarkGray))
    .block(Block::default()
        .title(" Help ")
        .borders(Borders::ALL));

    frame.render_widget(help, area);
}

/// Color style for a grid cell.
fn role_style(role: CellRole) -> Style {
    match role {
        CellRole::Cursor => Style::default().fg(Color::Black).bg(Color::Yellow).add_modifier(Modifier::BOLD),
        CellRole::Previous => Style::default().fg(Color::Red),
        CellRole::Next => Style::default().fg(Color::Green),
        CellRole::Other => Style::default().fg(Color::Gray),
    }
}
