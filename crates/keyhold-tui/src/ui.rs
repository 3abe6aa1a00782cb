//! UI rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, Dialog, PLACEHOLDER};

/// Main draw function
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Stored value
            Constraint::Length(3), // Input
            Constraint::Min(0),    // Spacer
            Constraint::Length(1), // Footer
        ])
        .split(f.area());

    draw_header(f, app, chunks[0]);
    draw_label(f, app, chunks[1]);
    draw_input(f, app, chunks[2]);
    draw_footer(f, chunks[4]);

    if let Some(dialog) = &app.dialog {
        draw_dialog(f, dialog);
    }
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(vec![Line::from(vec![
        Span::styled(" Keyhold ", Style::default().fg(Color::Cyan).bold()),
        Span::raw(" - "),
        Span::styled(app.backend_name(), Style::default().fg(Color::DarkGray)),
    ])])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(header, area);
}

fn draw_label(f: &mut Frame, app: &App, area: Rect) {
    let style = if app.label == PLACEHOLDER {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Green)
    };

    let label = Paragraph::new(Line::from(Span::styled(app.label.as_str(), style))).block(
        Block::default()
            .title(" Stored ")
            .title_style(Style::default().fg(Color::Blue).bold())
            .borders(Borders::ALL),
    );

    f.render_widget(label, area);
}

fn draw_input(f: &mut Frame, app: &App, area: Rect) {
    let input = Paragraph::new(app.input.as_str()).block(
        Block::default()
            .title(" Password ")
            .title_style(Style::default().fg(Color::Blue).bold())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );

    f.render_widget(input, area);

    // Place the cursor after the typed text, inside the border
    if app.dialog.is_none() {
        let typed = app.input.chars().count() as u16;
        f.set_cursor_position((area.x + 1 + typed, area.y + 1));
    }
}

fn draw_footer(f: &mut Frame, area: Rect) {
    let footer = Line::from(vec![
        Span::styled(" Enter ", Style::default().fg(Color::Cyan)),
        Span::raw("save  "),
        Span::styled("Ctrl-D ", Style::default().fg(Color::Cyan)),
        Span::raw("delete  "),
        Span::styled("Esc ", Style::default().fg(Color::Cyan)),
        Span::raw("quit"),
    ]);

    f.render_widget(Paragraph::new(footer), area);
}

fn draw_dialog(f: &mut Frame, dialog: &Dialog) {
    let area = centered_rect(40, 5, f.area());

    let body = Paragraph::new(vec![
        Line::from(""),
        Line::from(dialog.message.as_str()).centered(),
        Line::from(Span::styled(
            "Press Enter",
            Style::default().fg(Color::DarkGray),
        ))
        .centered(),
    ])
    .block(
        Block::default()
            .title(format!(" {} ", dialog.title))
            .title_style(Style::default().fg(Color::Red).bold())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    );

    f.render_widget(Clear, area);
    f.render_widget(body, area);
}

/// A fixed-size rect centered in `r`
fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    let x = r.x + (r.width - width) / 2;
    let y = r.y + (r.height - height) / 2;
    Rect::new(x, y, width, height)
}
