//! 首页视图

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::model::App;
use crate::view::theme::colors;

/// 渲染首页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let session_line = if app.session.is_authenticated() {
        Line::from(vec![
            Span::raw("  Signed in as "),
            Span::styled(
                app.session.display_name().to_string(),
                Style::default().fg(c.success).add_modifier(Modifier::BOLD),
            ),
        ])
    } else {
        Line::from(Span::styled(
            "  Not signed in — open Calendars or Events to sign in",
            Style::default().fg(c.warning),
        ))
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Calendar Console",
            Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "  Manage your calendars and events from the terminal",
            Style::default().fg(c.muted),
        )),
        Line::from(""),
        session_line,
        Line::from(""),
        Line::from(Span::styled(
            "  ↑↓ select a section, Enter to open, ? for help",
            Style::default().fg(c.muted),
        )),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}
