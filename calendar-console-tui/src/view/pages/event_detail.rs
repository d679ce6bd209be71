//! 日程详情页面视图

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::model::App;
use crate::view::theme::{Styles, colors};

/// 渲染日程详情页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let state = &app.event_detail;

    if state.loading {
        let paragraph = Paragraph::new(Line::styled(
            "  Loading event...",
            Style::default().fg(c.muted),
        ));
        frame.render_widget(paragraph, area);
        return;
    }

    if let Some(ref error) = state.error {
        let lines = vec![
            Line::from(""),
            Line::styled(format!("  ✗ {error}"), Style::default().fg(c.error)),
            Line::from(""),
            Line::styled("  Esc to go back", Style::default().fg(c.muted)),
        ];
        frame.render_widget(Paragraph::new(lines), area);
        return;
    }

    let Some(ref event) = state.event else {
        return;
    };

    let field = |label: &'static str, value: String| {
        Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("{label:<10}"), Styles::field_label()),
            Span::styled(value, Style::default().fg(c.fg)),
        ])
    };

    let reminder_status = if event.reminder_sent {
        Span::styled("sent", Style::default().fg(c.success))
    } else {
        Span::styled("pending", Style::default().fg(c.warning))
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", event.title),
            Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        field(
            "Id",
            event.id.map_or_else(|| "-".to_string(), |id| id.to_string()),
        ),
        field("Time", event.time.format("%Y-%m-%d %H:%M UTC").to_string()),
        field(
            "Location",
            event.location.clone().unwrap_or_else(|| "-".to_string()),
        ),
        field(
            "Reminder",
            event.reminder_time.format("%Y-%m-%d %H:%M UTC").to_string(),
        ),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("{:<10}", "Status"), Styles::field_label()),
            Span::raw("reminder "),
            reminder_status,
        ]),
    ];

    if event.attendees.is_empty() {
        lines.push(field("Attendees", "-".to_string()));
    } else {
        lines.push(field("Attendees", event.attendees.join(", ")));
    }

    if let Some(ref previous) = state.previous {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            format!("  Esc back to {}", previous.title),
            Style::default().fg(c.muted),
        ));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
