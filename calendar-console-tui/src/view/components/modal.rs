//! 弹窗渲染组件
//!
//! 所有弹窗都渲染在页面之上的居中浮层里：先 `Clear` 再画边框和内容。
//! 表单字段按焦点高亮；保存中的表单在标题处提示；错误显示在底部。

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::model::state::DATETIME_INPUT_FORMAT;
use crate::model::{App, Modal};
use crate::view::theme::{Styles, colors};

/// 渲染当前活动弹窗（无弹窗时不做任何事）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::CalendarForm {
            id,
            name,
            saving,
            error,
        } => render_calendar_form(frame, *id, name, *saving, error.as_deref()),
        Modal::EventForm {
            id,
            title,
            time,
            reminder_time,
            location,
            attendees,
            focus,
            picker_open,
            saving,
            error,
            ..
        } => render_event_form(
            frame,
            EventFormView {
                id: *id,
                title,
                time,
                reminder_time,
                location,
                attendees,
                focus: *focus,
                picker_open: *picker_open,
                saving: *saving,
                error: error.as_deref(),
            },
        ),
        Modal::ConfirmDelete {
            kind, label, focus, ..
        } => render_confirm_delete(frame, kind.label(), label, *focus),
        Modal::Login {
            username,
            password,
            focus,
            show_password,
            saving,
            error,
        } => render_login(
            frame,
            username,
            password,
            *focus,
            *show_password,
            *saving,
            error.as_deref(),
        ),
        Modal::Help => render_help(frame),
        Modal::Error { title, message } => render_error(frame, title, message),
    }
}

/// 居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(height),
            Constraint::Min(1),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(width),
            Constraint::Min(1),
        ])
        .split(vertical[1]);

    horizontal[1]
}

/// 弹窗外框
fn modal_block(title: &str) -> Block<'static> {
    let c = colors();
    Block::default()
        .title(format!(" {title} "))
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused))
}

/// 渲染一个表单字段行：标签 + 值（焦点字段高亮并显示光标）
fn field_line<'a>(label: &'a str, value: &'a str, focused: bool, secret: bool) -> Line<'a> {
    let c = colors();

    let shown = if secret {
        "•".repeat(value.width())
    } else {
        value.to_string()
    };

    let value_style = if focused {
        Style::default().fg(c.selected_fg).bg(c.highlight)
    } else {
        Style::default().fg(c.fg)
    };

    let mut spans = vec![
        Span::raw("  "),
        Span::styled(format!("{label:<10}"), Styles::field_label()),
        Span::styled(shown, value_style),
    ];
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(c.border_focused)));
    }
    Line::from(spans)
}

/// 底部错误行
fn error_line(error: Option<&str>) -> Line<'_> {
    let c = colors();
    match error {
        Some(message) => Line::from(Span::styled(
            format!("  ✗ {message}"),
            Style::default().fg(c.error),
        )),
        None => Line::from(""),
    }
}

fn saving_suffix(saving: bool) -> &'static str {
    if saving { " (saving...)" } else { "" }
}

fn render_calendar_form(
    frame: &mut Frame,
    id: Option<i64>,
    name: &str,
    saving: bool,
    error: Option<&str>,
) {
    let title = if id.is_some() {
        "Edit Calendar"
    } else {
        "New Calendar"
    };
    let area = centered_rect(52, 7, frame.area());
    frame.render_widget(Clear, area);

    let block = modal_block(&format!("{title}{}", saving_suffix(saving)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(""),
        field_line("Name", name, true, false),
        Line::from(""),
        error_line(error),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

/// 日程表单的渲染参数
struct EventFormView<'a> {
    id: Option<i64>,
    title: &'a str,
    time: &'a str,
    reminder_time: &'a str,
    location: &'a str,
    attendees: &'a str,
    focus: usize,
    picker_open: [bool; 2],
    saving: bool,
    error: Option<&'a str>,
}

fn render_event_form(frame: &mut Frame, view: EventFormView<'_>) {
    let c = colors();
    let title = if view.id.is_some() {
        "Edit Event"
    } else {
        "New Event"
    };
    let area = centered_rect(60, 13, frame.area());
    frame.render_widget(Clear, area);

    let block = modal_block(&format!("{title}{}", saving_suffix(view.saving)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(""),
        field_line("Title", view.title, view.focus == 0, false),
        field_line("Time", view.time, view.focus == 1, false),
        field_line("Reminder", view.reminder_time, view.focus == 2, false),
        field_line("Location", view.location, view.focus == 3, false),
        field_line("Attendees", view.attendees, view.focus == 4, false),
        Line::from(""),
    ];

    // 日期取值器展开时显示格式提示
    if view.picker_open.iter().any(|open| *open) {
        lines.push(Line::from(Span::styled(
            format!("  format: {DATETIME_INPUT_FORMAT}  e.g. 2026-08-07 15:00 (UTC)"),
            Style::default().fg(c.muted),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "  Alt+p: toggle date format hint",
            Style::default().fg(c.muted),
        )));
    }

    lines.push(error_line(view.error));
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_confirm_delete(frame: &mut Frame, kind: &str, label: &str, focus: usize) {
    let c = colors();
    let area = centered_rect(52, 7, frame.area());
    frame.render_widget(Clear, area);

    let block = modal_block("Confirm Delete");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let button = |text: &'static str, selected: bool| {
        if selected {
            Span::styled(
                format!(" [{text}] "),
                Style::default()
                    .fg(c.selected_fg)
                    .bg(c.error)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(format!("  {text}  "), Style::default().fg(c.fg))
        }
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  Delete {kind} \"{label}\"?"),
            Style::default().fg(c.fg),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("      "),
            button("Cancel", focus == 0),
            Span::raw("    "),
            button("Delete", focus == 1),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_login(
    frame: &mut Frame,
    username: &str,
    password: &str,
    focus: usize,
    show_password: bool,
    saving: bool,
    error: Option<&str>,
) {
    let c = colors();
    let area = centered_rect(52, 9, frame.area());
    frame.render_widget(Clear, area);

    let title = if saving { "Sign In (signing in...)" } else { "Sign In" };
    let block = modal_block(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(""),
        field_line("Username", username, focus == 0, false),
        field_line("Password", password, focus == 1, !show_password),
        Line::from(""),
        Line::from(Span::styled(
            "  Alt+s: show/hide password",
            Style::default().fg(c.muted),
        )),
        error_line(error),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_help(frame: &mut Frame) {
    let c = colors();
    let area = centered_rect(56, 16, frame.area());
    frame.render_widget(Clear, area);

    let block = modal_block("Help");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let entry = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("{key:<10}"), Styles::hint_key()),
            Span::styled(desc, Style::default().fg(c.fg)),
        ])
    };

    let lines = vec![
        Line::from(""),
        entry("Tab", "Switch between menu and content"),
        entry("↑↓ / jk", "Move selection"),
        entry("Enter", "Open the selected item"),
        entry("Esc", "Back / close dialog"),
        entry("Alt+a", "New entry"),
        entry("Alt+e", "Edit the selected entry"),
        entry("Alt+d", "Delete the selected entry"),
        entry("/", "Filter the list"),
        entry("w", "Cycle the event time window"),
        entry("Alt+r", "Reload the current page"),
        entry("q", "Quit"),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let c = colors();
    let area = centered_rect(56, 8, frame.area());
    frame.render_widget(Clear, area);

    let block = modal_block(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let paragraph = Paragraph::new(Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(c.error),
    )))
    .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}
