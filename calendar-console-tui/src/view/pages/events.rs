//! 日程列表页面视图

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, Paragraph},
};

use crate::model::App;
use crate::view::theme::colors;

/// 渲染日程列表页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    render_header(app, frame, chunks[0]);

    if app.events.loading {
        render_message(frame, chunks[1], "Loading events...");
    } else if let Some(ref error) = app.events.error {
        render_error(frame, chunks[1], error);
    } else if app.events.visible().is_empty() {
        render_empty(app, frame, chunks[1]);
    } else {
        render_list(app, frame, chunks[1]);
    }
}

/// 窗口与过滤行
fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let mut spans = vec![
        Span::styled(
            format!("  {} events", app.events.events.len()),
            Style::default().fg(c.muted),
        ),
        Span::styled(
            format!("  window: {}", app.events.window_label()),
            Style::default().fg(c.highlight),
        ),
    ];

    if app.events.filter_active || !app.events.filter.is_empty() {
        spans.push(Span::styled(
            format!("  filter: {}", app.events.filter),
            Style::default().fg(c.warning),
        ));
        if app.events.filter_active {
            spans.push(Span::styled("▏", Style::default().fg(c.border_focused)));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_message(frame: &mut Frame, area: Rect, message: &str) {
    let c = colors();
    let paragraph = Paragraph::new(Line::styled(
        format!("  {message}"),
        Style::default().fg(c.muted),
    ));
    frame.render_widget(paragraph, area);
}

fn render_error(frame: &mut Frame, area: Rect, error: &str) {
    let c = colors();
    let lines = vec![
        Line::from(""),
        Line::styled(format!("  ✗ {error}"), Style::default().fg(c.error)),
        Line::from(""),
        Line::styled("  Alt+r to retry", Style::default().fg(c.muted)),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// 渲染空状态
fn render_empty(app: &App, frame: &mut Frame, area: Rect) {
    let hint = if app.events.filter.is_empty() {
        "  Alt+a to schedule a new event"
    } else {
        "  No events match the filter"
    };
    let content = vec![
        Line::from(""),
        Line::styled("  No events to show", Style::default().fg(Color::Gray)),
        Line::from(""),
        Line::styled(hint, Style::default().fg(Color::DarkGray)),
    ];
    frame.render_widget(Paragraph::new(content), area);
}

/// 渲染日程列表
fn render_list(app: &App, frame: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = app
        .events
        .visible()
        .iter()
        .enumerate()
        .map(|(i, event)| {
            let is_selected = i == app.events.selected;

            let style = if is_selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let dim_style = if is_selected {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let reminder_style = if event.reminder_sent {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let location = event
                .location
                .as_deref()
                .map(|l| format!("  @ {l}"))
                .unwrap_or_default();

            let line = Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    if event.reminder_sent { "🔔" } else { "○" },
                    if is_selected { dim_style } else { reminder_style },
                ),
                Span::raw(" "),
                Span::styled(
                    event.time.format("%Y-%m-%d %H:%M").to_string(),
                    dim_style,
                ),
                Span::raw("  "),
                Span::styled(event.title.clone(), style),
                Span::styled(location, dim_style),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(Block::default())
        .highlight_style(Style::default());

    let mut state = ListState::default();
    state.select(Some(app.events.selected));

    frame.render_stateful_widget(list, area, &mut state);
}
