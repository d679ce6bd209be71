//! 日历列表页面视图

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, Paragraph},
};

use crate::model::App;
use crate::view::theme::colors;

/// 渲染日历列表页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    render_header(app, frame, chunks[0]);

    if app.calendars.loading {
        render_message(frame, chunks[1], "Loading calendars...");
    } else if let Some(ref error) = app.calendars.error {
        render_error(frame, chunks[1], error);
    } else if app.calendars.visible().is_empty() {
        render_empty(app, frame, chunks[1]);
    } else {
        render_list(app, frame, chunks[1]);
    }
}

/// 过滤行
fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let mut spans = vec![Span::styled(
        format!("  {} calendars", app.calendars.calendars.len()),
        Style::default().fg(c.muted),
    )];

    if app.calendars.filter_active || !app.calendars.filter.is_empty() {
        spans.push(Span::styled(
            format!("  filter: {}", app.calendars.filter),
            Style::default().fg(c.warning),
        ));
        if app.calendars.filter_active {
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
    let hint = if app.calendars.filter.is_empty() {
        "  Alt+a to create your first calendar"
    } else {
        "  No calendars match the filter"
    };
    let content = vec![
        Line::from(""),
        Line::styled("  No calendars to show", Style::default().fg(Color::Gray)),
        Line::from(""),
        Line::styled(hint, Style::default().fg(Color::DarkGray)),
    ];
    frame.render_widget(Paragraph::new(content), area);
}

/// 渲染日历列表
fn render_list(app: &App, frame: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = app
        .calendars
        .visible()
        .iter()
        .enumerate()
        .map(|(i, calendar)| {
            let is_selected = i == app.calendars.selected;

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

            let id_text = calendar
                .id
                .map(|id| format!("  #{id}"))
                .unwrap_or_default();

            let line = Line::from(vec![
                Span::raw("  "),
                Span::styled("●", style),
                Span::raw(" "),
                Span::styled(calendar.name.clone(), style),
                Span::styled(id_text, dim_style),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(Block::default())
        .highlight_style(Style::default());

    let mut state = ListState::default();
    state.select(Some(app.calendars.selected));

    frame.render_stateful_widget(list, area, &mut state);
}
