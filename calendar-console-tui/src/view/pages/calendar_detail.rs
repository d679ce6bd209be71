//! 日历详情页面视图
//!
//! 实体由路由解析异步加载，视图按 加载中/失败/已加载 三态渲染。

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::model::App;
use crate::view::theme::{Styles, colors};

/// 渲染日历详情页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let state = &app.calendar_detail;

    if state.loading {
        let paragraph = Paragraph::new(Line::styled(
            "  Loading calendar...",
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

    let Some(ref calendar) = state.calendar else {
        return;
    };

    let field = |label: &'static str, value: String| {
        Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("{label:<10}"), Styles::field_label()),
            Span::styled(value, Style::default().fg(c.fg)),
        ])
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", calendar.name),
            Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        field(
            "Id",
            calendar
                .id
                .map_or_else(|| "-".to_string(), |id| id.to_string()),
        ),
        field("Name", calendar.name.clone()),
    ];

    if let Some(ref previous) = state.previous {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            format!("  Esc back to {}", previous.title),
            Style::default().fg(c.muted),
        ));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
