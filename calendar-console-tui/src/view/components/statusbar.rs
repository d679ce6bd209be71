//! 底部状态栏组件

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::model::{App, FocusPanel, Page};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 根据当前焦点和页面生成快捷键提示
    let hints = get_hints(app);

    // 构建状态栏内容
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let content = Line::from(spans);
    let paragraph = Paragraph::new(content).style(Styles::statusbar());

    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = Vec::new();

    if app.modal.is_open() {
        hints.push(("Tab", "Next Field"));
        hints.push(("Enter", "Confirm"));
        hints.push(("Esc", "Cancel"));
        return hints;
    }

    hints.push(("Tab", "Switch Panels"));

    match app.focus {
        FocusPanel::Navigation => {
            hints.push(("↑↓", "Navigate"));
            hints.push(("Enter", "Enter"));
        }
        FocusPanel::Content => match &app.current_page {
            Page::Home => {
                hints.push(("↑↓", "Navigate"));
            }
            Page::Calendars => {
                hints.push(("↑↓", "Select"));
                hints.push(("Enter", "Open"));
                hints.push(("Alt+a", "New"));
                hints.push(("Alt+e", "Edit"));
                hints.push(("Alt+d", "Delete"));
                hints.push(("/", "Filter"));
            }
            Page::Events => {
                hints.push(("↑↓", "Select"));
                hints.push(("Enter", "Open"));
                hints.push(("Alt+a", "New"));
                hints.push(("Alt+e", "Edit"));
                hints.push(("Alt+d", "Delete"));
                hints.push(("w", "Window"));
            }
            Page::CalendarDetail { .. } | Page::EventDetail { .. } => {
                hints.push(("Alt+e", "Edit"));
                hints.push(("Alt+d", "Delete"));
                hints.push(("Esc", "Back"));
            }
        },
    }

    hints.push(("q", "Quit"));

    hints
}
