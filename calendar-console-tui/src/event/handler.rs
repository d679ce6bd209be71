//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage, NavigationMessage};
use crate::model::{App, Modal, Page};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app), // 键盘事件
        Event::Resize(_, _) => AppMessage::Noop, // 终端窗口大小改变，自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 重要：只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    // 过滤输入模式下，字符全部进过滤串
    if filter_active(app) {
        return handle_filter_keys(key);
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::HELP.matches(&key)
        || (key.modifiers.is_empty() && key.code == KeyCode::Char('?'))
    {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    // Tab: 切换焦点面板
    if key.modifiers.is_empty() && key.code == KeyCode::Tab {
        return AppMessage::ToggleFocus;
    }

    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // Alt+q: 退出
    if key.modifiers == KeyModifiers::ALT && key.code == KeyCode::Char('q') {
        return AppMessage::Quit;
    }

    // 根据焦点位置处理按键
    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        handle_content_keys(key, app)
    }
}

/// 当前页面是否处于过滤输入模式
fn filter_active(app: &App) -> bool {
    match app.current_page {
        Page::Calendars => app.calendars.filter_active,
        Page::Events => app.events.filter_active,
        _ => false,
    }
}

/// 处理过滤输入模式的按键
fn handle_filter_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    match key.code {
        KeyCode::Esc | KeyCode::Enter => AppMessage::Content(ContentMessage::EndFilter),
        KeyCode::Backspace => AppMessage::Content(ContentMessage::FilterBackspace),
        KeyCode::Char(c)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            AppMessage::Content(ContentMessage::FilterInput(c))
        }
        _ => AppMessage::Noop,
    }
}

/// 处理导航面板的按键
fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ↑ 或 k: 上移
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }

        // ↓ 或 j: 下移
        KeyCode::Down | KeyCode::Char('j') => {
            AppMessage::Navigation(NavigationMessage::SelectNext)
        }

        // Enter: 确认选择
        KeyCode::Enter => AppMessage::Navigation(NavigationMessage::Confirm),

        // Home: 跳到第一项
        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),

        // End: 跳到最后一项
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),

        _ => AppMessage::Noop,
    }
}

/// 处理内容面板的按键
fn handle_content_keys(key: KeyEvent, app: &App) -> AppMessage {
    // 通用操作快捷键
    if DefaultKeymap::ACTION_ADD.matches(&key) {
        return AppMessage::Content(ContentMessage::Add);
    }
    if DefaultKeymap::ACTION_EDIT.matches(&key) {
        return AppMessage::Content(ContentMessage::Edit);
    }
    if DefaultKeymap::ACTION_DELETE.matches(&key) {
        return AppMessage::Content(ContentMessage::Delete);
    }

    // 列表页特有按键
    match app.current_page {
        Page::Calendars | Page::Events => {
            if DefaultKeymap::FILTER.matches(&key) {
                return AppMessage::Content(ContentMessage::StartFilter);
            }
            if app.current_page == Page::Events && DefaultKeymap::WINDOW.matches(&key) {
                return AppMessage::Content(ContentMessage::CycleWindow);
            }
            handle_list_keys(key)
        }
        _ => handle_list_keys(key),
    }
}

/// 处理列表类页面的按键（通用）
fn handle_list_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ↑ 或 k: 上一项
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        // ↓ 或 j: 下一项
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        // Enter: 确认选择
        KeyCode::Enter => AppMessage::Content(ContentMessage::Confirm),
        // Home: 跳到第一项
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        // End: 跳到最后一项
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

/// 处理弹窗按键
fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    let Some(ref modal) = app.modal.active else {
        return AppMessage::Noop;
    };

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    match modal {
        Modal::CalendarForm { .. } => handle_form_keys(key),
        Modal::EventForm { .. } => {
            if DefaultKeymap::TOGGLE_PICKER.matches(&key) {
                return AppMessage::Modal(ModalMessage::TogglePicker);
            }
            handle_form_keys(key)
        }
        Modal::Login { .. } => {
            if DefaultKeymap::TOGGLE_SECRET.matches(&key) {
                return AppMessage::Modal(ModalMessage::ToggleSecret);
            }
            handle_form_keys(key)
        }
        Modal::ConfirmDelete { .. } => match key.code {
            KeyCode::Esc => AppMessage::Modal(ModalMessage::Close),
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
            KeyCode::Tab | KeyCode::Left | KeyCode::Right => {
                AppMessage::Modal(ModalMessage::ToggleDeleteFocus)
            }
            _ => AppMessage::Noop,
        },
        Modal::Help | Modal::Error { .. } => match key.code {
            KeyCode::Esc | KeyCode::Enter => AppMessage::Modal(ModalMessage::Close),
            _ => AppMessage::Noop,
        },
    }
}

/// 表单弹窗的通用按键映射
fn handle_form_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Esc => AppMessage::Modal(ModalMessage::Close),
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
        KeyCode::Tab | KeyCode::Down => AppMessage::Modal(ModalMessage::NextField),
        KeyCode::BackTab | KeyCode::Up => AppMessage::Modal(ModalMessage::PrevField),
        KeyCode::Backspace => AppMessage::Modal(ModalMessage::Backspace),
        KeyCode::Char(c)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            AppMessage::Modal(ModalMessage::Input(c))
        }
        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calendar_console_client::Calendar;

    fn press(modifiers: KeyModifiers, code: KeyCode) -> KeyEvent {
        let mut event = KeyEvent::new(code, modifiers);
        event.kind = KeyEventKind::Press;
        event
    }

    #[test]
    fn characters_feed_the_open_form_not_the_globals() {
        let mut app = App::new();
        app.modal.show_calendar_form(&Calendar::draft());

        // 'q' 在表单打开时是输入而不是退出
        let msg = handle_key_event(press(KeyModifiers::NONE, KeyCode::Char('q')), &app);
        assert!(matches!(
            msg,
            AppMessage::Modal(ModalMessage::Input('q'))
        ));
    }

    #[test]
    fn filter_mode_captures_characters() {
        let mut app = App::new();
        app.current_page = Page::Calendars;
        app.calendars.filter_active = true;
        app.focus = crate::model::FocusPanel::Content;

        let msg = handle_key_event(press(KeyModifiers::NONE, KeyCode::Char('w')), &app);
        assert!(matches!(
            msg,
            AppMessage::Content(ContentMessage::FilterInput('w'))
        ));

        let msg = handle_key_event(press(KeyModifiers::NONE, KeyCode::Esc), &app);
        assert!(matches!(
            msg,
            AppMessage::Content(ContentMessage::EndFilter)
        ));
    }

    #[test]
    fn window_key_only_acts_on_the_events_page() {
        let mut app = App::new();
        app.focus = crate::model::FocusPanel::Content;

        app.current_page = Page::Events;
        let msg = handle_key_event(press(KeyModifiers::NONE, KeyCode::Char('w')), &app);
        assert!(matches!(
            msg,
            AppMessage::Content(ContentMessage::CycleWindow)
        ));

        app.current_page = Page::Calendars;
        let msg = handle_key_event(press(KeyModifiers::NONE, KeyCode::Char('w')), &app);
        assert!(matches!(msg, AppMessage::Noop));
    }

    #[test]
    fn escape_goes_back_when_no_modal_is_open() {
        let app = App::new();
        let msg = handle_key_event(press(KeyModifiers::NONE, KeyCode::Esc), &app);
        assert!(matches!(msg, AppMessage::GoBack));
    }

    #[test]
    fn release_events_are_ignored() {
        let app = App::new();
        let mut release = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        let msg = handle_key_event(release, &app);
        assert!(matches!(msg, AppMessage::Noop));
    }
}
