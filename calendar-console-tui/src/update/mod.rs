//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，是唯一可以修改 Model 的地方。
//! 复杂的子消息委托给子模块处理（navigation、content、modal、backend）。
//! 需要发起 HTTP 调用的更新通过 `&Backend` spawn 异步任务，自身不等待；
//! 任务完成后结果以 `AppMessage::Backend(..)` 回到这里闭环。

mod backend;
mod content;
mod modal;
mod navigation;

use crate::backend::Backend;
use crate::message::AppMessage;
use crate::model::{App, Page};

pub use backend::drain_entity_updates;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage, backend: &Backend) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // 如果有弹窗打开，不切换焦点
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, nav_msg, backend);
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg, backend);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg, backend);
        }

        AppMessage::Backend(backend_msg) => {
            backend::update(app, backend_msg, backend);
        }

        AppMessage::GoBack => {
            // 弹窗打开时先关闭弹窗；详情页返回来源页面
            if app.modal.is_open() {
                app.modal.close();
                app.clear_status();
            } else if app.current_page.is_detail_page() {
                go_back_from_detail(app);
            }
        }

        AppMessage::Refresh => {
            refresh_current_page(app, backend);
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }
}

/// 从详情页返回来源页面（关闭详情状态即丢弃更新订阅）
fn go_back_from_detail(app: &mut App) {
    match app.current_page {
        Page::CalendarDetail { .. } => {
            let previous = app.calendar_detail.previous.take();
            app.calendar_detail.close();
            app.current_page = previous.map_or(Page::Calendars, |p| p.page);
            app.clear_status();
        }
        Page::EventDetail { .. } => {
            let previous = app.event_detail.previous.take();
            app.event_detail.close();
            app.current_page = previous.map_or(Page::Events, |p| p.page);
            app.clear_status();
        }
        _ => {}
    }
}

/// 重新加载当前页面的数据
fn refresh_current_page(app: &mut App, backend: &Backend) {
    match app.current_page {
        Page::Calendars => {
            app.calendars.loading = true;
            backend.api.load_calendars();
            app.set_status("Refreshing calendars...");
        }
        Page::Events => {
            app.events.loading = true;
            backend.api.load_events(app.events.window);
            app.set_status("Refreshing events...");
        }
        Page::CalendarDetail { id } => {
            app.calendar_detail.loading = true;
            backend.api.load_calendar(id);
        }
        Page::EventDetail { id } => {
            app.event_detail.loading = true;
            backend.api.load_event(id);
        }
        Page::Home => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::Config;
    use crate::model::PreviousPage;

    fn test_backend() -> (tokio::runtime::Runtime, Backend) {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .unwrap();
        let backend = Backend::new(runtime.handle().clone(), Config::default());
        (runtime, backend)
    }

    #[test]
    fn go_back_closes_modal_before_leaving_detail() {
        let (_runtime, backend) = test_backend();
        let mut app = App::new();
        app.current_page = Page::CalendarDetail { id: 7 };
        app.calendar_detail
            .open(7, PreviousPage::of(Page::Calendars));
        app.modal.show_help();

        update(&mut app, AppMessage::GoBack, &backend);
        assert!(!app.modal.is_open());
        assert_eq!(app.current_page, Page::CalendarDetail { id: 7 });

        update(&mut app, AppMessage::GoBack, &backend);
        assert_eq!(app.current_page, Page::Calendars);
        assert!(!app.calendar_detail.is_subscribed());
    }

    #[test]
    fn quit_sets_the_flag() {
        let (_runtime, backend) = test_backend();
        let mut app = App::new();
        update(&mut app, AppMessage::Quit, &backend);
        assert!(app.should_quit);
    }

    #[test]
    fn focus_does_not_toggle_under_a_modal() {
        let (_runtime, backend) = test_backend();
        let mut app = App::new();
        let focus_before = app.focus;
        app.modal.show_help();
        update(&mut app, AppMessage::ToggleFocus, &backend);
        assert_eq!(app.focus, focus_before);
    }
}
