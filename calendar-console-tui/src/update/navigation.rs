//! 导航面板更新逻辑
//!
//! 确认导航时做权限门控：目标页面声明了所需权限的，未登录则打开
//! 登录弹窗，已登录但缺权限则在状态栏提示。进入列表页即触发数据
//! 加载（页面激活 → 发起 list 调用）。

use crate::backend::Backend;
use crate::message::NavigationMessage;
use crate::model::{App, FocusPanel, NavItemId, Page};

/// 处理导航消息
pub fn update(app: &mut App, msg: NavigationMessage, backend: &Backend) {
    match msg {
        NavigationMessage::SelectPrevious => app.navigation.select_previous(),
        NavigationMessage::SelectNext => app.navigation.select_next(),
        NavigationMessage::SelectFirst => app.navigation.select_first(),
        NavigationMessage::SelectLast => app.navigation.select_last(),
        NavigationMessage::Confirm => confirm(app, backend),
    }
}

/// 根据导航项 ID 获取对应的页面
fn page_from_nav_id(id: NavItemId) -> Page {
    match id {
        NavItemId::Home => Page::Home,
        NavItemId::Calendars => Page::Calendars,
        NavItemId::Events => Page::Events,
    }
}

fn confirm(app: &mut App, backend: &Backend) {
    let Some(id) = app.navigation.current_id() else {
        return;
    };
    let target = page_from_nav_id(id);

    // 权限门控
    if let Some(authority) = target.required_authority() {
        if !app.session.is_authenticated() {
            let username = backend.config.username.clone().unwrap_or_default();
            app.modal.show_login(username);
            app.set_status("Sign in required");
            return;
        }
        if !app.session.has_authority(authority) {
            app.set_status(format!("Access denied: {authority} required"));
            return;
        }
    }

    enter_page(app, backend, target);
}

/// 切换到目标页面，离开详情页时释放其状态与订阅
fn enter_page(app: &mut App, backend: &Backend, page: Page) {
    app.calendar_detail.close();
    app.event_detail.close();

    match page {
        Page::Calendars => {
            app.calendars.loading = true;
            backend.api.load_calendars();
        }
        Page::Events => {
            app.events.loading = true;
            backend.api.load_events(app.events.window);
        }
        _ => {}
    }

    app.current_page = page;
    app.focus = FocusPanel::Content;
    app.clear_status();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::Config;
    use crate::model::{Modal, Session};

    fn test_backend() -> (tokio::runtime::Runtime, Backend) {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .unwrap();
        let backend = Backend::new(runtime.handle().clone(), Config::default());
        (runtime, backend)
    }

    fn select_nav(app: &mut App, id: NavItemId) {
        let index = app
            .navigation
            .items
            .iter()
            .position(|item| item.id == id)
            .unwrap();
        app.navigation.selected = index;
    }

    #[test]
    fn anonymous_confirm_on_gated_page_opens_login() {
        let (_runtime, backend) = test_backend();
        let mut app = App::new();
        select_nav(&mut app, NavItemId::Calendars);

        update(&mut app, NavigationMessage::Confirm, &backend);

        assert_eq!(app.current_page, Page::Home);
        assert!(matches!(app.modal.active, Some(Modal::Login { .. })));
    }

    #[test]
    fn missing_authority_is_refused() {
        let (_runtime, backend) = test_backend();
        let mut app = App::new();
        app.session = Session {
            username: Some("guest".into()),
            authorities: vec![],
            expires_at: None,
        };
        select_nav(&mut app, NavItemId::Events);

        update(&mut app, NavigationMessage::Confirm, &backend);

        assert_eq!(app.current_page, Page::Home);
        assert!(!app.modal.is_open());
        assert!(
            app.status_message
                .as_deref()
                .is_some_and(|m| m.contains("ROLE_USER"))
        );
    }

    #[test]
    fn authorized_confirm_enters_and_starts_loading() {
        let (_runtime, backend) = test_backend();
        let mut app = App::new();
        app.session = Session {
            username: Some("user".into()),
            authorities: vec!["ROLE_USER".into()],
            expires_at: None,
        };
        select_nav(&mut app, NavItemId::Calendars);

        update(&mut app, NavigationMessage::Confirm, &backend);

        assert_eq!(app.current_page, Page::Calendars);
        assert!(app.calendars.loading);
        assert!(app.focus.is_content());
    }

    #[test]
    fn home_needs_no_session() {
        let (_runtime, backend) = test_backend();
        let mut app = App::new();
        select_nav(&mut app, NavItemId::Home);
        update(&mut app, NavigationMessage::Confirm, &backend);
        assert_eq!(app.current_page, Page::Home);
        assert!(!app.modal.is_open());
    }
}
