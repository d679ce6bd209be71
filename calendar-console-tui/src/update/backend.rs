//! 后台完成通知的应用逻辑
//!
//! 异步调用的结果在这里落进 Model：列表装载、详情解析、弹窗的
//! 保存/删除收尾。保存成功 = 恰好一次总线广播 + 关闭弹窗 + 所在
//! 列表软刷新；保存失败 = 清掉保存标志、弹窗保持打开并显示错误。
//! 携带 id 的结果先做陈旧性判断，页面已切走的直接丢弃。

use calendar_console_client::{ApiError, Calendar, CalendarEvent, JwtClaims};
use tokio::sync::broadcast::error::TryRecvError;

use crate::backend::Backend;
use crate::message::BackendMessage;
use crate::model::{App, EntityKind, Modal, Page, Session};

/// 处理后台完成通知
pub fn update(app: &mut App, msg: BackendMessage, backend: &Backend) {
    match msg {
        BackendMessage::LoginCompleted(result) => login_completed(app, result, backend),

        BackendMessage::CalendarsLoaded(result) => match result {
            Ok(calendars) => {
                log::debug!("loaded {} calendars", calendars.len());
                app.calendars.set_calendars(calendars);
            }
            Err(e) => {
                app.calendars.loading = false;
                app.calendars.error = Some(e.to_string());
                app.set_status(format!("Failed to load calendars: {e}"));
            }
        },

        BackendMessage::CalendarLoaded(id, result) => {
            if app.current_page != (Page::CalendarDetail { id }) {
                return;
            }
            match result {
                Ok(calendar) => {
                    app.calendar_detail.calendar = Some(calendar);
                    app.calendar_detail.loading = false;
                }
                Err(e) => {
                    app.calendar_detail.loading = false;
                    app.calendar_detail.error = Some(e.to_string());
                }
            }
        }

        BackendMessage::CalendarEditLoaded(result) => match result {
            Ok(calendar) => {
                app.modal.show_calendar_form(&calendar);
                app.clear_status();
            }
            Err(e) => app.set_status(format!("Failed to load calendar: {e}")),
        },

        BackendMessage::CalendarDeleteLoaded(result) => match result {
            Ok(calendar) => {
                let Some(id) = calendar.id else { return };
                app.modal
                    .show_confirm_delete(EntityKind::Calendar, id, calendar.name);
            }
            Err(e) => app.set_status(format!("Failed to load calendar: {e}")),
        },

        BackendMessage::CalendarSaved(result) => calendar_saved(app, result, backend),
        BackendMessage::CalendarDeleted(id, result) => calendar_deleted(app, id, result, backend),

        BackendMessage::EventsLoaded(result) => match result {
            Ok(events) => {
                log::debug!("loaded {} events", events.len());
                app.events.set_events(events);
            }
            Err(e) => {
                app.events.loading = false;
                app.events.error = Some(e.to_string());
                app.set_status(format!("Failed to load events: {e}"));
            }
        },

        BackendMessage::EventLoaded(id, result) => {
            if app.current_page != (Page::EventDetail { id }) {
                return;
            }
            match result {
                Ok(event) => {
                    app.event_detail.event = Some(event);
                    app.event_detail.loading = false;
                }
                Err(e) => {
                    app.event_detail.loading = false;
                    app.event_detail.error = Some(e.to_string());
                }
            }
        }

        BackendMessage::EventEditLoaded(result) => match result {
            Ok(event) => {
                app.modal.show_event_form(&event);
                app.clear_status();
            }
            Err(e) => app.set_status(format!("Failed to load event: {e}")),
        },

        BackendMessage::EventDeleteLoaded(result) => match result {
            Ok(event) => {
                let Some(id) = event.id else { return };
                app.modal
                    .show_confirm_delete(EntityKind::Event, id, event.title);
            }
            Err(e) => app.set_status(format!("Failed to load event: {e}")),
        },

        BackendMessage::EventSaved(result) => event_saved(app, result, backend),
        BackendMessage::EventDeleted(id, result) => event_deleted(app, id, result, backend),
    }
}

fn login_completed(app: &mut App, result: Result<JwtClaims, ApiError>, backend: &Backend) {
    match result {
        Ok(claims) => {
            app.session = Session::from_claims(&claims);
            if let Some(token) = backend.api.token() {
                backend.tokens.set(&claims.sub, &token);
            }
            app.modal.close();
            app.set_status(format!("Signed in as {}", claims.sub));
        }
        Err(e) => {
            if let Some(Modal::Login {
                ref mut saving,
                ref mut error,
                ..
            }) = app.modal.active
            {
                *saving = false;
                *error = Some(e.to_string());
            }
        }
    }
}

fn calendar_saved(app: &mut App, result: Result<Calendar, ApiError>, backend: &Backend) {
    match result {
        Ok(calendar) => {
            if matches!(app.modal.active, Some(Modal::CalendarForm { .. })) {
                app.modal.close();
            }
            // 保存成功恰好广播一次，载荷是服务器返回的实体
            backend.bus.publish_calendar(calendar.clone());
            app.set_status(format!("Saved calendar \"{}\"", calendar.name));
            if app.current_page == Page::Calendars {
                app.calendars.loading = true;
                backend.api.load_calendars();
            }
        }
        Err(e) => {
            if let Some(Modal::CalendarForm {
                ref mut saving,
                ref mut error,
                ..
            }) = app.modal.active
            {
                *saving = false;
                *error = Some(e.to_string());
            } else {
                app.set_status(format!("Save failed: {e}"));
            }
        }
    }
}

fn event_saved(app: &mut App, result: Result<CalendarEvent, ApiError>, backend: &Backend) {
    match result {
        Ok(event) => {
            if matches!(app.modal.active, Some(Modal::EventForm { .. })) {
                app.modal.close();
            }
            backend.bus.publish_event(event.clone());
            app.set_status(format!("Saved event \"{}\"", event.title));
            if app.current_page == Page::Events {
                app.events.loading = true;
                backend.api.load_events(app.events.window);
            }
        }
        Err(e) => {
            if let Some(Modal::EventForm {
                ref mut saving,
                ref mut error,
                ..
            }) = app.modal.active
            {
                *saving = false;
                *error = Some(e.to_string());
            } else {
                app.set_status(format!("Save failed: {e}"));
            }
        }
    }
}

fn calendar_deleted(app: &mut App, id: i64, result: Result<(), ApiError>, backend: &Backend) {
    match result {
        Ok(()) => {
            app.set_status("Calendar deleted");
            match app.current_page {
                Page::Calendars => {
                    app.calendars.loading = true;
                    backend.api.load_calendars();
                }
                // 正在展示被删实体的详情页：退回来源页面
                Page::CalendarDetail { id: current } if current == id => {
                    let previous = app.calendar_detail.previous.take();
                    app.calendar_detail.close();
                    app.current_page = previous.map_or(Page::Calendars, |p| p.page);
                }
                _ => {}
            }
        }
        Err(e) => app.set_status(format!("Delete failed: {e}")),
    }
}

fn event_deleted(app: &mut App, id: i64, result: Result<(), ApiError>, backend: &Backend) {
    match result {
        Ok(()) => {
            app.set_status("Event deleted");
            match app.current_page {
                Page::Events => {
                    app.events.loading = true;
                    backend.api.load_events(app.events.window);
                }
                Page::EventDetail { id: current } if current == id => {
                    let previous = app.event_detail.previous.take();
                    app.event_detail.close();
                    app.current_page = previous.map_or(Page::Events, |p| p.page);
                }
                _ => {}
            }
        }
        Err(e) => app.set_status(format!("Delete failed: {e}")),
    }
}

/// 排空详情页的实体更新订阅，把广播来的新副本原地换上。
/// 每轮主循环调用一次；没有活动订阅时是空操作。
pub fn drain_entity_updates(app: &mut App) {
    if let Some(rx) = app.calendar_detail.updates.as_mut() {
        loop {
            match rx.try_recv() {
                Ok(calendar) => {
                    if calendar.id == Some(app.calendar_detail.id) {
                        app.calendar_detail.calendar = Some(calendar);
                    }
                }
                Err(TryRecvError::Lagged(_)) => {}
                Err(_) => break,
            }
        }
    }

    if let Some(rx) = app.event_detail.updates.as_mut() {
        loop {
            match rx.try_recv() {
                Ok(event) => {
                    if event.id == Some(app.event_detail.id) {
                        app.event_detail.event = Some(event);
                    }
                }
                Err(TryRecvError::Lagged(_)) => {}
                Err(_) => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::Config;
    use crate::model::PreviousPage;
    use chrono::{TimeZone, Utc};

    fn test_backend() -> (tokio::runtime::Runtime, Backend) {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .unwrap();
        let backend = Backend::new(runtime.handle().clone(), Config::default());
        (runtime, backend)
    }

    fn calendar(id: i64, name: &str) -> Calendar {
        Calendar {
            id: Some(id),
            name: name.into(),
        }
    }

    fn event(id: i64, title: &str, location: Option<&str>) -> CalendarEvent {
        CalendarEvent {
            id: Some(id),
            title: title.into(),
            time: Utc.with_ymd_and_hms(2017, 4, 10, 15, 0, 0).unwrap(),
            location: location.map(str::to_string),
            reminder_time: Utc.with_ymd_and_hms(2017, 4, 10, 14, 50, 0).unwrap(),
            reminder_sent: false,
            attendees: vec![],
        }
    }

    #[test]
    fn loaded_list_replaces_state_in_server_order() {
        let (_runtime, backend) = test_backend();
        let mut app = App::new();
        app.current_page = Page::Calendars;
        app.calendars.loading = true;
        app.calendars.filter = "stale".into();

        let list = vec![calendar(2, "Work"), calendar(1, "Home")];
        update(
            &mut app,
            BackendMessage::CalendarsLoaded(Ok(list.clone())),
            &backend,
        );

        assert_eq!(app.calendars.calendars, list);
        assert!(!app.calendars.loading);
        assert!(app.calendars.filter.is_empty());
    }

    #[test]
    fn failed_list_load_surfaces_the_error() {
        let (_runtime, backend) = test_backend();
        let mut app = App::new();
        app.current_page = Page::Calendars;
        app.calendars.loading = true;

        update(
            &mut app,
            BackendMessage::CalendarsLoaded(Err(ApiError::Network {
                detail: "connection refused".into(),
            })),
            &backend,
        );

        assert!(!app.calendars.loading);
        assert!(app.calendars.error.is_some());
        assert!(app.status_message.is_some());
    }

    #[test]
    fn saved_calendar_publishes_once_and_closes_the_form() {
        let (_runtime, backend) = test_backend();
        let mut app = App::new();
        app.current_page = Page::Calendars;
        app.modal.show_calendar_form(&Calendar::draft());
        let mut rx = backend.bus.subscribe_calendars();

        let returned = calendar(7, "Team Sync");
        update(
            &mut app,
            BackendMessage::CalendarSaved(Ok(returned.clone())),
            &backend,
        );

        assert!(!app.modal.is_open());
        assert_eq!(rx.try_recv().unwrap(), returned);
        assert!(rx.try_recv().is_err(), "exactly one broadcast per save");
        assert!(app.calendars.loading, "owning list soft-reloads");
    }

    #[test]
    fn failed_save_keeps_the_dialog_open_with_the_error() {
        let (_runtime, backend) = test_backend();
        let mut app = App::new();
        app.modal.show_calendar_form(&calendar(5, "Work"));
        if let Some(Modal::CalendarForm { ref mut saving, .. }) = app.modal.active {
            *saving = true;
        }

        update(
            &mut app,
            BackendMessage::CalendarSaved(Err(ApiError::Server {
                status: 500,
                detail: "boom".into(),
            })),
            &backend,
        );

        let Some(Modal::CalendarForm {
            saving, ref error, ..
        }) = app.modal.active
        else {
            panic!("dialog must stay open on failure");
        };
        assert!(!saving);
        assert!(error.is_some());
    }

    #[test]
    fn broadcast_updates_the_active_detail_page_in_place() {
        let (_runtime, backend) = test_backend();
        let mut app = App::new();
        app.current_page = Page::EventDetail { id: 3 };
        app.event_detail.open(3, PreviousPage::of(Page::Events));
        app.event_detail.updates = Some(backend.bus.subscribe_events());
        app.event_detail.event = Some(event(3, "Standup", Some("Room A")));
        app.event_detail.loading = false;

        // 编辑弹窗保存成功（页面不在 Events 列表上，无刷新，只有广播）
        update(
            &mut app,
            BackendMessage::EventSaved(Ok(event(3, "Standup", Some("Room B")))),
            &backend,
        );
        drain_entity_updates(&mut app);

        let shown = app.event_detail.event.as_ref().unwrap();
        assert_eq!(shown.location.as_deref(), Some("Room B"));
    }

    #[test]
    fn broadcast_for_another_entity_is_ignored() {
        let (_runtime, backend) = test_backend();
        let mut app = App::new();
        app.current_page = Page::CalendarDetail { id: 1 };
        app.calendar_detail.open(1, PreviousPage::of(Page::Calendars));
        app.calendar_detail.updates = Some(backend.bus.subscribe_calendars());
        app.calendar_detail.calendar = Some(calendar(1, "Home"));

        backend.bus.publish_calendar(calendar(2, "Work"));
        drain_entity_updates(&mut app);

        assert_eq!(
            app.calendar_detail.calendar.as_ref().unwrap().name,
            "Home"
        );
    }

    #[test]
    fn stale_detail_result_is_dropped() {
        let (_runtime, backend) = test_backend();
        let mut app = App::new();
        app.current_page = Page::Calendars;

        update(
            &mut app,
            BackendMessage::CalendarLoaded(9, Ok(calendar(9, "Old"))),
            &backend,
        );

        assert!(app.calendar_detail.calendar.is_none());
    }

    #[test]
    fn deleting_the_shown_entity_navigates_back() {
        let (_runtime, backend) = test_backend();
        let mut app = App::new();
        app.current_page = Page::CalendarDetail { id: 4 };
        app.calendar_detail.open(4, PreviousPage::of(Page::Calendars));
        app.calendar_detail.updates = Some(backend.bus.subscribe_calendars());

        update(
            &mut app,
            BackendMessage::CalendarDeleted(4, Ok(())),
            &backend,
        );

        assert_eq!(app.current_page, Page::Calendars);
        assert_eq!(backend.bus.calendar_listeners(), 0);
    }

    #[test]
    fn login_success_builds_the_session() {
        let (_runtime, backend) = test_backend();
        let mut app = App::new();
        app.modal.show_login("admin");

        let claims: JwtClaims = serde_json::from_value(serde_json::json!({
            "sub": "admin",
            "auth": "ROLE_ADMIN,ROLE_USER",
            "exp": 4_102_444_800_i64,
        }))
        .unwrap();
        update(
            &mut app,
            BackendMessage::LoginCompleted(Ok(claims)),
            &backend,
        );

        assert!(!app.modal.is_open());
        assert!(app.session.has_authority("ROLE_USER"));
        assert_eq!(app.session.username.as_deref(), Some("admin"));
    }
}
