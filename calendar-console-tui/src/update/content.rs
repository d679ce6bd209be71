//! 内容面板更新逻辑
//!
//! 列表页：选择移动、进入详情（解析实体并订阅更新后切换页面）、
//! 打开新建/编辑/删除弹窗、搜索过滤与时间窗口。编辑与删除先向
//! 服务器解析目标实体，结果回到 `update::backend` 再打开弹窗。

use calendar_console_client::Calendar;

use crate::backend::Backend;
use crate::message::ContentMessage;
use crate::model::{App, Page, PreviousPage};

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage, backend: &Backend) {
    match app.current_page {
        Page::Calendars => calendars_page(app, msg, backend),
        Page::Events => events_page(app, msg, backend),
        Page::CalendarDetail { id } => calendar_detail_page(app, id, msg, backend),
        Page::EventDetail { id } => event_detail_page(app, id, msg, backend),
        Page::Home => {}
    }
}

fn calendars_page(app: &mut App, msg: ContentMessage, backend: &Backend) {
    match msg {
        ContentMessage::SelectPrevious => app.calendars.select_previous(),
        ContentMessage::SelectNext => app.calendars.select_next(),
        ContentMessage::SelectFirst => app.calendars.select_first(),
        ContentMessage::SelectLast => app.calendars.select_last(),

        ContentMessage::Confirm => {
            let Some(id) = app.calendars.selected_calendar().and_then(|c| c.id) else {
                return;
            };
            open_calendar_detail(app, backend, id);
        }

        ContentMessage::Add => {
            app.modal.show_calendar_form(&Calendar::draft());
        }

        ContentMessage::Edit => {
            let Some(id) = app.calendars.selected_calendar().and_then(|c| c.id) else {
                return;
            };
            app.set_status("Loading calendar...");
            backend.api.load_calendar_for_edit(id);
        }

        ContentMessage::Delete => {
            let Some(id) = app.calendars.selected_calendar().and_then(|c| c.id) else {
                return;
            };
            backend.api.load_calendar_for_delete(id);
        }

        ContentMessage::StartFilter => app.calendars.filter_active = true,
        ContentMessage::FilterInput(c) => {
            app.calendars.filter.push(c);
            app.calendars.clamp_selection();
        }
        ContentMessage::FilterBackspace => {
            app.calendars.filter.pop();
            app.calendars.clamp_selection();
        }
        ContentMessage::EndFilter => app.calendars.filter_active = false,

        ContentMessage::CycleWindow => {}
    }
}

fn events_page(app: &mut App, msg: ContentMessage, backend: &Backend) {
    match msg {
        ContentMessage::SelectPrevious => app.events.select_previous(),
        ContentMessage::SelectNext => app.events.select_next(),
        ContentMessage::SelectFirst => app.events.select_first(),
        ContentMessage::SelectLast => app.events.select_last(),

        ContentMessage::Confirm => {
            let Some(id) = app.events.selected_event().and_then(|e| e.id) else {
                return;
            };
            open_event_detail(app, backend, id);
        }

        ContentMessage::Add => {
            app.modal.show_new_event_form();
        }

        ContentMessage::Edit => {
            let Some(id) = app.events.selected_event().and_then(|e| e.id) else {
                return;
            };
            app.set_status("Loading event...");
            backend.api.load_event_for_edit(id);
        }

        ContentMessage::Delete => {
            let Some(id) = app.events.selected_event().and_then(|e| e.id) else {
                return;
            };
            backend.api.load_event_for_delete(id);
        }

        ContentMessage::StartFilter => app.events.filter_active = true,
        ContentMessage::FilterInput(c) => {
            app.events.filter.push(c);
            app.events.clamp_selection();
        }
        ContentMessage::FilterBackspace => {
            app.events.filter.pop();
            app.events.clamp_selection();
        }
        ContentMessage::EndFilter => app.events.filter_active = false,

        ContentMessage::CycleWindow => {
            app.events.cycle_window();
            app.events.loading = true;
            backend.api.load_events(app.events.window);
        }
    }
}

/// 详情页上的编辑/删除沿用当前实体 id，无列表选择
fn calendar_detail_page(app: &mut App, id: i64, msg: ContentMessage, backend: &Backend) {
    match msg {
        ContentMessage::Edit => {
            app.set_status("Loading calendar...");
            backend.api.load_calendar_for_edit(id);
        }
        ContentMessage::Delete => {
            backend.api.load_calendar_for_delete(id);
        }
        _ => {}
    }
}

fn event_detail_page(app: &mut App, id: i64, msg: ContentMessage, backend: &Backend) {
    match msg {
        ContentMessage::Edit => {
            app.set_status("Loading event...");
            backend.api.load_event_for_edit(id);
        }
        ContentMessage::Delete => {
            backend.api.load_event_for_delete(id);
        }
        _ => {}
    }
}

/// 进入日历详情页：记录来源、订阅更新、发起实体解析
fn open_calendar_detail(app: &mut App, backend: &Backend, id: i64) {
    let previous = PreviousPage::of(app.current_page.clone());
    app.calendar_detail.open(id, previous);
    app.calendar_detail.updates = Some(backend.bus.subscribe_calendars());
    backend.api.load_calendar(id);
    app.current_page = Page::CalendarDetail { id };
}

/// 进入日程详情页
fn open_event_detail(app: &mut App, backend: &Backend, id: i64) {
    let previous = PreviousPage::of(app.current_page.clone());
    app.event_detail.open(id, previous);
    app.event_detail.updates = Some(backend.bus.subscribe_events());
    backend.api.load_event(id);
    app.current_page = Page::EventDetail { id };
}
