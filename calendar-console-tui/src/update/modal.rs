//! 弹窗更新逻辑
//!
//! 表单提交路径：校验 → 置保存标志 → 按工作副本的 id 是否存在分派
//! create / update（分派在客户端的 `save` 内完成）。提交结果不在
//! 这里处理 —— 成功/失败由 `update::backend` 收尾（关闭弹窗并广播，
//! 或清掉保存标志并在弹窗内显示错误）。

use calendar_console_client::{Calendar, CalendarEvent};

use crate::backend::Backend;
use crate::message::ModalMessage;
use crate::model::state::{EVENT_FORM_DATE_FIELDS, EVENT_FORM_FIELDS, parse_datetime_input};
use crate::model::{App, EntityKind, Modal};

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage, backend: &Backend) {
    match app.modal.active {
        Some(Modal::CalendarForm { .. }) => handle_calendar_form(app, msg, backend),
        Some(Modal::EventForm { .. }) => handle_event_form(app, msg, backend),
        Some(Modal::ConfirmDelete { .. }) => handle_confirm_delete(app, msg, backend),
        Some(Modal::Login { .. }) => handle_login(app, msg, backend),
        Some(Modal::Help) | Some(Modal::Error { .. }) => handle_simple_modal(app, msg),
        None => {}
    }
}

/// 逗号分隔的参与者输入 → 邮箱列表
fn split_attendees(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn none_if_empty(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// 处理日历表单弹窗
fn handle_calendar_form(app: &mut App, msg: ModalMessage, backend: &Backend) {
    let Some(Modal::CalendarForm {
        id,
        ref mut name,
        ref mut saving,
        ref mut error,
    }) = app.modal.active
    else {
        return;
    };

    match msg {
        ModalMessage::Close => {
            app.modal.close();
            app.clear_status();
        }

        ModalMessage::Input(c) => {
            if !*saving {
                name.push(c);
                *error = None;
            }
        }

        ModalMessage::Backspace => {
            if !*saving {
                name.pop();
                *error = None;
            }
        }

        ModalMessage::Confirm => {
            if *saving {
                return;
            }
            if name.trim().is_empty() {
                *error = Some("Name is required".to_string());
                return;
            }
            let calendar = Calendar {
                id,
                name: name.trim().to_string(),
            };
            *saving = true;
            backend.api.save_calendar(calendar);
        }

        // 单字段表单，无字段切换
        _ => {}
    }
}

/// 处理日程表单弹窗
fn handle_event_form(app: &mut App, msg: ModalMessage, backend: &Backend) {
    let Some(Modal::EventForm {
        id,
        ref mut title,
        ref mut time,
        ref mut reminder_time,
        ref mut location,
        ref mut attendees,
        reminder_sent,
        ref mut focus,
        ref mut picker_open,
        ref mut saving,
        ref mut error,
    }) = app.modal.active
    else {
        return;
    };

    match msg {
        ModalMessage::Close => {
            app.modal.close();
            app.clear_status();
        }

        ModalMessage::NextField => {
            *focus = (*focus + 1) % EVENT_FORM_FIELDS;
        }

        ModalMessage::PrevField => {
            *focus = if *focus == 0 {
                EVENT_FORM_FIELDS - 1
            } else {
                *focus - 1
            };
        }

        ModalMessage::TogglePicker => {
            if let Some(i) = EVENT_FORM_DATE_FIELDS.iter().position(|f| f == focus) {
                picker_open[i] = !picker_open[i];
            }
        }

        ModalMessage::Input(c) => {
            if *saving {
                return;
            }
            match *focus {
                0 => title.push(c),
                1 => time.push(c),
                2 => reminder_time.push(c),
                3 => location.push(c),
                4 => attendees.push(c),
                _ => {}
            }
            *error = None;
        }

        ModalMessage::Backspace => {
            if *saving {
                return;
            }
            match *focus {
                0 => title.pop(),
                1 => time.pop(),
                2 => reminder_time.pop(),
                3 => location.pop(),
                4 => attendees.pop(),
                _ => None,
            };
            *error = None;
        }

        ModalMessage::Confirm => {
            if *saving {
                return;
            }
            if title.trim().is_empty() {
                *error = Some("Title is required".to_string());
                return;
            }
            let Some(parsed_time) = parse_datetime_input(time) else {
                *error = Some("Time must match YYYY-MM-DD HH:MM".to_string());
                return;
            };
            let Some(parsed_reminder) = parse_datetime_input(reminder_time) else {
                *error = Some("Reminder time must match YYYY-MM-DD HH:MM".to_string());
                return;
            };
            let event = CalendarEvent {
                id,
                title: title.trim().to_string(),
                time: parsed_time,
                location: none_if_empty(location),
                reminder_time: parsed_reminder,
                reminder_sent,
                attendees: split_attendees(attendees),
            };
            *saving = true;
            backend.api.save_event(event);
        }

        _ => {}
    }
}

/// 处理确认删除弹窗
fn handle_confirm_delete(app: &mut App, msg: ModalMessage, backend: &Backend) {
    let Some(Modal::ConfirmDelete {
        kind,
        id,
        ref label,
        ref mut focus,
    }) = app.modal.active
    else {
        return;
    };

    match msg {
        ModalMessage::Close => {
            app.modal.close();
            app.clear_status();
        }

        ModalMessage::ToggleDeleteFocus | ModalMessage::NextField | ModalMessage::PrevField => {
            *focus = usize::from(*focus == 0);
        }

        ModalMessage::Confirm => {
            if *focus == 1 {
                let label = label.clone();
                app.modal.close();
                match kind {
                    EntityKind::Calendar => backend.api.delete_calendar(id),
                    EntityKind::Event => backend.api.delete_event(id),
                }
                app.set_status(format!("Deleting {} \"{label}\"...", kind.label()));
            } else {
                app.modal.close();
                app.clear_status();
            }
        }

        _ => {}
    }
}

/// 处理登录弹窗
fn handle_login(app: &mut App, msg: ModalMessage, backend: &Backend) {
    let Some(Modal::Login {
        ref mut username,
        ref mut password,
        ref mut focus,
        ref mut show_password,
        ref mut saving,
        ref mut error,
    }) = app.modal.active
    else {
        return;
    };

    match msg {
        ModalMessage::Close => {
            app.modal.close();
            app.clear_status();
        }

        ModalMessage::NextField | ModalMessage::PrevField => {
            *focus = usize::from(*focus == 0);
        }

        ModalMessage::ToggleSecret => {
            *show_password = !*show_password;
        }

        ModalMessage::Input(c) => {
            if *saving {
                return;
            }
            if *focus == 0 {
                username.push(c);
            } else {
                password.push(c);
            }
            *error = None;
        }

        ModalMessage::Backspace => {
            if *saving {
                return;
            }
            if *focus == 0 {
                username.pop();
            } else {
                password.pop();
            }
            *error = None;
        }

        ModalMessage::Confirm => {
            if *saving {
                return;
            }
            if username.trim().is_empty() || password.is_empty() {
                *error = Some("Username and password are required".to_string());
                return;
            }
            *saving = true;
            backend.api.login(username.trim().to_string(), password.clone());
        }

        _ => {}
    }
}

/// 处理简单弹窗（帮助、错误）
fn handle_simple_modal(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close | ModalMessage::Confirm => {
            app.modal.close();
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::Config;

    fn test_backend() -> (tokio::runtime::Runtime, Backend) {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .unwrap();
        let backend = Backend::new(runtime.handle().clone(), Config::default());
        (runtime, backend)
    }

    #[test]
    fn split_attendees_trims_and_drops_empties() {
        assert_eq!(
            split_attendees(" a@example.com, b@example.com ,, "),
            vec!["a@example.com".to_string(), "b@example.com".to_string()]
        );
        assert!(split_attendees("").is_empty());
    }

    #[test]
    fn empty_name_blocks_the_save() {
        let (_runtime, backend) = test_backend();
        let mut app = App::new();
        app.modal
            .show_calendar_form(&Calendar::draft());

        update(&mut app, ModalMessage::Confirm, &backend);

        let Some(Modal::CalendarForm {
            saving, ref error, ..
        }) = app.modal.active
        else {
            panic!("form should stay open");
        };
        assert!(!saving);
        assert_eq!(error.as_deref(), Some("Name is required"));
    }

    #[test]
    fn bad_time_input_blocks_the_save() {
        let (_runtime, backend) = test_backend();
        let mut app = App::new();
        app.modal.show_new_event_form();
        for c in "Standup".chars() {
            update(&mut app, ModalMessage::Input(c), &backend);
        }

        update(&mut app, ModalMessage::Confirm, &backend);

        let Some(Modal::EventForm {
            saving, ref error, ..
        }) = app.modal.active
        else {
            panic!("form should stay open");
        };
        assert!(!saving);
        assert!(error.as_deref().is_some_and(|e| e.contains("Time")));
    }

    #[test]
    fn input_lands_in_the_focused_field() {
        let (_runtime, backend) = test_backend();
        let mut app = App::new();
        app.modal.show_new_event_form();

        update(&mut app, ModalMessage::Input('x'), &backend);
        update(&mut app, ModalMessage::NextField, &backend);
        update(&mut app, ModalMessage::Input('2'), &backend);

        let Some(Modal::EventForm {
            ref title, ref time, ..
        }) = app.modal.active
        else {
            panic!("expected event form");
        };
        assert_eq!(title, "x");
        assert_eq!(time, "2");
    }

    #[test]
    fn picker_toggles_only_on_date_fields() {
        let (_runtime, backend) = test_backend();
        let mut app = App::new();
        app.modal.show_new_event_form();

        // title 字段上切换无效
        update(&mut app, ModalMessage::TogglePicker, &backend);
        // 移到 time 字段再切换
        update(&mut app, ModalMessage::NextField, &backend);
        update(&mut app, ModalMessage::TogglePicker, &backend);

        let Some(Modal::EventForm { picker_open, .. }) = app.modal.active else {
            panic!("expected event form");
        };
        assert_eq!(picker_open, [true, false]);
    }

    #[test]
    fn cancel_dismisses_without_saving() {
        let (_runtime, backend) = test_backend();
        let mut app = App::new();
        app.modal.show_calendar_form(&Calendar {
            id: Some(5),
            name: "Work".into(),
        });

        update(&mut app, ModalMessage::Close, &backend);
        assert!(!app.modal.is_open());
    }

    #[test]
    fn delete_confirm_needs_the_confirm_button() {
        let (_runtime, backend) = test_backend();
        let mut app = App::new();
        app.modal
            .show_confirm_delete(EntityKind::Calendar, 5, "Work");

        // 焦点在取消上：关闭且不删除
        update(&mut app, ModalMessage::Confirm, &backend);
        assert!(!app.modal.is_open());
        assert!(app.status_message.is_none());

        // 焦点切到确认上：发起删除
        app.modal
            .show_confirm_delete(EntityKind::Calendar, 5, "Work");
        update(&mut app, ModalMessage::ToggleDeleteFocus, &backend);
        update(&mut app, ModalMessage::Confirm, &backend);
        assert!(!app.modal.is_open());
        assert!(
            app.status_message
                .as_deref()
                .is_some_and(|m| m.contains("Deleting"))
        );
    }
}
