//! 弹窗/对话框状态
//!
//! 每种弹窗都是 `Modal` 的一个变体，携带该弹窗的全部数据：
//! 表单弹窗持有实体的可编辑工作副本（含 id，保存时据此分派
//! create / update），确认删除弹窗持有目标实体的标识与名称。

use calendar_console_client::{Calendar, CalendarEvent};
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

/// 表单中日期输入使用的格式
pub const DATETIME_INPUT_FORMAT: &str = "%Y-%m-%d %H:%M";

/// 将表单输入解析为 UTC 时间戳
pub fn parse_datetime_input(input: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(input.trim(), DATETIME_INPUT_FORMAT)
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// 将时间戳格式化为表单输入串
pub fn format_datetime_input(value: DateTime<Utc>) -> String {
    value.format(DATETIME_INPUT_FORMAT).to_string()
}

/// 被删除实体的类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Calendar,
    Event,
}

impl EntityKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Calendar => "calendar",
            Self::Event => "event",
        }
    }
}

/// 日程表单的字段数（title, time, reminder, location, attendees）
pub const EVENT_FORM_FIELDS: usize = 5;
/// 日程表单中属于日期输入的字段索引（time, reminder）
pub const EVENT_FORM_DATE_FIELDS: [usize; 2] = [1, 2];

/// 弹窗类型
pub enum Modal {
    /// 日历表单（新建 / 编辑，按 id 是否存在区分）
    CalendarForm {
        id: Option<i64>,
        name: String,
        saving: bool,
        error: Option<String>,
    },
    /// 日程表单
    EventForm {
        id: Option<i64>,
        title: String,
        /// 日期字段以文本编辑，提交时解析
        time: String,
        reminder_time: String,
        location: String,
        /// 逗号分隔的参与者邮箱
        attendees: String,
        /// 服务端维护的标志，编辑时原样带回
        reminder_sent: bool,
        /// 当前焦点字段
        focus: usize,
        /// 各日期字段的取值器展开标志
        picker_open: [bool; 2],
        saving: bool,
        error: Option<String>,
    },
    /// 确认删除
    ConfirmDelete {
        kind: EntityKind,
        id: i64,
        label: String,
        /// 焦点：0=取消, 1=确认
        focus: usize,
    },
    /// 登录
    Login {
        username: String,
        password: String,
        /// 焦点：0=用户名, 1=密码
        focus: usize,
        show_password: bool,
        saving: bool,
        error: Option<String>,
    },
    /// 帮助信息
    Help,
    /// 错误提示
    Error { title: String, message: String },
}

/// 弹窗状态
#[derive(Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    /// 创建新的弹窗状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.active = None;
    }

    /// 是否有活动弹窗
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 显示日历表单（新建传 `Calendar::draft()`，编辑传已加载实体）
    pub fn show_calendar_form(&mut self, calendar: &Calendar) {
        self.active = Some(Modal::CalendarForm {
            id: calendar.id,
            name: calendar.name.clone(),
            saving: false,
            error: None,
        });
    }

    /// 显示空白的日程表单（新建）
    pub fn show_new_event_form(&mut self) {
        self.active = Some(Modal::EventForm {
            id: None,
            title: String::new(),
            time: String::new(),
            reminder_time: String::new(),
            location: String::new(),
            attendees: String::new(),
            reminder_sent: false,
            focus: 0,
            picker_open: [false; 2],
            saving: false,
            error: None,
        });
    }

    /// 显示日程表单（编辑已加载实体）
    pub fn show_event_form(&mut self, event: &CalendarEvent) {
        self.active = Some(Modal::EventForm {
            id: event.id,
            title: event.title.clone(),
            time: format_datetime_input(event.time),
            reminder_time: format_datetime_input(event.reminder_time),
            location: event.location.clone().unwrap_or_default(),
            attendees: event.attendees.join(", "),
            reminder_sent: event.reminder_sent,
            focus: 0,
            picker_open: [false; 2],
            saving: false,
            error: None,
        });
    }

    /// 显示确认删除弹窗
    pub fn show_confirm_delete(&mut self, kind: EntityKind, id: i64, label: impl Into<String>) {
        self.active = Some(Modal::ConfirmDelete {
            kind,
            id,
            label: label.into(),
            focus: 0,
        });
    }

    /// 显示登录弹窗
    pub fn show_login(&mut self, username: impl Into<String>) {
        let username = username.into();
        let focus = usize::from(!username.is_empty());
        self.active = Some(Modal::Login {
            username,
            password: String::new(),
            focus,
            show_password: false,
            saving: false,
            error: None,
        });
    }

    /// 显示帮助弹窗
    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }

    /// 显示错误弹窗
    pub fn show_error(&mut self, title: &str, message: &str) {
        self.active = Some(Modal::Error {
            title: title.to_string(),
            message: message.to_string(),
        });
    }
}
