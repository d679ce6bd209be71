//! 应用主状态结构

use super::{
    CalendarDetailState, CalendarsState, EventDetailState, EventsState, FocusPanel, ModalState,
    NavigationState, Page, Session,
};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 导航状态
    pub navigation: NavigationState,

    /// 当前页面
    pub current_page: Page,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 当前会话（登录用户与权限）
    pub session: Session,

    // === 各页面状态 ===
    /// 日历列表页状态
    pub calendars: CalendarsState,
    /// 日历详情页状态
    pub calendar_detail: CalendarDetailState,
    /// 日程列表页状态
    pub events: EventsState,
    /// 日程详情页状态
    pub event_detail: EventDetailState,

    /// 弹窗状态
    pub modal: ModalState,
}

impl App {
    /// 创建新的应用实例
    pub fn new() -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::Navigation,
            navigation: NavigationState::new(),
            current_page: Page::Home,
            status_message: None,
            session: Session::anonymous(),
            calendars: CalendarsState::new(),
            calendar_detail: CalendarDetailState::new(),
            events: EventsState::new(),
            event_detail: EventDetailState::new(),
            modal: ModalState::new(),
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
