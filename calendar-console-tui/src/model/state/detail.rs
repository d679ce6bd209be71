//! 详情页面状态
//!
//! 进入详情页时记录来源页面（用于返回导航），并订阅对应实体的
//! 更新通道：弹窗保存成功后广播的新实体会原地替换这里持有的副本。
//! 离开详情页时丢弃订阅接收端，即完成注销 —— 不允许跨页面泄漏订阅。

use calendar_console_client::{Calendar, CalendarEvent};
use tokio::sync::broadcast;

use crate::model::Page;

/// 来源页面描述（name/params 合一：Page 自身携带参数）
#[derive(Debug, Clone)]
pub struct PreviousPage {
    pub page: Page,
    pub title: &'static str,
}

impl PreviousPage {
    pub fn of(page: Page) -> Self {
        let title = page.title();
        Self { page, title }
    }
}

/// 日历详情页状态
#[derive(Default)]
pub struct CalendarDetailState {
    /// 目标实体 id
    pub id: i64,
    /// 已解析的实体（加载完成前为 None，视图按加载状态分支渲染）
    pub calendar: Option<Calendar>,
    /// 是否正在加载
    pub loading: bool,
    /// 错误信息
    pub error: Option<String>,
    /// 来源页面
    pub previous: Option<PreviousPage>,
    /// 实体更新订阅（Some 当且仅当页面处于活动状态）
    pub updates: Option<broadcast::Receiver<Calendar>>,
}

impl CalendarDetailState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 进入详情页：记录来源并置为加载中
    pub fn open(&mut self, id: i64, previous: PreviousPage) {
        self.id = id;
        self.calendar = None;
        self.loading = true;
        self.error = None;
        self.previous = Some(previous);
    }

    /// 离开详情页：清空状态并丢弃订阅
    pub fn close(&mut self) {
        *self = Self::default();
    }

    /// 是否持有活动的更新订阅
    pub fn is_subscribed(&self) -> bool {
        self.updates.is_some()
    }
}

/// 日程详情页状态
#[derive(Default)]
pub struct EventDetailState {
    pub id: i64,
    pub event: Option<CalendarEvent>,
    pub loading: bool,
    pub error: Option<String>,
    pub previous: Option<PreviousPage>,
    pub updates: Option<broadcast::Receiver<CalendarEvent>>,
}

impl EventDetailState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, id: i64, previous: PreviousPage) {
        self.id = id;
        self.event = None;
        self.loading = true;
        self.error = None;
        self.previous = Some(previous);
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }

    pub fn is_subscribed(&self) -> bool {
        self.updates.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_marks_loading_and_records_origin() {
        let mut state = CalendarDetailState::new();
        state.open(7, PreviousPage::of(Page::Calendars));
        assert_eq!(state.id, 7);
        assert!(state.loading);
        assert!(state.calendar.is_none());
        assert_eq!(
            state.previous.as_ref().map(|p| p.page.clone()),
            Some(Page::Calendars)
        );
    }

    #[test]
    fn close_drops_subscription() {
        let (tx, rx) = broadcast::channel::<Calendar>(4);
        let mut state = CalendarDetailState::new();
        state.open(7, PreviousPage::of(Page::Calendars));
        state.updates = Some(rx);
        assert!(state.is_subscribed());
        assert_eq!(tx.receiver_count(), 1);

        state.close();
        assert!(!state.is_subscribed());
        assert_eq!(tx.receiver_count(), 0);
    }
}
