//! API 调用服务
//!
//! 把 `calendar-console-client` 的异步调用挂到 tokio 运行时上执行，
//! 完成后以 `BackendMessage` 投回主循环。主循环保持同步：这里只
//! spawn，不等待。没有取消与超时语义 —— 挂起的请求让对应页面停留
//! 在加载/保存状态，由 HTTP 层的连接超时兜底。

use std::sync::Arc;

use calendar_console_client::{Calendar, CalendarClient, CalendarEvent, Duration, EventWindow};
use chrono::Utc;
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;

use crate::message::{AppMessage, BackendMessage};

/// API 调用服务
pub struct ApiService {
    client: Arc<CalendarClient>,
    handle: Handle,
    tx: UnboundedSender<AppMessage>,
}

impl ApiService {
    /// 创建服务实例
    pub fn new(client: Arc<CalendarClient>, handle: Handle, tx: UnboundedSender<AppMessage>) -> Self {
        Self { client, handle, tx }
    }

    /// 恢复已保存的令牌（启动时）
    pub fn set_token(&self, token: String) {
        self.client.set_token(Some(token));
    }

    /// 当前令牌（登录成功后持久化用）
    pub fn token(&self) -> Option<String> {
        self.client.token()
    }

    fn spawn<F>(&self, task: F)
    where
        F: std::future::Future<Output = BackendMessage> + Send + 'static,
    {
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            // 接收端随应用退出关闭，发送失败直接丢弃
            let _ = tx.send(AppMessage::Backend(task.await));
        });
    }

    // ========== 认证 ==========

    /// 登录
    pub fn login(&self, username: String, password: String) {
        let client = Arc::clone(&self.client);
        self.spawn(async move {
            BackendMessage::LoginCompleted(client.authenticate(&username, &password).await)
        });
    }

    // ========== 日历 ==========

    /// 加载日历列表
    pub fn load_calendars(&self) {
        let client = Arc::clone(&self.client);
        self.spawn(async move { BackendMessage::CalendarsLoaded(client.calendars().list().await) });
    }

    /// 解析日历详情
    pub fn load_calendar(&self, id: i64) {
        let client = Arc::clone(&self.client);
        self.spawn(async move {
            BackendMessage::CalendarLoaded(id, client.calendars().get(id).await)
        });
    }

    /// 编辑前解析日历
    pub fn load_calendar_for_edit(&self, id: i64) {
        let client = Arc::clone(&self.client);
        self.spawn(async move {
            BackendMessage::CalendarEditLoaded(client.calendars().get(id).await)
        });
    }

    /// 删除前解析日历
    pub fn load_calendar_for_delete(&self, id: i64) {
        let client = Arc::clone(&self.client);
        self.spawn(async move {
            BackendMessage::CalendarDeleteLoaded(client.calendars().get(id).await)
        });
    }

    /// 保存日历（按 id 是否存在分派 create / update）
    pub fn save_calendar(&self, calendar: Calendar) {
        let client = Arc::clone(&self.client);
        self.spawn(async move {
            BackendMessage::CalendarSaved(client.calendars().save(&calendar).await)
        });
    }

    /// 删除日历
    pub fn delete_calendar(&self, id: i64) {
        let client = Arc::clone(&self.client);
        self.spawn(async move {
            BackendMessage::CalendarDeleted(id, client.calendars().delete(id).await)
        });
    }

    // ========== 日程 ==========

    /// 加载日程列表（窗口起点取当前时刻）
    pub fn load_events(&self, window: Option<Duration>) {
        let client = Arc::clone(&self.client);
        let window = window.map(|duration| EventWindow::new(duration, Utc::now()));
        self.spawn(async move { BackendMessage::EventsLoaded(client.events().list(window).await) });
    }

    /// 解析日程详情
    pub fn load_event(&self, id: i64) {
        let client = Arc::clone(&self.client);
        self.spawn(async move { BackendMessage::EventLoaded(id, client.events().get(id).await) });
    }

    /// 编辑前解析日程
    pub fn load_event_for_edit(&self, id: i64) {
        let client = Arc::clone(&self.client);
        self.spawn(async move { BackendMessage::EventEditLoaded(client.events().get(id).await) });
    }

    /// 删除前解析日程
    pub fn load_event_for_delete(&self, id: i64) {
        let client = Arc::clone(&self.client);
        self.spawn(async move { BackendMessage::EventDeleteLoaded(client.events().get(id).await) });
    }

    /// 保存日程
    pub fn save_event(&self, event: CalendarEvent) {
        let client = Arc::clone(&self.client);
        self.spawn(async move { BackendMessage::EventSaved(client.events().save(&event).await) });
    }

    /// 删除日程
    pub fn delete_event(&self, id: i64) {
        let client = Arc::clone(&self.client);
        self.spawn(async move {
            BackendMessage::EventDeleted(id, client.events().delete(id).await)
        });
    }
}
