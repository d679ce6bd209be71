//! 后台完成通知
//!
//! Backend 层在 tokio 任务中执行 HTTP 调用，完成后把结果包装成
//! 这里的变体投回主循环。携带 id 的变体用于陈旧性判断：
//! 结果到达时若页面已经切走，Update 层直接丢弃。

use calendar_console_client::{ApiError, Calendar, CalendarEvent, JwtClaims};

/// 后台调用完成通知
#[derive(Debug, Clone)]
pub enum BackendMessage {
    /// 登录完成
    LoginCompleted(Result<JwtClaims, ApiError>),

    // ========== 日历 ==========
    /// 日历列表加载完成
    CalendarsLoaded(Result<Vec<Calendar>, ApiError>),
    /// 日历详情解析完成
    CalendarLoaded(i64, Result<Calendar, ApiError>),
    /// 编辑前的实体解析完成（成功则打开表单）
    CalendarEditLoaded(Result<Calendar, ApiError>),
    /// 删除前的实体解析完成（成功则打开确认弹窗）
    CalendarDeleteLoaded(Result<Calendar, ApiError>),
    /// 保存完成
    CalendarSaved(Result<Calendar, ApiError>),
    /// 删除完成
    CalendarDeleted(i64, Result<(), ApiError>),

    // ========== 日程 ==========
    /// 日程列表加载完成
    EventsLoaded(Result<Vec<CalendarEvent>, ApiError>),
    /// 日程详情解析完成
    EventLoaded(i64, Result<CalendarEvent, ApiError>),
    /// 编辑前的实体解析完成
    EventEditLoaded(Result<CalendarEvent, ApiError>),
    /// 删除前的实体解析完成
    EventDeleteLoaded(Result<CalendarEvent, ApiError>),
    /// 保存完成
    EventSaved(Result<CalendarEvent, ApiError>),
    /// 删除完成
    EventDeleted(i64, Result<(), ApiError>),
}
