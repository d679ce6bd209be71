//! 页面状态定义

use calendar_console_client::AUTHORITY_USER;

/// 页面枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Page {
    /// 首页
    #[default]
    Home,
    /// 日历列表
    Calendars,
    /// 日历详情页
    CalendarDetail { id: i64 },
    /// 日程列表
    Events,
    /// 日程详情页
    EventDetail { id: i64 },
}

impl Page {
    /// 获取页面标题
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Calendars => "Calendars",
            Page::CalendarDetail { .. } => "Calendar",
            Page::Events => "Events",
            Page::EventDetail { .. } => "Event",
        }
    }

    /// 是否是详情页面（需要返回按钮）
    pub fn is_detail_page(&self) -> bool {
        matches!(
            self,
            Page::CalendarDetail { .. } | Page::EventDetail { .. }
        )
    }

    /// 访问该页面所需的权限（None 表示无需登录）
    pub fn required_authority(&self) -> Option<&'static str> {
        match self {
            Page::Home => None,
            _ => Some(AUTHORITY_USER),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_pages_require_role_user() {
        assert_eq!(Page::Home.required_authority(), None);
        assert_eq!(Page::Calendars.required_authority(), Some("ROLE_USER"));
        assert_eq!(Page::Events.required_authority(), Some("ROLE_USER"));
        assert_eq!(
            Page::CalendarDetail { id: 1 }.required_authority(),
            Some("ROLE_USER")
        );
        assert_eq!(
            Page::EventDetail { id: 1 }.required_authority(),
            Some("ROLE_USER")
        );
    }

    #[test]
    fn detail_pages_are_detail_pages() {
        assert!(Page::CalendarDetail { id: 1 }.is_detail_page());
        assert!(Page::EventDetail { id: 1 }.is_detail_page());
        assert!(!Page::Calendars.is_detail_page());
        assert!(!Page::Home.is_detail_page());
    }
}
