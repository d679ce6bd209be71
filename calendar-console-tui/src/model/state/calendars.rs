//! 日历列表页面状态

use calendar_console_client::Calendar;

/// 日历列表页面状态
#[derive(Debug, Default)]
pub struct CalendarsState {
    /// 日历列表（服务器顺序）
    pub calendars: Vec<Calendar>,
    /// 当前选中的索引（基于过滤后的可见列表）
    pub selected: usize,
    /// 是否正在加载
    pub loading: bool,
    /// 错误信息
    pub error: Option<String>,
    /// 搜索过滤串
    pub filter: String,
    /// 是否处于过滤输入模式
    pub filter_active: bool,
}

impl CalendarsState {
    /// 创建新的日历列表状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 过滤后的可见列表（保持服务器顺序）
    pub fn visible(&self) -> Vec<&Calendar> {
        if self.filter.is_empty() {
            return self.calendars.iter().collect();
        }
        let needle = self.filter.to_lowercase();
        self.calendars
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        let len = self.visible().len();
        if len > 0 && self.selected < len - 1 {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self) {
        self.selected = self.visible().len().saturating_sub(1);
    }

    /// 获取当前选中的日历
    pub fn selected_calendar(&self) -> Option<&Calendar> {
        self.visible().get(self.selected).copied()
    }

    /// 设置列表数据：保留服务器顺序，重置选中项并清空搜索过滤
    pub fn set_calendars(&mut self, calendars: Vec<Calendar>) {
        self.calendars = calendars;
        self.selected = 0;
        self.loading = false;
        self.error = None;
        self.filter.clear();
        self.filter_active = false;
    }

    /// 过滤串变化后，收紧选中索引
    pub fn clamp_selection(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calendar(id: i64, name: &str) -> Calendar {
        Calendar {
            id: Some(id),
            name: name.into(),
        }
    }

    #[test]
    fn set_calendars_keeps_server_order_and_clears_filter() {
        let mut state = CalendarsState::new();
        state.filter = "old".into();
        state.filter_active = true;
        state.selected = 3;
        state.loading = true;

        let list = vec![calendar(2, "Work"), calendar(1, "Home")];
        state.set_calendars(list.clone());

        assert_eq!(state.calendars, list);
        assert_eq!(state.selected, 0);
        assert!(!state.loading);
        assert!(state.filter.is_empty());
        assert!(!state.filter_active);
    }

    #[test]
    fn filter_narrows_visible_list() {
        let mut state = CalendarsState::new();
        state.set_calendars(vec![
            calendar(1, "Team Sync"),
            calendar(2, "Personal"),
            calendar(3, "Team Offsite"),
        ]);
        state.filter = "team".into();
        let visible: Vec<_> = state.visible().iter().map(|c| c.id).collect();
        assert_eq!(visible, vec![Some(1), Some(3)]);
    }

    #[test]
    fn selection_follows_visible_list() {
        let mut state = CalendarsState::new();
        state.set_calendars(vec![
            calendar(1, "Team Sync"),
            calendar(2, "Personal"),
        ]);
        state.select_next();
        assert_eq!(state.selected_calendar().and_then(|c| c.id), Some(2));
        state.filter = "team".into();
        state.clamp_selection();
        assert_eq!(state.selected_calendar().and_then(|c| c.id), Some(1));
    }
}
