//! 日程列表页面状态

use calendar_console_client::{CalendarEvent, Duration};

/// 日程列表页面状态
#[derive(Debug, Default)]
pub struct EventsState {
    /// 日程列表（服务器顺序）
    pub events: Vec<CalendarEvent>,
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
    /// 时间窗口过滤（None = 全部）
    pub window: Option<Duration>,
}

impl EventsState {
    /// 创建新的日程列表状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 过滤后的可见列表（标题/地点子串匹配）
    pub fn visible(&self) -> Vec<&CalendarEvent> {
        if self.filter.is_empty() {
            return self.events.iter().collect();
        }
        let needle = self.filter.to_lowercase();
        self.events
            .iter()
            .filter(|e| {
                e.title.to_lowercase().contains(&needle)
                    || e.location
                        .as_deref()
                        .is_some_and(|l| l.to_lowercase().contains(&needle))
            })
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

    /// 获取当前选中的日程
    pub fn selected_event(&self) -> Option<&CalendarEvent> {
        self.visible().get(self.selected).copied()
    }

    /// 设置列表数据：保留服务器顺序，重置选中项并清空搜索过滤
    pub fn set_events(&mut self, events: Vec<CalendarEvent>) {
        self.events = events;
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

    /// 循环切换时间窗口：全部 → 一天 → 一周 → 一月 → 全部
    pub fn cycle_window(&mut self) {
        self.window = match self.window {
            None => Some(Duration::Day),
            Some(Duration::Day) => Some(Duration::Week),
            Some(Duration::Week) => Some(Duration::Month),
            Some(Duration::Month) => None,
        };
    }

    /// 当前窗口的显示标签
    pub fn window_label(&self) -> &'static str {
        match self.window {
            None => "all",
            Some(Duration::Day) => "next day",
            Some(Duration::Week) => "next week",
            Some(Duration::Month) => "next month",
        }
    }
}
