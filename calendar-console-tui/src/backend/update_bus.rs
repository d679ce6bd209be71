//! 实体更新总线
//!
//! 保存成功后，弹窗路径把服务器返回的新实体广播到这里；详情页持有
//! 对应通道的接收端，在主循环中原地换上新副本。每种实体一条独立的
//! 类型化通道；订阅端被丢弃即完成注销，发送端不关心有没有听众。

use calendar_console_client::{Calendar, CalendarEvent};
use tokio::sync::broadcast;

/// 通道容量：UI 场景下积压意味着接收端早已被丢弃
const CHANNEL_CAPACITY: usize = 16;

/// 实体更新总线
pub struct UpdateBus {
    calendars: broadcast::Sender<Calendar>,
    events: broadcast::Sender<CalendarEvent>,
}

impl UpdateBus {
    /// 创建新的总线
    pub fn new() -> Self {
        let (calendars, _) = broadcast::channel(CHANNEL_CAPACITY);
        let (events, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { calendars, events }
    }

    /// 订阅日历更新
    pub fn subscribe_calendars(&self) -> broadcast::Receiver<Calendar> {
        self.calendars.subscribe()
    }

    /// 订阅日程更新
    pub fn subscribe_events(&self) -> broadcast::Receiver<CalendarEvent> {
        self.events.subscribe()
    }

    /// 广播一条日历更新（保存成功后恰好调用一次）
    pub fn publish_calendar(&self, calendar: Calendar) {
        // 没有活动的详情页时发送会失败，这不是错误
        let _ = self.calendars.send(calendar);
    }

    /// 广播一条日程更新
    pub fn publish_event(&self, event: CalendarEvent) {
        let _ = self.events.send(event);
    }

    /// 当前日历通道的订阅数
    pub fn calendar_listeners(&self) -> usize {
        self.calendars.receiver_count()
    }

    /// 当前日程通道的订阅数
    pub fn event_listeners(&self) -> usize {
        self.events.receiver_count()
    }
}

impl Default for UpdateBus {
    fn default() -> Self {
        Self::new()
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
    fn listener_count_transitions_one_to_zero() {
        let bus = UpdateBus::new();
        assert_eq!(bus.calendar_listeners(), 0);

        let rx = bus.subscribe_calendars();
        assert_eq!(bus.calendar_listeners(), 1);

        drop(rx);
        assert_eq!(bus.calendar_listeners(), 0);
    }

    #[test]
    fn publish_reaches_the_subscriber_exactly_once() {
        let bus = UpdateBus::new();
        let mut rx = bus.subscribe_calendars();

        bus.publish_calendar(calendar(7, "Team Sync"));

        let received = rx.try_recv().unwrap();
        assert_eq!(received, calendar(7, "Team Sync"));
        assert!(rx.try_recv().is_err(), "only one message was published");
    }

    #[test]
    fn publish_without_listeners_is_a_no_op() {
        let bus = UpdateBus::new();
        bus.publish_event(CalendarEvent {
            id: Some(1),
            title: "Standup".into(),
            time: chrono::Utc::now(),
            location: None,
            reminder_time: chrono::Utc::now(),
            reminder_sent: false,
            attendees: vec![],
        });
        assert_eq!(bus.event_listeners(), 0);
    }

    #[test]
    fn channels_are_typed_and_independent() {
        let bus = UpdateBus::new();
        let mut calendars = bus.subscribe_calendars();
        let mut events = bus.subscribe_events();

        bus.publish_calendar(calendar(1, "Home"));

        assert!(calendars.try_recv().is_ok());
        assert!(events.try_recv().is_err());
    }
}
