//! Wire type definitions for the calendar server API.
//!
//! All payloads are JSON with camelCase field names. Timestamps travel as
//! ISO-8601 strings and are parsed into [`chrono::DateTime`] eagerly at the
//! deserialization boundary, so callers never see the wire representation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A calendar, the owning container for events.
///
/// `id == None` marks a record that has not been persisted yet; the save
/// path must create it, never update it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Calendar {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
}

impl Calendar {
    /// Blank record for the "new" dialog.
    #[must_use]
    pub fn draft() -> Self {
        Self {
            id: None,
            name: String::new(),
        }
    }
}

/// A calendar event with its reminder bookkeeping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub reminder_time: DateTime<Utc>,
    #[serde(default)]
    pub reminder_sent: bool,
    /// Attendee e-mail addresses. The server owns membership semantics;
    /// the client only displays and submits the list.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attendees: Vec<String>,
}

/// Search window length for the event list query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Duration {
    Day,
    Week,
    Month,
}

impl Duration {
    /// Window length in days, matching the server's definition.
    #[must_use]
    pub const fn days(self) -> u32 {
        match self {
            Self::Day => 1,
            Self::Week => 7,
            Self::Month => 30,
        }
    }

    /// Query-parameter value.
    #[must_use]
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::Day => "DAY",
            Self::Week => "WEEK",
            Self::Month => "MONTH",
        }
    }
}

/// A span of time the event list is restricted to:
/// `start_date .. start_date + duration`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventWindow {
    pub duration: Duration,
    pub start_date: DateTime<Utc>,
}

impl EventWindow {
    #[must_use]
    pub const fn new(duration: Duration, start_date: DateTime<Utc>) -> Self {
        Self {
            duration,
            start_date,
        }
    }
}

/// Body of `POST /api/authenticate`.
#[derive(Debug, Clone, Serialize)]
pub struct AuthRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Response of `POST /api/authenticate`.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub id_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn calendar_draft_has_no_id() {
        let draft = Calendar::draft();
        assert_eq!(draft.id, None);
        assert!(draft.name.is_empty());
    }

    #[test]
    fn calendar_draft_serializes_without_id() {
        let json = serde_json::to_value(Calendar::draft()).unwrap();
        assert!(json.get("id").is_none());
    }

    #[test]
    fn event_parses_wire_timestamps() {
        let json = r#"{
            "id": 3,
            "title": "Standup",
            "time": "2017-04-10T15:00:00.000Z",
            "location": "Room A",
            "reminderTime": "2017-04-10T14:50:00.000Z",
            "reminderSent": false,
            "attendees": ["a@example.com", "b@example.com"]
        }"#;
        let event: CalendarEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.id, Some(3));
        assert_eq!(
            event.time,
            Utc.with_ymd_and_hms(2017, 4, 10, 15, 0, 0).unwrap()
        );
        assert_eq!(
            event.reminder_time,
            Utc.with_ymd_and_hms(2017, 4, 10, 14, 50, 0).unwrap()
        );
        assert_eq!(event.attendees.len(), 2);
    }

    #[test]
    fn event_tolerates_missing_optional_fields() {
        let json = r#"{
            "id": 4,
            "title": "Planning",
            "time": "2017-04-11T09:00:00.000Z",
            "reminderTime": "2017-04-11T08:45:00.000Z"
        }"#;
        let event: CalendarEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.location, None);
        assert!(!event.reminder_sent);
        assert!(event.attendees.is_empty());
    }

    #[test]
    fn event_serializes_camel_case() {
        let event = CalendarEvent {
            id: Some(3),
            title: "Standup".into(),
            time: Utc.with_ymd_and_hms(2017, 4, 10, 15, 0, 0).unwrap(),
            location: Some("Room B".into()),
            reminder_time: Utc.with_ymd_and_hms(2017, 4, 10, 14, 50, 0).unwrap(),
            reminder_sent: true,
            attendees: vec![],
        };
        let json = serde_json::to_value(&event).unwrap();
        assert!(json.get("reminderTime").is_some());
        assert_eq!(json["reminderSent"], serde_json::json!(true));
        assert!(json.get("attendees").is_none());
    }

    #[test]
    fn duration_days() {
        assert_eq!(Duration::Day.days(), 1);
        assert_eq!(Duration::Week.days(), 7);
        assert_eq!(Duration::Month.days(), 30);
    }
}
