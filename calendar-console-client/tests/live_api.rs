//! Live round-trip tests against a running calendar server.
//!
//! Gated on `CALENDAR_SERVER_URL` / `CALENDAR_USERNAME` /
//! `CALENDAR_PASSWORD`; skipped silently when they are absent so the suite
//! stays green without a backend.

mod common;

use calendar_console_client::{Calendar, CalendarEvent, Duration, EventWindow};
use chrono::{Duration as ChronoDuration, Utc};

const ENV_VARS: [&str; 3] = [
    "CALENDAR_SERVER_URL",
    "CALENDAR_USERNAME",
    "CALENDAR_PASSWORD",
];

#[tokio::test]
async fn calendar_crud_roundtrip() {
    skip_if_no_server!(ENV_VARS[0], ENV_VARS[1], ENV_VARS[2]);
    let client = common::authenticated_client().await;

    let created = require_ok!(
        client
            .calendars()
            .save(&Calendar {
                id: None,
                name: "live-test calendar".into(),
            })
            .await
    );
    let Some(id) = created.id else {
        panic!("server returned a created calendar without an id");
    };

    let listed = require_ok!(client.calendars().list().await);
    assert!(listed.iter().any(|c| c.id == Some(id)));

    let mut renamed = created.clone();
    renamed.name = "live-test calendar (renamed)".into();
    let updated = require_ok!(client.calendars().save(&renamed).await);
    assert_eq!(updated.id, Some(id));
    assert_eq!(updated.name, renamed.name);

    require_ok!(client.calendars().delete(id).await);
}

#[tokio::test]
async fn event_window_lists_only_near_events() {
    skip_if_no_server!(ENV_VARS[0], ENV_VARS[1], ENV_VARS[2]);
    let client = common::authenticated_client().await;

    let now = Utc::now();
    let created = require_ok!(
        client
            .events()
            .save(&CalendarEvent {
                id: None,
                title: "live-test event".into(),
                time: now + ChronoDuration::minutes(30),
                location: Some("1-800-meetnow".into()),
                reminder_time: now + ChronoDuration::minutes(20),
                reminder_sent: false,
                attendees: vec![],
            })
            .await
    );
    let Some(id) = created.id else {
        panic!("server returned a created event without an id");
    };

    let window = EventWindow::new(Duration::Day, now);
    let windowed = require_ok!(client.events().list(Some(window)).await);
    assert!(windowed.iter().any(|e| e.id == Some(id)));

    require_ok!(client.events().delete(id).await);
}
