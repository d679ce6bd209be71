//! Calendar event resource: `/api/calendar-events`.

use crate::client::CalendarClient;
use crate::error::Result;
use crate::resources::SaveRoute;
use crate::types::{CalendarEvent, EventWindow};

const RESOURCE: &str = "calendar-event";
const COLLECTION: &str = "/api/calendar-events";

/// Wire format of the window's start timestamp.
const START_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Typed façade over the calendar event endpoints.
pub struct CalendarEventResource<'a> {
    client: &'a CalendarClient,
}

impl<'a> CalendarEventResource<'a> {
    pub(crate) fn new(client: &'a CalendarClient) -> Self {
        Self { client }
    }

    /// `GET /api/calendar-events` — the current user's events, optionally
    /// restricted to a duration window.
    pub async fn list(&self, window: Option<EventWindow>) -> Result<Vec<CalendarEvent>> {
        let path = match window {
            None => COLLECTION.to_string(),
            Some(window) => format!(
                "{COLLECTION}?duration={}&startDate={}",
                window.duration.as_param(),
                window.start_date.format(START_DATE_FORMAT)
            ),
        };
        self.client.get_json(&path, RESOURCE, None).await
    }

    /// `GET /api/calendar-events/{id}`
    pub async fn get(&self, id: i64) -> Result<CalendarEvent> {
        self.client
            .get_json(
                &format!("{COLLECTION}/{id}"),
                RESOURCE,
                Some(&id.to_string()),
            )
            .await
    }

    /// `POST /api/calendar-events`
    pub async fn create(&self, event: &CalendarEvent) -> Result<CalendarEvent> {
        self.client.post_json(COLLECTION, event, RESOURCE).await
    }

    /// `PUT /api/calendar-events/{id}`
    pub async fn update(&self, id: i64, event: &CalendarEvent) -> Result<CalendarEvent> {
        self.client
            .put_json(
                &format!("{COLLECTION}/{id}"),
                event,
                RESOURCE,
                Some(&id.to_string()),
            )
            .await
    }

    /// `DELETE /api/calendar-events/{id}`
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client
            .delete(
                &format!("{COLLECTION}/{id}"),
                RESOURCE,
                Some(&id.to_string()),
            )
            .await
    }

    /// Persists the record, dispatching on id presence.
    pub async fn save(&self, event: &CalendarEvent) -> Result<CalendarEvent> {
        match SaveRoute::for_id(event.id) {
            SaveRoute::Create => self.create(event).await,
            SaveRoute::Update(id) => self.update(id, event).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use chrono::Utc;

    use crate::types::{Duration, EventWindow};

    use super::START_DATE_FORMAT;

    #[test]
    fn window_start_formats_like_the_wire() {
        let window = EventWindow::new(
            Duration::Week,
            Utc.with_ymd_and_hms(2017, 4, 10, 15, 0, 0).unwrap(),
        );
        assert_eq!(
            window.start_date.format(START_DATE_FORMAT).to_string(),
            "2017-04-10T15:00:00.000Z"
        );
    }
}
