//! Calendar resource: `/api/calendars`.

use crate::client::CalendarClient;
use crate::error::Result;
use crate::resources::SaveRoute;
use crate::types::Calendar;

const RESOURCE: &str = "calendar";
const COLLECTION: &str = "/api/calendars";

/// Typed façade over the calendar endpoints.
pub struct CalendarResource<'a> {
    client: &'a CalendarClient,
}

impl<'a> CalendarResource<'a> {
    pub(crate) fn new(client: &'a CalendarClient) -> Self {
        Self { client }
    }

    /// `GET /api/calendars`
    pub async fn list(&self) -> Result<Vec<Calendar>> {
        self.client.get_json(COLLECTION, RESOURCE, None).await
    }

    /// `GET /api/calendars/{id}`
    pub async fn get(&self, id: i64) -> Result<Calendar> {
        self.client
            .get_json(
                &format!("{COLLECTION}/{id}"),
                RESOURCE,
                Some(&id.to_string()),
            )
            .await
    }

    /// `POST /api/calendars`
    pub async fn create(&self, calendar: &Calendar) -> Result<Calendar> {
        self.client.post_json(COLLECTION, calendar, RESOURCE).await
    }

    /// `PUT /api/calendars/{id}`
    pub async fn update(&self, id: i64, calendar: &Calendar) -> Result<Calendar> {
        self.client
            .put_json(
                &format!("{COLLECTION}/{id}"),
                calendar,
                RESOURCE,
                Some(&id.to_string()),
            )
            .await
    }

    /// `DELETE /api/calendars/{id}`
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client
            .delete(
                &format!("{COLLECTION}/{id}"),
                RESOURCE,
                Some(&id.to_string()),
            )
            .await
    }

    /// Persists the record, dispatching on id presence: create when the
    /// record has no id yet, update otherwise.
    pub async fn save(&self, calendar: &Calendar) -> Result<Calendar> {
        match SaveRoute::for_id(calendar.id) {
            SaveRoute::Create => self.create(calendar).await,
            SaveRoute::Update(id) => self.update(id, calendar).await,
        }
    }
}
