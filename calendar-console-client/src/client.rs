//! The API client: one HTTP connection pool, one bearer token, and the
//! per-entity resource façades.

use std::sync::RwLock;
use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::auth::JwtClaims;
use crate::error::{ApiError, Result};
use crate::http;
use crate::resources::{CalendarEventResource, CalendarResource};
use crate::types::{AuthRequest, AuthResponse};

/// Builds the shared HTTP client.
///
/// A connect timeout keeps an unreachable server from hanging the UI's
/// loading states forever; there is deliberately no retry layer on top.
fn create_http_client() -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_default()
}

/// Client for the calendar server REST API.
///
/// Holds the base URL and the session's bearer token; resource accessors
/// hand out typed façades that borrow this client.
pub struct CalendarClient {
    pub(crate) client: Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl CalendarClient {
    /// Creates a client for the given server, e.g. `http://localhost:8080`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: create_http_client(),
            base_url,
            token: RwLock::new(None),
        }
    }

    /// Creates a client with a previously issued token (restored session).
    #[must_use]
    pub fn with_token(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let client = Self::new(base_url);
        client.set_token(Some(token.into()));
        client
    }

    /// Replaces the bearer token (`None` drops the session).
    pub fn set_token(&self, token: Option<String>) {
        if let Ok(mut guard) = self.token.write() {
            *guard = token;
        }
    }

    /// The current bearer token, if any.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.token.read().ok().and_then(|guard| guard.clone())
    }

    /// Exchanges credentials for a JWT, stores it, and returns its claims.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<JwtClaims> {
        let path = "/api/authenticate";
        let request = self.client.post(self.url(path)).json(&AuthRequest {
            username,
            password,
        });

        let (status, body) = http::execute(request, "POST", path).await?;
        if status == 401 {
            // The server answers bad credentials with 401 and no problem body.
            return Err(ApiError::Unauthorized {
                detail: format!("authentication failed for user: {username}"),
            });
        }
        http::check_status(status, &body, "authentication", None)?;

        let auth: AuthResponse = http::parse_json(&body, "authentication")?;
        let claims = JwtClaims::decode(&auth.id_token)?;
        self.set_token(Some(auth.id_token));

        log::debug!("authenticated as {} [{}]", claims.sub, claims.auth);
        Ok(claims)
    }

    /// Resource façade for calendars.
    #[must_use]
    pub fn calendars(&self) -> CalendarResource<'_> {
        CalendarResource::new(self)
    }

    /// Resource façade for calendar events.
    #[must_use]
    pub fn events(&self) -> CalendarEventResource<'_> {
        CalendarEventResource::new(self)
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.token() {
            Some(token) => request.header("Authorization", format!("Bearer {token}")),
            None => request,
        }
    }

    // ---- verb helpers shared by the resource façades ----

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        resource: &str,
        id: Option<&str>,
    ) -> Result<T> {
        let request = self.authorized(self.client.get(self.url(path)));
        let (status, body) = http::execute(request, "GET", path).await?;
        http::check_status(status, &body, resource, id)?;
        http::parse_json(&body, resource)
    }

    pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        resource: &str,
    ) -> Result<T> {
        let request = self.authorized(self.client.post(self.url(path)).json(body));
        let (status, text) = http::execute(request, "POST", path).await?;
        http::check_status(status, &text, resource, None)?;
        http::parse_json(&text, resource)
    }

    pub(crate) async fn put_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        resource: &str,
        id: Option<&str>,
    ) -> Result<T> {
        let request = self.authorized(self.client.put(self.url(path)).json(body));
        let (status, text) = http::execute(request, "PUT", path).await?;
        http::check_status(status, &text, resource, id)?;
        http::parse_json(&text, resource)
    }

    pub(crate) async fn delete(
        &self,
        path: &str,
        resource: &str,
        id: Option<&str>,
    ) -> Result<()> {
        let request = self.authorized(self.client.delete(self.url(path)));
        let (status, body) = http::execute(request, "DELETE", path).await?;
        http::check_status(status, &body, resource, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let client = CalendarClient::new("http://localhost:8080/");
        assert_eq!(
            client.url("/api/calendars"),
            "http://localhost:8080/api/calendars"
        );
    }

    #[test]
    fn token_roundtrip() {
        let client = CalendarClient::new("http://localhost:8080");
        assert_eq!(client.token(), None);
        client.set_token(Some("abc".into()));
        assert_eq!(client.token(), Some("abc".into()));
        client.set_token(None);
        assert_eq!(client.token(), None);
    }

    #[test]
    fn with_token_restores_session() {
        let client = CalendarClient::with_token("http://localhost:8080", "xyz");
        assert_eq!(client.token(), Some("xyz".into()));
    }
}
