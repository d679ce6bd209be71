//! Typed REST client for the calendar server.
//!
//! One [`CalendarClient`] per server; per-entity façades
//! ([`CalendarResource`], [`CalendarEventResource`]) expose
//! list/get/create/update/delete plus an id-dispatching `save`. Errors
//! surface as the unified [`ApiError`] taxonomy; there is no retry,
//! caching, or backoff layer — a failed call is the caller's to handle.

mod auth;
mod client;
mod error;
mod http;
mod resources;
mod types;

pub use auth::{AUTHORITY_ADMIN, AUTHORITY_USER, JwtClaims};
pub use client::CalendarClient;
pub use error::{ApiError, Result};
pub use resources::{CalendarEventResource, CalendarResource, SaveRoute};
pub use types::{AuthResponse, Calendar, CalendarEvent, Duration, EventWindow};
