//! Shared helpers for live API tests.

#![allow(dead_code)]

use calendar_console_client::CalendarClient;

/// Skips the test when the required environment variables are missing.
#[macro_export]
macro_rules! skip_if_no_server {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("skipping test: missing environment variable {}", $var);
                return;
            }
        )+
    };
}

/// Asserts a `Result` is `Ok` and unwraps it (fails the test otherwise).
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Builds an authenticated client from the environment.
pub async fn authenticated_client() -> CalendarClient {
    let url = std::env::var("CALENDAR_SERVER_URL").unwrap_or_default();
    let username = std::env::var("CALENDAR_USERNAME").unwrap_or_default();
    let password = std::env::var("CALENDAR_PASSWORD").unwrap_or_default();

    let client = CalendarClient::new(url);
    let claims = client
        .authenticate(&username, &password)
        .await
        .unwrap_or_else(|e| panic!("authentication against the test server failed: {e}"));
    assert_eq!(claims.sub, username);
    client
}
