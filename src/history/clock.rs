use chrono::{DateTime, Utc};

/// Wall-clock time for stamping committed results.
#[cfg(not(target_arch = "wasm32"))]
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Wall-clock time for stamping committed results.
///
/// `SystemTime` is unavailable in the browser, so read the JS clock.
#[cfg(target_arch = "wasm32")]
pub fn now() -> DateTime<Utc> {
    let millis = js_sys::Date::now() as i64;
    DateTime::from_timestamp_millis(millis).unwrap_or_default()
}
