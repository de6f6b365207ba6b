use time::Date;

/// Today's calendar date (UTC), the latest birthday the forms accept.
#[cfg(target_arch = "wasm32")]
pub fn today() -> Date {
    api::models::epoch_millis_to_date(js_sys::Date::now() as i64).unwrap_or(Date::MAX)
}

/// Today's calendar date (UTC), the latest birthday the forms accept.
#[cfg(not(target_arch = "wasm32"))]
pub fn today() -> Date {
    time::OffsetDateTime::now_utc().date()
}
