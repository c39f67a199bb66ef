use chrono::{DateTime, Local, Utc};

/// Calendar date of a timestamp in the user's timezone.
pub fn local_date(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%Y-%m-%d").to_string()
}

