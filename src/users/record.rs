use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Shown in place of a creation time that cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

/// A single user as returned by the remote endpoint.
///
/// Fields are kept exactly as received. `created_at` in particular is not
/// validated on deserialization; callers that need a timestamp go through
/// [`UserRecord::created_at_timestamp`] and handle `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    pub user_name: String,
    pub country: String,
    pub created_at: String,
}

impl UserRecord {
    pub fn new(
        id: impl Into<String>,
        user_name: impl Into<String>,
        country: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            user_name: user_name.into(),
            country: country.into(),
            created_at: created_at.into(),
        }
    }

    /// Parsed creation time, or `None` if `created_at` is not a recognised format.
    pub fn created_at_timestamp(&self) -> Option<DateTime<FixedOffset>> {
        parse_timestamp(&self.created_at)
    }

    /// Creation time formatted for display, e.g. `03/01/2024, 09:05 PM UTC`.
    pub fn created_at_display(&self) -> String {
        match self.created_at_timestamp() {
            Some(ts) => ts
                .with_timezone(&Utc)
                .format("%m/%d/%Y, %I:%M %p UTC")
                .to_string(),
            None => INVALID_DATE.to_string(),
        }
    }

    /// Case-insensitive substring match on the user name.
    pub fn matches_search(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.user_name
            .to_lowercase()
            .contains(&needle.to_lowercase())
    }
}

/// Accepts RFC 3339, a naive `YYYY-MM-DDTHH:MM:SS[.f]` (read as UTC) and a
/// bare `YYYY-MM-DD` (midnight UTC).
fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc().fixed_offset());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().fixed_offset())
}
