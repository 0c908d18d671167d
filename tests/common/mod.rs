//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_source;

use userdeck::users::UserRecord;

pub fn user(id: &str, name: &str, country: &str, created_at: &str) -> UserRecord {
    UserRecord::new(id, name, country, created_at)
}

/// `count` users with ids `0..count`, names `User <id>`, all in `country`,
/// created one day apart starting 2024-01-01.
pub fn users_in(country: &str, count: usize) -> Vec<UserRecord> {
    (0..count)
        .map(|i| {
            user(
                &i.to_string(),
                &format!("User {i}"),
                country,
                &format!("2024-01-{:02}T00:00:00Z", (i % 28) + 1),
            )
        })
        .collect()
}

pub fn ids(records: &[&UserRecord]) -> Vec<String> {
    records.iter().map(|user| user.id.clone()).collect()
}

pub fn users_json(users: &[UserRecord]) -> String {
    serde_json::to_string(users).expect("Failed to serialize users")
}
