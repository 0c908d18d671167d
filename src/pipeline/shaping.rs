//! Raw user list → visible page.
//!
//! ```text
//! raw ──→ country filter ──→ sort ──→ search ──→ paginate ──→ VisiblePage
//! ```
//!
//! Every step is total. Records are only borrowed, reordered and selected.

use std::cmp::Ordering;

use chrono::{DateTime, FixedOffset};

use crate::pipeline::view_state::{CountryFilter, SortMode, ViewState};
use crate::users::UserRecord;

/// The slice of records to render plus the page count it was cut from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisiblePage<'a> {
    pub records: Vec<&'a UserRecord>,
    /// Never less than 1.
    pub total_pages: usize,
    /// Records left after filter and search, across all pages.
    pub matched: usize,
}

pub fn compute_visible_page<'a>(raw: &'a [UserRecord], view: &ViewState) -> VisiblePage<'a> {
    let shaped = shape(raw, view);
    let matched = shaped.len();
    let total_pages = total_pages(matched, view.page_size);

    let page_size = view.page_size.max(1);
    let records = match view.page.checked_sub(1) {
        Some(page_index) => {
            let start = page_index.saturating_mul(page_size);
            shaped.into_iter().skip(start).take(page_size).collect()
        }
        None => Vec::new(),
    };

    VisiblePage {
        records,
        total_pages,
        matched,
    }
}

/// Filter, sort and search without paginating.
pub fn shape<'a>(raw: &'a [UserRecord], view: &ViewState) -> Vec<&'a UserRecord> {
    let filtered: Vec<&UserRecord> = match &view.country_filter {
        CountryFilter::All => raw.iter().collect(),
        CountryFilter::Only(country) => raw
            .iter()
            .filter(|user| &user.country == country)
            .collect(),
    };

    let sorted = sort_by_creation_time(filtered, view.sort_mode);

    if view.search_text.is_empty() {
        return sorted;
    }
    sorted
        .into_iter()
        .filter(|user| user.matches_search(&view.search_text))
        .collect()
}

/// `ceil(count / page_size)`, at least 1.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1)).max(1)
}

/// Distinct countries in order of first appearance.
pub fn country_options(raw: &[UserRecord]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for user in raw {
        if !seen.contains(&user.country.as_str()) {
            seen.push(&user.country);
        }
    }
    seen
}

/// Stable sort on the parsed creation time.
///
/// Unparseable timestamps go after every valid one in both directions and
/// keep their input order among themselves.
fn sort_by_creation_time(records: Vec<&UserRecord>, mode: SortMode) -> Vec<&UserRecord> {
    let descending = match mode {
        SortMode::None => return records,
        SortMode::CreationTimeAscending => false,
        SortMode::CreationTimeDescending => true,
    };

    let mut keyed: Vec<(Option<DateTime<FixedOffset>>, &UserRecord)> = records
        .into_iter()
        .map(|user| (user.created_at_timestamp(), user))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) if descending => b.cmp(a),
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    keyed.into_iter().map(|(_, user)| user).collect()
}
