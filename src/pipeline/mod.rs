//! Client-side data shaping for the user list.

mod shaping;
mod view_state;

pub use shaping::{compute_visible_page, country_options, shape, total_pages, VisiblePage};
pub use view_state::{cycle_page_size, CountryFilter, SortMode, ViewState};
