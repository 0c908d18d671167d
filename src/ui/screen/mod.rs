//! User list screen.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Loading / Ready screen with raw data and view state
//! - `intent.rs` - User actions and the fetch result
//! - `reducer.rs` - State transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::ScreenIntent;
pub use reducer::ScreenReducer;
pub use state::{Focus, ReadyScreen, ScreenState, ViewSettings};
