//! Model-View-Intent primitives for the screen.
//!
//! ```text
//! key / mouse / fetch ──→ Intent ──→ Reducer ──→ State ──→ draw
//!        ↑                                                  │
//!        └──────────────────────────────────────────────────┘
//! ```
//!
//! The screen state is the only mutable thing the UI owns. Everything shown
//! on screen is recomputed from it on each frame.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
