//! Model-View-Intent (MVI) primitives.
//!
//! Every piece of interactive view state in the app moves through the same
//! one-way loop:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: plain data describing what to draw
//! - **Intent**: an input adapter's request, or a timer/observer callback
//! - **Reducer**: pure `(State, Intent) -> State`
//!
//! Resources with a lifetime (timers, subscriptions) live beside the state,
//! never inside it.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
