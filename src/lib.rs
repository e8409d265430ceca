//! Interactive layer of a single-page developer portfolio.
//!
//! The host-testable modules hold every rule and state machine the page runs:
//! typing animation, reveal staggering, stat counters, navigation, project
//! filtering, the contact hand-off and the toast slot. `frontend` (wasm32 only)
//! renders the page with Yew and drives those state machines from browser
//! timers and listeners.

pub mod config;
pub mod contact;
pub mod filter;
pub mod navigation;
pub mod reveal;
pub mod stats;
pub mod timing;
pub mod toast;
pub mod typing;

#[cfg(target_arch = "wasm32")]
pub mod frontend;
