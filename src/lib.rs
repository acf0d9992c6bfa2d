//! sheaf-palette: a terminal command palette for SheafUI components
//!
//! Browse the SheafUI component catalog, filter it as you type, and copy a
//! component's Blade snippet, tag, or install command to the clipboard (or
//! open its documentation in the browser).
//!
//! State management follows a dispatch loop: components are pure functions
//! of state, all mutations go through actions and a single reducer, and
//! side effects (clipboard, browser) run as async tasks whose completions
//! re-enter the loop as actions.

pub mod action;
pub mod catalog;
pub mod components;
pub mod effect;
pub mod event;
pub mod host;
pub mod reducer;
pub mod runtime;
pub mod state;
pub mod testing;

pub use action::Action;
pub use catalog::{filter, ComponentRecord, CATALOG};
pub use effect::{DispatchResult, Effect};
pub use event::EventKind;
pub use reducer::reduce;
pub use runtime::{spawn_event_poller, EffectContext, PollerConfig, Runtime, TaskManager};
pub use state::{AppState, StatusMessage};
