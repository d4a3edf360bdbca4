//! Terminal surface for the incremental search client.
//!
//! The surface is a thin lifecycle binder: keystrokes become raw query-change
//! events on the controller, settled outcomes are pumped into the store every
//! frame, and leaving the picker tears the controller down. Rendering reads
//! exclusively from the controller's store.

mod actions;
mod app;
mod input;
mod outcome;
mod render;
mod runtime;
mod theme;
mod toast;

pub use app::{App, UiConfig};
pub use outcome::SearchOutcome;
pub use runtime::run;
pub use theme::Theme;
pub use toast::StatusToast;
