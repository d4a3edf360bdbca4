use serde::Serialize;

use sayt_client::Suggestion;

/// What the surface hands back when the user leaves the picker.
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    /// False when the picker was dismissed with Escape.
    pub accepted: bool,
    /// Query text at the moment of exit.
    pub query: String,
    /// Highlighted entry, if any row was selected on accept.
    pub selection: Option<Suggestion>,
}
