use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::runtime::Runtime;
use tracing::debug;

use sayt_client::{HttpExecutor, SearchController};
use sayt_tui::{App, SearchOutcome, StatusToast, UiConfig};

use crate::settings::ResolvedConfig;

/// Wires the provider, controller, and terminal surface together.
pub struct SearchWorkflow {
    runtime: Runtime,
    app: App,
}

impl SearchWorkflow {
    pub fn from_config(settings: ResolvedConfig) -> Result<Self> {
        let runtime = Runtime::new().context("failed to start async runtime")?;
        debug!(provider = %settings.provider.label, "starting search workflow");

        let executor =
            HttpExecutor::new(settings.provider.clone()).context("failed to build HTTP executor")?;
        let toast = Arc::new(StatusToast::default());
        let controller = SearchController::new(Arc::new(executor), toast.clone());

        let ui = UiConfig {
            input_title: settings.input_title,
            provider_label: settings.provider.label,
            initial_query: settings.initial_query,
        };

        Ok(Self {
            runtime,
            app: App::new(controller, toast, ui),
        })
    }

    /// Run the picker to completion. Request tasks land on the runtime's
    /// workers while this thread stays inside the blocking event loop.
    pub fn run(self) -> Result<SearchOutcome> {
        let Self { runtime, app } = self;
        let outcome = {
            let _guard = runtime.enter();
            sayt_tui::run(app)
        };
        // The runtime is dropped only after leaving the entered context;
        // any still-spawned task is shut down with it.
        drop(runtime);
        outcome
    }
}
