//! Shared application state.

use crate::history::AnalysisHistory;
use cyclesense_advisor::Advisor;
use cyclesense_core::{SystemHandle, SystemState};
use std::sync::{Arc, OnceLock};
use tracing::{info, warn};

/// State handed to every request handler. Cheap to clone.
#[derive(Clone, Debug)]
pub struct AppState {
    advisor: Arc<OnceLock<Advisor>>,
    status: SystemHandle,
    history: Arc<AnalysisHistory>,
}

impl AppState {
    /// State with no advisor loaded and an empty history.
    pub fn new() -> Self {
        Self {
            advisor: Arc::new(OnceLock::new()),
            status: SystemHandle::new("advisor"),
            history: Arc::new(AnalysisHistory::new()),
        }
    }

    /// Builds the fact graph, installs the advisor, and marks the system
    /// ready. Later calls keep the first advisor.
    pub fn load(&self) {
        if self.advisor.get().is_some() {
            warn!("Advisor already loaded; ignoring reload");
            return;
        }
        self.status.set_state(SystemState::Starting);
        let advisor = self.advisor.get_or_init(Advisor::load);
        info!(
            nodes = advisor.graph().node_count(),
            edges = advisor.graph().edge_count(),
            "Advisor loaded"
        );
        self.status.set_state(SystemState::Ready);
    }

    /// The advisor, once the system is ready.
    pub fn advisor(&self) -> Option<&Advisor> {
        if self.status.is_ready() {
            self.advisor.get()
        } else {
            None
        }
    }

    /// Readiness handle.
    pub fn status(&self) -> &SystemHandle {
        &self.status
    }

    /// Analysis history.
    pub fn history(&self) -> &AnalysisHistory {
        &self.history
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
