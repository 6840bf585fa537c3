//! Readiness tracking for the advisor system.
//!
//! The HTTP layer refuses analysis until the fact graph has been built and
//! the advisor installed. [`SystemHandle`] carries that lifecycle so request
//! handlers and health checks read one shared value.
//!
//! ```rust
//! use cyclesense_core::status::{SystemHandle, SystemState};
//!
//! let handle = SystemHandle::new("advisor");
//! assert_eq!(handle.state(), SystemState::Stopped);
//!
//! handle.set_state(SystemState::Starting);
//! handle.set_state(SystemState::Ready);
//! assert!(handle.is_ready());
//! ```

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::watch;

// ============================================================================
// SystemState
// ============================================================================

/// Lifecycle state of the advisor system.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SystemState {
    /// Nothing has been loaded yet.
    Stopped,
    /// The fact graph is being built.
    Starting,
    /// Analyses can be served.
    Ready,
    /// Shutdown has begun; no new analyses should start.
    Stopping,
}

impl SystemState {
    /// Returns `true` if analyses can be served.
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    /// Label used by health checks: `loaded` once ready, `loading` otherwise.
    pub fn load_label(&self) -> &'static str {
        if self.is_ready() { "loaded" } else { "loading" }
    }
}

impl fmt::Display for SystemState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stopped => write!(f, "stopped"),
            Self::Starting => write!(f, "starting"),
            Self::Ready => write!(f, "ready"),
            Self::Stopping => write!(f, "stopping"),
        }
    }
}

// ============================================================================
// SystemHandle
// ============================================================================

/// Shared handle for observing and updating the system state.
///
/// Clones share the same underlying watch channel.
#[derive(Clone)]
pub struct SystemHandle {
    inner: Arc<SystemHandleInner>,
}

struct SystemHandleInner {
    name: String,
    tx: watch::Sender<SystemState>,
    created_at: Instant,
}

impl SystemHandle {
    /// Create a handle in the [`SystemState::Stopped`] state.
    pub fn new(name: impl Into<String>) -> Self {
        let (tx, _rx) = watch::channel(SystemState::Stopped);
        Self {
            inner: Arc::new(SystemHandleInner {
                name: name.into(),
                tx,
                created_at: Instant::now(),
            }),
        }
    }

    /// Name given at construction.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Current state.
    pub fn state(&self) -> SystemState {
        *self.inner.tx.borrow()
    }

    /// Shorthand for `self.state().is_ready()`.
    pub fn is_ready(&self) -> bool {
        self.state().is_ready()
    }

    /// Replace the current state, notifying any subscribers.
    pub fn set_state(&self, state: SystemState) {
        log::info!("System '{}' -> {state}", self.inner.name);
        self.inner.tx.send_replace(state);
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<SystemState> {
        self.inner.tx.subscribe()
    }

    /// Time since the handle was created.
    pub fn uptime(&self) -> Duration {
        self.inner.created_at.elapsed()
    }
}

impl fmt::Debug for SystemHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemHandle")
            .field("name", &self.inner.name)
            .field("state", &self.state())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
