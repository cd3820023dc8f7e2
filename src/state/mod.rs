//! State module for tracking a crawl run
//!
//! # Components
//!
//! - `RunState`: the lifecycle of one run (idle, running, and its terminal states)
//! - `RunTracker`: a shared, transition-checked cell holding the current `RunState`

mod run_state;

pub use run_state::RunState;

use crate::SpiderError;
use std::sync::{Arc, Mutex, PoisonError};

/// Shared handle on the state of one run
///
/// The worker advances it; any clone can read it.
#[derive(Debug, Clone)]
pub struct RunTracker {
    state: Arc<Mutex<RunState>>,
}

impl RunTracker {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(RunState::Idle)),
        }
    }

    pub fn current(&self) -> RunState {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Moves to `next` if the transition is allowed
    pub fn transition(&self, next: RunState) -> Result<(), SpiderError> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if !state.can_transition_to(next) {
            return Err(SpiderError::InvalidTransition {
                from: *state,
                to: next,
            });
        }

        tracing::debug!("Run state {} -> {}", *state, next);
        *state = next;
        Ok(())
    }
}

impl Default for RunTracker {
    fn default() -> Self {
        Self::new()
    }
}
