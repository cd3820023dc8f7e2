/// Run state definitions for tracking a crawl's lifecycle
///
/// A run moves `Idle -> Running -> {Completed | Cancelled | Failed}`.
/// There is no retry state: a failed fetch ends one branch, not the run.
use std::fmt;

/// Represents the current state of a crawl run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunState {
    /// Run created but the worker has not started yet
    Idle,

    /// Worker is traversing pages
    Running,

    // ===== Terminal States =====
    /// Traversal exhausted every in-scope branch
    Completed,

    /// A stop request was observed before traversal finished
    Cancelled,

    /// The worker died before it could report an outcome
    Failed,
}

impl RunState {
    /// Returns true if no further transitions are possible
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled | Self::Failed)
    }

    /// Returns true if the transition `self -> next` is allowed
    ///
    /// A run may fail from any non-terminal state.
    pub fn can_transition_to(&self, next: RunState) -> bool {
        match (self, next) {
            (Self::Idle, Self::Running) => true,
            (Self::Idle, Self::Failed) => true,
            (Self::Running, Self::Completed | Self::Cancelled | Self::Failed) => true,
            _ => false,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_terminal() {
        assert!(!RunState::Idle.is_terminal());
        assert!(!RunState::Running.is_terminal());

        assert!(RunState::Completed.is_terminal());
        assert!(RunState::Cancelled.is_terminal());
        assert!(RunState::Failed.is_terminal());
    }

    #[test]
    fn test_allowed_transitions() {
        assert!(RunState::Idle.can_transition_to(RunState::Running));
        assert!(RunState::Idle.can_transition_to(RunState::Failed));
        assert!(RunState::Running.can_transition_to(RunState::Completed));
        assert!(RunState::Running.can_transition_to(RunState::Cancelled));
        assert!(RunState::Running.can_transition_to(RunState::Failed));
    }

    #[test]
    fn test_rejected_transitions() {
        assert!(!RunState::Idle.can_transition_to(RunState::Completed));
        assert!(!RunState::Running.can_transition_to(RunState::Idle));
        assert!(!RunState::Running.can_transition_to(RunState::Running));

        for terminal in [RunState::Completed, RunState::Cancelled, RunState::Failed] {
            for next in [
                RunState::Idle,
                RunState::Running,
                RunState::Completed,
                RunState::Cancelled,
                RunState::Failed,
            ] {
                assert!(!terminal.can_transition_to(next));
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", RunState::Idle), "idle");
        assert_eq!(format!("{}", RunState::Cancelled), "cancelled");
    }
}
