//! Run state machine and the report it produces.

use verdant_core::{AttemptOutcome, Caption, PostId, SearchQuery};

/// Where a run currently stands.
///
/// Transitions:
/// - `Attempting(n)` to `Succeeded` on success
/// - `Attempting(n)` to `Attempting(n + 1)` on failure while attempts remain
/// - `Attempting(max)` to `FallbackAttempting` on failure
/// - `FallbackAttempting` to `FallbackSucceeded` or `FallbackFailed`
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum RunState {
    /// Primary attempt `n`, counted from 1
    #[display("attempting({})", _0)]
    Attempting(u32),
    /// A primary attempt published
    #[display("succeeded")]
    Succeeded,
    /// Publishing with the fallback caption
    #[display("fallback_attempting")]
    FallbackAttempting,
    /// The fallback attempt published
    #[display("fallback_succeeded")]
    FallbackSucceeded,
    /// Nothing was published
    #[display("fallback_failed")]
    FallbackFailed,
}

impl RunState {
    /// Whether the run has ended.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Succeeded | Self::FallbackSucceeded | Self::FallbackFailed
        )
    }

    /// Whether a post was published.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded | Self::FallbackSucceeded)
    }
}

/// Which kind of attempt produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum AttemptKind {
    /// Primary attempt, counted from 1
    #[display("attempt {}", _0)]
    Primary(u32),
    /// The single fallback attempt
    #[display("fallback")]
    Fallback,
}

/// One pass through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptRecord {
    /// Primary or fallback
    pub kind: AttemptKind,
    /// Term searched for
    pub query: SearchQuery,
    /// How the attempt ended
    pub outcome: AttemptOutcome,
}

/// Everything that happened during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    transitions: Vec<RunState>,
    attempts: Vec<AttemptRecord>,
}

impl RunReport {
    pub(crate) fn new(initial: RunState) -> Self {
        Self {
            transitions: vec![initial],
            attempts: Vec::new(),
        }
    }

    pub(crate) fn enter(&mut self, state: RunState) {
        self.transitions.push(state);
    }

    pub(crate) fn record(&mut self, attempt: AttemptRecord) {
        self.attempts.push(attempt);
    }

    /// Every state visited, starting with `Attempting(1)`.
    pub fn transitions(&self) -> &[RunState] {
        &self.transitions
    }

    /// Every attempt, in order.
    pub fn attempts(&self) -> &[AttemptRecord] {
        &self.attempts
    }

    /// State the run ended in.
    pub fn final_state(&self) -> RunState {
        self.transitions
            .last()
            .copied()
            .unwrap_or(RunState::FallbackFailed)
    }

    /// Whether a post was published.
    pub fn is_success(&self) -> bool {
        self.final_state().is_success()
    }

    /// Number of primary attempts made.
    pub fn primary_attempts(&self) -> usize {
        self.attempts
            .iter()
            .filter(|a| matches!(a.kind, AttemptKind::Primary(_)))
            .count()
    }

    /// Caption and post id of the published post, if any.
    pub fn published(&self) -> Option<(&Caption, &PostId)> {
        self.attempts.iter().find_map(|a| match &a.outcome {
            AttemptOutcome::Success { caption, post_id } => Some((caption, post_id)),
            AttemptOutcome::Failure { .. } => None,
        })
    }
}
