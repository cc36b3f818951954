//! # Query Parameter Synchronisation
//!
//! Keeps the form and the navigation query string in step without feedback
//! loops.
//!
//! # State Machine
//!
//! ```text
//!            params changed
//!   Idle ─────────────────────→ ApplyingInbound
//!    ↑                                │
//!    └──────── model rebuilt ─────────┘
//! ```
//!
//! Outbound writes are only issued in `Idle`. A model update made while
//! applying inbound parameters is therefore never echoed back to the
//! navigator.

use crate::application::form::model::FormModel;
use crate::application::form::params_codec;
use crate::infrastructure::navigation::Navigator;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Synchronisation state.
///
/// # Examples
///
/// ```
/// use website_quote::application::form::sync::SyncState;
///
/// let state = SyncState::Idle;
/// assert!(state.can_publish());
/// assert!(state.can_transition_to(SyncState::ApplyingInbound));
/// assert!(!SyncState::ApplyingInbound.can_publish());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SyncState {
    /// Form edits are written to the navigator.
    #[default]
    Idle,
    /// The form is being rebuilt from parameters; writes are suppressed.
    ApplyingInbound,
}

impl SyncState {
    /// Returns true if outbound writes are allowed.
    #[inline]
    #[must_use]
    pub const fn can_publish(self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if moving to `next` is a valid transition.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Idle, Self::ApplyingInbound) | (Self::ApplyingInbound, Self::Idle)
        )
    }
}

impl fmt::Display for SyncState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "IDLE"),
            Self::ApplyingInbound => write!(f, "APPLYING_INBOUND"),
        }
    }
}

/// Two-way binding between a form and a [`Navigator`].
#[derive(Debug, Clone)]
pub struct QuerySync {
    navigator: Arc<dyn Navigator>,
    state: SyncState,
}

impl QuerySync {
    /// Creates an idle binding.
    #[must_use]
    pub fn new(navigator: Arc<dyn Navigator>) -> Self {
        Self {
            navigator,
            state: SyncState::Idle,
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> SyncState {
        self.state
    }

    /// The bound navigator.
    #[must_use]
    pub fn navigator(&self) -> &Arc<dyn Navigator> {
        &self.navigator
    }

    /// Moves to `next`, returning false if the transition is not allowed.
    pub fn transition(&mut self, next: SyncState) -> bool {
        if !self.state.can_transition_to(next) {
            debug!(from = %self.state, to = %next, "ignored sync transition");
            return false;
        }
        debug!(from = %self.state, to = %next, "sync transition");
        self.state = next;
        true
    }

    /// Writes `model` to the navigator when idle.
    ///
    /// Returns true if a write happened.
    pub fn publish(&self, model: &FormModel) -> bool {
        if !self.state.can_publish() {
            return false;
        }
        self.navigator.replace_params(&params_codec::encode(model));
        true
    }
}
