//! Drag-activity state machine for a single drop region.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Whether a drag is currently hovering the region.
pub enum DragState {
    /// No drag in progress over the region.
    #[default]
    Idle,
    /// A drag carrying data is over the region.
    Active,
}

impl DragState {
    /// Returns `true` for [`DragState::Active`].
    pub fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Gesture input consumed by [`DragStateMachine::apply`].
pub enum DragInput {
    /// The drag entered the region; `has_items` is whether the transfer carries any item.
    Enter {
        /// Whether the transfer payload reports at least one item.
        has_items: bool,
    },
    /// The drag moved over the region.
    Over,
    /// The drag left the region.
    Leave,
    /// The drag was released over the region.
    Drop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Two-state machine tracking drag activity.
///
/// The machine has no terminal state; a region can go through any number of drags.
pub struct DragStateMachine {
    state: DragState,
}

impl DragStateMachine {
    /// Creates a machine in [`DragState::Idle`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Shorthand for `self.state().is_active()`.
    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// Applies `input` and returns the new state when it differs from the previous one.
    ///
    /// `None` means the input was absorbed without a transition, so observers must not be
    /// notified.
    pub fn apply(&mut self, input: DragInput) -> Option<DragState> {
        let next = match (self.state, input) {
            (DragState::Idle, DragInput::Enter { has_items: true }) => DragState::Active,
            (DragState::Idle, DragInput::Over) => DragState::Active,
            (DragState::Active, DragInput::Leave | DragInput::Drop) => DragState::Idle,
            (current, _) => current,
        };
        if next == self.state {
            return None;
        }
        self.state = next;
        Some(next)
    }

    /// Forces the machine back to idle without reporting a transition.
    pub fn reset(&mut self) {
        self.state = DragState::Idle;
    }
}
