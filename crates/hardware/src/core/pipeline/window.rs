//! Three-slot instruction dispatch window.
//!
//! Instructions enter at the newest slot and move one slot toward dispatch
//! each time the oldest slot is empty. Slots hold program indices.

/// Dispatch window, oldest slot first in dispatch order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchWindow {
    /// Most recently fetched instruction.
    pub newest: Option<usize>,
    /// Instruction next in line for the oldest slot.
    pub middle: Option<usize>,
    /// Instruction being considered for dispatch.
    pub oldest: Option<usize>,
}

impl DispatchWindow {
    /// Creates an empty window.
    pub const fn new() -> Self {
        Self {
            newest: None,
            middle: None,
            oldest: None,
        }
    }

    /// Vacates the oldest slot after its instruction has been dispatched.
    pub const fn clear_oldest(&mut self) {
        self.oldest = None;
    }

    /// Shifts every slot one step toward dispatch and admits `next`.
    ///
    /// Only valid while the oldest slot is empty.
    pub const fn advance(&mut self, next: Option<usize>) {
        debug_assert!(self.oldest.is_none(), "oldest slot must drain before the window shifts");
        self.oldest = self.middle;
        self.middle = self.newest;
        self.newest = next;
    }
}
