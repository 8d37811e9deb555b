//! Toggle-based tracking of the candidates a player has picked.

use crate::CandidateId;

/// Outcome of a toggle that changed the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    /// The candidate was added and should be highlighted.
    Added(CandidateId),
    /// The candidate was removed and its highlight cleared.
    Removed(CandidateId),
}

impl SelectionChange {
    /// Candidate affected by the change.
    #[must_use]
    pub const fn candidate(self) -> CandidateId {
        match self {
            Self::Added(id) | Self::Removed(id) => id,
        }
    }
}

/// Candidates picked so far, in the order they were picked.
///
/// The set never holds more than its capacity and never holds the same
/// candidate twice. Toggling a picked candidate removes exactly that one.
///
/// # Examples
/// ```
/// use pinpoint_core::{CandidateId, SelectionChange, SelectionSet};
///
/// let mut selection = SelectionSet::new(1);
/// let first = CandidateId::new(0);
/// assert_eq!(selection.toggle(first), Some(SelectionChange::Added(first)));
/// assert_eq!(selection.toggle(CandidateId::new(1)), None);
/// assert!(selection.is_complete());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSet {
    chosen: Vec<CandidateId>,
    capacity: usize,
}

impl SelectionSet {
    /// Create an empty selection that accepts up to `capacity` candidates.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            chosen: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Add `id` if absent, remove it if present.
    ///
    /// Adding beyond capacity is ignored and returns `None`.
    pub fn toggle(&mut self, id: CandidateId) -> Option<SelectionChange> {
        if let Some(position) = self.chosen.iter().position(|chosen| *chosen == id) {
            self.chosen.remove(position);
            return Some(SelectionChange::Removed(id));
        }
        if self.chosen.len() >= self.capacity {
            return None;
        }
        self.chosen.push(id);
        Some(SelectionChange::Added(id))
    }

    /// Report whether `id` is currently picked.
    #[must_use]
    pub fn contains(&self, id: CandidateId) -> bool {
        self.chosen.contains(&id)
    }

    /// Picked candidates in selection order.
    #[must_use]
    pub fn chosen(&self) -> &[CandidateId] {
        &self.chosen
    }

    /// Number of picked candidates.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.chosen.len()
    }

    /// Maximum number of picks.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Report whether the selection has reached capacity.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.chosen.len() == self.capacity
    }
}
