use std::collections::BTreeSet;

/// Tracks which panes of a page have finished animating
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionTracker {
    total: usize,
    completed: BTreeSet<usize>,
}

impl CompletionTracker {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            completed: BTreeSet::new(),
        }
    }

    /// Marks a pane finished. Marking the same pane twice has no effect.
    /// Returns `true` if the pane was newly marked.
    pub fn mark_complete(&mut self, index: usize) -> bool {
        self.completed.insert(index)
    }

    pub fn is_complete(&self) -> bool {
        self.completed.len() >= self.total
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    pub fn total(&self) -> usize {
        self.total
    }
}
