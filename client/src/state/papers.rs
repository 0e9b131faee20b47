#[cfg(test)]
#[path = "papers_test.rs"]
mod papers_test;

use std::collections::BTreeSet;

/// Expanded rows of the papers accordion, keyed by list index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpandedPapers {
    rows: BTreeSet<usize>,
}

impl ExpandedPapers {
    /// Flip the expanded state of row `index`.
    pub fn toggle(&mut self, index: usize) {
        if !self.rows.remove(&index) {
            self.rows.insert(index);
        }
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.rows.contains(&index)
    }
}
