use crate::mentions::MentionStore;

/// Ambient state threaded through every recursive render call.
///
/// Passed by value; entering a clause produces a new context for that
/// subtree only, so sibling clauses observe the same parent depth
/// independently of each other.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub mentions: &'a MentionStore,
    pub clause_depth: usize,
}

impl<'a> RenderContext<'a> {
    pub fn new(mentions: &'a MentionStore) -> Self {
        Self {
            mentions,
            clause_depth: 0,
        }
    }

    /// Context for the children of a clause element
    pub fn enter_clause(self) -> Self {
        Self {
            clause_depth: self.clause_depth + 1,
            ..self
        }
    }
}
