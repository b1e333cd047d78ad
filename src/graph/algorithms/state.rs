//! Visit states and edge classes shared by the traversal algorithms.

use strum::{EnumCount, EnumIter};

/// The three-colour visitation state of a vertex during a depth-first search.
///
/// Every vertex moves `Unvisited -> InProgress -> Done` exactly once per traversal.
/// A vertex is `InProgress` while it is on the active path from the current root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount)]
pub enum VisitState {
    /// Not reached yet
    Unvisited,
    /// Entered but not all neighbours explored
    InProgress,
    /// Fully explored
    Done,
}

/// The class of an edge relative to a depth-first forest.
///
/// Undirected traversals only produce [`EdgeKind::Tree`] and [`EdgeKind::Back`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount)]
pub enum EdgeKind {
    /// Leads to a vertex reached for the first time
    Tree,
    /// Leads to an ancestor still on the active path, self-loops included
    Back,
    /// Leads to an already finished descendant
    Forward,
    /// Leads to a finished vertex that is neither ancestor nor descendant
    Cross,
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_edge_kind_indices_are_dense() {
        for (position, kind) in EdgeKind::iter().enumerate() {
            assert_eq!(kind as usize, position);
        }
        assert_eq!(EdgeKind::COUNT, 4);
    }

    #[test]
    fn test_visit_state_order() {
        let states: Vec<VisitState> = VisitState::iter().collect();
        assert_eq!(
            states,
            vec![VisitState::Unvisited, VisitState::InProgress, VisitState::Done]
        );
        assert_eq!(VisitState::COUNT, 3);
    }
}
