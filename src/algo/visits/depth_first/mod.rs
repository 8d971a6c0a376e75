//! Depth-first visits.
//!
//! Implementations must accept a callback function with argument
//! [`EventPred`]. The callback is called at the [start of a
//! visit](EventPred::Init), [every time a new node is
//! discovered](EventPred::Previsit), [every time a node is
//! revisited](EventPred::Revisit), and [every time the enumeration of the
//! successors of a node is completed](EventPred::Postvisit).

mod seq;
pub use seq::*;

/// Types of callback events generated during a depth-first visit
/// keeping track of parent nodes.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum EventPred {
    /// Initialization: this event should be used to set up state at the
    /// start of the visit.
    Init {
        /// The root of the visit.
        root: usize,
    },
    /// The node has been encountered for the first time: we are traversing a
    /// new tree arc, unless `curr` is equal to `root`.
    Previsit {
        /// The current node.
        curr: usize,
        /// The parent of `curr` in the visit tree (`root` for the root).
        pred: usize,
        /// The root of the visit.
        root: usize,
        /// The length of the visit path from `root` to `curr`.
        depth: usize,
    },
    /// The node has been encountered before: we are traversing a back arc, a
    /// forward arc, or a cross arc.
    Revisit {
        /// The current node.
        curr: usize,
        /// The node from which `curr` has been reached again.
        pred: usize,
        /// The root of the visit.
        root: usize,
    },
    /// The enumeration of the successors of the node has been completed: we
    /// are retreating from a tree arc, unless `curr` is equal to `root`.
    Postvisit {
        /// The current node.
        curr: usize,
        /// The parent of `curr` in the visit tree (`root` for the root).
        pred: usize,
        /// The root of the visit.
        root: usize,
        /// The length of the visit path from `root` to `curr`.
        depth: usize,
    },
}
