//! Breadth-first visits.
//!
//! Unlike depth-first visits, the breadth-first visit records its results
//! (distances and predecessors) in per-node arrays that can be queried after
//! the visit, as all queries on trees are built on single-source distances.

mod seq;
pub use seq::*;
