//! Diameter of a tree by double sweep.
//!
//! A breadth-first visit from any vertex of a tree ends on a vertex that is
//! an endpoint of a longest path; a second visit from that vertex finds the
//! other endpoint, and its distance is the diameter.

use crate::algo::visits::breadth_first;
use crate::graph::Tree;
use crate::utils::math::argmax;
use dsi_progress_logger::ProgressLog;

/// The diameter of a tree, and the endpoints of a longest path.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Diameter {
    /// The number of edges of a longest path.
    pub length: usize,
    /// The endpoints of a longest path.
    pub endpoints: (usize, usize),
}

/// Computes the diameter of `tree`, starting the first sweep from the root.
///
/// # Examples
/// ```
/// # use tree_analyzer::algo::diameter;
/// # use tree_analyzer::graph::{Graph, Tree};
/// # use dsi_progress_logger::no_logging;
/// let graph = Graph::from_children([vec![1, 2], vec![], vec![3], vec![]]);
/// let tree = Tree::from_graph(graph, no_logging![]).unwrap();
/// let diameter = diameter(&tree, no_logging![]);
/// assert_eq!(diameter.length, 3);
/// assert_eq!(diameter.endpoints, (3, 1));
/// ```
pub fn diameter(tree: &Tree, pl: &mut impl ProgressLog) -> Diameter {
    diameter_from(tree, tree.root(), pl)
}

/// Computes the diameter of `tree`, starting the first sweep from `start`.
///
/// The resulting length does not depend on `start`.
///
/// # Panics
///
/// If `start` is not a vertex of `tree`.
pub fn diameter_from(tree: &Tree, start: usize, pl: &mut impl ProgressLog) -> Diameter {
    let mut visit = breadth_first::Seq::new(tree);
    let endpoint = farthest_from(&mut visit, start, pl).0;
    diameter_with(&mut visit, endpoint, pl)
}

/// Completes the double sweep: `endpoint` must be the vertex found farthest
/// by a first sweep on the tree of `visit`.
pub fn diameter_with(
    visit: &mut breadth_first::Seq<'_, Tree>,
    endpoint: usize,
    pl: &mut impl ProgressLog,
) -> Diameter {
    let (other, length) = farthest_from(visit, endpoint, pl);
    Diameter {
        length,
        endpoints: (endpoint, other),
    }
}

/// Returns the vertex farthest from `source` and its distance.
fn farthest_from(
    visit: &mut breadth_first::Seq<'_, Tree>,
    source: usize,
    pl: &mut impl ProgressLog,
) -> (usize, usize) {
    pl.item_name("vertex");
    pl.expected_updates(Some(visit.graph().num_vertices()));
    pl.start(format!("Sweeping from vertex {source}..."));
    visit.visit(source, None, pl);
    pl.done();

    let farthest = argmax(visit.distances()).expect("the source is always reached");
    let distance = visit
        .distance(farthest)
        .expect("the farthest vertex has been reached");
    pl.info(format_args!(
        "Vertex {farthest} is at distance {distance} from vertex {source}"
    ));
    (farthest, distance)
}
