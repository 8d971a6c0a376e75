use crate::algo::visits::depth_first::{self, EventPred};
use crate::graph::Graph;
use dsi_progress_logger::ProgressLog;
use std::convert::Infallible;
use thiserror::Error;

/// The reasons for which a graph is not a tree.
#[derive(Error, Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum TreeError {
    #[error("the graph has no vertices")]
    Empty,
    #[error("the graph has {num_edges} edges, but a tree with {num_vertices} vertices has {} edges", .num_vertices - 1)]
    EdgeCount {
        num_edges: usize,
        num_vertices: usize,
    },
    #[error("every vertex has a parent")]
    NoRoot,
    #[error("vertices {first} and {second} both have no parent")]
    MultipleRoots { first: usize, second: usize },
    #[error("vertex {vertex} has {num_parents} parents")]
    MultipleParents { vertex: usize, num_parents: usize },
    #[error("only {reached} of {num_vertices} vertices are reachable from root {root}")]
    Unreachable {
        root: usize,
        reached: usize,
        num_vertices: usize,
    },
}

/// Checks whether a graph is a tree, returning its root.
///
/// The check is performed in three steps:
/// 1. the number of edges must be the number of vertices minus one;
/// 2. exactly one vertex (the root) must have no parent, and all other
///    vertices must have exactly one parent;
/// 3. all vertices must be reachable from the root following children.
///
/// The root is the vertex without parents with the smallest id; it is not
/// necessarily vertex 0.
///
/// # Examples
/// ```
/// # use tree_analyzer::algo::{check_tree, TreeError};
/// # use tree_analyzer::graph::Graph;
/// # use dsi_progress_logger::no_logging;
/// let graph = Graph::from_children([vec![], vec![0, 2], vec![]]);
/// assert_eq!(check_tree(&graph, no_logging![]), Ok(1));
///
/// let graph = Graph::from_children([vec![1], vec![], vec![]]);
/// assert!(matches!(
///     check_tree(&graph, no_logging![]),
///     Err(TreeError::EdgeCount { .. })
/// ));
/// ```
pub fn check_tree(graph: &Graph, pl: &mut impl ProgressLog) -> Result<usize, TreeError> {
    let num_vertices = graph.num_vertices();
    if num_vertices == 0 {
        return Err(TreeError::Empty);
    }

    if graph.num_edges() != num_vertices - 1 {
        return Err(TreeError::EdgeCount {
            num_edges: graph.num_edges(),
            num_vertices,
        });
    }

    let root = find_root(graph)?;

    pl.item_name("vertex");
    pl.expected_updates(Some(num_vertices));
    pl.start(format!("Checking reachability from root {root}..."));

    let mut visit = depth_first::Seq::new(graph);
    let mut reached = 0;
    visit
        .visit(
            root,
            |event| {
                if let EventPred::Previsit { .. } = event {
                    reached += 1;
                }
                Ok::<_, Infallible>(())
            },
            pl,
        )
        .unwrap_or_else(|never| match never {});

    pl.done();

    if reached != num_vertices {
        return Err(TreeError::Unreachable {
            root,
            reached,
            num_vertices,
        });
    }

    Ok(root)
}

/// Returns the unique vertex without parents, provided that all other
/// vertices have exactly one parent.
fn find_root(graph: &Graph) -> Result<usize, TreeError> {
    let mut root = None;
    for (vertex, v) in graph.vertices().iter().enumerate() {
        match (v.num_parents(), root) {
            (0, None) => root = Some(vertex),
            (0, Some(first)) => {
                return Err(TreeError::MultipleRoots {
                    first,
                    second: vertex,
                })
            }
            (1, _) => {}
            (num_parents, _) => {
                return Err(TreeError::MultipleParents {
                    vertex,
                    num_parents,
                })
            }
        }
    }
    root.ok_or(TreeError::NoRoot)
}
