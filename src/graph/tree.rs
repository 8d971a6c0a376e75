use super::{Graph, Vertex};
use crate::algo::visits::depth_first::{self, EventPred};
use crate::algo::{check_tree, TreeError};
use dsi_progress_logger::ProgressLog;
use std::convert::Infallible;

/// A rooted tree whose vertices know both their children and their parent.
///
/// The only way to obtain a tree is [`Tree::from_graph`], which validates a
/// [`Graph`] and then links every child to its parent, making the adjacency
/// symmetric: as a
/// [`RandomAccessGraph`](crate::graph::traits::RandomAccessGraph), the
/// successors of a vertex are its children followed by its parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    graph: Graph,
    root: usize,
}

impl Tree {
    /// Validates `graph` with [`check_tree`] and turns it into a tree.
    ///
    /// # Examples
    /// ```
    /// # use tree_analyzer::graph::{Graph, Tree};
    /// # use dsi_progress_logger::no_logging;
    /// let graph = Graph::from_children([vec![1, 2], vec![], vec![3], vec![]]);
    /// let tree = Tree::from_graph(graph, no_logging![]).unwrap();
    /// assert_eq!(tree.root(), 0);
    /// assert_eq!(tree.parent(3), Some(2));
    /// assert_eq!(tree.parent(0), None);
    /// ```
    pub fn from_graph(graph: Graph, pl: &mut impl ProgressLog) -> Result<Self, TreeError> {
        let root = check_tree(&graph, pl)?;
        let mut tree = Self { graph, root };
        tree.link_parents(pl);
        Ok(tree)
    }

    /// Walks the tree from the root, storing in each child a reference to
    /// its parent.
    fn link_parents(&mut self, pl: &mut impl ProgressLog) {
        let num_vertices = self.graph.num_vertices();
        let mut parents = vec![None; num_vertices];

        pl.item_name("vertex");
        pl.expected_updates(Some(num_vertices));
        pl.start("Linking children to parents...");

        {
            let mut visit = depth_first::Seq::new(&self.graph);
            visit
                .visit(
                    self.root,
                    |event| {
                        if let EventPred::Previsit { curr, pred, .. } = event {
                            if curr != pred {
                                parents[curr] = Some(pred);
                            }
                        }
                        Ok::<_, Infallible>(())
                    },
                    pl,
                )
                .unwrap_or_else(|never| match never {});
        }

        pl.done();

        for (vertex, parent) in self.graph.vertices.iter_mut().zip(parents) {
            vertex.parent = parent;
        }
    }

    /// Returns the root, that is, the only vertex without a parent.
    pub fn root(&self) -> usize {
        self.root
    }

    pub fn num_vertices(&self) -> usize {
        self.graph.num_vertices()
    }

    /// Returns the number of edges, which is always the number of vertices
    /// minus one.
    pub fn num_edges(&self) -> usize {
        self.graph.num_edges()
    }

    pub fn vertex(&self, vertex: usize) -> &Vertex {
        self.graph.vertex(vertex)
    }

    pub fn children(&self, vertex: usize) -> &[usize] {
        self.graph.children(vertex)
    }

    pub fn parent(&self, vertex: usize) -> Option<usize> {
        self.graph.vertex(vertex).parent()
    }

    /// Returns true if `vertex` has no children.
    ///
    /// Note that in a single-vertex tree the root is a leaf.
    pub fn is_leaf(&self, vertex: usize) -> bool {
        self.graph.vertex(vertex).is_leaf()
    }
}
