use super::{Graph, Tree};
use std::iter::{Chain, Copied};

/// A graph providing random access to the successors of its nodes.
///
/// Nodes are identified by integers in `[0..num_nodes())`.
pub trait RandomAccessGraph {
    /// The iterator over the successors of a node.
    type Successors<'a>: IntoIterator<Item = usize>
    where
        Self: 'a;

    /// Returns the number of nodes of the graph.
    fn num_nodes(&self) -> usize;

    /// Returns the successors of `node`.
    fn successors(&self, node: usize) -> Self::Successors<'_>;

    /// Returns the number of successors of `node`.
    fn outdegree(&self, node: usize) -> usize {
        self.successors(node).into_iter().count()
    }
}

/// The successors of a vertex of a [`Graph`] are its children.
impl RandomAccessGraph for Graph {
    type Successors<'a> = Copied<std::slice::Iter<'a, usize>>;

    fn num_nodes(&self) -> usize {
        self.num_vertices()
    }

    fn successors(&self, node: usize) -> Self::Successors<'_> {
        self.children(node).iter().copied()
    }

    fn outdegree(&self, node: usize) -> usize {
        self.children(node).len()
    }
}

/// The successors of a vertex of a [`Tree`] are its children followed by
/// its parent, if any.
impl RandomAccessGraph for Tree {
    type Successors<'a> =
        Chain<Copied<std::slice::Iter<'a, usize>>, std::option::IntoIter<usize>>;

    fn num_nodes(&self) -> usize {
        self.num_vertices()
    }

    fn successors(&self, node: usize) -> Self::Successors<'_> {
        let vertex = self.vertex(node);
        vertex
            .children()
            .iter()
            .copied()
            .chain(vertex.parent())
    }

    fn outdegree(&self, node: usize) -> usize {
        let vertex = self.vertex(node);
        vertex.children().len() + usize::from(vertex.parent().is_some())
    }
}
