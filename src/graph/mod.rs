//! Graphs as read from a description, and validated trees.
//!
//! Vertices are stored in a dense arena indexed by vertex id. A [`Graph`]
//! only knows the children of each vertex; a [`Tree`] is obtained from a
//! graph that passed [validation](crate::algo::check_tree), and additionally
//! links every non-root vertex to its parent.

mod tree;
pub use tree::*;

/// Traits for interacting with graphs.
pub mod traits;

use std::collections::TryReserveError;

/// A vertex of a [`Graph`] or of a [`Tree`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vertex {
    children: Box<[usize]>,
    /// Set only in a [`Tree`].
    parent: Option<usize>,
    /// The number of arcs entering this vertex.
    num_parents: usize,
}

impl Vertex {
    /// Returns the children of this vertex, in input order.
    pub fn children(&self) -> &[usize] {
        &self.children
    }

    /// Returns the parent of this vertex.
    ///
    /// This is always [`None`] for vertices of a [`Graph`], and for the root
    /// of a [`Tree`].
    pub fn parent(&self) -> Option<usize> {
        self.parent
    }

    /// Returns the number of vertices listing this vertex as a child.
    pub fn num_parents(&self) -> usize {
        self.num_parents
    }

    /// Returns true if this vertex has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// A directed graph given by the children lists of its vertices.
///
/// The number of vertices is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    vertices: Box<[Vertex]>,
    num_edges: usize,
}

impl Graph {
    /// Creates a graph with `num_vertices` vertices and no edges.
    pub fn with_num_vertices(num_vertices: usize) -> Result<Self, TryReserveError> {
        let mut vertices = Vec::new();
        vertices.try_reserve_exact(num_vertices)?;
        vertices.resize_with(num_vertices, Vertex::default);
        Ok(Self {
            vertices: vertices.into_boxed_slice(),
            num_edges: 0,
        })
    }

    /// Creates a graph from the children lists of its vertices.
    ///
    /// # Panics
    ///
    /// If a child id is not smaller than the number of lists.
    ///
    /// # Examples
    /// ```
    /// # use tree_analyzer::graph::Graph;
    /// let graph = Graph::from_children([vec![1, 2], vec![], vec![3], vec![]]);
    /// assert_eq!(graph.num_edges(), 3);
    /// assert_eq!(graph.vertex(3).num_parents(), 1);
    /// ```
    pub fn from_children<I, C>(lists: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Box<[usize]>>,
    {
        let lists: Vec<Box<[usize]>> = lists.into_iter().map(Into::into).collect();
        let mut graph = Self {
            vertices: vec![Vertex::default(); lists.len()].into_boxed_slice(),
            num_edges: 0,
        };
        for (vertex, children) in lists.into_iter().enumerate() {
            graph.set_children(vertex, children);
        }
        graph
    }

    /// Sets the children of `vertex`, updating the number of parents of each
    /// child and the number of edges.
    ///
    /// This method must be called at most once per vertex.
    ///
    /// # Panics
    ///
    /// If `vertex` or one of the children is out of range.
    pub fn set_children(&mut self, vertex: usize, children: Box<[usize]>) {
        debug_assert!(self.vertices[vertex].children.is_empty());
        for &child in children.iter() {
            self.vertices[child].num_parents += 1;
        }
        self.num_edges += children.len();
        self.vertices[vertex].children = children;
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges, that is, the sum of the lengths of all
    /// children lists (repetitions included).
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    pub fn vertex(&self, vertex: usize) -> &Vertex {
        &self.vertices[vertex]
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn children(&self, vertex: usize) -> &[usize] {
        &self.vertices[vertex].children
    }
}
