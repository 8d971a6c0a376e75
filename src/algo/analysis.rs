use crate::algo::visits::breadth_first;
use crate::algo::{
    branch_lengths_with, diameter_with, shortest_path_with, BranchLengths, Diameter,
};
use crate::graph::Tree;
use crate::parser::{parse_token, Token};
use dsi_progress_logger::ProgressLog;
use std::fmt;
use thiserror::Error;

/// Errors in the vertices given as query arguments.
#[derive(Error, Debug, Clone, Hash, PartialEq, Eq)]
pub enum QueryError {
    #[error("{0:?} is not a vertex id")]
    NotAVertex(String),
    #[error("vertex {vertex} is out of range for {num_vertices} vertices")]
    OutOfRange { vertex: usize, num_vertices: usize },
}

/// Parses a vertex id given as a query argument, checking that it is in
/// `[0..num_vertices)`.
///
/// # Examples
/// ```
/// # use tree_analyzer::algo::{parse_vertex, QueryError};
/// assert_eq!(parse_vertex("3", 4), Ok(3));
/// assert!(matches!(parse_vertex("4", 4), Err(QueryError::OutOfRange { .. })));
/// assert!(matches!(parse_vertex("-", 4), Err(QueryError::NotAVertex(_))));
/// ```
pub fn parse_vertex(arg: &str, num_vertices: usize) -> Result<usize, QueryError> {
    match parse_token(arg) {
        Token::Value(vertex) => check_vertex(vertex, num_vertices),
        Token::LeafMarker | Token::Invalid => Err(QueryError::NotAVertex(arg.to_owned())),
    }
}

fn check_vertex(vertex: usize, num_vertices: usize) -> Result<usize, QueryError> {
    if vertex < num_vertices {
        Ok(vertex)
    } else {
        Err(QueryError::OutOfRange {
            vertex,
            num_vertices,
        })
    }
}

/// All structural information about a tree, plus a path between two given
/// vertices.
///
/// The [`Display`](fmt::Display) implementation prints one item per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub root: usize,
    pub num_vertices: usize,
    pub num_edges: usize,
    pub branches: BranchLengths,
    pub diameter: Diameter,
    /// The first vertex of the path query.
    pub first: usize,
    /// The second vertex of the path query.
    pub second: usize,
    /// The path from [`first`](Self::first) to [`second`](Self::second).
    pub path: Vec<usize>,
}

impl Analysis {
    /// Analyzes `tree`, computing a path from `first` to `second`.
    ///
    /// A single breadth-first visit is reused for all computations: a sweep
    /// from the root yields the branch lengths, a sweep from the farthest
    /// vertex yields the diameter, and a visit from `second` yields the path.
    ///
    /// # Examples
    /// ```
    /// # use tree_analyzer::algo::Analysis;
    /// # use tree_analyzer::graph::{Graph, Tree};
    /// # use dsi_progress_logger::no_logging;
    /// let graph = Graph::from_children([vec![1, 2], vec![], vec![3], vec![]]);
    /// let tree = Tree::from_graph(graph, no_logging![]).unwrap();
    /// let analysis = Analysis::compute(&tree, 1, 3, no_logging![]).unwrap();
    /// assert_eq!(analysis.diameter.length, 3);
    /// assert_eq!(analysis.path, vec![1, 0, 2, 3]);
    /// ```
    pub fn compute(
        tree: &Tree,
        first: usize,
        second: usize,
        pl: &mut impl ProgressLog,
    ) -> Result<Self, QueryError> {
        let num_vertices = tree.num_vertices();
        check_vertex(first, num_vertices)?;
        check_vertex(second, num_vertices)?;

        let mut visit = breadth_first::Seq::new(tree);
        let branches = branch_lengths_with(&mut visit, pl);
        let diameter = diameter_with(&mut visit, branches.farthest, pl);
        let path = shortest_path_with(&mut visit, first, second, pl);

        Ok(Self {
            root: tree.root(),
            num_vertices,
            num_edges: tree.num_edges(),
            branches,
            diameter,
            first,
            second,
            path,
        })
    }
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Root Vertex: {}", self.root)?;
        writeln!(f, "Vertices Count: {}", self.num_vertices)?;
        writeln!(f, "Edges Count: {}", self.num_edges)?;
        writeln!(f, "Length of Minimal Branch: {}", self.branches.min)?;
        writeln!(f, "Length of Maximal Branch: {}", self.branches.max)?;
        writeln!(f, "Diameter Length: {}", self.diameter.length)?;
        write!(f, "Shortest Path Between {} and {}:", self.first, self.second)?;
        for vertex in &self.path {
            write!(f, " {vertex}")?;
        }
        Ok(())
    }
}
