use crate::graph::traits::RandomAccessGraph;
use dsi_progress_logger::ProgressLog;
use nonmax::NonMaxUsize;
use std::collections::VecDeque;

/// A sequential breadth-first visit recording distances and predecessors.
///
/// This is the classical textbook algorithm: a FIFO queue is seeded with the
/// source, and each dequeued node assigns a distance and a predecessor to its
/// successors that have not been reached yet.
///
/// Distances and predecessors are stored as `Option<NonMaxUsize>`, so that
/// unreached nodes (and the source, which has no predecessor) do not need a
/// sentinel value and do not require storage for the option variant tag.
///
/// Each call to [`visit`](Seq::visit) resets the state of every node before
/// starting, so the same visit can be reused for any number of sources.
///
/// # Examples
///
/// ```
/// use tree_analyzer::algo::visits::breadth_first;
/// use tree_analyzer::graph::Graph;
/// use dsi_progress_logger::no_logging;
///
/// let graph = Graph::from_children([vec![1, 2], vec![], vec![3], vec![]]);
/// let mut visit = breadth_first::Seq::new(&graph);
/// visit.visit(0, None, no_logging![]);
/// assert_eq!(visit.distance(3), Some(2));
/// assert_eq!(visit.pred(3), Some(2));
/// assert_eq!(visit.pred(0), None);
/// ```
pub struct Seq<'a, G: RandomAccessGraph> {
    graph: &'a G,
    distances: Box<[Option<NonMaxUsize>]>,
    preds: Box<[Option<NonMaxUsize>]>,
    queue: VecDeque<usize>,
}

#[inline(always)]
fn non_max(node: usize) -> NonMaxUsize {
    NonMaxUsize::new(node).expect("node index should never be usize::MAX")
}

impl<'a, G: RandomAccessGraph> Seq<'a, G> {
    /// Creates a new sequential visit.
    ///
    /// # Arguments
    /// * `graph`: an immutable reference to the graph to visit.
    pub fn new(graph: &'a G) -> Self {
        let num_nodes = graph.num_nodes();
        Self {
            graph,
            distances: vec![None; num_nodes].into_boxed_slice(),
            preds: vec![None; num_nodes].into_boxed_slice(),
            queue: VecDeque::new(),
        }
    }

    /// Visits the graph from `source`.
    ///
    /// If `destination` is not [`None`], the visit stops as soon as the
    /// destination is extracted from the queue: at that point the distance
    /// and the predecessor of every node on a shortest path from the source
    /// to the destination are known, whereas some other nodes might be left
    /// unreached.
    ///
    /// # Arguments
    /// * `source`: the node to start the visit from.
    /// * `destination`: an optional target of the visit.
    /// * `pl`: a progress logger.
    pub fn visit(
        &mut self,
        source: usize,
        destination: Option<usize>,
        pl: &mut impl ProgressLog,
    ) {
        self.reset();
        let graph = self.graph;

        self.distances[source] = Some(non_max(0));
        self.queue.push_back(source);

        while let Some(node) = self.queue.pop_front() {
            if Some(node) == destination {
                break;
            }
            let distance = self.distances[node].map_or(0, usize::from) + 1;
            for succ in graph.successors(node) {
                if self.distances[succ].is_none() {
                    self.distances[succ] = Some(non_max(distance));
                    self.preds[succ] = Some(non_max(node));
                    self.queue.push_back(succ);
                }
            }
            pl.light_update();
        }

        self.queue.clear();
    }

    /// Returns the distance of `node` from the source of the last visit, or
    /// [`None`] if the node was not reached.
    pub fn distance(&self, node: usize) -> Option<usize> {
        self.distances[node].map(usize::from)
    }

    /// Returns the predecessor of `node` on a shortest path from the source
    /// of the last visit, or [`None`] if the node is the source or was not
    /// reached.
    pub fn pred(&self, node: usize) -> Option<usize> {
        self.preds[node].map(usize::from)
    }

    /// Returns the distances of all nodes from the source of the last visit.
    pub fn distances(&self) -> &[Option<NonMaxUsize>] {
        &self.distances
    }

    /// Returns an iterator following predecessors from `node` back to the
    /// source of the last visit.
    ///
    /// The iterator starts with `node` itself.
    pub fn preds_from(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(Some(node), |&curr| self.pred(curr))
    }

    /// Returns the graph this visit runs on.
    pub fn graph(&self) -> &'a G {
        self.graph
    }

    /// Resets the visit status, marking all nodes as unreached.
    pub fn reset(&mut self) {
        self.queue.clear();
        self.distances.fill(None);
        self.preds.fill(None);
    }
}
