use super::EventPred;
use crate::graph::traits::RandomAccessGraph;
use dsi_progress_logger::ProgressLog;
use sux::bits::BitVec;

type SuccIter<'a, G> = <<G as RandomAccessGraph>::Successors<'a> as IntoIterator>::IntoIter;

/// A sequential depth-first visit keeping track of predecessors.
///
/// This is an iterative implementation that does not need a large stack
/// size: the visit path is kept in an explicit stack of pairs made of a node
/// and the iterator on its successors, so arbitrarily deep graphs (e.g.,
/// long paths) can be visited.
///
/// The visit uses one bit per node to remember known nodes. Nodes visited
/// by a call to [`visit`](Seq::visit) remain known until
/// [`reset`](Seq::reset) is called.
///
/// The progress logger will be [invoked](ProgressLog::light_update) after
/// each [postvisit event](EventPred::Postvisit).
///
/// # Examples
///
/// Let us count the nodes reachable from a root:
///
/// ```
/// use std::convert::Infallible;
/// use tree_analyzer::algo::visits::depth_first::*;
/// use tree_analyzer::graph::Graph;
/// use dsi_progress_logger::no_logging;
///
/// let graph = Graph::from_children([vec![1], vec![2], vec![], vec![0]]);
/// let mut visit = Seq::new(&graph);
/// let mut reached = 0;
/// visit
///     .visit(
///         0,
///         |event| {
///             if let EventPred::Previsit { .. } = event {
///                 reached += 1;
///             }
///             Ok::<_, Infallible>(())
///         },
///         no_logging![],
///     )
///     .unwrap();
/// assert_eq!(reached, 3);
/// ```
pub struct Seq<'a, G: RandomAccessGraph> {
    graph: &'a G,
    visited: BitVec,
    stack: Vec<(usize, SuccIter<'a, G>)>,
}

impl<'a, G: RandomAccessGraph> Seq<'a, G> {
    /// Creates a new sequential visit.
    ///
    /// # Arguments
    /// * `graph`: an immutable reference to the graph to visit.
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            visited: BitVec::new(graph.num_nodes()),
            stack: Vec::new(),
        }
    }

    /// Visits the graph from the specified node.
    ///
    /// If `root` has already been visited, the callback is not called.
    /// Otherwise, the visit stops at the first error returned by the
    /// callback, and the error is returned; in this case the nodes on the
    /// visit path are left on the stack until the next call.
    ///
    /// # Arguments
    /// * `root`: the node to start the visit from.
    /// * `callback`: the callback function.
    /// * `pl`: a progress logger.
    pub fn visit<E, C: FnMut(EventPred) -> Result<(), E>>(
        &mut self,
        root: usize,
        mut callback: C,
        pl: &mut impl ProgressLog,
    ) -> Result<(), E> {
        if self.visited[root] {
            return Ok(());
        }
        let graph = self.graph;
        self.stack.clear();

        callback(EventPred::Init { root })?;
        callback(EventPred::Previsit {
            curr: root,
            pred: root,
            root,
            depth: 0,
        })?;
        self.visited.set(root, true);
        self.stack.push((root, graph.successors(root).into_iter()));

        loop {
            let depth = self.stack.len();
            let Some((curr, succ)) = self.stack.last_mut() else {
                break;
            };
            let curr = *curr;

            match succ.next() {
                Some(next) if self.visited[next] => {
                    callback(EventPred::Revisit {
                        curr: next,
                        pred: curr,
                        root,
                    })?;
                }
                Some(next) => {
                    callback(EventPred::Previsit {
                        curr: next,
                        pred: curr,
                        root,
                        depth,
                    })?;
                    self.visited.set(next, true);
                    self.stack.push((next, graph.successors(next).into_iter()));
                }
                None => {
                    self.stack.pop();
                    let pred = self.stack.last().map_or(root, |&(pred, _)| pred);
                    callback(EventPred::Postvisit {
                        curr,
                        pred,
                        root,
                        depth: depth - 1,
                    })?;
                    pl.light_update();
                }
            }
        }

        Ok(())
    }

    /// Returns true if `node` has been visited since the last reset.
    pub fn visited(&self, node: usize) -> bool {
        self.visited[node]
    }

    /// Resets the visit status, making it possible to reuse it.
    pub fn reset(&mut self) {
        self.stack.clear();
        self.visited.fill(false);
    }
}
