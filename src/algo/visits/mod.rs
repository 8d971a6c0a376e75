//! Visits on graphs implementing
//! [`RandomAccessGraph`](crate::graph::traits::RandomAccessGraph).

pub mod breadth_first;
pub mod depth_first;
