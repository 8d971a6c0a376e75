/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Validation and analysis of trees given as adjacency lists.
//!
//! A textual description is [parsed](parser::GraphReader) into a
//! [`Graph`](graph::Graph), which is then [validated](algo::check_tree) and
//! turned into a [`Tree`](graph::Tree). On a tree, breadth-first
//! [visits](algo::visits::breadth_first) compute [branch
//! lengths](algo::branch_lengths), the [diameter](algo::diameter()) and
//! [shortest paths](algo::shortest_path).

pub mod algo;
pub mod graph;
pub mod parser;
pub mod utils;

/// Module exposing all traits in a single level.
pub mod traits {
    use super::*;
    pub use graph::traits::*;
}

/// Use `use tree_analyzer::prelude::*;` to import common utilities, modules and
/// all traits.
pub mod prelude {
    use super::*;
    pub use algo::visits::breadth_first;
    pub use algo::visits::depth_first;
    pub use algo::*;
    pub use graph::{Graph, Tree, Vertex};
    pub use parser::GraphReader;
    pub use traits::*;
}
