//! Module containing all algorithms on graphs and trees.

pub mod visits;

mod tree_check;
pub use tree_check::*;

mod branches;
pub use branches::*;

mod diameter;
pub use diameter::*;

mod path;
pub use path::*;

mod analysis;
pub use analysis::*;
