//! Static-size segment tree over `i64` values.
//!
//! The tree is built once from a non-empty slice and answers inclusive
//! range-sum queries and point updates in `O(log n)`. Its shape never
//! changes after construction; only node sums do.
//!
//! ```
//! use segment_tree::SegmentTree;
//!
//! let mut tree = SegmentTree::new(&[3, 8, 6, 7, -2, -8, 4, 9]).unwrap();
//! assert_eq!(tree.query(2, 5).unwrap(), 3);
//! tree.update(2, 10).unwrap();
//! assert_eq!(tree.query(2, 5).unwrap(), 7);
//! ```

#[macro_use]
extern crate log;

mod display;
mod error;
mod node;
mod tree;

pub use crate::error::{Error, Result};
pub use crate::node::Interval;
pub use crate::tree::SegmentTree;
