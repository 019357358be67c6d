use crate::error::{Error, Result};
use crate::node::{Interval, Node};
use std::convert::TryFrom;

/// Segment tree answering inclusive range sums with point updates.
pub struct SegmentTree {
    pub(crate) root: Node,
    len: usize,
}

impl SegmentTree {
    /// Builds the tree over `values`. Fails on empty input.
    pub fn new(values: &[i64]) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::InvalidArgument(
                "cannot build a segment tree from an empty array".to_owned(),
            ));
        }

        let len = values.len();
        let root = Node::build(values, 0, len - 1);
        debug!("built segment tree over {} values, total {}", len, root.value);

        Ok(SegmentTree { root, len })
    }

    /// Number of elements in the backing array.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`; construction rejects empty input.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Sum of every element, wrapping on overflow.
    pub fn total(&self) -> i64 {
        self.root.value
    }

    /// Sum of the elements at indices `start..=end`, wrapping on overflow.
    pub fn query(&self, start: isize, end: isize) -> Result<i64> {
        let (lo, hi) = self.check_range(start, end)?;
        let sum = self.root.query(lo, hi);
        trace!("query {}..={} => {}", lo, hi, sum);
        Ok(sum)
    }

    /// Replaces the element at `index` with `value`.
    pub fn update(&mut self, index: isize, value: i64) -> Result<()> {
        let (index, _) = self.check_range(index, index)?;
        trace!("update {} <- {}", index, value);
        self.root.update(index, value);
        Ok(())
    }

    /// Current value of the element at `index`.
    pub fn get(&self, index: isize) -> Result<i64> {
        let (index, _) = self.check_range(index, index)?;
        Ok(self.root.get(index))
    }

    /// Current element values, left to right.
    pub fn values(&self) -> Vec<i64> {
        let mut values = Vec::with_capacity(self.len);
        self.root.pre_order(&mut |node| {
            if node.children.is_none() {
                values.push(node.value);
            }
        });
        values
    }

    /// Intervals of every node in pre-order.
    pub fn intervals(&self) -> Vec<Interval> {
        let mut intervals = Vec::with_capacity(self.node_count());
        self.root.pre_order(&mut |node| intervals.push(node.interval));
        intervals
    }

    pub fn node_count(&self) -> usize {
        2 * self.len - 1
    }

    /// Number of levels, counting the root and the leaves.
    pub fn height(&self) -> usize {
        self.root.height()
    }

    fn check_range(&self, start: isize, end: isize) -> Result<(usize, usize)> {
        let out_of_range = Error::IndexOutOfRange {
            start,
            end,
            len: self.len,
        };

        if start < 0 || start > end {
            return Err(out_of_range);
        }

        let (lo, hi) = (start as usize, end as usize);
        if hi >= self.len {
            return Err(out_of_range);
        }

        Ok((lo, hi))
    }
}

impl TryFrom<Vec<i64>> for SegmentTree {
    type Error = Error;

    fn try_from(values: Vec<i64>) -> Result<Self> {
        SegmentTree::new(&values)
    }
}
