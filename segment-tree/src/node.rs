use std::fmt;

/// Inclusive index range `[start, end]` covered by a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    pub start: usize,
    pub end: usize,
}

impl Interval {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Interval { start, end }
    }

    /// Split point: the left half is `[start, mid]`, the right `[mid + 1, end]`.
    pub fn mid(&self) -> usize {
        (self.start + self.end) / 2
    }

    pub fn is_unit(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index <= self.end
    }

    /// Whether this interval lies entirely inside `[start, end]`.
    pub fn is_within(&self, start: usize, end: usize) -> bool {
        start <= self.start && self.end <= end
    }

    /// Whether this interval shares no index with `[start, end]`.
    pub fn is_disjoint(&self, start: usize, end: usize) -> bool {
        self.end < start || end < self.start
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Sums wrap on `i64` overflow in build, query and update alike, so every
/// node holds the two's-complement sum of its leaves.
pub(crate) struct Node {
    pub(crate) interval: Interval,
    pub(crate) value: i64,
    /// Both children or neither; leaves have none.
    pub(crate) children: Option<(Box<Node>, Box<Node>)>,
}

impl Node {
    /// Builds the subtree over `values[start..=end]`.
    pub(crate) fn build(values: &[i64], start: usize, end: usize) -> Node {
        let interval = Interval::new(start, end);

        if interval.is_unit() {
            return Node {
                interval,
                value: values[start],
                children: None,
            };
        }

        let mid = interval.mid();
        let left = Node::build(values, start, mid);
        let right = Node::build(values, mid + 1, end);

        Node {
            interval,
            value: left.value.wrapping_add(right.value),
            children: Some((Box::new(left), Box::new(right))),
        }
    }

    pub(crate) fn left(&self) -> Option<&Node> {
        self.children.as_ref().map(|(left, _)| &**left)
    }

    pub(crate) fn right(&self) -> Option<&Node> {
        self.children.as_ref().map(|(_, right)| &**right)
    }

    /// Sum over the intersection of this node's interval and `[start, end]`.
    pub(crate) fn query(&self, start: usize, end: usize) -> i64 {
        if self.interval.is_within(start, end) {
            return self.value;
        }

        if self.interval.is_disjoint(start, end) {
            return 0;
        }

        match &self.children {
            Some((left, right)) => left
                .query(start, end)
                .wrapping_add(right.query(start, end)),
            // A leaf is always either within or disjoint.
            None => unreachable!("partial overlap at leaf {}", self.interval),
        }
    }

    /// Sets the leaf at `index` and refreshes every sum on the way back up.
    pub(crate) fn update(&mut self, index: usize, value: i64) {
        let mid = self.interval.mid();

        match &mut self.children {
            None => {
                debug_assert!(self.interval.contains(index));
                self.value = value;
            }
            Some((left, right)) => {
                if index <= mid {
                    left.update(index, value);
                } else {
                    right.update(index, value);
                }

                self.value = left.value.wrapping_add(right.value);
            }
        }
    }

    /// Value of the leaf covering `index`.
    pub(crate) fn get(&self, index: usize) -> i64 {
        let mut node = self;
        while let Some((left, right)) = &node.children {
            node = if index <= node.interval.mid() {
                &**left
            } else {
                &**right
            };
        }
        node.value
    }

    /// Visits nodes in pre-order: node, left subtree, right subtree.
    pub(crate) fn pre_order<'a, F: FnMut(&'a Node)>(&'a self, f: &mut F) {
        f(self);

        if let Some((left, right)) = &self.children {
            left.pre_order(f);
            right.pre_order(f);
        }
    }

    pub(crate) fn height(&self) -> usize {
        match &self.children {
            None => 1,
            Some((left, right)) => 1 + left.height().max(right.height()),
        }
    }
}
