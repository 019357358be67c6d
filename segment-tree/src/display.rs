//! Diagnostic pre-order dump of a tree.
//!
//! Each node yields one line showing its left child, itself and its right
//! child, e.g. `Left[0-1 => 11]  <- [ 0-3 => 24 ] -> Right[2-3 => 13]`.
//! Leaves print `No left` / `No right` in place of the missing children.

use crate::node::Node;
use crate::tree::SegmentTree;
use std::fmt;
use std::io;

fn describe_line(node: &Node) -> String {
    let mut line = String::new();

    match node.left() {
        Some(left) => line += &format!("Left[{} => {}] ", left.interval, left.value),
        None => line += "No left ",
    }

    line += &format!(" <- [ {} => {} ] -> ", node.interval, node.value);

    match node.right() {
        Some(right) => line += &format!("Right[{} => {}]", right.interval, right.value),
        None => line += "No right",
    }

    line
}

impl SegmentTree {
    /// One line per node, in pre-order.
    pub fn display_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.node_count());
        self.root.pre_order(&mut |node| lines.push(describe_line(node)));
        lines
    }

    /// Writes `display_lines` to `out`, newline-terminated.
    pub fn write_display<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        for line in self.display_lines() {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }
}

impl fmt::Display for SegmentTree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, line) in self.display_lines().iter().enumerate() {
            if i != 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines() {
        let tree = SegmentTree::new(&[3, 8, 6, 7]).unwrap();

        assert_eq!(
            tree.display_lines(),
            vec![
                "Left[0-1 => 11]  <- [ 0-3 => 24 ] -> Right[2-3 => 13]",
                "Left[0-0 => 3]  <- [ 0-1 => 11 ] -> Right[1-1 => 8]",
                "No left  <- [ 0-0 => 3 ] -> No right",
                "No left  <- [ 1-1 => 8 ] -> No right",
                "Left[2-2 => 6]  <- [ 2-3 => 13 ] -> Right[3-3 => 7]",
                "No left  <- [ 2-2 => 6 ] -> No right",
                "No left  <- [ 3-3 => 7 ] -> No right",
            ]
        );
    }

    #[test]
    fn test_display_does_not_mutate() {
        let tree = SegmentTree::new(&[3, 8, 6, 7, -2, -8, 4, 9]).unwrap();
        let before = tree.values();

        let mut out = Vec::new();
        tree.write_display(&mut out).unwrap();
        let text = tree.to_string();

        assert_eq!(tree.values(), before);
        assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", text));
        assert_eq!(text.lines().count(), 15);
    }

    #[test]
    fn test_single_leaf() {
        let tree = SegmentTree::new(&[5]).unwrap();
        assert_eq!(tree.to_string(), "No left  <- [ 0-0 => 5 ] -> No right");
    }
}
