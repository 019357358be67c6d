//! Script operations run against a tree by the command line driver.

use segment_tree::{Error, Result, SegmentTree};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Query { start: isize, end: isize },
    Update { index: isize, value: i64 },
    Display,
}

impl Command {
    /// Display, two queries, one update, then display and query again.
    pub fn sample_script() -> Vec<Command> {
        vec![
            Command::Display,
            Command::Query { start: 2, end: 5 },
            Command::Query { start: 0, end: 3 },
            Command::Update {
                index: 2,
                value: 10,
            },
            Command::Display,
            Command::Query { start: 2, end: 5 },
        ]
    }

    /// Applies the command and returns the lines to print.
    pub fn run(&self, tree: &mut SegmentTree) -> Result<Vec<String>> {
        match *self {
            Command::Query { start, end } => {
                let sum = tree.query(start, end)?;
                Ok(vec![format!("Query({},{}) => {}", start, end, sum)])
            }
            Command::Update { index, value } => {
                tree.update(index, value)?;
                Ok(vec![format!("Updating index {} to {}", index, value)])
            }
            Command::Display => Ok(tree.display_lines()),
        }
    }
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(s: &str) -> Result<Command> {
        let words = s.split_whitespace().collect::<Vec<_>>();

        match words.as_slice() {
            ["query", start, end] => Ok(Command::Query {
                start: parse_arg(start)?,
                end: parse_arg(end)?,
            }),
            ["update", index, value] => Ok(Command::Update {
                index: parse_arg(index)?,
                value: parse_arg(value)?,
            }),
            ["display"] => Ok(Command::Display),
            _ => Err(Error::InvalidArgument(format!("unknown operation {:?}", s))),
        }
    }
}

fn parse_arg<T: FromStr>(word: &str) -> Result<T>
where
    T::Err: fmt::Display,
{
    word.parse::<T>()
        .map_err(|err| Error::InvalidArgument(format!("bad argument {:?}: {}", word, err)))
}

/// Builds a tree from `values`, runs `commands` in order and collects
/// their output. Stops at the first failing command.
pub fn run_script(values: &[i64], commands: &[Command], display: bool) -> Result<Vec<String>> {
    let mut tree = SegmentTree::new(values)?;
    let mut lines = Vec::new();

    for command in commands {
        debug!("run {:?}", command);
        lines.extend(command.run(&mut tree)?);
    }

    if display {
        lines.extend(tree.display_lines());
    }

    if commands.is_empty() && !display {
        warn!("Nothing to run");
    }

    Ok(lines)
}
