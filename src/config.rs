//! Defines data structures of command line arguments.

use crate::command::Command;
use segment_tree::{Error, Result};

/// Array used when `--values` is not given.
pub const SAMPLE_VALUES: [i64; 8] = [3, 8, 6, 7, -2, -8, 4, 9];

#[derive(Debug)]
pub struct Config {
    pub values: Vec<i64>,
    pub commands: Vec<Command>,
    pub display: bool,
}

impl Config {
    pub fn from_matches(gm: &clap::ArgMatches) -> Result<Self> {
        let values = match gm.values_of("values") {
            None => SAMPLE_VALUES.to_vec(),
            Some(values) => values
                .map(|value| parse_value(value))
                .collect::<Result<Vec<_>>>()?,
        };

        let commands = match gm.values_of("exec") {
            None => {
                trace!("no --exec given, running the sample script");
                Command::sample_script()
            }
            Some(ops) => ops
                .map(|op| op.parse::<Command>())
                .collect::<Result<Vec<_>>>()?,
        };

        let display = gm.is_present("display");

        Ok(Config {
            values,
            commands,
            display,
        })
    }
}

fn parse_value(value: &str) -> Result<i64> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|err| Error::InvalidArgument(format!("bad value {:?}: {}", value, err)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app;

    #[test]
    fn test_defaults() {
        let matches = app().get_matches_from(vec!["segtree"]);
        let config = Config::from_matches(&matches).unwrap();

        assert_eq!(config.values, SAMPLE_VALUES.to_vec());
        assert_eq!(config.commands, Command::sample_script());
        assert!(!config.display);
    }

    #[test]
    fn test_values_and_ops() {
        let matches = app().get_matches_from(vec![
            "segtree",
            "--values",
            "-1,2,-3",
            "--exec",
            "update 0 4",
            "--exec",
            "query 0 2",
            "--display",
        ]);
        let config = Config::from_matches(&matches).unwrap();

        assert_eq!(config.values, vec![-1, 2, -3]);
        assert_eq!(
            config.commands,
            vec![
                Command::Update { index: 0, value: 4 },
                Command::Query { start: 0, end: 2 },
            ]
        );
        assert!(config.display);
    }

    #[test]
    fn test_short_flags() {
        let matches = app().get_matches_from(vec![
            "segtree", "-v", "4,-5", "-e", "query 0 1", "-e", "display", "-d",
        ]);
        let config = Config::from_matches(&matches).unwrap();

        assert_eq!(config.values, vec![4, -5]);
        assert_eq!(
            config.commands,
            vec![Command::Query { start: 0, end: 1 }, Command::Display]
        );
        assert!(config.display);
    }

    #[test]
    fn test_bad_value() {
        let matches = app().get_matches_from(vec!["segtree", "--values", "1,x"]);

        match Config::from_matches(&matches) {
            Err(Error::InvalidArgument(_)) => {}
            other => panic!("expected InvalidArgument, got {:?}", other),
        }
    }
}
