#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;
extern crate env_logger;
extern crate segment_tree;

mod command;
mod config;

use std::process;

/// Builds CLI app metadata, especially command line arguments format.
fn app<'a, 'b>() -> clap::App<'a, 'b> {
    let settings = {
        use clap::AppSettings::*;
        [GlobalVersion]
    };
    clap::App::new(crate_name!())
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .settings(&settings)
        .arg(
            clap::Arg::with_name("values")
                .long("values")
                .short("v")
                .takes_value(true)
                .use_delimiter(true)
                .allow_hyphen_values(true)
                .help("Comma-separated array to build the tree from (defaults to the sample array)"),
        )
        .arg(
            clap::Arg::with_name("exec")
                .long("exec")
                .short("e")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .help("Operation to run: `query A B`, `update I V` or `display`"),
        )
        .arg(
            clap::Arg::with_name("display")
                .long("display")
                .short("d")
                .help("Print the tree after all operations"),
        )
}

/// Parses given arguments.
fn parse_args<'a>() -> clap::ArgMatches<'a> {
    app().get_matches()
}

fn main() {
    env_logger::init();

    let matches = parse_args();
    let result = config::Config::from_matches(&matches)
        .and_then(|config| command::run_script(&config.values, &config.commands, config.display));

    match result {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
        }
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    }
}
