//! Command-line interface for zrxp
//! Parses ZRXP files and prints the resulting document in one of the output formats.
//!
//! Usage:
//!   zrxp parse `<path>` [--strategy `<strategy>`] [--format `<format>`] [--config `<file>`] [--materialize]
//!   zrxp keys                                      - List the recognized metadata keys
#[path = "zrxp/logging.rs"]
mod logging;

use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::Path;
use tracing::info;
use zrxp::zrxp::ast::MetadataKey;
use zrxp::zrxp::config::{Loader, ZrxpConfig};
use zrxp::zrxp::formats::serialize;
use zrxp::{parse_file, ParseStrategy, ZrxpError};

fn main() {
    let matches = Command::new("zrxp")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for parsing ZRXP time series files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase log output (-v info, -vv debug, -vvv trace)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse a file and print the document to stdout")
                .arg(
                    Arg::new("path")
                        .help("Path to the ZRXP file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("strategy")
                        .long("strategy")
                        .short('s')
                        .help("Parse strategy: eager or bulk (default from config: eager)"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format: json, yaml, tag or treeviz (default from config: json)"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("TOML file layered over the built-in defaults"),
                )
                .arg(
                    Arg::new("materialize")
                        .long("materialize")
                        .short('m')
                        .help("Read raw record text into rows before printing")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("keys").about("List the recognized metadata keys"))
        .get_matches();

    logging::init(matches.get_count("verbose"));

    let result = match matches.subcommand() {
        Some(("parse", sub_matches)) => handle_parse_command(sub_matches),
        Some(("keys", _)) => {
            handle_keys_command();
            Ok(())
        }
        _ => unreachable!("subcommand is required"),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Layer the config file and command-line flags over the defaults
fn load_config(matches: &ArgMatches) -> Result<ZrxpConfig, ZrxpError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(strategy) = matches.get_one::<String>("strategy") {
        loader = loader.set_override("parser.strategy", strategy.as_str())?;
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if matches.get_flag("materialize") {
        loader = loader.set_override("output.materialize", true)?;
    }
    loader.build()
}

/// Handle the parse command
fn handle_parse_command(matches: &ArgMatches) -> Result<(), ZrxpError> {
    let config = load_config(matches)?;
    let path = Path::new(
        matches
            .get_one::<String>("path")
            .expect("path is a required argument"),
    );

    let strategy: ParseStrategy = config.parser.strategy;
    let mut doc = parse_file(path, strategy)?;
    info!(blocks = doc.len(), %strategy, "parsed {}", path.display());

    if config.output.materialize {
        doc = config.tabular.reader().materialize(&doc);
    }

    let output = serialize(&doc, config.output.format)?;
    println!("{}", output.trim_end());
    Ok(())
}

/// Handle the keys command
fn handle_keys_command() {
    println!("Metadata keys (enumeration version {}):\n", MetadataKey::ENUMERATION_VERSION);
    for key in MetadataKey::ALL {
        println!("  {:<12} {}", key.as_str(), key.description());
    }
}
