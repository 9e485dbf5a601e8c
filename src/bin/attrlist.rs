//! Command-line interface for attrlist
//! Decodes list-valued attribute text and prints it back in a normalized form.
//!
//! Usage:
//!   attrlist parse `<text>` [--format `<format>`] [--precision `<n>`] [--config `<file>`]
//!   attrlist tokens `<text>`                     - Show the tokens and their byte spans
//!
//! Pass `-` as the text to read it from stdin.

use attrlist::config::{Loader, Settings};
use attrlist::{tokenize, NumberList, LIST_DELIMITERS};
use clap::{Arg, ArgMatches, Command};
use std::io::Read;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let text_arg = Arg::new("text")
        .help("Attribute text, or '-' to read from stdin")
        .required(true)
        .index(1);

    let matches = Command::new("attrlist")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Decode and normalize numeric list attribute values")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("parse")
                .about("Decode a number list and print it")
                .arg(text_arg.clone())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format")
                        .value_parser(["text", "json", "yaml"])
                        .default_value("text"),
                )
                .arg(
                    Arg::new("precision")
                        .long("precision")
                        .short('p')
                        .help("Fixed number of decimal places for text output")
                        .value_parser(clap::value_parser!(u32)),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("Path to a TOML configuration file"),
                ),
        )
        .subcommand(
            Command::new("tokens")
                .about("Show the tokens found in the text")
                .arg(text_arg),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("parse", parse_matches)) => handle_parse_command(parse_matches),
        Some(("tokens", tokens_matches)) => handle_tokens_command(tokens_matches),
        _ => unreachable!(),
    }
}

/// Resolve the text argument, reading stdin for `-`
fn read_text(matches: &ArgMatches) -> String {
    let text = matches
        .get_one::<String>("text")
        .expect("text is a required argument");
    if text != "-" {
        return text.clone();
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .unwrap_or_else(|e| {
            eprintln!("Error reading stdin: {}", e);
            std::process::exit(1);
        });
    buffer
}

fn load_settings(matches: &ArgMatches) -> Settings {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(precision) = matches.get_one::<u32>("precision") {
        loader = loader
            .set_override("formatting.precision", i64::from(*precision))
            .unwrap_or_else(|e| {
                eprintln!("Invalid precision: {}", e);
                std::process::exit(1);
            });
    }

    loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    })
}

/// Handle the parse command
fn handle_parse_command(matches: &ArgMatches) {
    let settings = load_settings(matches);
    let text = read_text(matches);

    let list = NumberList::parse(&text).unwrap_or_else(|e| {
        eprintln!("Parse error: {}", e);
        std::process::exit(1);
    });

    let format = matches
        .get_one::<String>("format")
        .expect("format has a default");
    let output = match format.as_str() {
        "json" => serde_json::to_string_pretty(&list).map_err(|e| e.to_string()),
        "yaml" => serde_yaml::to_string(&list).map_err(|e| e.to_string()),
        _ => Ok(list.to_text_with(&settings.number_format())),
    };

    match output {
        Ok(output) => println!("{}", output.trim_end()),
        Err(e) => {
            eprintln!("Serialization error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle the tokens command
fn handle_tokens_command(matches: &ArgMatches) {
    let text = read_text(matches);
    for token in tokenize(&text, LIST_DELIMITERS) {
        let span = token.span();
        println!("{:>5}..{:<5} {}", span.start, span.end, token.as_str());
    }
}
