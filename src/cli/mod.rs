//! CLI argument parsing module
//!
//! This module handles command-line argument parsing and application entry point.

use crate::config::ClientConfig;
use crate::error::{Result, WebbyError};
use crate::exit_code::exit_code_for_error;
use crate::http::{Api, CsvRows};
use crate::output::OutputWriter;
use crate::url_builder::UrlBuilder;
use crate::utils::{FileUtils, StringUtils, UrlUtils};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::io::Write;

/// Main entry point for the CLI application
pub fn run() {
    crate::logging::init();

    let matches = create_app().get_matches();

    if let Err(e) = run_with_args(&matches) {
        eprintln!("webby: error: {}", e);
        std::process::exit(exit_code_for_error(&e));
    }
}

/// Run webby with parsed command line arguments
fn run_with_args(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("json", sub)) => run_json(build_config_from_args(sub)?, sub),
        Some(("csv", sub)) => run_csv(build_config_from_args(sub)?, sub),
        Some(("body", sub)) => run_body(build_config_from_args(sub)?, sub),
        Some(("segment", sub)) => {
            let segment = UrlUtils::last_segment(required(sub, "url")?)?;
            println!("{}", segment);
            Ok(())
        }
        Some(("url", sub)) => {
            println!("{}", build_url_from_args(sub)?);
            Ok(())
        }
        _ => Err(WebbyError::Config("No command given".to_string())),
    }
}

fn run_json(config: ClientConfig, matches: &ArgMatches) -> Result<()> {
    let url = UrlUtils::validate_url(required(matches, "url")?)?;
    let mut api = Api::with_config(config);

    let mut value = serde_json::Value::Null;
    api.get_json(url.as_str(), &mut value)?;

    if !value.is_null() {
        let pretty = serde_json::to_string_pretty(&value)?;
        output_from_args(matches)?.write(&format!("{}\n", pretty))?;
    }
    Ok(())
}

fn run_csv(config: ClientConfig, matches: &ArgMatches) -> Result<()> {
    let url = UrlUtils::validate_url(required(matches, "url")?)?;
    let mut api = Api::with_config(config);

    let mut rows = CsvRows::new();
    api.get_csv(url.as_str(), |row| rows.add(row))?;

    let mut writer = csv::Writer::from_writer(output_from_args(matches)?.open()?);
    for row in &rows.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn run_body(config: ClientConfig, matches: &ArgMatches) -> Result<()> {
    let url = UrlUtils::validate_url(required(matches, "url")?)?;
    let mut api = Api::with_config(config);

    let mut sink = output_from_args(matches)?.open()?;
    let copied = api.get_body(url.as_str(), &mut sink)?;
    sink.flush()?;
    log::debug!("copied {} bytes from {}", copied, url);
    Ok(())
}

fn build_url_from_args(matches: &ArgMatches) -> Result<String> {
    let mut builder = UrlBuilder::new().base(required(matches, "base")?);

    if let Some(path) = matches.get_one::<String>("path") {
        builder = builder.path(path);
    }

    if let Some(params) = matches.get_many::<String>("param") {
        for param in params {
            let (key, value) = StringUtils::parse_param(param)?;
            builder = builder.param(key, value);
        }
    }

    Ok(builder.build())
}

fn output_from_args(matches: &ArgMatches) -> Result<OutputWriter> {
    let file = match matches.get_one::<String>("output") {
        Some(path) => Some(FileUtils::expand_path(path)?),
        None => None,
    };
    Ok(OutputWriter::new(file))
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a str> {
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .ok_or_else(|| WebbyError::Config(format!("Missing argument: {}", name)))
}

/// Create the CLI application structure
fn create_app() -> Command {
    let url_arg = || {
        Arg::new("url")
            .help("The URL to request")
            .required(true)
            .index(1)
    };
    let output_arg = || {
        Arg::new("output")
            .short('o')
            .long("output")
            .value_name("FILE")
            .help("Write output to file")
    };

    Command::new("webby")
        .version(crate::VERSION)
        .about("Fetch JSON, CSV or raw bodies over HTTP")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .value_name("SECONDS")
                .help("Maximum time for the whole request")
                .global(true),
        )
        .arg(
            Arg::new("connect-timeout")
                .long("connect-timeout")
                .value_name("SECONDS")
                .help("Maximum time for connection")
                .global(true),
        )
        .arg(
            Arg::new("max-redirects")
                .long("max-redirects")
                .value_name("NUM")
                .help("Maximum number of redirects to follow (0 disables)")
                .value_parser(clap::value_parser!(usize))
                .global(true),
        )
        .subcommand(
            Command::new("json")
                .about("GET a URL and pretty-print its JSON body")
                .arg(url_arg())
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("csv")
                .about("GET a URL and print its CSV records")
                .arg(url_arg())
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("body")
                .about("GET a URL and copy its raw body")
                .arg(url_arg())
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("segment")
                .about("Print the last path segment of a URL")
                .arg(Arg::new("url").help("The URL to inspect").required(true).index(1)),
        )
        .subcommand(
            Command::new("url")
                .about("Build a URL from a base, a path and query parameters")
                .arg(
                    Arg::new("base")
                        .long("base")
                        .value_name("BASE")
                        .help("Scheme, host and optional prefix")
                        .required(true),
                )
                .arg(
                    Arg::new("path")
                        .long("path")
                        .value_name("PATH")
                        .help("Path appended to the base"),
                )
                .arg(
                    Arg::new("param")
                        .short('p')
                        .long("param")
                        .value_name("KEY=VALUE")
                        .help("Query parameter, empty values are skipped")
                        .action(ArgAction::Append),
                ),
        )
}

/// Build client configuration from the global options seen by a subcommand
fn build_config_from_args(matches: &ArgMatches) -> Result<ClientConfig> {
    let mut config = ClientConfig::default();

    if let Some(timeout_str) = matches.get_one::<String>("timeout") {
        config.timeout = Some(StringUtils::parse_timeout(timeout_str)?);
    }

    if let Some(connect_timeout_str) = matches.get_one::<String>("connect-timeout") {
        config.connect_timeout = Some(StringUtils::parse_timeout(connect_timeout_str)?);
    }

    if let Some(max_redirects) = matches.get_one::<usize>("max-redirects") {
        config.max_redirects = *max_redirects;
    }

    Ok(config)
}
