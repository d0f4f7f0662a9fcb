// Command-line interface for md2html
//
// Converts one markdown file into an HTML fragment file. The conversion itself lives in
// md2html-babel; this binary only parses arguments, loads configuration and reports errors.
//
// Usage:
//  md2html <input> <output>                  - Convert markdown to HTML
//  md2html <input> <output> --to json        - Dump the parsed document model instead
//  md2html doc.json out.html                 - Render a dumped model (source format from extension)
//  md2html --list-formats                    - List available formats
//
// The source format is --from when given, else detected from the input extension, else
// markdown. Arguments after <output> are ignored.
//
// Configuration layers, last wins: embedded defaults, ./md2html.toml, --config <path>,
// then each --set key=value.
//
// Every failure prints a single line to stderr and exits with status 1. A missing input
// prints "Missing <input>" and leaves the output path alone.

use clap::error::ErrorKind;
use clap::{Arg, ArgAction, Command, ValueHint};
use md2html_babel::{publish, FormatRegistry, PublishSpec};
use md2html_config::{Loader, Md2HtmlConfig, LOCAL_CONFIG_FILE};
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: md2html README.md README.html";

fn build_cli() -> Command {
    Command::new("md2html")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert a markdown file into an HTML fragment")
        .long_about(
            "md2html converts a small markdown dialect into HTML.\n\n\
            Supported syntax:\n  \
            - #..###### headings\n  \
            - '-' lines become <ul> items, '*' lines become <ol> items\n  \
            - other lines are grouped into <p> paragraphs, split by blank lines\n  \
            - **bold**, __emphasis__, [[md5 of text]], ((text without c/C))\n\n\
            Examples:\n  \
            md2html README.md README.html           # Convert to HTML\n  \
            md2html README.md doc.json --to json    # Inspect the parsed blocks",
        )
        .override_usage("md2html <input> <output>")
        .arg(
            Arg::new("input")
                .help("Markdown file to read")
                .required_unless_present("list-formats")
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output")
                .help("File to write the result to (created or overwritten)")
                .required_unless_present("list-formats")
                .index(2)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("rest")
                .index(3)
                .num_args(1..)
                .action(ArgAction::Append)
                .hide(true),
        )
        .arg(
            Arg::new("from")
                .long("from")
                .value_name("FORMAT")
                .help("Input format (default: detected from extension, else markdown)"),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .value_name("FORMAT")
                .help("Output format (see --list-formats)")
                .default_value("html"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a md2html.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("set")
                .long("set")
                .value_name("KEY=VALUE")
                .help("Override a configuration key, e.g. --set inline.bold_tag=strong")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log progress to stderr")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    let matches = match build_cli().try_get_matches() {
        Ok(m) => m,
        Err(err) => handle_parse_error(err),
    };

    init_tracing(matches.get_flag("verbose"));

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let overrides: Vec<(String, String)> = matches
        .get_many::<String>("set")
        .unwrap_or_default()
        .map(|raw| {
            parse_override(raw).unwrap_or_else(|| {
                eprintln!("Invalid --set value '{raw}': expected key=value");
                process::exit(1);
            })
        })
        .collect();
    let config = load_cli_config(
        matches.get_one::<String>("config").map(String::as_str),
        &overrides,
    );

    let (Some(input), Some(output)) = (
        matches.get_one::<String>("input"),
        matches.get_one::<String>("output"),
    ) else {
        eprintln!("{USAGE}");
        process::exit(1);
    };
    let to = matches
        .get_one::<String>("to")
        .map(String::as_str)
        .unwrap_or("html");

    let from = matches.get_one::<String>("from").map(String::as_str);

    handle_convert_command(input, output, from, to, &config);
}

/// Help and version keep clap's behavior; everything else is a usage error.
fn handle_parse_error(err: clap::Error) -> ! {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
        ErrorKind::MissingRequiredArgument => {
            eprintln!("{USAGE}");
            process::exit(1);
        }
        _ => {
            eprint!("{err}");
            process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn handle_convert_command(
    input: &str,
    output: &str,
    from: Option<&str>,
    to: &str,
    config: &Md2HtmlConfig,
) {
    let registry = FormatRegistry::with_options(&config.parse_options(), config.html_options());
    let from = resolve_source_format(&registry, input, from);
    let spec = PublishSpec::new(input, output)
        .with_source_format(from)
        .with_format(to);

    match publish(&spec, &registry) {
        Ok(result) => debug!(blocks = result.blocks, bytes = result.bytes, "conversion finished"),
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

fn handle_list_formats_command() {
    let registry = FormatRegistry::default();
    println!("Available formats:\n");
    for name in registry.list_formats() {
        let Ok(format) = registry.get(&name) else {
            continue;
        };
        let mut modes = Vec::new();
        if format.supports_parsing() {
            modes.push("input");
        }
        if format.supports_serialization() {
            modes.push("output");
        }
        println!(
            "  {name:<10} {:<14} {}",
            modes.join(", "),
            format.description()
        );
    }
}

/// An explicit --from wins. Otherwise the input extension is used when it names a
/// format that can parse, so `README.txt` or `notes.html` still read as markdown.
fn resolve_source_format(
    registry: &FormatRegistry,
    input: &str,
    explicit: Option<&str>,
) -> String {
    if let Some(name) = explicit {
        return name.to_string();
    }
    registry
        .detect_format_from_filename(input)
        .filter(|name| {
            registry
                .get(name)
                .map(|format| format.supports_parsing())
                .unwrap_or(false)
        })
        .unwrap_or_else(|| "markdown".to_string())
}

fn parse_override(raw: &str) -> Option<(String, String)> {
    let (key, value) = raw.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key.to_string(), value.to_string()))
}

fn load_cli_config(explicit_path: Option<&str>, overrides: &[(String, String)]) -> Md2HtmlConfig {
    let loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    overrides
        .iter()
        .try_fold(loader, |loader, (key, value)| {
            loader.set_override(key, value.as_str())
        })
        .and_then(Loader::build)
        .unwrap_or_else(|err| {
            eprintln!("Failed to load configuration: {err}");
            process::exit(1);
        })
}
