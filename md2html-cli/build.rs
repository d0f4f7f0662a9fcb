use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the formats registered by FormatRegistry::default().
// Build scripts can't reach the library, so keep these lists in sync by hand.
const INPUT_FORMATS: &[&str] = &["json", "markdown"];
const OUTPUT_FORMATS: &[&str] = &["html", "json"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("md2html")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert a markdown file into an HTML fragment")
        .arg(
            Arg::new("input")
                .help("Markdown file to read")
                .required_unless_present("list-formats")
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output")
                .help("File to write the result to")
                .required_unless_present("list-formats")
                .index(2)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("from")
                .long("from")
                .value_name("FORMAT")
                .help("Input format")
                .value_parser(clap::builder::PossibleValuesParser::new(INPUT_FORMATS)),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .value_name("FORMAT")
                .help("Output format")
                .value_parser(clap::builder::PossibleValuesParser::new(OUTPUT_FORMATS)),
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
                .help("Override a configuration key")
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
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "md2html", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "md2html", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "md2html", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
