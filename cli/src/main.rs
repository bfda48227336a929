//! fluidsheet CLI - stylesheet cloning and breakpoint tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use fluidsheet::render::{to_json, to_text};
use fluidsheet::{
    clone_document_with_stats, load_style_sheet, parse_css_with_options, CloneStats,
    CssomDocument, CssomStyleSheet, DocumentClone, JsonFormat, ParseOptions,
    DEFAULT_BASELINE_WIDTH,
};

#[derive(Parser)]
#[command(name = "fluidsheet")]
#[command(version)]
#[command(about = "Clone stylesheets and group fluid CSS rules by breakpoint", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Clone CSS files into a JSON snapshot
    Clone {
        /// Input CSS files, in document order
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Stylesheet URLs to treat as unreadable cross-origin sheets
        #[arg(long, value_name = "HREF")]
        cross_origin: Vec<String>,
    },

    /// Show breakpoints and style batches
    Parse {
        /// Input CSS files, or one JSON snapshot with --clone
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,

        /// Read a JSON snapshot instead of CSS
        #[arg(long)]
        clone: bool,

        /// Default baseline width in pixels
        #[arg(long, env = "FLUIDSHEET_BASELINE", default_value_t = DEFAULT_BASELINE_WIDTH)]
        baseline: u32,

        /// Output JSON instead of a text report
        #[arg(long)]
        json: bool,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// List breakpoints, one per line
    Breakpoints {
        /// Input CSS files
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,
    },

    /// Show what cloning keeps and drops
    Info {
        /// Input CSS files
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Clone {
            inputs,
            output,
            compact,
            cross_origin,
        }) => cmd_clone(&inputs, output.as_deref(), compact, &cross_origin),
        Some(Commands::Parse {
            inputs,
            clone,
            baseline,
            json,
            compact,
            output,
        }) => cmd_parse(&inputs, clone, baseline, json, compact, output.as_deref()),
        Some(Commands::Breakpoints { inputs }) => cmd_breakpoints(&inputs),
        Some(Commands::Info { inputs }) => cmd_info(&inputs),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: fluidsheet <COMMAND> <FILE>...".yellow());
            println!("       fluidsheet --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Load CSS files into an in-memory document.
fn load_document(
    inputs: &[PathBuf],
    cross_origin: &[String],
) -> Result<CssomDocument, Box<dyn std::error::Error>> {
    let mut document = CssomDocument::new();
    for input in inputs {
        document.add_style_sheet(load_style_sheet(input)?);
    }
    for href in cross_origin {
        document.add_style_sheet(CssomStyleSheet::cross_origin(href.as_str()));
    }
    Ok(document)
}

fn clone_inputs(
    inputs: &[PathBuf],
    cross_origin: &[String],
) -> Result<(DocumentClone, CloneStats), Box<dyn std::error::Error>> {
    let document = load_document(inputs, cross_origin)?;
    let (clone, stats) = clone_document_with_stats(&document);
    log::info!(
        "Cloned {} of {} stylesheets",
        clone.style_sheet_count(),
        document.style_sheets.len()
    );
    Ok((clone, stats))
}

fn write_output(content: &str, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn json_format(compact: bool) -> JsonFormat {
    if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    }
}

fn cmd_clone(
    inputs: &[PathBuf],
    output: Option<&Path>,
    compact: bool,
    cross_origin: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    let (clone, _stats) = clone_inputs(inputs, cross_origin)?;
    let json = to_json(&clone, json_format(compact))?;
    write_output(&json, output)
}

fn cmd_parse(
    inputs: &[PathBuf],
    from_clone: bool,
    baseline: u32,
    json: bool,
    compact: bool,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = ParseOptions::new().with_baseline_width(baseline);
    options.validate()?;

    let clone = if from_clone {
        let [input] = inputs else {
            return Err("--clone takes exactly one snapshot file".into());
        };
        DocumentClone::from_json(&fs::read_to_string(input)?)?
    } else {
        clone_inputs(inputs, &[])?.0
    };

    let result = parse_css_with_options(&clone, &options);

    let content = if json {
        to_json(&result, json_format(compact))?
    } else {
        to_text(&result)
    };
    write_output(&content, output)
}

fn cmd_breakpoints(inputs: &[PathBuf]) -> Result<(), Box<dyn std::error::Error>> {
    let (clone, _stats) = clone_inputs(inputs, &[])?;
    let result = fluidsheet::parse_css(&clone);
    for width in &result.breakpoints {
        println!("{}", width);
    }
    Ok(())
}

fn cmd_info(inputs: &[PathBuf]) -> Result<(), Box<dyn std::error::Error>> {
    let (clone, stats) = clone_inputs(inputs, &[])?;
    let result = fluidsheet::parse_css(&clone);

    println!("{}", "Clone Summary".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Stylesheets".bold(), clone.style_sheet_count());
    println!("{}: {}", "Rules".bold(), clone.rule_count());
    println!("{}: {}", "Style rules".bold(), stats.style_rules);
    println!("{}: {}", "Media rules".bold(), stats.media_rules);
    println!(
        "{}: {}",
        "Dropped media rules".bold(),
        stats.dropped_media_rules
    );
    println!("{}: {}", "Ignored rules".bold(), stats.ignored_rules);
    println!(
        "{}: {}",
        "Filtered declarations".bold(),
        stats.filtered_properties
    );

    println!();
    println!("{}", "Breakpoints".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}px", "Baseline".bold(), result.baseline_width);
    println!("{}: {:?}", "Widths".bold(), result.breakpoints);
    println!("{}: {}", "Batches".bold(), result.batch_count());

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "fluidsheet".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Fluid CSS breakpoint extraction tool");
    println!();
    println!("License: MIT");
}
