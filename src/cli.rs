//! testforge - describe a UI test, get a runnable script
//!
//! Command-line wrapper around the generation pipeline: parses arguments,
//! loads configuration, runs a single pipeline invocation, and persists the
//! generated script. All pipeline errors are reported here as human-readable
//! messages rather than crashing with a raw error.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use crate::config::Config;
use crate::generator::TestGenerator;
use crate::telemetry::init_tracing;

#[derive(Parser)]
#[command(name = "testforge")]
#[command(about = "Generate executable browser UI tests from natural-language scenarios")]
#[command(version)]
struct Cli {
    /// URL of the page under test
    url: String,

    /// Test scenario described in natural language
    #[arg(required_unless_present = "scenario_file", conflicts_with = "scenario_file")]
    scenario: Option<String>,

    /// Read the scenario from a file instead of the command line
    #[arg(short = 's', long, value_name = "FILE")]
    scenario_file: Option<PathBuf>,

    /// Where to write the generated script
    #[arg(short, long, value_name = "FILE", default_value = "generated_test.py")]
    output: PathBuf,

    /// Config file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// Quiet mode (minimal output)
    #[arg(short, long)]
    quiet: bool,
}

pub async fn run() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    if std::env::var("NO_COLOR").is_ok() {
        colored::control::set_override(false);
    }

    url::Url::parse(&cli.url).with_context(|| format!("'{}' is not a valid URL", cli.url))?;

    let scenario = match (&cli.scenario, &cli.scenario_file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario from {}", path.display()))?,
        (None, None) => unreachable!("clap enforces scenario or scenario-file"),
    };
    let scenario = scenario.trim().to_string();
    if scenario.is_empty() {
        anyhow::bail!("Scenario is empty");
    }

    let config = Config::load(cli.config.as_deref())?;
    let generator = TestGenerator::new(config)?;

    if !cli.quiet {
        println!("{} {}", "Generating test for".bold(), cli.url.cyan());
    }

    let start = Instant::now();
    let script = generator.generate(&cli.url, &scenario).await?;

    write_script(&cli.output, &script)?;

    if !cli.quiet {
        println!(
            "{} {} ({:.1}s)",
            "Script written to".green(),
            cli.output.display(),
            start.elapsed().as_secs_f64()
        );
    }

    Ok(())
}

/// UTF-8 byte-order mark, prepended so downstream Windows tooling detects
/// the encoding.
const UTF8_BOM: &str = "\u{FEFF}";

fn write_script(path: &Path, script: &str) -> Result<()> {
    let mut contents = String::with_capacity(UTF8_BOM.len() + script.len() + 1);
    contents.push_str(UTF8_BOM);
    contents.push_str(script);
    if !script.ends_with('\n') {
        contents.push('\n');
    }
    std::fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}
