//! Regenerates the theme table from the theme files.
//!
//! Run from the project root after adding, changing or deleting a theme.
//! With no arguments it reads `res/themes/` and writes `src/themes.rs`.

use anyhow::{Context, Result};
use clap::Parser;
use compiler::theme::ThemeNaming;
use compiler::{CompilerConfig, ThemeCompiler, logger};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "update-themes")]
#[command(about = "Compile theme files into a static Rust lookup table", long_about = None)]
struct Args {
    /// Directory containing the theme files
    #[arg(short, long, value_name = "DIR")]
    input: Option<PathBuf>,

    /// Generated Rust file to overwrite
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Configuration file (defaults to ./themes.toml when present)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Name themes after the file stem instead of the full file name
    #[arg(long)]
    stem_names: bool,

    /// Keep directory listing order instead of sorting themes by name
    #[arg(long)]
    unsorted: bool,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = CompilerConfig::load(args.config.as_deref())
        .context("Failed to load compiler configuration")?;

    if let Some(input) = args.input {
        config = config.with_input_dir(input);
    }
    if let Some(output) = args.output {
        config = config.with_output_path(output);
    }
    if args.stem_names {
        config = config.with_theme_naming(ThemeNaming::FileStem);
    }
    if args.unsorted {
        config = config.with_sort_themes(false);
    }
    if args.verbose {
        config = config.with_log_level("debug");
    }

    logger::setup_logger(config.logging()).context("Failed to initialize logger")?;

    let compiler = ThemeCompiler::new(config);
    let config = compiler.config();
    compiler.run().with_context(|| {
        format!(
            "Failed to compile themes from '{}' into '{}'",
            config.input_dir().display(),
            config.output_path().display()
        )
    })?;

    Ok(())
}
