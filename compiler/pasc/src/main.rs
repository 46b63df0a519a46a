//! `pasc`: scan and parse one Pascal source file.
//!
//! Writes the token codes to a file and the annotated listing to stdout.
//! Exit status: 0 clean, 1 diagnostics reported, 2 I/O failure.

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use pas_diagnostic::emitter::ColorMode;
use pasc::{DriverError, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "pasc", version, about = "Pascal scanner and syntax checker", long_about = None)]
struct Args {
    /// Source file to check
    input: PathBuf,

    /// Where to write the token codes
    #[arg(long, value_name = "PATH", default_value = "output.txt")]
    tokens: PathBuf,

    /// Skip writing the token file
    #[arg(long)]
    no_tokens: bool,

    /// Diagnostic output format
    #[arg(long, value_enum, default_value_t = Format::Listing)]
    format: Format,

    /// When to color the output
    #[arg(long, value_enum, default_value_t = Color::Auto)]
    color: Color,

    /// Render `RUST_LOG` output as an indented span tree
    #[arg(long)]
    log_tree: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Listing,
    Short,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Listing => OutputFormat::Listing,
            Format::Short => OutputFormat::Short,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Color {
    Auto,
    Always,
    Never,
}

impl From<Color> for ColorMode {
    fn from(color: Color) -> Self {
        match color {
            Color::Auto => ColorMode::Auto,
            Color::Always => ColorMode::Always,
            Color::Never => ColorMode::Never,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    pasc::init_tracing(args.log_tree);

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}

/// Returns `true` when the source produced no diagnostics.
fn run(args: &Args) -> Result<bool, DriverError> {
    let source = pasc::read_source(&args.input)?;
    let compilation = pasc::compile(&source);

    if !args.no_tokens {
        pasc::write_tokens(&args.tokens, &compilation.tokens)?;
    }

    let stdout = io::stdout();
    let is_tty = stdout.is_terminal();
    let file_path = args.input.display().to_string();
    pasc::write_report(
        stdout.lock(),
        &compilation,
        args.format.into(),
        args.color.into(),
        is_tty,
        Some(&file_path),
    )?;

    Ok(!compilation.has_errors())
}
