use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::str::FromStr;

use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand};
use ocr_table::{
    ExtractionReport, LayoutMode, OutputFormat, ReconstructOptions, RecognizerOptions,
    TableExtraction, recognize_tsv, reconstruct_tsv, render, write_table,
};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "ocr2table",
    version,
    about = "Rebuild tables from OCR word boxes"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Rebuild a table from recognizer TSV output.
    Tsv(TsvArgs),
    /// Run the recognizer on an image, then rebuild the table.
    Image(ImageArgs),
}

#[derive(Debug, Args)]
struct OutputArgs {
    /// Output path. Prints to stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format: markdown, csv or json.
    #[arg(long, default_value = "markdown")]
    format: String,

    /// CSV delimiter character.
    #[arg(long, default_value = ",")]
    delimiter: char,

    /// Reject words below this recognizer confidence.
    #[arg(long, default_value_t = 0)]
    min_confidence: i32,

    /// Row tolerance as a multiple of the average word height.
    #[arg(long, default_value_t = ocr_table::DEFAULT_ROW_TOLERANCE_FACTOR)]
    row_tolerance: f64,

    /// Minimum column gap as a multiple of the average word height.
    #[arg(long, default_value_t = ocr_table::DEFAULT_COLUMN_GAP_FACTOR)]
    column_gap: f64,

    /// Enable verbose warning output.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Args)]
struct TsvArgs {
    /// Input TSV path, or '-' for stdin.
    #[arg(short, long)]
    input: PathBuf,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Debug, Args)]
struct ImageArgs {
    /// Input image path.
    #[arg(short, long)]
    input: PathBuf,

    /// Recognizer language(s), e.g. eng+tur.
    #[arg(long, default_value = "eng")]
    lang: String,

    /// Layout mode for the first attempt.
    #[arg(long, default_value = "vertical")]
    psm: String,

    /// Layout mode retried when the first attempt yields no table.
    #[arg(long, default_value = "block")]
    fallback_psm: String,

    /// Recognizer executable.
    #[arg(long, default_value = "tesseract")]
    tesseract: PathBuf,

    #[command(flatten)]
    output: OutputArgs,
}

fn parse_options(args: &OutputArgs) -> Result<(ReconstructOptions, OutputFormat)> {
    if !args.delimiter.is_ascii() {
        anyhow::bail!("delimiter must be a single ASCII character");
    }

    let format = OutputFormat::from_str(&args.format)
        .map_err(|error| anyhow!(error))
        .context("failed to parse --format")?;

    let options = ReconstructOptions {
        row_tolerance_factor: args.row_tolerance,
        column_gap_factor: args.column_gap,
        min_confidence: args.min_confidence,
        delimiter: args.delimiter as u8,
    };
    options.validate()?;

    Ok((options, format))
}

fn parse_layout(value: &str, flag: &str) -> Result<LayoutMode> {
    LayoutMode::from_str(value)
        .map_err(|error| anyhow!(error))
        .with_context(|| format!("failed to parse {flag}"))
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read TSV from stdin")?;
        return Ok(buffer);
    }

    std::fs::read_to_string(path).with_context(|| format!("failed to read '{}'", path.display()))
}

fn log_report(report: &ExtractionReport, verbose: bool) {
    if report.warnings.is_empty() {
        return;
    }

    eprintln!("warning: {} issue(s) detected", report.warnings.len());
    if verbose {
        for warning in &report.warnings {
            eprintln!(
                "  - {:?} line={:?} column={:?}: {}",
                warning.code, warning.line, warning.column, warning.message
            );
        }
    }
}

fn emit(
    extraction: &TableExtraction,
    options: &ReconstructOptions,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    let Some(grid) = &extraction.grid else {
        return Ok(());
    };

    if let Some(path) = output {
        return write_table(grid, path, format, options.delimiter)
            .with_context(|| format!("failed to write '{}'", path.display()));
    }

    let mut rendered = render(grid, format, options.delimiter)?;
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    print!("{rendered}");
    Ok(())
}

fn run_tsv(args: &TsvArgs) -> Result<TableExtraction> {
    let (options, format) = parse_options(&args.output)?;
    let input = read_input(&args.input)?;
    let extraction = reconstruct_tsv(&input, &options);
    emit(&extraction, &options, format, args.output.output.as_deref())?;
    Ok(extraction)
}

fn run_image(args: &ImageArgs) -> Result<TableExtraction> {
    let (options, format) = parse_options(&args.output)?;
    let layouts = [
        parse_layout(&args.psm, "--psm")?,
        parse_layout(&args.fallback_psm, "--fallback-psm")?,
    ];

    let mut extraction = None;
    for (attempt, layout) in layouts.into_iter().enumerate() {
        if attempt > 0 {
            warn!(psm = layout.psm(), "no table detected, retrying with fallback layout");
        }

        let recognizer = RecognizerOptions {
            binary: args.tesseract.clone(),
            language: args.lang.clone(),
            layout,
        };
        let tsv = recognize_tsv(&args.input, &recognizer)
            .with_context(|| format!("failed to recognize '{}'", args.input.display()))?;
        let current = reconstruct_tsv(&tsv, &options);
        let found = current.has_table();
        extraction = Some(current);
        if found {
            break;
        }
    }

    let extraction = extraction.ok_or_else(|| anyhow!("no layout mode attempted"))?;
    emit(&extraction, &options, format, args.output.output.as_deref())?;
    Ok(extraction)
}

fn finish(result: Result<TableExtraction>, verbose: bool) -> ExitCode {
    match result {
        Ok(extraction) => {
            log_report(&extraction.report, verbose);
            if extraction.has_table() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(2)
            }
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::from(1)
        }
    }
}

fn main() -> ExitCode {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("ocr_table=warn,ocr2table=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Tsv(args) => finish(run_tsv(&args), args.output.verbose),
        Commands::Image(args) => finish(run_image(&args), args.output.verbose),
    }
}
