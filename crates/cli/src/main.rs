use std::fs;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::Context;
use clap::{Parser, Subcommand};
use glean_core::{
    ExtractionRequest, FailurePolicy, Glean, GleanConfig, JsonConfig, PdfSource, TextConfig, convert_to_json,
    convert_to_text, fetch_file, fetch_stdin,
};
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

mod echo;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Output format for the extraction report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format: {}. Valid options: text, json", s)),
        }
    }
}

/// Which extractor to run
#[derive(Subcommand, Debug)]
enum Mode {
    /// Extract paragraph text from a web page
    Url {
        /// Page to fetch
        #[arg(value_name = "URL")]
        url: String,

        /// Also list H1-H6 headings
        #[arg(long)]
        headings: bool,
    },

    /// Extract text from a local PDF file, or "-" for stdin
    Pdf {
        #[arg(value_name = "FILE")]
        input: String,
    },

    /// Download a PDF and extract its text
    PdfUrl {
        #[arg(value_name = "URL")]
        url: String,
    },
}

/// Extract text from web pages and PDFs, then score word count, sentiment and readability
#[derive(Parser, Debug)]
#[command(name = "glean")]
#[command(version)]
#[command(about = "Extract text from web pages and PDFs", long_about = None)]
struct Args {
    #[command(subcommand)]
    mode: Mode,

    /// Output file (default: stdout)
    #[arg(short, long, global = true, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short, long, global = true, default_value = "text", value_name = "FORMAT")]
    format: OutputFormat,

    /// Print only the extracted text (text format only)
    #[arg(long, global = true)]
    content_only: bool,

    /// Analyze the error message instead of failing when extraction fails
    #[arg(long, global = true)]
    inline_errors: bool,

    /// HTTP timeout in seconds
    #[arg(long, global = true, default_value = "30", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, global = true, value_name = "UA")]
    user_agent: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "warn,glean_core=debug,glean=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Turn the selected mode into a request, reading local PDF bytes up front
fn build_request(mode: &Mode) -> anyhow::Result<ExtractionRequest> {
    let request = match mode {
        Mode::Url { url, .. } => ExtractionRequest::Url(url.clone()),
        Mode::PdfUrl { url } => ExtractionRequest::Pdf(PdfSource::Remote(url.clone())),
        Mode::Pdf { input } if input == "-" => {
            let bytes = fetch_stdin().context("Failed to read PDF from stdin")?;
            ExtractionRequest::Pdf(PdfSource::Upload { name: "stdin".to_string(), bytes })
        }
        Mode::Pdf { input } => {
            let bytes = fetch_file(input).with_context(|| format!("Failed to read file: {}", input))?;
            let name = Path::new(input)
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| input.clone());
            ExtractionRequest::Pdf(PdfSource::Upload { name, bytes })
        }
    };

    Ok(request)
}

fn source_step(request: &ExtractionRequest) -> String {
    match request {
        ExtractionRequest::Url(url) => format!("Fetching page {}", url.bright_white().underline()),
        ExtractionRequest::Pdf(PdfSource::Remote(url)) => format!("Downloading PDF {}", url.bright_white().underline()),
        ExtractionRequest::Pdf(PdfSource::Upload { name, bytes }) => {
            format!("Reading PDF {} ({})", name.bright_white(), echo::format_size(bytes.len()))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    if args.verbose {
        echo::print_banner();
    }

    let include_headings = matches!(args.mode, Mode::Url { headings: true, .. });
    let failure_policy = if args.inline_errors { FailurePolicy::Inline } else { FailurePolicy::Propagate };

    let mut builder = GleanConfig::builder()
        .timeout(args.timeout)
        .include_headings(include_headings)
        .failure_policy(failure_policy);
    if let Some(ua) = &args.user_agent {
        builder = builder.user_agent(ua.clone());
    }
    let glean = Glean::with_config(builder.build());

    let request = build_request(&args.mode)?;
    tracing::debug!(source = request.source(), "request ready");

    if args.verbose {
        echo::print_step(1, 3, &source_step(&request));
    }

    let extraction = glean
        .run(&request)
        .await
        .with_context(|| format!("Failed to extract content from {}", request.source()))?;

    if extraction.is_failure() {
        echo::print_warning("Extraction failed; the metrics below describe the error message");
    }

    if args.verbose {
        echo::print_step(2, 3, "Analyzing content");
        if let Some(title) = &extraction.title {
            eprintln!("  {} {}", "Title:".dimmed(), title.bright_white());
        }
        eprintln!(
            "  {} {}",
            "Extracted:".dimmed(),
            echo::format_size(extraction.text.len()).bright_white()
        );
        eprintln!();
    }

    let text_config = TextConfig {
        include_content: true,
        include_analysis: !args.content_only,
        include_headings: !args.content_only,
    };

    if args.verbose {
        echo::print_step(3, 3, "Writing output");
        eprintln!(
            "  {} {}",
            "Format:".dimmed(),
            format!("{:?}", args.format).bright_white()
        );
        eprintln!();
    }

    match (&args.output, args.format) {
        (Some(path), format) => {
            let output = match format {
                OutputFormat::Text => convert_to_text(&extraction, &text_config),
                OutputFormat::Json => convert_to_json(&extraction, &JsonConfig { pretty: true })?,
            };
            fs::write(path, output).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            echo::print_success(&format!("Output written to {}", path.display().bright_white()));
        }
        (None, OutputFormat::Json) => {
            println!("{}", convert_to_json(&extraction, &JsonConfig { pretty: true })?);
        }
        (None, OutputFormat::Text) if io::stdout().is_terminal() && !args.content_only => {
            println!("{}\n", extraction.text.trim_end());
            if let Some(headings) = &extraction.headings {
                echo::print_headings(headings);
                println!();
            }
            echo::print_analysis(&extraction.analysis);
        }
        (None, OutputFormat::Text) => {
            print!("{}", convert_to_text(&extraction, &text_config));
        }
    }

    Ok(())
}
