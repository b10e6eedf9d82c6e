use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

use followgraph::core::{AnalyzerConfig, CorpusAnalyzer};
use followgraph::formatters::{DotFormatter, JsonCompactFormatter, ReportFormatter, TextFormatter};
use followgraph::observability::{init_logging, LogConfig, LogFormat};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "followgraph",
    version,
    author = "followgraph developers",
    about = "Guess who follows whom from @-mentions and rank users by follower count"
)]
struct Cli {
    /// Corpus file (.json, .jsonl, .ndjson) or directory to scan
    #[arg(short, long, value_name = "PATH", env = "FOLLOWGRAPH_INPUT")]
    input: PathBuf,

    /// Write the report here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Report format
    #[arg(
        short,
        long,
        value_name = "FORMAT",
        value_enum,
        env = "FOLLOWGRAPH_FORMAT",
        default_value_t = OutputFormat::Text
    )]
    format: OutputFormat,

    /// Only list the N most followed users
    #[arg(short, long, value_name = "N", env = "FOLLOWGRAPH_TOP")]
    top: Option<usize>,

    /// Comma-separated corpus formats to pick up when scanning a directory
    #[arg(
        long,
        value_name = "FORMATS",
        value_delimiter = ',',
        default_value = "json,jsonl"
    )]
    corpus_formats: Vec<String>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, value_name = "LEVEL", env = "FOLLOWGRAPH_LOG", default_value = "info")]
    log_level: String,

    /// Log line layout on stderr
    #[arg(long, value_name = "STYLE", value_enum, default_value_t = LogStyle::Text)]
    log_format: LogStyle,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
#[value(rename_all = "kebab-case")]
enum LogStyle {
    Text,
    Compact,
}

impl From<LogStyle> for LogFormat {
    fn from(style: LogStyle) -> Self {
        match style {
            LogStyle::Text => LogFormat::Text,
            LogStyle::Compact => LogFormat::Compact,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
#[value(rename_all = "kebab-case")]
enum OutputFormat {
    Text,
    Json,
    Dot,
}

impl OutputFormat {
    fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Dot => "dot",
        }
    }

    fn formatter(self) -> Box<dyn ReportFormatter> {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new()),
            OutputFormat::Json => Box::new(JsonCompactFormatter::new()),
            OutputFormat::Dot => Box::new(DotFormatter::new()),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&LogConfig {
        default_filter: cli.log_level.clone(),
        format: cli.log_format.into(),
    })?;
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        input,
        output,
        format,
        top,
        corpus_formats,
        log_level: _,
        log_format: _,
    } = cli;

    let start_time = Instant::now();

    let formats: Vec<String> = corpus_formats
        .into_iter()
        .map(|f| f.trim().to_ascii_lowercase())
        .filter(|f| !f.is_empty())
        .collect();

    info!(
        input = %input.display(),
        format = format.as_str(),
        ?top,
        ?formats,
        "starting analysis"
    );

    let analyzer = CorpusAnalyzer::with_config(AnalyzerConfig { formats, top });
    let report = analyzer
        .analyze(&input)
        .with_context(|| format!("failed to analyze {}", input.display()))?;

    if report.files_skipped > 0 {
        warn!(
            skipped = report.files_skipped,
            loaded = report.files_loaded,
            "some corpus files could not be loaded"
        );
    }

    let formatter = format.formatter();
    match &output {
        Some(path) => {
            formatter
                .format_to_file(&report, path)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(output = %path.display(), "report written");
        }
        None => {
            let rendered = formatter.render(&report)?;
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            if !rendered.ends_with('\n') {
                writeln!(stdout)?;
            }
        }
    }

    info!(
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        "analysis finished"
    );
    Ok(())
}
