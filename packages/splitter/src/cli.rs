//! Command-line interface for the splitter.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use console::style;

use crate::config::SplitterConfig;
use crate::error::{Result, SplitterError};
use crate::length::LengthUnit;
use crate::presets::default_separator_sets;
use crate::splitting::RecursiveSplitter;
use crate::types::ChunkRecord;

/// Recursive splitter - Split text into size-bounded chunks along natural boundaries.
#[derive(Parser)]
#[command(name = "recursive-splitter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split a text file into chunks.
    Split {
        /// Input file, or "-" for stdin
        input: PathBuf,

        /// Maximum chunk length (default: SPLITTER_CHUNK_SIZE or 4000)
        #[arg(short = 's', long)]
        chunk_size: Option<usize>,

        /// Overlap between chunks (default: SPLITTER_CHUNK_OVERLAP or 200).
        /// Must not exceed the chunk size, so pass it when `--chunk-size` is below 200
        #[arg(short = 'o', long)]
        chunk_overlap: Option<usize>,

        /// Separator pattern, highest priority first (repeatable)
        #[arg(long = "separator", conflicts_with = "preset")]
        separators: Vec<String>,

        /// Named separator set (see `presets`)
        #[arg(short, long)]
        preset: Option<String>,

        /// Unit used to measure chunk length
        #[arg(short, long, default_value = "graphemes")]
        length: LengthUnit,

        /// Keep leading and trailing whitespace of chunks
        #[arg(long)]
        no_strip: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List the built-in separator sets.
    Presets,
}

/// Output format for the split command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Yaml,
    Json,
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Split {
            input,
            chunk_size,
            chunk_overlap,
            separators,
            preset,
            length,
            no_strip,
            format,
        } => {
            let mut config = SplitterConfig::from_env()?
                .with_length_function(length.length_function())
                .with_strip_whitespace(!no_strip);
            if let Some(size) = chunk_size {
                config = config.with_chunk_size(size);
            }
            if let Some(overlap) = chunk_overlap {
                config = config.with_chunk_overlap(overlap);
            }
            if let Some(name) = preset.as_deref() {
                let registry = default_separator_sets();
                config = config.with_separator_set(registry.require(name)?);
            } else if !separators.is_empty() {
                config = config.with_separators(separators.iter().map(|s| unescape(s)));
            }

            split_command(&input, config, format)
        }
        Commands::Presets => {
            presets_command();
            Ok(())
        }
    }
}

/// Execute the split command.
fn split_command(input: &Path, config: SplitterConfig, format: OutputFormat) -> Result<()> {
    let text = read_input(input)?;
    let splitter = RecursiveSplitter::new(config)?;
    let length = &splitter.config().length_function;

    let records: Vec<ChunkRecord> = splitter
        .split_text(&text)
        .into_iter()
        .enumerate()
        .map(|(index, text)| ChunkRecord {
            index,
            length: length.measure(&text),
            text,
        })
        .collect();

    tracing::info!(
        chunks = records.len(),
        chunk_size = splitter.config().chunk_size,
        "Split input"
    );

    match format {
        OutputFormat::Yaml => print!("{}", serde_yaml_ng::to_string(&records)?),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
        OutputFormat::Text => {
            for record in &records {
                println!(
                    "{} {}",
                    style(format!("--- chunk {}", record.index)).bold(),
                    style(format!("({} {})", record.length, length.unit())).dim()
                );
                println!("{}", record.text);
            }
        }
    }

    Ok(())
}

/// Execute the presets command.
fn presets_command() {
    let registry = default_separator_sets();
    for name in registry.names() {
        if let Some(set) = registry.get(name) {
            let separators: Vec<String> = set
                .separators
                .iter()
                .map(|s| format!("{s:?}"))
                .collect();
            println!("{} {}", style(name).cyan().bold(), separators.join(", "));
        }
    }
}

/// Read the input file, or stdin for "-".
fn read_input(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }

    if !input.is_file() {
        return Err(SplitterError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Input file does not exist: {}", input.display()),
        )));
    }

    Ok(std::fs::read_to_string(input)?)
}

/// Turn the shell escapes `\n` and `\t` into the characters they name.
///
/// Other backslash sequences, `\\` included, pass through unchanged so regex
/// escapes like `\.` or `\s` still reach the pattern compiler.
fn unescape(separator: &str) -> String {
    let mut out = String::with_capacity(separator.len());
    let mut chars = separator.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('n') => {
                out.push('\n');
                chars.next();
            }
            Some('t') => {
                out.push('\t');
                chars.next();
            }
            Some('\\') => {
                out.push_str("\\\\");
                chars.next();
            }
            _ => out.push('\\'),
        }
    }
    out
}
