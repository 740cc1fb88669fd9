//! Tagcell CLI - classify, format and render tagged cell values

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tagcell::prelude::*;
use tagcell::{CsvWriteOptions, LineTerminator};
use tracing_subscriber::EnvFilter;

mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "tagcell")]
#[command(author, version, about = "Classify, format and render tagged cell values")]
#[command(propagate_version = true)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Locale code (en, es, fr, it, pl, ru, zh)
    #[arg(short, long, env = "TAGCELL_LOCALE", global = true)]
    locale: Option<String>,

    /// JSON file with default locale and number options
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ValueArgs {
    /// Semantic kind (string, date, time, timestamp, number, checkbox, ...)
    #[arg(short, long, value_parser = parse_kind)]
    kind: SemanticKind,

    /// Fixed number of decimals
    #[arg(short, long)]
    decimals: Option<u32>,

    /// Number type code (P, VE, VL, VV)
    #[arg(short = 't', long = "type")]
    number_type: Option<String>,

    /// Decimal separator to use instead of the locale's
    #[arg(short, long)]
    separator: Option<char>,

    /// Date/time pattern (YYYY-MM-DD, L LTS, *DMYY, ...)
    #[arg(short, long)]
    pattern: Option<String>,
}

impl ValueArgs {
    fn options(&self, config: &Config) -> FormatOptions {
        let number_type = self
            .number_type
            .as_deref()
            .or(config.number_type.as_deref())
            .map(NumberType::from_code)
            .unwrap_or_default();
        FormatOptions {
            decimals: self.decimals.or(config.decimals),
            output_separator: self.separator.or(config.output_separator),
            number_type,
            pattern: self.pattern.clone(),
            ..FormatOptions::default()
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the semantic kind of an object tag
    Classify {
        /// Type code
        #[arg(long)]
        t: String,

        /// Type parameter
        #[arg(long, default_value = "")]
        p: String,
    },

    /// Format a canonical value for display
    Format {
        /// Canonical value (ISO dates, `.` decimals)
        value: String,

        #[command(flatten)]
        args: ValueArgs,
    },

    /// Parse a display value back to its canonical form
    Parse {
        /// Display or user-entered value
        display: String,

        #[command(flatten)]
        args: ValueArgs,
    },

    /// Render a dataset's display values as CSV
    Render {
        /// Input dataset (json, csv)
        input: PathBuf,

        /// Output CSV file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Field delimiter (default: comma)
        #[arg(short, long, default_value = ",")]
        delimiter: char,
    },

    /// List supported locales
    Locales,
}

fn parse_kind(name: &str) -> std::result::Result<SemanticKind, String> {
    SemanticKind::from_name(name).ok_or_else(|| format!("unknown kind '{name}'"))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let config = Config::load(cli.config.as_deref())?;
    let code = cli
        .locale
        .or_else(|| config.locale.clone())
        .unwrap_or_else(|| Locale::default().code().to_string());
    let ctx = tagcell::set_locale(&code).with_context(|| format!("Cannot use locale '{code}'"))?;

    match cli.command {
        Commands::Classify { t, p } => {
            let tag = ObjectTag::typed(t, p);
            println!("{}", classify(Some(&tag)).as_str());
            Ok(())
        }
        Commands::Format { value, args } => format_value(&value, &args, &config, &ctx),
        Commands::Parse { display, args } => parse_value(&display, &args, &config, &ctx),
        Commands::Render {
            input,
            output,
            delimiter,
        } => render(&input, output.as_deref(), delimiter, &ctx),
        Commands::Locales => {
            list_locales();
            Ok(())
        }
    }
}

fn format_value(value: &str, args: &ValueArgs, config: &Config, ctx: &LocaleContext) -> Result<()> {
    let opts = args.options(config);
    let canonical = normalize(RawValue::Text(value), args.kind, opts.pattern.as_deref(), ctx)
        .with_context(|| format!("'{value}' is not a valid {}", args.kind.as_str()))?;
    println!("{}", format(&canonical, args.kind, ctx, &opts));
    Ok(())
}

fn parse_value(display: &str, args: &ValueArgs, config: &Config, ctx: &LocaleContext) -> Result<()> {
    let opts = args.options(config);
    let canonical = parse_display(display, args.kind, ctx, &opts)
        .with_context(|| format!("'{display}' is not a valid {}", args.kind.as_str()))?;
    println!("{}", canonical.to_canonical_string());
    Ok(())
}

fn render(
    input: &Path,
    output: Option<&Path>,
    delimiter: char,
    ctx: &Arc<LocaleContext>,
) -> Result<()> {
    let dataset =
        Dataset::open(input).with_context(|| format!("Failed to open '{}'", input.display()))?;
    let delimiter = u8::try_from(delimiter).context("Delimiter must be a single-byte character")?;
    let options = CsvWriteOptions {
        delimiter,
        line_terminator: LineTerminator::LF,
        ..Default::default()
    };

    if let Some(output_path) = output {
        CsvWriter::write_file(&dataset, output_path, ctx, &options)
            .with_context(|| format!("Failed to write '{}'", output_path.display()))?;
        eprintln!(
            "Wrote {} rows to '{}'",
            dataset.rows.len(),
            output_path.display()
        );
    } else {
        CsvWriter::write(&dataset, io::stdout().lock(), ctx, &options)
            .context("Failed to write to stdout")?;
    }
    Ok(())
}

fn list_locales() {
    for locale in Locale::ALL {
        let ctx = LocaleContext::new(locale);
        let patterns = ctx.patterns();
        println!(
            "{}\t{}\tdecimal {:?}\tgroup {:?}\t{}\t{}",
            locale.code(),
            locale.name(),
            ctx.decimal_separator(),
            ctx.group_separator(),
            patterns.date,
            patterns.time_with_seconds,
        );
    }
}
