use super::Host;
use super::common::{LogLevel, ReportFormat, init_logging};
use super::config::Config;
use crate::Result;
use crate::ordering::SortKey;
use crate::reports::{ReportOptions, generate_json, generate_text};
use crate::stats::Snapshot;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ohno::IntoAppError;
use std::fs;
use std::io::Write;

const LOG_TARGET: &str = "    render";

#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// JSON snapshot of keyspace and table statistics
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: Utf8PathBuf,

    /// Sort tables by this metric and list them without keyspace grouping (see `tablestats keys`)
    #[arg(long, short = 's', value_name = "KEY")]
    pub sort: Option<String>,

    /// Sort smallest first instead of largest first
    #[arg(long)]
    pub ascending: bool,

    /// Show only the first N tables of a sorted listing (0 shows all)
    #[arg(long, short = 't', value_name = "N")]
    pub top: Option<usize>,

    /// Size fields in the snapshot use human-readable units such as "5 KiB"
    #[arg(long, short = 'H')]
    pub human_readable: bool,

    /// Report output format
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<ReportFormat>,

    /// Path to configuration file (default is `tablestats.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,
}

/// Render a snapshot file to the host's output.
///
/// Nothing is written to the output unless the whole report was produced.
pub fn render_snapshot<H: Host>(host: &mut H, args: &RenderArgs) -> Result<()> {
    init_logging(args.log_level);

    match render_to_string(Utf8Path::new("."), args) {
        Ok(report) => {
            let _ = host.output().write_all(report.as_bytes());
            Ok(())
        }
        Err(e) => {
            let _ = writeln!(host.error(), "❌ {e}");
            host.exit(1);
            Err(e)
        }
    }
}

fn render_to_string(search_dir: &Utf8Path, args: &RenderArgs) -> Result<String> {
    let config = Config::load(search_dir, args.config.as_ref())?;

    let sort_key = args
        .sort
        .as_deref()
        .or(config.sort_key.as_deref())
        .filter(|name| !name.is_empty())
        .map(SortKey::parse)
        .transpose()?;

    let options = ReportOptions {
        sort_key,
        ascending: args.ascending || config.ascending,
        top: args.top.unwrap_or(config.top),
        human_readable: args.human_readable || config.human_readable,
    };
    let format = args.format.unwrap_or(config.format);

    let snapshot = load_snapshot(&args.snapshot)?;

    log::info!(
        target: LOG_TARGET,
        "Rendering {} keyspaces as {format}, sorted by {}",
        snapshot.keyspaces.len(),
        sort_key.map_or("keyspace", |key| key.name())
    );

    let mut report = String::new();
    match format {
        ReportFormat::Text => generate_text(&snapshot, &options, &mut report)?,
        ReportFormat::Json => {
            generate_json(&snapshot, &options, &mut report)?;
            report.push('\n');
        }
    }

    Ok(report)
}

/// Read and parse a JSON snapshot file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid snapshot
pub fn load_snapshot(path: &Utf8Path) -> Result<Snapshot> {
    let text = fs::read_to_string(path).into_app_err_with(|| format!("reading snapshot file '{path}'"))?;
    let snapshot: Snapshot = serde_json::from_str(&text).into_app_err_with(|| format!("parsing snapshot file '{path}'"))?;

    log::debug!(
        target: LOG_TARGET,
        "Loaded {} tables in {} keyspaces from '{path}'",
        snapshot.tables().count(),
        snapshot.keyspaces.len()
    );

    Ok(snapshot)
}
