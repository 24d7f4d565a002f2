//! Command dispatch logic for tablestats

use super::{InitArgs, RenderArgs, init_config, list_keys, render_snapshot};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "tablestats", version, author, long_about = None)]
#[command(about = "Report per-table storage statistics, grouped by keyspace or sorted by any metric")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: TablestatsSubcommand,
}

#[derive(Subcommand, Debug)]
enum TablestatsSubcommand {
    /// Render a statistics snapshot as a report
    Render(Box<RenderArgs>),
    /// List the metrics tables can be sorted by
    Keys,
    /// Generate a default configuration file
    Init(InitArgs),
}

/// Dispatch command-line arguments to the appropriate handler
///
/// This function parses the command-line arguments and executes the corresponding
/// subcommand. It's designed to be called from main.rs with the program arguments.
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if the executed command fails
pub fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    match &Cli::parse_from(args).command {
        TablestatsSubcommand::Render(render_args) => render_snapshot(host, render_args),
        TablestatsSubcommand::Keys => list_keys(host),
        TablestatsSubcommand::Init(init_args) => init_config(host, init_args),
    }
}
