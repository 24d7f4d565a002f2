use super::Host;
use super::config::{CONFIG_FILE_NAME, Config};
use crate::Result;
use camino::Utf8PathBuf;
use clap::Parser;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output configuration file path (default is `tablestats.toml` in the current directory)
    #[arg(value_name = "PATH")]
    pub output: Option<Utf8PathBuf>,
}

pub fn init_config<H: Host>(host: &mut H, args: &InitArgs) -> Result<()> {
    let output = args.output.clone().unwrap_or_else(|| Utf8PathBuf::from(CONFIG_FILE_NAME));

    match Config::save_default(&output) {
        Ok(()) => {
            let _ = writeln!(host.output(), "Generated default configuration file: {output}");
            Ok(())
        }
        Err(e) => {
            let _ = writeln!(host.error(), "❌ {e}");
            host.exit(1);
            Err(e)
        }
    }
}
