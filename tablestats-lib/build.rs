//! This build script validates the default configuration file (`default_config.toml`)

use camino::Utf8PathBuf;
use ohno::{IntoAppError, bail};
use std::env;
use std::fs;
use std::process;

type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

const KNOWN_KEYS: &[&str] = &["sort_key", "ascending", "top", "human_readable", "format"];
const KNOWN_FORMATS: &[&str] = &["text", "json"];

fn main() {
    match inner_main() {
        Ok(()) => {
            println!("cargo:rerun-if-changed=default_config.toml");
            process::exit(0);
        }
        Err(e) => {
            eprintln!("unable to validate default_config.toml: {e:?}");
            process::exit(1);
        }
    }
}

fn inner_main() -> Result<()> {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").into_app_err("CARGO_MANIFEST_DIR should be set during build")?;
    let config_path = Utf8PathBuf::from(&manifest_dir).join("default_config.toml");

    let text = fs::read_to_string(&config_path).into_app_err_with(|| format!("reading '{config_path}'"))?;
    let table = text.parse::<toml::Table>().into_app_err_with(|| format!("parsing '{config_path}'"))?;

    for key in table.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            bail!("unknown key '{key}'");
        }
    }

    if let Some(format) = table.get("format")
        && !format.as_str().is_some_and(|f| KNOWN_FORMATS.contains(&f))
    {
        bail!("format must be one of {KNOWN_FORMATS:?}, got {format}");
    }

    Ok(())
}
