use super::Host;
use crate::Result;
use crate::ordering::SortKey;
use std::io::Write;

/// List every sort key with its description, one per line.
pub fn list_keys<H: Host>(host: &mut H) -> Result<()> {
    let width = SortKey::all().map(|key| key.name().len()).max().unwrap_or(0);

    let mut listing = String::new();
    for key in SortKey::all() {
        listing.push_str(&format!("{:<width$}  {}", key.name(), key.description()));
        if !key.aliases().is_empty() {
            listing.push_str(&format!(" (also: {})", key.aliases().join(", ")));
        }
        listing.push('\n');
    }

    host.output().write_all(listing.as_bytes())?;
    Ok(())
}
