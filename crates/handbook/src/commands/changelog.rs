//! Changelog sync command.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use handbook_content::changelog_page;

use crate::config::ConfigFile;

/// Write the root changelog into the docs as a page.
pub async fn run(config: &ConfigFile, source: &Path, dest: &Path) -> Result<()> {
    let raw = fs::read_to_string(source)
        .with_context(|| format!("Failed to read {}", source.display()))?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    fs::write(dest, changelog_page(&raw, &config.site.title))
        .with_context(|| format!("Failed to write {}", dest.display()))?;

    tracing::info!("Synced {} -> {}", source.display(), dest.display());

    Ok(())
}
