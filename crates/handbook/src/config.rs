//! Configuration file (handbook.toml).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use handbook_content::FsCollection;
use handbook_llms::ExportSettings;
use serde::Deserialize;

/// Configuration file structure.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub docs: DocsConfig,
}

#[derive(Debug, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Origin links in llms.txt are resolved against
    #[serde(default = "default_url")]
    pub url: String,
    /// Base path the site is deployed under
    #[serde(default = "default_base")]
    pub base: String,
}

#[derive(Debug, Deserialize)]
pub struct DocsConfig {
    #[serde(default = "default_docs_dir")]
    pub dir: String,
    #[serde(default = "default_output")]
    pub output: String,
}

fn default_title() -> String {
    "Documentation".to_string()
}
fn default_url() -> String {
    "http://localhost:4000".to_string()
}
fn default_base() -> String {
    "/".to_string()
}
fn default_docs_dir() -> String {
    "docs".to_string()
}
fn default_output() -> String {
    "dist".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            description: String::new(),
            url: default_url(),
            base: default_base(),
        }
    }
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            dir: default_docs_dir(),
            output: default_output(),
        }
    }
}

impl ConfigFile {
    /// Export settings derived from the `[site]` table.
    pub fn export_settings(&self) -> Result<ExportSettings> {
        ExportSettings::new(
            &self.site.title,
            &self.site.description,
            &self.site.url,
            &self.site.base,
        )
        .context("Invalid [site] configuration")
    }

    /// The docs directory as a document collection.
    pub fn collection(&self, include_drafts: bool) -> FsCollection {
        FsCollection::new(&self.docs.dir).with_drafts(include_drafts)
    }

    /// Default output directory.
    pub fn output_dir(&self) -> PathBuf {
        PathBuf::from(&self.docs.output)
    }
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        tracing::debug!("No {} found, using defaults", path.display());
        return Ok(ConfigFile::default());
    }

    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    tracing::info!("Loaded config from {}", path.display());
    Ok(config)
}
