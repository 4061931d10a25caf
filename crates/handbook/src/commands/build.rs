//! Static export build command.

use std::path::PathBuf;

use anyhow::Result;
use handbook_static::{BuildConfig, StaticBuilder};

use crate::config::ConfigFile;

/// Run the build command.
pub async fn run(config: &ConfigFile, output: Option<PathBuf>, drafts: bool) -> Result<()> {
    tracing::info!("Building exports from {}...", config.docs.dir);

    let build_config = BuildConfig {
        output_dir: output.unwrap_or_else(|| config.output_dir()),
        settings: config.export_settings()?,
    };

    let result = StaticBuilder::new(build_config, Box::new(config.collection(drafts)))
        .build()
        .await?;

    tracing::info!(
        "Built llms.txt, llms-full.txt and {} pages in {}ms",
        result.pages,
        result.duration_ms
    );

    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}
