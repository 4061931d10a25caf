//! Development export server command.

use std::sync::Arc;

use anyhow::Result;
use handbook_server::{ExportServer, ServerConfig};

use crate::config::ConfigFile;

/// Run the export server against the live docs directory.
pub async fn run(config: &ConfigFile, port: u16, open: bool, drafts: bool) -> Result<()> {
    tracing::info!("Starting export server on port {}", port);

    let server_config = ServerConfig {
        port,
        open,
        ..Default::default()
    };

    ExportServer::new(
        server_config,
        Arc::new(config.collection(drafts)),
        config.export_settings()?,
    )
    .start()
    .await?;

    Ok(())
}
