//! Preview server command.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use axum::http::{header, HeaderValue};
use axum::response::Response;
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

/// Run the serve command.
pub async fn run(port: u16, dir: PathBuf) -> Result<()> {
    if !dir.exists() {
        anyhow::bail!(
            "Directory not found: {}. Run 'handbook build' first.",
            dir.display()
        );
    }

    let addr: SocketAddr = format!("127.0.0.1:{}", port)
        .parse()
        .context("Invalid address")?;

    tracing::info!("Serving {} at http://{}", dir.display(), addr);

    let app = preview_router(&dir);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    let url = format!("http://{}/{}", addr, handbook_llms::INDEX_FILE);
    let _ = open::that(&url);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Static file router over a build output directory.
///
/// Exports are served with the same content type the export server uses.
fn preview_router(dir: &Path) -> Router {
    Router::new()
        .fallback_service(ServeDir::new(dir))
        .layer(SetResponseHeaderLayer::overriding(
            header::CONTENT_TYPE,
            export_content_type,
        ))
}

fn export_content_type(response: &Response) -> Option<HeaderValue> {
    let current = response.headers().get(header::CONTENT_TYPE)?.to_str().ok()?;
    let mime = current.split(';').next().unwrap_or_default().trim();

    matches!(mime, "text/markdown" | "text/plain" | "text/x-markdown")
        .then(|| HeaderValue::from_static(handbook_llms::CONTENT_TYPE))
}
