//! Export server implementation.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use handbook_content::{Document, DocumentSource};
use handbook_llms::{find_page, render_full, render_index, render_page, ExportSettings, CONTENT_TYPE};

/// Configuration for the export server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to listen on
    pub port: u16,

    /// Host to bind to
    pub host: String,

    /// Open browser on start
    pub open: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 7777,
            host: "127.0.0.1".to_string(),
            open: true,
        }
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Failed to bind to {0}: {1}")]
    BindError(SocketAddr, String),
}

/// Shared server state.
struct ServerState {
    source: Arc<dyn DocumentSource>,
    settings: ExportSettings,
}

/// Server exposing the LLM exports over HTTP.
pub struct ExportServer {
    config: ServerConfig,
    state: Arc<ServerState>,
}

impl ExportServer {
    /// Create a new export server.
    pub fn new(
        config: ServerConfig,
        source: Arc<dyn DocumentSource>,
        settings: ExportSettings,
    ) -> Self {
        Self {
            config,
            state: Arc::new(ServerState { source, settings }),
        }
    }

    /// Build the router, mounted under the configured base path.
    pub fn router(&self) -> Router {
        let exports = Router::new()
            .route(&format!("/{}", handbook_llms::INDEX_FILE), get(index_handler))
            .route(&format!("/{}", handbook_llms::FULL_FILE), get(full_handler))
            .route("/{*path}", get(page_handler))
            .with_state(Arc::clone(&self.state));

        let base = self.state.settings.base().trim_end_matches('/');
        if base.is_empty() {
            exports
        } else {
            Router::new().nest(base, exports)
        }
    }

    /// Start the export server.
    pub async fn start(self) -> Result<(), ServerError> {
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port)
            .parse()
            .map_err(|e| ServerError::InvalidAddress(format!("{}: {}", self.config.host, e)))?;

        let app = self.router();

        let index_url = format!(
            "http://{}{}{}",
            addr,
            self.state.settings.base(),
            handbook_llms::INDEX_FILE
        );
        tracing::info!("Serving exports at {}", index_url);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        // Open browser if configured
        if self.config.open {
            let _ = open::that(&index_url);
        }

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        Ok(())
    }
}

/// Fetch the collection off the async runtime.
async fn load_documents(state: &Arc<ServerState>) -> Result<Vec<Document>, String> {
    let state = Arc::clone(state);

    tokio::task::spawn_blocking(move || state.source.documents())
        .await
        .map_err(|e| e.to_string())?
        .map_err(|e| e.to_string())
}

fn text_response(status: StatusCode, body: String) -> Response {
    (status, [(header::CONTENT_TYPE, CONTENT_TYPE)], body).into_response()
}

fn load_failed(message: String) -> Response {
    tracing::error!("Failed to load documents: {}", message);
    text_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("Failed to load documents: {message}\n"),
    )
}

/// Handler for `llms.txt`.
async fn index_handler(State(state): State<Arc<ServerState>>) -> Response {
    match load_documents(&state).await {
        Ok(docs) => text_response(StatusCode::OK, render_index(&docs, &state.settings)),
        Err(e) => load_failed(e),
    }
}

/// Handler for `llms-full.txt`.
async fn full_handler(State(state): State<Arc<ServerState>>) -> Response {
    match load_documents(&state).await {
        Ok(docs) => text_response(StatusCode::OK, render_full(&docs, &state.settings)),
        Err(e) => load_failed(e),
    }
}

/// Handler for per-document exports.
async fn page_handler(
    State(state): State<Arc<ServerState>>,
    Path(path): Path<String>,
) -> Response {
    let docs = match load_documents(&state).await {
        Ok(docs) => docs,
        Err(e) => return load_failed(e),
    };

    match find_page(&docs, &path) {
        Some(doc) => text_response(StatusCode::OK, render_page(doc)),
        None => text_response(StatusCode::NOT_FOUND, format!("Not found: /{path}\n")),
    }
}
