//! HTTP server for handbook LLM exports.
//!
//! Serves `llms.txt`, `llms-full.txt` and per-page plain-text exports, reading
//! the document collection fresh on every request.

pub mod server;

pub use server::{ExportServer, ServerConfig, ServerError};
