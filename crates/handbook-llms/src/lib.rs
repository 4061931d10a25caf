//! Plain-text exports of documentation for language models.
//!
//! Three exports are produced from a document collection:
//! - `llms.txt`: a table of contents linking to every ordered page
//! - `llms-full.txt`: the raw body of every ordered page
//! - `{category}/{slug}.md`: one page, with rendering-only imports removed

pub mod export;
pub mod route;
pub mod sanitize;
pub mod settings;

pub use export::{ordered, render_full, render_index, render_page};
pub use route::{find_page, page_routes, ExportRoute};
pub use sanitize::remove_imports;
pub use settings::{ExportSettings, SettingsError};

/// Content type of every export.
pub const CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// File name of the table of contents export.
pub const INDEX_FILE: &str = "llms.txt";

/// File name of the full text export.
pub const FULL_FILE: &str = "llms-full.txt";
