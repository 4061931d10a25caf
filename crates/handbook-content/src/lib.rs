//! Documentation content loading.
//!
//! This crate parses markdown/MDX pages with YAML frontmatter into [`Document`]s
//! and exposes them through the [`DocumentSource`] trait, which every export
//! surface reads from.

pub mod changelog;
pub mod collection;
pub mod document;
pub mod frontmatter;
pub mod parser;

pub use changelog::changelog_page;
pub use collection::{CollectionError, DocumentSource, FsCollection, MemoryCollection};
pub use document::Document;
pub use frontmatter::{Frontmatter, FrontmatterError, Sidebar};
pub use parser::{document_id, parse_page, ParsedPage};
