//! Document collections.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::document::Document;
use crate::frontmatter::FrontmatterError;
use crate::parser::{document_id, parse_page};

/// Errors that can occur while loading a collection.
#[derive(Debug, thiserror::Error)]
pub enum CollectionError {
    #[error("Docs directory not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid frontmatter in {}: {source}", .path.display())]
    Frontmatter {
        path: PathBuf,
        #[source]
        source: FrontmatterError,
    },

    #[error("Missing frontmatter (a title is required): {}", .0.display())]
    MissingFrontmatter(PathBuf),

    #[error("Duplicate document id: {0}")]
    DuplicateId(String),
}

/// Supplies the documents every export reads from.
///
/// Implementations return a fully materialized snapshot on every call.
pub trait DocumentSource: Send + Sync {
    /// Load every document in the collection.
    fn documents(&self) -> Result<Vec<Document>, CollectionError>;

    /// Load the documents matching `filter`, or all of them.
    fn get_documents(
        &self,
        filter: Option<&dyn Fn(&Document) -> bool>,
    ) -> Result<Vec<Document>, CollectionError> {
        let docs = self.documents()?;
        Ok(match filter {
            Some(keep) => docs.into_iter().filter(|doc| keep(doc)).collect(),
            None => docs,
        })
    }
}

/// A collection read from a directory of `.md` and `.mdx` files.
#[derive(Debug, Clone)]
pub struct FsCollection {
    docs_dir: PathBuf,
    include_drafts: bool,
}

impl FsCollection {
    /// Create a collection rooted at `docs_dir`.
    pub fn new(docs_dir: impl Into<PathBuf>) -> Self {
        Self {
            docs_dir: docs_dir.into(),
            include_drafts: false,
        }
    }

    /// Include pages marked `draft: true`.
    pub fn with_drafts(mut self, include_drafts: bool) -> Self {
        self.include_drafts = include_drafts;
        self
    }

    /// Root directory of the collection.
    pub fn docs_dir(&self) -> &Path {
        &self.docs_dir
    }

    fn load_file(&self, path: &Path) -> Result<Option<Document>, CollectionError> {
        let source = fs::read_to_string(path).map_err(|source| CollectionError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let page = parse_page(&source).map_err(|source| CollectionError::Frontmatter {
            path: path.to_path_buf(),
            source,
        })?;

        let Some(frontmatter) = page.frontmatter else {
            return Err(CollectionError::MissingFrontmatter(path.to_path_buf()));
        };

        if frontmatter.draft && !self.include_drafts {
            tracing::debug!("Skipping draft page {}", path.display());
            return Ok(None);
        }

        let relative = path.strip_prefix(&self.docs_dir).unwrap_or(path);
        let id = document_id(relative, &frontmatter);

        Ok(Some(Document::from_frontmatter(id, frontmatter, page.body)))
    }
}

impl DocumentSource for FsCollection {
    fn documents(&self) -> Result<Vec<Document>, CollectionError> {
        if !self.docs_dir.exists() {
            return Err(CollectionError::NotFound(self.docs_dir.clone()));
        }

        let mut docs = Vec::new();
        let mut seen = HashSet::new();

        for entry in WalkDir::new(&self.docs_dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();

            if !path.is_file() {
                continue;
            }

            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
            if ext != "mdx" && ext != "md" {
                continue;
            }

            let Some(doc) = self.load_file(path)? else {
                continue;
            };

            if !seen.insert(doc.id.clone()) {
                return Err(CollectionError::DuplicateId(doc.id));
            }

            tracing::debug!("Loaded {} from {}", doc.id, path.display());
            docs.push(doc);
        }

        Ok(docs)
    }
}

/// An in-memory collection.
#[derive(Debug, Clone, Default)]
pub struct MemoryCollection {
    docs: Vec<Document>,
}

impl MemoryCollection {
    /// Wrap an already loaded set of documents.
    pub fn new(docs: Vec<Document>) -> Self {
        Self { docs }
    }
}

impl DocumentSource for MemoryCollection {
    fn documents(&self) -> Result<Vec<Document>, CollectionError> {
        Ok(self.docs.clone())
    }
}
