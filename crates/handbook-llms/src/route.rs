//! Routes of the per-document exports.

use handbook_content::Document;

/// Extension of per-document export files.
pub const PAGE_EXTENSION: &str = "md";

/// Extensions accepted when resolving a request path.
const ACCEPTED_EXTENSIONS: [&str; 2] = [".md", ".txt"];

/// Location of one document's plain-text export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRoute {
    /// First id segment
    pub category: String,
    /// Remaining id segments, possibly empty
    pub slug: String,
}

impl ExportRoute {
    /// Split a document id into category and slug.
    pub fn from_document(doc: &Document) -> Self {
        Self {
            category: doc.category().to_string(),
            slug: doc.slug().to_string(),
        }
    }

    /// Site-relative path, e.g. `components/props.md`.
    ///
    /// A single-segment id has no slug and maps to `{category}.md`.
    pub fn path(&self) -> String {
        if self.slug.is_empty() {
            format!("{}.{}", self.category, PAGE_EXTENSION)
        } else {
            format!("{}/{}.{}", self.category, self.slug, PAGE_EXTENSION)
        }
    }
}

/// Routes for every document that opted into plain-text export.
pub fn page_routes(docs: &[Document]) -> Vec<(ExportRoute, &Document)> {
    docs.iter()
        .filter(|doc| doc.is_in_llms)
        .map(|doc| (ExportRoute::from_document(doc), doc))
        .collect()
}

/// Resolve a request path such as `/components/props.md` to its document.
pub fn find_page<'a>(docs: &'a [Document], request_path: &str) -> Option<&'a Document> {
    let path = request_path.trim_start_matches('/');

    let id = ACCEPTED_EXTENSIONS
        .iter()
        .find_map(|ext| path.strip_suffix(ext))?;

    let found = docs.iter().find(|doc| doc.is_in_llms && doc.id == id);
    if found.is_none() {
        tracing::debug!("No exported page for {}", request_path);
    }
    found
}
