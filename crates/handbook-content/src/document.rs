//! The document model shared by every export.

use crate::frontmatter::Frontmatter;

/// A single documentation page.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Slash-delimited path; first segment is the category
    pub id: String,

    /// Display title
    pub title: String,

    /// Display description
    pub description: String,

    /// Raw markdown/MDX source, without frontmatter
    pub body: Option<String>,

    /// Rank in ordered exports; `None` excludes the page from them
    pub sidebar_order: Option<f64>,

    /// Whether the page gets its own plain-text export
    pub is_in_llms: bool,
}

impl Document {
    /// Build a document from its id, frontmatter and body.
    pub fn from_frontmatter(id: String, frontmatter: Frontmatter, body: String) -> Self {
        Self {
            id,
            title: frontmatter.title,
            description: frontmatter.description,
            body: Some(body),
            sidebar_order: frontmatter.sidebar.order,
            is_in_llms: frontmatter.is_in_llms,
        }
    }

    /// First segment of the id.
    pub fn category(&self) -> &str {
        self.id.split('/').next().unwrap_or_default()
    }

    /// Everything after the first segment, possibly empty.
    pub fn slug(&self) -> &str {
        self.id.split_once('/').map(|(_, rest)| rest).unwrap_or_default()
    }

    /// Body text, with a missing body read as empty.
    pub fn body_text(&self) -> &str {
        self.body.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontmatter::Sidebar;

    fn doc(id: &str) -> Document {
        Document {
            id: id.to_string(),
            title: "T".to_string(),
            description: String::new(),
            body: None,
            sidebar_order: None,
            is_in_llms: true,
        }
    }

    #[test]
    fn splits_category_and_slug() {
        let nested = doc("coding-patterns/hooks/custom-hooks");
        assert_eq!(nested.category(), "coding-patterns");
        assert_eq!(nested.slug(), "hooks/custom-hooks");

        let flat = doc("changelog");
        assert_eq!(flat.category(), "changelog");
        assert_eq!(flat.slug(), "");
    }

    #[test]
    fn missing_body_reads_as_empty() {
        assert_eq!(doc("a/b").body_text(), "");
    }

    #[test]
    fn copies_frontmatter_fields() {
        let fm = Frontmatter {
            title: "Routing".to_string(),
            description: "Route conventions".to_string(),
            sidebar: Sidebar {
                order: Some(11.0),
                label: None,
            },
            is_in_llms: false,
            ..Default::default()
        };

        let doc = Document::from_frontmatter("routing/basics".to_string(), fm, "text".to_string());

        assert_eq!(doc.title, "Routing");
        assert_eq!(doc.description, "Route conventions");
        assert_eq!(doc.sidebar_order, Some(11.0));
        assert!(!doc.is_in_llms);
        assert_eq!(doc.body.as_deref(), Some("text"));
    }
}
