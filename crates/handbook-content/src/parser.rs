//! Documentation page parser.

use std::path::Path;

use crate::frontmatter::{extract_frontmatter, Frontmatter, FrontmatterError};

/// A parsed documentation page.
#[derive(Debug, Clone)]
pub struct ParsedPage {
    /// Parsed frontmatter (if present)
    pub frontmatter: Option<Frontmatter>,

    /// Markdown/MDX body (without frontmatter)
    pub body: String,
}

/// Parse a page into its frontmatter and body.
pub fn parse_page(source: &str) -> Result<ParsedPage, FrontmatterError> {
    let (frontmatter, body) = extract_frontmatter(source)?;

    Ok(ParsedPage {
        frontmatter,
        body: body.to_string(),
    })
}

/// Derive a document id from its path relative to the docs directory.
///
/// A `slug` in the frontmatter wins. Otherwise every path segment is slugified,
/// the extension dropped, and a trailing `index` folded into its parent:
/// `Getting Started/index.mdx` becomes `getting-started`.
pub fn document_id(relative: &Path, frontmatter: &Frontmatter) -> String {
    if let Some(slug) = &frontmatter.slug {
        let slug = slug.trim_matches('/');
        if !slug.is_empty() {
            return slug.to_string();
        }
    }

    let mut segments: Vec<String> = relative
        .with_extension("")
        .components()
        .filter_map(|c| c.as_os_str().to_str())
        .map(slugify)
        .filter(|s| !s.is_empty())
        .collect();

    if segments.len() > 1 && segments.last().is_some_and(|s| s == "index") {
        segments.pop();
    }

    if segments.is_empty() {
        return "index".to_string();
    }

    segments.join("/")
}

/// Convert a path segment to a URL-safe slug.
fn slugify(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c
            } else if c.is_whitespace() || c == '-' || c == '_' {
                '-'
            } else {
                '\0'
            }
        })
        .filter(|c| *c != '\0')
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn parses_page_with_frontmatter() {
        let source = r#"---
title: Components
description: Writing React components
sidebar:
  order: 4
---

import { Aside } from "@astrojs/starlight/components"

# Components
"#;

        let page = parse_page(source).unwrap();

        let fm = page.frontmatter.unwrap();
        assert_eq!(fm.title, "Components");
        assert_eq!(fm.sidebar.order, Some(4.0));
        assert!(page.body.starts_with("import { Aside }"));
    }

    #[test]
    fn parses_without_frontmatter() {
        let source = "# Just Markdown\n\nNo frontmatter.";

        let page = parse_page(source).unwrap();

        assert!(page.frontmatter.is_none());
        assert_eq!(page.body, source);
    }

    #[test]
    fn derives_ids_from_paths() {
        let fm = Frontmatter::default();

        assert_eq!(
            document_id(&PathBuf::from("components/file-structure.mdx"), &fm),
            "components/file-structure"
        );
        assert_eq!(
            document_id(&PathBuf::from("UI Styling/Tailwind_Setup.md"), &fm),
            "ui-styling/tailwind-setup"
        );
        assert_eq!(document_id(&PathBuf::from("routing/index.mdx"), &fm), "routing");
        assert_eq!(document_id(&PathBuf::from("index.mdx"), &fm), "index");
    }

    #[test]
    fn slug_override_wins() {
        let fm = Frontmatter {
            slug: Some("/tooling/linting/".to_string()),
            ..Default::default()
        };

        assert_eq!(document_id(&PathBuf::from("misc/eslint.md"), &fm), "tooling/linting");
    }

    #[test]
    fn slugify_works() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("API Reference"), "api-reference");
        assert_eq!(slugify("Button (Primary)"), "button-primary");
        assert_eq!(slugify("  Multiple   Spaces  "), "multiple-spaces");
    }
}
