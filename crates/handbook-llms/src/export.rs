//! Serialization of documents into plain-text exports.

use std::fmt::Write;

use handbook_content::Document;

use crate::route::ExportRoute;
use crate::sanitize::remove_imports;
use crate::settings::ExportSettings;

/// Documents with a sidebar order, ascending by that order.
///
/// Documents without an order are left out entirely. Equal orders keep
/// their collection order.
pub fn ordered(docs: &[Document]) -> Vec<&Document> {
    let mut ordered: Vec<(f64, &Document)> = docs
        .iter()
        .filter_map(|doc| doc.sidebar_order.map(|order| (order, doc)))
        .collect();

    ordered.sort_by(|(a, _), (b, _)| a.total_cmp(b));

    ordered.into_iter().map(|(_, doc)| doc).collect()
}

/// Plain-text export of a single document, with imports removed.
pub fn render_page(doc: &Document) -> String {
    let body = remove_imports(doc.body.as_deref()).unwrap_or_default();

    format!("# {}\n\n{}\n", doc.title, body)
}

/// The `llms.txt` table of contents.
///
/// Lists ordered documents that have a per-document export, so every link
/// resolves to a file that exists.
pub fn render_index(docs: &[Document], settings: &ExportSettings) -> String {
    let mut out = format!("# {}\n\n", settings.title);

    if !settings.description.is_empty() {
        let _ = write!(out, "> {}\n\n", settings.description);
    }

    out.push_str("## Table of contents\n\n");

    for doc in ordered(docs).into_iter().filter(|doc| doc.is_in_llms) {
        let link = settings.resolve(&ExportRoute::from_document(doc).path());
        let _ = writeln!(out, "- [{}]({}): {}", doc.title, link, doc.description);
    }

    out
}

/// The `llms-full.txt` export with every ordered document's raw body.
pub fn render_full(docs: &[Document], settings: &ExportSettings) -> String {
    let mut out = format!("# {} - Full\n\n", settings.title);

    for doc in ordered(docs) {
        let _ = write!(out, "# {}\n\n{}\n\n", doc.title, doc.body_text());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn doc(id: &str, title: &str, order: Option<f64>, body: Option<&str>) -> Document {
        Document {
            id: id.to_string(),
            title: title.to_string(),
            description: format!("About {}", title.to_lowercase()),
            body: body.map(str::to_string),
            sidebar_order: order,
            is_in_llms: true,
        }
    }

    fn settings() -> ExportSettings {
        ExportSettings::new(
            "Frontend Playbook",
            "How we build frontends",
            "https://applifting.github.io",
            "/frontend-playbook/",
        )
        .unwrap()
    }

    #[test]
    fn orders_by_sidebar_order_and_drops_unordered() {
        let docs = vec![
            doc("b/two", "Two", Some(2.0), None),
            doc("a/one", "One", Some(1.0), None),
            doc("c/none", "None", None, None),
        ];

        let titles: Vec<&str> = ordered(&docs).iter().map(|d| d.title.as_str()).collect();

        assert_eq!(titles, vec!["One", "Two"]);
    }

    #[test]
    fn ordering_is_numeric_and_stable() {
        let docs = vec![
            doc("a", "Ten", Some(10.0), None),
            doc("b", "Nine", Some(9.0), None),
            doc("c", "Zero", Some(0.0), None),
            doc("d", "Tie A", Some(5.0), None),
            doc("e", "Tie B", Some(5.0), None),
            doc("f", "Half", Some(-0.5), None),
        ];

        let titles: Vec<&str> = ordered(&docs).iter().map(|d| d.title.as_str()).collect();

        assert_eq!(titles, vec!["Half", "Zero", "Tie A", "Tie B", "Nine", "Ten"]);
    }

    #[test]
    fn renders_page_with_sanitized_body() {
        let page = doc(
            "components/props",
            "Props",
            Some(1.0),
            Some("import { Aside } from \"@astrojs/starlight/components\"\n\nKeep props small.\n"),
        );

        assert_eq!(render_page(&page), "# Props\n\nKeep props small.\n\n");
    }

    #[test]
    fn renders_missing_body_as_empty() {
        let page = doc("a/b", "Title", None, None);

        assert_eq!(render_page(&page), "# Title\n\n\n");
    }

    #[test]
    fn renders_index() {
        let docs = vec![
            doc("routing/basics", "Routing", Some(2.0), Some("body")),
            doc("components/props", "Props", Some(1.0), Some("body")),
            doc("changelog", "Changelog", None, Some("body")),
        ];

        assert_eq!(
            render_index(&docs, &settings()),
            "# Frontend Playbook\n\n\
             > How we build frontends\n\n\
             ## Table of contents\n\n\
             - [Props](https://applifting.github.io/frontend-playbook/components/props.md): About props\n\
             - [Routing](https://applifting.github.io/frontend-playbook/routing/basics.md): About routing\n"
        );
    }

    #[test]
    fn index_skips_ordered_documents_without_page_export() {
        let mut internal = doc("tooling/internal", "Internal", Some(1.0), Some("body"));
        internal.is_in_llms = false;
        let docs = vec![internal, doc("tooling/linting", "Linting", Some(2.0), Some("body"))];

        let index = render_index(&docs, &settings());

        assert!(!index.contains("Internal"));
        assert!(index.contains(
            "- [Linting](https://applifting.github.io/frontend-playbook/tooling/linting.md): About linting\n"
        ));
    }

    #[test]
    fn index_omits_empty_description() {
        let settings = ExportSettings::new("Docs", "", "http://localhost:4000", "/").unwrap();

        assert_eq!(
            render_index(&[], &settings),
            "# Docs\n\n## Table of contents\n\n"
        );
    }

    #[test]
    fn renders_full_text_with_raw_bodies() {
        let docs = vec![
            doc("b/two", "Two", Some(2.0), Some("import X from \"y\"\n\nSecond")),
            doc("a/one", "One", Some(1.0), None),
            doc("c/skip", "Skip", None, Some("never shown")),
        ];

        assert_eq!(
            render_full(&docs, &settings()),
            "# Frontend Playbook - Full\n\n\
             # One\n\n\n\n\
             # Two\n\nimport X from \"y\"\n\nSecond\n\n"
        );
    }
}
