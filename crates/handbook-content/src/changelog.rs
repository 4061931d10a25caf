//! Changelog page synthesis.
//!
//! The repository root keeps a conventional `CHANGELOG.md`. The docs site shows
//! the same notes as a regular page, kept out of the LLM exports.

/// Turn a root `CHANGELOG.md` into a docs page.
///
/// The first two lines (the `# Changelog` heading and the blank line after it)
/// are replaced by frontmatter, since the page title comes from there.
pub fn changelog_page(raw: &str, site_title: &str) -> String {
    let notes = raw
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .skip(2)
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "---\ntitle: Changelog\ndescription: Release notes for {site_title}\neditUrl: false\nisInLLMs: false\n---\n\n{notes}"
    )
}
