//! Removal of rendering-only constructs from page bodies.

use std::sync::LazyLock;

use regex::Regex;

/// A single-line ES module import:
/// `import [type] (* as X | { ... } | X | X, { ... }) from "module"[;]`.
///
/// Only horizontal whitespace is allowed between tokens, so a named import
/// list split over several lines never matches. Anything after the optional
/// semicolon other than whitespace (a trailing comment, say) also prevents
/// a match.
static IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?mR)^[ \t]*import[ \t]+(?:type[ \t]+)?(?:\*[ \t]+as[ \t]+[\w$]+|\{[^}\n]*\}|[\w$]+[ \t]*,[ \t]*\{[^}\n]*\}|[\w$]+)[ \t]+from[ \t]+["'][^"'\n]+["'];?[ \t]*$"#,
    )
    .expect("valid regex")
});

/// Three or more line endings in a row, LF or CRLF.
static BLANK_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\r?\n)(?:\r?\n){2,}").expect("valid regex"));

static TRAILING_BLANK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\r?\n)(?:\r?\n)+\z").expect("valid regex"));

/// Remove import lines from markdown/MDX content.
///
/// Returns `None` when there is nothing to sanitize. Otherwise every
/// single-line import is deleted, runs of two or more blank lines collapse
/// to one, leading blank lines are dropped and trailing blank lines shrink
/// to a single newline.
pub fn remove_imports(content: Option<&str>) -> Option<String> {
    let content = content.filter(|c| !c.is_empty())?;

    let without_imports = IMPORT_RE.replace_all(content, "");
    let collapsed = BLANK_RUN_RE.replace_all(&without_imports, "${1}${1}");
    let leading_trimmed = collapsed.trim_start_matches(['\r', '\n']);

    Some(TRAILING_BLANK_RE.replace(leading_trimmed, "${1}").into_owned())
}
