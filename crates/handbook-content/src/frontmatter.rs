//! Frontmatter extraction and parsing.

use serde::{Deserialize, Deserializer};

/// Parsed frontmatter from a documentation page.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Frontmatter {
    /// Page title (required)
    pub title: String,

    /// Short page summary, also used in the llms.txt table of contents
    #[serde(default)]
    pub description: String,

    /// Sidebar placement
    #[serde(default)]
    pub sidebar: Sidebar,

    /// Whether the page gets its own plain-text export
    #[serde(default = "default_true", rename = "isInLLMs")]
    pub is_in_llms: bool,

    /// Custom id override
    #[serde(default)]
    pub slug: Option<String>,

    /// Drafts are skipped unless explicitly requested
    #[serde(default)]
    pub draft: bool,
}

/// The `sidebar` frontmatter table.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Sidebar {
    /// Order in navigation and ordered exports (lower = first)
    #[serde(default, deserialize_with = "deserialize_order")]
    pub order: Option<f64>,

    /// Navigation label override
    #[serde(default)]
    pub label: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Default for Frontmatter {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            sidebar: Sidebar::default(),
            is_in_llms: true,
            slug: None,
            draft: false,
        }
    }
}

/// Accepts `order: 3`, `order: 2.5` and `order: "3"`.
fn deserialize_order<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawOrder {
        Number(f64),
        Text(String),
    }

    match Option::<RawOrder>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawOrder::Number(n)) => Ok(Some(n)),
        Some(RawOrder::Text(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("sidebar order is not a number: {s}"))),
    }
}

/// Extract frontmatter from page source.
///
/// Returns the parsed frontmatter and the remaining content after the frontmatter block.
pub fn extract_frontmatter(source: &str) -> Result<(Option<Frontmatter>, &str), FrontmatterError> {
    let trimmed = source.trim_start();

    if !trimmed.starts_with("---") {
        return Ok((None, source));
    }

    // Find the closing ---
    let after_open = &trimmed[3..];
    let Some(close_pos) = after_open.find("\n---") else {
        return Err(FrontmatterError::Unclosed);
    };

    let yaml_content = after_open[..close_pos].trim();
    let remaining = &after_open[close_pos + 4..];

    let frontmatter: Frontmatter = serde_yaml::from_str(yaml_content)
        .map_err(|e| FrontmatterError::InvalidYaml(e.to_string()))?;

    if frontmatter.sidebar.order.is_some_and(|order| !order.is_finite()) {
        return Err(FrontmatterError::NonFiniteOrder);
    }

    Ok((Some(frontmatter), remaining.trim_start()))
}

/// Errors that can occur when parsing frontmatter.
#[derive(Debug, thiserror::Error)]
pub enum FrontmatterError {
    #[error("Unclosed frontmatter block - missing closing ---")]
    Unclosed,

    #[error("Invalid YAML in frontmatter: {0}")]
    InvalidYaml(String),

    #[error("Sidebar order must be a finite number")]
    NonFiniteOrder,
}
