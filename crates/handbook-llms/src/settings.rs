//! Site settings the aggregate exports depend on.

use url::Url;

/// Errors for invalid export settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Site URL must be an absolute http(s) URL: {0}")]
    InvalidSite(String),
}

/// Site identity and link resolution for the aggregate exports.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSettings {
    /// Site title, used as the top heading
    pub title: String,

    /// One-line product description
    pub description: String,

    /// Site origin links are resolved against
    site: Url,

    /// Base path the site is deployed under, always `/`-delimited
    base: String,
}

impl ExportSettings {
    /// Create settings, normalizing `base` to start and end with `/`.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        site: &str,
        base: &str,
    ) -> Result<Self, SettingsError> {
        let site = Url::parse(site).map_err(|e| SettingsError::InvalidSite(format!("{site}: {e}")))?;

        if site.cannot_be_a_base() || !matches!(site.scheme(), "http" | "https") {
            return Err(SettingsError::InvalidSite(site.to_string()));
        }

        let trimmed = base.trim_matches('/');
        let base = if trimmed.is_empty() {
            "/".to_string()
        } else {
            format!("/{trimmed}/")
        };

        Ok(Self {
            title: title.into(),
            description: description.into(),
            site,
            base,
        })
    }

    /// Site origin.
    pub fn site(&self) -> &Url {
        &self.site
    }

    /// Normalized base path, e.g. `/frontend-playbook/`.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Absolute URL of a site-relative path such as `routing/basics.md`.
    pub fn resolve(&self, path: &str) -> Url {
        let mut url = self.site.clone();
        url.set_path(&format!("{}{}", self.base, path.trim_start_matches('/')));
        url.set_query(None);
        url.set_fragment(None);
        url
    }
}
