//! Static export builder.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;

use handbook_content::{CollectionError, Document, DocumentSource};
use handbook_llms::{page_routes, render_full, render_index, render_page, ExportSettings};

/// Configuration for building the exports.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Output directory
    pub output_dir: PathBuf,

    /// Site identity and link resolution
    pub settings: ExportSettings,
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of per-document exports written
    pub pages: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to load documents: {0}")]
    Collection(#[from] CollectionError),

    #[error("Failed to write output: {0}")]
    WriteError(String),
}

/// Static export builder.
pub struct StaticBuilder {
    config: BuildConfig,
    source: Box<dyn DocumentSource>,
}

impl StaticBuilder {
    /// Create a new static builder reading from `source`.
    pub fn new(config: BuildConfig, source: Box<dyn DocumentSource>) -> Self {
        Self { config, source }
    }

    /// Build every export.
    pub async fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        // Ensure output directory exists
        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        let docs = self.source.documents()?;
        tracing::info!("Loaded {} documents", docs.len());

        // Aggregate exports
        write_file(
            &self.config.output_dir.join(handbook_llms::INDEX_FILE),
            &render_index(&docs, &self.config.settings),
        )?;
        write_file(
            &self.config.output_dir.join(handbook_llms::FULL_FILE),
            &render_full(&docs, &self.config.settings),
        )?;

        let pages = self.build_pages(&docs)?;

        let duration = start.elapsed();

        Ok(BuildResult {
            pages,
            duration_ms: duration.as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    /// Write the per-document exports in parallel.
    fn build_pages(&self, docs: &[Document]) -> Result<usize, BuildError> {
        let routes = page_routes(docs);

        routes.par_iter().try_for_each(|(route, doc)| {
            let path = self.config.output_dir.join(route.path());
            tracing::debug!("Writing {}", path.display());
            write_file(&path, &render_page(doc))
        })?;

        Ok(routes.len())
    }
}

/// Write a file, creating parent directories as needed.
fn write_file(path: &Path, content: &str) -> Result<(), BuildError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| BuildError::WriteError(e.to_string()))?;
    }

    fs::write(path, content)
        .map_err(|e| BuildError::WriteError(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use handbook_content::{FsCollection, MemoryCollection};
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn settings() -> ExportSettings {
        ExportSettings::new("Playbook", "", "https://example.com", "/playbook/").unwrap()
    }

    #[tokio::test]
    async fn builds_all_exports() {
        let temp = tempdir().unwrap();
        let docs = temp.path().join("docs");
        let out = temp.path().join("dist");

        fs::create_dir_all(docs.join("components")).unwrap();
        fs::write(
            docs.join("components/props.mdx"),
            "---\ntitle: Props\ndescription: Typing props\nsidebar:\n  order: 1\n---\n\nimport { Aside } from \"@astrojs/starlight/components\"\n\nKeep props small.\n",
        )
        .unwrap();
        fs::write(
            docs.join("changelog.md"),
            "---\ntitle: Changelog\nisInLLMs: false\n---\n\n## 1.0.0\n",
        )
        .unwrap();

        let builder = StaticBuilder::new(
            BuildConfig {
                output_dir: out.clone(),
                settings: settings(),
            },
            Box::new(FsCollection::new(&docs)),
        );
        let result = builder.build().await.unwrap();

        assert_eq!(result.pages, 1);
        assert!(!out.join("changelog.md").exists());

        let page = fs::read_to_string(out.join("components/props.md")).unwrap();
        assert_eq!(page, "# Props\n\nKeep props small.\n\n");

        let index = fs::read_to_string(out.join("llms.txt")).unwrap();
        assert!(index.contains(
            "- [Props](https://example.com/playbook/components/props.md): Typing props\n"
        ));

        let full = fs::read_to_string(out.join("llms-full.txt")).unwrap();
        assert!(full.starts_with("# Playbook - Full\n\n# Props\n\nimport { Aside }"));
        assert!(!full.contains("Changelog"));
    }

    #[tokio::test]
    async fn writes_single_segment_pages_at_root() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist");

        let doc = Document {
            id: "contributing".to_string(),
            title: "Contributing".to_string(),
            description: String::new(),
            body: None,
            sidebar_order: None,
            is_in_llms: true,
        };

        let builder = StaticBuilder::new(
            BuildConfig {
                output_dir: out.clone(),
                settings: settings(),
            },
            Box::new(MemoryCollection::new(vec![doc])),
        );
        builder.build().await.unwrap();

        let page = fs::read_to_string(out.join("contributing.md")).unwrap();
        assert_eq!(page, "# Contributing\n\n\n");
    }

    #[tokio::test]
    async fn fails_on_missing_docs_dir() {
        let temp = tempdir().unwrap();

        let builder = StaticBuilder::new(
            BuildConfig {
                output_dir: temp.path().join("dist"),
                settings: settings(),
            },
            Box::new(FsCollection::new(temp.path().join("docs"))),
        );

        let result = builder.build().await;

        assert!(matches!(result, Err(BuildError::Collection(CollectionError::NotFound(_)))));
    }
}
