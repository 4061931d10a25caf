//! Scaffold a handbook in the current project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub async fn run(config_path: &Path, yes: bool) -> Result<()> {
    scaffold(config_path, Path::new("docs"), yes)?;

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'handbook dev' to serve the exports.");

    Ok(())
}

fn scaffold(config_path: &Path, docs_dir: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing handbook...");

    // Check if docs already exists
    if docs_dir.exists() {
        if !yes {
            tracing::warn!("{} already exists. Use --yes to overwrite.", docs_dir.display());
            return Ok(());
        }
    } else {
        fs::create_dir_all(docs_dir).context("Failed to create docs directory")?;
    }

    write_if_missing(config_path, DEFAULT_CONFIG, yes)?;

    for (relative, content) in [
        ("getting-started/introduction.mdx", DEFAULT_INTRODUCTION),
        ("components/props.mdx", DEFAULT_PROPS),
    ] {
        write_if_missing(&docs_dir.join(relative), content, yes)?;
    }

    Ok(())
}

fn write_if_missing(path: &Path, content: &str, overwrite: bool) -> Result<()> {
    if path.exists() && !overwrite {
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Created {}", path.display());

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Handbook Configuration

[site]
# Title used as the top heading of llms.txt
title = "My Handbook"

# One-line description quoted under the title
description = "How our team writes software"

# Site origin; llms.txt links are resolved against it
url = "http://localhost:4000"

# Base path the site is deployed under
base = "/"

[docs]
# Source directory for documentation
dir = "docs"

# Output directory for built exports
output = "dist"
"#;

const DEFAULT_INTRODUCTION: &str = r#"---
title: Introduction
description: What this handbook is and how to use it
sidebar:
  order: 1
---

This handbook collects the conventions our team follows.

Every page is also published as plain text for language models:
`llms.txt` lists the pages, `llms-full.txt` has all of them in one file.
"#;

const DEFAULT_PROPS: &str = r#"---
title: Props
description: Typing and naming component props
sidebar:
  order: 2
---

import { Aside } from "@astrojs/starlight/components"

Declare props as a named type next to the component.

<Aside>Imports like the one above are stripped from the plain-text export.</Aside>
"#;
