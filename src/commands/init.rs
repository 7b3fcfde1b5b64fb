//! Initialize a new site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::CONFIG_FILE;

const DEFAULT_CONFIG: &str = r#"# Folio configuration

# Site
title: My Blog
description: Writing, notes, and case studies.
author: ''
language: en

# URL
url: http://example.com
blog_path: blog

# Directory
content_dir: content/blog
public_dir: public

# Writing
extensions: [mdx, md]
words_per_minute: 200

# Output
feed:
  enable: true
  path: rss.xml
  limit: 0
sitemap:
  enable: true
  path: sitemap.xml
generate_json: true
"#;

const HELLO_WORLD: &str = r#"---
title: Hello World
description: The first post.
date: "{{ date }}"
tags: [meta]
---

Welcome to the blog. Edit this file or run `folio new "My Post"` to start writing.
"#;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    let config_path = target_dir.join(CONFIG_FILE);
    if config_path.exists() {
        anyhow::bail!("{:?} already exists", config_path);
    }

    let post_dir = target_dir.join("content/blog/hello-world");
    fs::create_dir_all(&post_dir)?;
    fs::write(&config_path, DEFAULT_CONFIG)?;

    let post_path = post_dir.join("index.mdx");
    if !post_path.exists() {
        let today = chrono::Local::now().format("%Y-%m-%d").to_string();
        fs::write(&post_path, HELLO_WORLD.replace("{{ date }}", &today))?;
    }

    tracing::debug!("Created {:?} and {:?}", config_path, post_path);
    Ok(())
}
