//! Generator module - writes the rendered index and feed to the public dir

use std::collections::HashMap;
use std::fs;

use crate::content::Post;
use crate::error::{Error, Result};
use crate::index::{IndexEntry, IndexRenderer};
use crate::Blog;

/// Static site generator
pub struct Generator {
    blog: Blog,
    renderer: IndexRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(blog: &Blog) -> Result<Self> {
        let renderer = IndexRenderer::new(&blog.config)?;

        Ok(Self {
            blog: blog.clone(),
            renderer,
        })
    }

    /// Generate the site from posts that are already sorted newest first
    ///
    /// Everything is rendered before anything is written, so a malformed
    /// post leaves the previous output untouched.
    pub fn generate(&self, posts: &[Post]) -> Result<()> {
        let entries = self.renderer.collect_entries(posts)?;
        check_unique_urls(&entries)?;

        let index = self.renderer.render_entries(&entries)?;
        let feed = self.renderer.render_feed_entries(&entries)?;

        fs::create_dir_all(&self.blog.public_dir)?;

        let index_path = self
            .blog
            .public_dir
            .join(&self.blog.config.index_generator.path);
        if let Some(parent) = index_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&index_path, index)?;
        tracing::info!("Generated {:?} ({} posts)", index_path, entries.len());

        fs::write(self.blog.public_dir.join("atom.xml"), feed)?;
        tracing::info!("Generated atom.xml");

        Ok(())
    }
}

/// Every entry must link somewhere no other entry links to
fn check_unique_urls(entries: &[IndexEntry]) -> Result<()> {
    let mut seen: HashMap<&str, &str> = HashMap::with_capacity(entries.len());
    for entry in entries {
        if let Some(first) = seen.insert(&entry.url, &entry.source) {
            return Err(Error::DuplicateUrl {
                url: entry.url.clone(),
                first: first.to_string(),
                second: entry.source.clone(),
            });
        }
    }
    Ok(())
}
