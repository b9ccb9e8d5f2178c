//! Index renderer - turns an ordered post collection into the listing page
//!
//! The renderer never sorts: it emits one entry per post in the order it is
//! given. Every post must carry a title, a date and a summary; the first one
//! that does not aborts the whole render with [`Error::MalformedPost`], so a
//! partial index is never produced.

use chrono::Local;
use serde::Serialize;
use tera::Context;

use crate::config::SiteConfig;
use crate::content::{MarkdownRenderer, Post};
use crate::error::{Error, Field, Result};
use crate::helpers::{date_xml, format_date, full_url_for, permalink, url_for};
use crate::templates::{TemplateRenderer, FEED_TEMPLATE, INDEX_TEMPLATE};

/// One rendered line of the index
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexEntry {
    pub title: String,
    /// Root-relative link to the post
    pub url: String,
    /// Absolute link, for feeds
    pub full_url: String,
    /// Date in the site's `date_format`
    pub formatted_date: String,
    /// Machine-readable date for `<time datetime>` and feeds
    pub datetime: String,
    /// Summary rendered from markdown to HTML
    pub summary: String,
    /// Source document the entry came from
    pub source: String,
}

/// Renders the post index and its feed
pub struct IndexRenderer {
    config: SiteConfig,
    templates: TemplateRenderer,
    markdown: MarkdownRenderer,
}

impl IndexRenderer {
    pub fn new(config: &SiteConfig) -> Result<Self> {
        Ok(Self {
            config: config.clone(),
            templates: TemplateRenderer::new()?,
            markdown: MarkdownRenderer::new(),
        })
    }

    /// Lazily map posts to index entries, preserving order
    pub fn entries<'a>(
        &'a self,
        posts: &'a [Post],
    ) -> impl Iterator<Item = Result<IndexEntry>> + 'a {
        posts.iter().map(move |post| self.entry(post))
    }

    /// Build the index entry for a single post
    pub fn entry(&self, post: &Post) -> Result<IndexEntry> {
        let title = required_text(post, post.title.as_deref(), Field::Title)?;
        let date = post.date.as_ref().ok_or_else(|| malformed(post, Field::Date))?;
        let summary = required_text(post, post.summary.as_deref(), Field::Summary)?;

        let url = permalink(&self.config, date, &post.slug);
        let full_url = format!("{}{}", self.config.url.trim_end_matches('/'), url);

        Ok(IndexEntry {
            title: title.to_string(),
            url,
            full_url,
            formatted_date: format_date(date, &self.config.date_format),
            datetime: date_xml(date),
            summary: self.markdown.render(summary),
            source: post.source.clone(),
        })
    }

    /// Validate every post and collect the entries, stopping at the first
    /// malformed one
    pub fn collect_entries(&self, posts: &[Post]) -> Result<Vec<IndexEntry>> {
        self.entries(posts).collect()
    }

    /// Render the index page for `posts`
    pub fn render(&self, posts: &[Post]) -> Result<String> {
        let entries = self.collect_entries(posts)?;
        self.render_entries(&entries)
    }

    /// Render the index page from already validated entries
    pub fn render_entries(&self, entries: &[IndexEntry]) -> Result<String> {
        let mut context = self.base_context();
        context.insert("entries", entries);

        let html = self.templates.render(INDEX_TEMPLATE, &context)?;
        tracing::debug!("Rendered index with {} entries", entries.len());
        Ok(html)
    }

    /// Render the Atom feed for `posts`
    ///
    /// All posts are validated, only the first `feed_limit` are emitted.
    pub fn render_feed(&self, posts: &[Post]) -> Result<String> {
        let entries = self.collect_entries(posts)?;
        self.render_feed_entries(&entries)
    }

    /// Render the Atom feed from already validated entries
    pub fn render_feed_entries(&self, entries: &[IndexEntry]) -> Result<String> {
        let limit = self.config.index_generator.feed_limit;
        let entries = &entries[..entries.len().min(limit)];

        // Entries are newest first, so the first one dates the feed
        let updated = entries
            .first()
            .map(|e| e.datetime.clone())
            .unwrap_or_else(|| date_xml(&Local::now()));

        let mut context = self.base_context();
        context.insert("entries", entries);
        context.insert("updated", &updated);

        self.templates.render(FEED_TEMPLATE, &context)
    }

    fn base_context(&self) -> Context {
        let mut context = Context::new();
        context.insert("config", &self.config);
        context.insert("home_url", &full_url_for(&self.config, ""));
        context.insert("feed_url", &url_for(&self.config, "atom.xml"));
        context
    }
}

fn malformed(post: &Post, field: Field) -> Error {
    Error::MalformedPost {
        document: post.source.clone(),
        field,
    }
}

/// A present, non-blank string field, returned as written
fn required_text<'a>(post: &Post, value: Option<&'a str>, field: Field) -> Result<&'a str> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(malformed(post, field)),
    }
}
