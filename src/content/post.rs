//! Post model

use chrono::{DateTime, Local};
use std::path::Path;

use super::FrontMatter;

/// A blog post as loaded from disk
///
/// `title`, `date` and `summary` are kept optional here: the loader records
/// what the document says and the index renderer decides whether that is
/// enough to publish.
#[derive(Debug, Clone)]
pub struct Post {
    /// Source file path (relative to the source dir)
    pub source: String,

    /// Slug (URL-friendly name, from the filename)
    pub slug: String,

    /// Post title
    pub title: Option<String>,

    /// Publication date
    pub date: Option<DateTime<Local>>,

    /// Short description shown on the index
    pub summary: Option<String>,

    /// Raw markdown body (front-matter removed)
    pub body: String,

    /// Whether the post is published
    pub published: bool,
}

impl Post {
    /// Create a new post with the slug derived from `source`'s file stem
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let slug = Path::new(&source)
            .file_stem()
            .and_then(|s| s.to_str())
            .map(slug::slugify)
            .unwrap_or_default();

        Self {
            source,
            slug,
            title: None,
            date: None,
            summary: None,
            body: String::new(),
            published: true,
        }
    }

    /// Build a post from parsed front-matter and body
    pub fn from_front_matter(source: impl Into<String>, fm: FrontMatter, body: &str) -> Self {
        let date = fm.parse_date();
        if fm.date.is_some() && date.is_none() {
            tracing::warn!("Unrecognized date format {:?}", fm.date);
        }

        let mut post = Post::new(source);
        post.title = fm.title;
        post.date = date;
        post.summary = fm.summary;
        post.body = body.to_string();
        post.published = fm.published;
        post
    }

    /// Builder-style setters, mostly for assembling posts in code
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_date(mut self, date: DateTime<Local>) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_slug_from_filename() {
        let post = Post::new("_posts/2026-02-07-Hello World.md");
        assert_eq!(post.slug, "2026-02-07-hello-world");
        assert!(post.published);
    }

    #[test]
    fn test_from_front_matter() {
        let fm = FrontMatter {
            title: Some("A".to_string()),
            date: Some("2026-02-07".to_string()),
            summary: Some("x".to_string()),
            published: false,
        };
        let post = Post::from_front_matter("_posts/a.md", fm, "body");
        assert_eq!(post.title.as_deref(), Some("A"));
        assert_eq!(
            post.date,
            Local.with_ymd_and_hms(2026, 2, 7, 0, 0, 0).earliest()
        );
        assert_eq!(post.body, "body");
        assert!(!post.published);
    }

    #[test]
    fn test_unparsable_date_is_missing() {
        let fm = FrontMatter {
            date: Some("someday".to_string()),
            ..Default::default()
        };
        let post = Post::from_front_matter("_posts/a.md", fm, "");
        assert!(post.date.is_none());
    }
}
