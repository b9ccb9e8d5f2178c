//! Content loader - loads posts from the source directory

use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::{FrontMatter, Post};
use crate::error::Result;
use crate::Blog;

/// Loads posts from `<source_dir>/_posts`
pub struct ContentLoader<'a> {
    blog: &'a Blog,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(blog: &'a Blog) -> Self {
        Self { blog }
    }

    /// Load all posts, newest first
    ///
    /// Undated posts sort last; they are kept so the renderer can report them.
    pub fn load_posts(&self) -> Result<Vec<Post>> {
        let posts_dir = self.blog.source_dir.join("_posts");
        if !posts_dir.exists() {
            tracing::debug!("No posts directory at {:?}", posts_dir);
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();

        for entry in WalkDir::new(&posts_dir).follow_links(true) {
            let entry = entry.map_err(std::io::Error::from)?;
            let path = entry.path();
            if !path.is_file() || !is_markdown_file(path) {
                continue;
            }

            let post = self.load_post(path)?;
            if post.published || self.blog.config.render_drafts {
                posts.push(post);
            } else {
                tracing::debug!("Skipping unpublished post {}", post.source);
            }
        }

        sort_posts(&mut posts);

        Ok(posts)
    }

    /// Load a single post from a file
    fn load_post(&self, path: &Path) -> Result<Post> {
        let content = fs::read_to_string(path)?;
        let (fm, body) = FrontMatter::parse(&content)?;

        let source = path
            .strip_prefix(&self.blog.source_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/");

        Ok(Post::from_front_matter(source, fm, body))
    }
}

/// Sort by date descending, undated last, ties by source path
pub fn sort_posts(posts: &mut [Post]) {
    posts.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.source.cmp(&b.source)));
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    fn write_post(dir: &Path, name: &str, content: &str) {
        let posts = dir.join("source/_posts");
        fs::create_dir_all(&posts).unwrap();
        fs::write(posts.join(name), content).unwrap();
    }

    #[test]
    fn test_load_posts_sorted_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        write_post(
            dir.path(),
            "old.md",
            "---\ntitle: Old\ndate: 2026-02-04\nsummary: o\n---\nOld body",
        );
        write_post(
            dir.path(),
            "new.md",
            "---\ntitle: New\ndate: 2026-02-07\nsummary: n\n---\nNew body",
        );
        write_post(dir.path(), "notes.txt", "ignored");

        let blog = Blog::new(dir.path()).unwrap();
        let posts = ContentLoader::new(&blog).load_posts().unwrap();

        let titles: Vec<_> = posts.iter().filter_map(|p| p.title.as_deref()).collect();
        assert_eq!(titles, vec!["New", "Old"]);
        assert_eq!(posts[0].source, "_posts/new.md");
        assert_eq!(posts[0].slug, "new");
        assert_eq!(posts[0].body, "New body");
    }

    #[test]
    fn test_drafts_skipped_unless_configured() {
        let dir = tempfile::tempdir().unwrap();
        write_post(
            dir.path(),
            "draft.md",
            "---\ntitle: Draft\ndate: 2026-02-07\nsummary: d\npublished: false\n---\n",
        );

        let mut blog = Blog::new(dir.path()).unwrap();
        assert!(ContentLoader::new(&blog).load_posts().unwrap().is_empty());

        blog.config = SiteConfig {
            render_drafts: true,
            ..SiteConfig::default()
        };
        assert_eq!(ContentLoader::new(&blog).load_posts().unwrap().len(), 1);
    }

    #[test]
    fn test_missing_posts_dir() {
        let dir = tempfile::tempdir().unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        assert!(ContentLoader::new(&blog).load_posts().unwrap().is_empty());
    }

    #[test]
    fn test_undated_posts_sort_last() {
        let mut posts = vec![
            Post::new("_posts/b.md"),
            Post::new("_posts/a.md").with_date(chrono::Local::now()),
        ];
        sort_posts(&mut posts);
        assert_eq!(posts[0].source, "_posts/a.md");
        assert!(posts[1].date.is_none());
    }
}
