//! Create a new post

use anyhow::Result;
use chrono::{DateTime, Local};
use std::fs;
use std::path::PathBuf;

use crate::Blog;

/// Write a post scaffold for `title` into `_posts`, returning its path
pub fn create_post(blog: &Blog, title: &str, now: DateTime<Local>) -> Result<PathBuf> {
    let target_dir = blog.source_dir.join("_posts");
    fs::create_dir_all(&target_dir)?;

    let slug = slug::slugify(title);
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a file name from title {:?}", title);
    }

    let filename = blog
        .config
        .new_post_name
        .replace(":title", &slug)
        .replace(":year", &now.format("%Y").to_string())
        .replace(":i_month", &now.format("%-m").to_string())
        .replace(":i_day", &now.format("%-d").to_string())
        .replace(":month", &now.format("%m").to_string())
        .replace(":day", &now.format("%d").to_string());

    let file_path = target_dir.join(filename);
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    // Quote the title so YAML-significant characters survive
    let content = format!(
        "---\ntitle: {}\ndate: {}\nsummary: ''\n---\n",
        serde_json::to_string(title)?,
        now.format("%Y-%m-%d %H:%M:%S")
    );

    // new_post_name may contain directories, e.g. `:year/:title.md`
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, content)?;
    tracing::info!("Created: {:?}", file_path);

    Ok(file_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::loader::ContentLoader;
    use crate::content::FrontMatter;
    use crate::index::IndexRenderer;
    use chrono::TimeZone;

    #[test]
    fn test_create_post() {
        let dir = tempfile::tempdir().unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        let now = Local.with_ymd_and_hms(2026, 2, 7, 9, 30, 0).unwrap();

        let path = create_post(&blog, "Hello: World", now).unwrap();
        assert!(path.ends_with("source/_posts/hello-world.md"));

        let content = fs::read_to_string(&path).unwrap();
        let (fm, _) = FrontMatter::parse(&content).unwrap();
        assert_eq!(fm.title.as_deref(), Some("Hello: World"));
        assert_eq!(fm.date.as_deref(), Some("2026-02-07 09:30:00"));
        assert_eq!(fm.summary.as_deref(), Some(""));

        assert!(create_post(&blog, "Hello: World", now).is_err());
    }

    #[test]
    fn test_new_post_url_has_date_once() {
        let dir = tempfile::tempdir().unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        let now = Local.with_ymd_and_hms(2026, 2, 7, 9, 30, 0).unwrap();

        let path = create_post(&blog, "Hello World", now).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        fs::write(&path, content.replace("summary: ''", "summary: Hi")).unwrap();

        let posts = ContentLoader::new(&blog).load_posts().unwrap();
        let renderer = IndexRenderer::new(&blog.config).unwrap();
        let entry = renderer.entry(&posts[0]).unwrap();
        assert_eq!(entry.url, "/2026/02/07/hello-world/");
    }

    #[test]
    fn test_new_post_name_with_directory() {
        let dir = tempfile::tempdir().unwrap();
        let config = SiteConfig {
            new_post_name: ":year/:title.md".to_string(),
            ..SiteConfig::default()
        };
        let blog = Blog::with_config(dir.path().to_path_buf(), config);
        let now = Local.with_ymd_and_hms(2026, 2, 7, 9, 30, 0).unwrap();

        let path = create_post(&blog, "Nested", now).unwrap();
        assert!(path.ends_with("source/_posts/2026/nested.md"));
        assert!(path.is_file());
    }
}
