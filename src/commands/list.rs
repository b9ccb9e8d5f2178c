//! List site posts

use anyhow::Result;
use std::io::Write;

use crate::content::loader::ContentLoader;
use crate::Blog;

/// Print every post, newest first
pub fn run(blog: &Blog) -> Result<()> {
    let stdout = std::io::stdout();
    list_posts(blog, &mut stdout.lock())
}

/// Write one line per post: date, title and source
///
/// Posts missing fields are listed too so they can be found and fixed.
pub fn list_posts<W: Write>(blog: &Blog, out: &mut W) -> Result<()> {
    let posts = ContentLoader::new(blog).load_posts()?;

    writeln!(out, "Posts ({}):", posts.len())?;
    for post in posts {
        let date = post
            .date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "----------".to_string());
        let title = post.title.as_deref().unwrap_or("(untitled)");
        writeln!(out, "  {} - {} [{}]", date, title, post.source)?;
    }

    Ok(())
}
