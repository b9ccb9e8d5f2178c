//! URL helper functions

use chrono::{DateTime, TimeZone};

use crate::config::SiteConfig;

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/css/style.css") // -> "/blog/css/style.css"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Generate a full URL including the domain
///
/// # Examples
/// ```ignore
/// full_url_for(&config, "/about/") // -> "https://example.com/blog/about/"
/// ```
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    let base = config.url.trim_end_matches('/');
    format!("{}{}", base, url_for(config, path))
}

/// Expand the permalink pattern for a post into a root-relative URL
///
/// Supported placeholders: `:year :month :day :i_month :i_day :title :name`.
pub fn permalink<Tz: TimeZone>(config: &SiteConfig, date: &DateTime<Tz>, slug: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    // i_month/i_day must be expanded before month/day
    let path = config
        .permalink
        .replace(":year", &date.format("%Y").to_string())
        .replace(":i_month", &date.format("%-m").to_string())
        .replace(":i_day", &date.format("%-d").to_string())
        .replace(":month", &date.format("%m").to_string())
        .replace(":day", &date.format("%d").to_string())
        .replace(":title", slug)
        .replace(":name", slug);

    url_for(config, &path)
}
