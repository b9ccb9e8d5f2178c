//! Configuration module

mod site;

pub use site::IndexGeneratorConfig;
pub use site::SiteConfig;
