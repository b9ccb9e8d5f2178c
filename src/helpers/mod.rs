//! Helper functions shared by the renderer and commands

mod date;
mod url;

pub use date::*;
pub use url::*;
