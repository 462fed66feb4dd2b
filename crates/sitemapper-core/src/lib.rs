pub mod config;
pub mod error;
pub mod logging;

pub mod crawl;
pub mod http;
pub mod publish;
pub mod run;
pub mod sitemap;
pub mod sources;
pub mod url_model;

pub use error::{Result, SitemapError};
pub use url_model::BaseOrigin;
