//! URL producers feeding the sitemap: fixed seeds, the previously published
//! sitemap, and an optional override file. The crawler lives in
//! [`crate::crawl`].

mod existing;
mod overrides;
mod seeds;

pub use existing::{load_existing_sitemap, parse_sitemap_locs};
pub use overrides::load_overrides;
pub use seeds::{seed_urls, SEED_PATHS};
