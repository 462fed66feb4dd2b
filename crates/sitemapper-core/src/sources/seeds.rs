//! Pages that always belong in the sitemap, crawl or no crawl.

use crate::url_model::BaseOrigin;

/// Site-relative paths of the landing pages.
pub const SEED_PATHS: &[&str] = &[
    "/",
    "/about",
    "/about/sri-lanka",
    "/tours",
    "/tours/cultural",
    "/tours/hill-country",
    "/tours/beach-tours",
    "/tours/luxury",
    "/tours/ramayana-trail",
    "/tours/ayurveda-wellness",
    "/tours/driver-guide",
    "/destinations",
    "/destinations/kandy",
    "/destinations/sigiriya",
    "/destinations/ella",
    "/destinations/galle",
    "/destinations/colombo",
    "/destinations/mirissa",
    "/experiences",
    "/experiences/whale-watching",
    "/experiences/train-journeys",
    "/experiences/tea-trails",
    "/experiences/hot-air-balloon-sigiriya",
    "/hotels",
    "/blog",
    "/book-now",
    "/custom-experience",
];

/// Normalizes `paths` against `base`, dropping anything the normalizer rejects.
pub fn seed_urls(base: &BaseOrigin, paths: &[&str]) -> Vec<String> {
    paths.iter().filter_map(|p| base.normalize(p)).collect()
}
