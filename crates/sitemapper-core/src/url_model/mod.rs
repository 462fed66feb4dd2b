//! URL modeling: the base origin and canonical URL normalization.
//!
//! Every URL that reaches the sitemap goes through [`BaseOrigin::normalize`],
//! so two spellings of the same page (`/tours/`, `https://other.host/tours`,
//! `tours#top`) collapse to one string.

mod normalize;
mod origin;

pub use origin::BaseOrigin;

/// Schemes that can appear in a sitemap.
pub(crate) fn is_web_scheme(scheme: &str) -> bool {
    scheme == "http" || scheme == "https"
}
