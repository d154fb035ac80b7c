//! Supported source sites and their fetch wrappers.
//!
//! Each site is described entirely by a [`SiteProfile`]: the class tokens its
//! markup uses for the structural roles the extractor cares about, plus a
//! [`TitleShape`] flag selecting the adapter's shape-detection branch.
//! Supporting a new site means adding a profile entry here (and a new shape
//! branch in [`crate::extract`] only if its layout is genuinely novel).
//!
//! # Supported sources
//!
//! | Source | Module | Shape | Notes |
//! |--------|--------|-------|-------|
//! | Life.ru | [`life`] | Positioned | whole-teaser anchors, img/video previews |
//! | Artlebedev.ru | [`artlebedev`] | QuotedAnchor | titles quoted around a nested anchor |
//!
//! Fetching is a plain GET per request; failed fetches are logged and
//! surfaced to the HTTP shell, never retried here.

pub mod artlebedev;
pub mod life;

use crate::dom;
use crate::extract;
use crate::models::{Article, ListingItem};
use std::error::Error;
use tracing::{info, instrument};

/// Structural layout of a teaser's title, selecting the adapter branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleShape {
    /// Title lives in a titled sub-element at a fixed nested position
    /// (first child's first child).
    Positioned,
    /// Title is split across sibling nodes: leading quote text, an anchor
    /// carrying link and middle text, trailing quote text.
    QuotedAnchor,
}

/// Everything the extractor and the HTTP shell need to know about one site.
///
/// Selector tokens are data, not code: the traversal in [`crate::extract`]
/// is shared across sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteProfile {
    /// URL slug this site is served under (`/{slug}`, `/{slug}/p/...`).
    pub slug: &'static str,
    /// Human-readable name used in page headings.
    pub display_name: &'static str,
    /// Upstream origin, no trailing slash.
    pub base_url: &'static str,
    /// Upstream path of the listing page.
    pub listing_path: &'static str,
    /// Upstream path prefix of article pages, stripped/re-added when
    /// translating between local and upstream article links.
    pub article_prefix: &'static str,
    /// Class token marking one teaser block on the listing page.
    pub listing_block_token: &'static str,
    /// Class token of the teaser's preview sub-block, when the site has one.
    pub preview_token: Option<&'static str>,
    /// Class token of the teaser's titled sub-element (Positioned shape).
    pub title_token: Option<&'static str>,
    /// Class token of the teaser's dated sub-element.
    pub date_token: &'static str,
    /// Which title layout this site uses.
    pub title_shape: TitleShape,
    /// Class token of the article page's title element.
    pub article_title_token: &'static str,
    /// Class token of the article page's content region fragment(s).
    pub content_token: &'static str,
}

/// All supported sites, in display order.
pub const ALL: &[&SiteProfile] = &[&life::PROFILE, &artlebedev::PROFILE];

/// Resolve a URL slug to its site profile.
pub fn by_slug(slug: &str) -> Option<&'static SiteProfile> {
    ALL.iter().copied().find(|p| p.slug == slug)
}

/// Fetch and extract a site's listing page.
#[instrument(level = "info", skip_all, fields(site = profile.slug))]
pub async fn fetch_listing(
    profile: &SiteProfile,
) -> Result<Vec<ListingItem>, Box<dyn Error + Send + Sync>> {
    let url = format!("{}{}", profile.base_url, profile.listing_path);
    let body = reqwest::get(&url).await?.text().await?;
    let document = dom::parse_document(&body);
    let items = extract::extract_listing(&document, profile)?;
    info!(count = items.len(), source = %url, "Extracted listing");
    Ok(items)
}

/// Fetch and extract one article page. `path` is the article's upstream path
/// below the site's article prefix, without a leading slash.
#[instrument(level = "info", skip_all, fields(site = profile.slug, %path))]
pub async fn fetch_article(
    profile: &SiteProfile,
    path: &str,
) -> Result<Article, Box<dyn Error + Send + Sync>> {
    let url = format!("{}{}/{}", profile.base_url, profile.article_prefix, path);
    let body = reqwest::get(&url).await?.text().await?;
    let document = dom::parse_document(&body);
    let article = extract::extract_article(&document, profile)?;
    info!(bytes = article.content.len(), source = %url, "Extracted article");
    Ok(article)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_slug_resolves_known_sites() {
        assert_eq!(by_slug("life").unwrap().display_name, "Life.ru");
        assert_eq!(by_slug("artlebedev").unwrap().display_name, "Artlebedev.ru");
        assert!(by_slug("nonsense").is_none());
    }

    #[test]
    fn test_slugs_are_unique() {
        for (i, a) in ALL.iter().enumerate() {
            for b in &ALL[i + 1..] {
                assert_ne!(a.slug, b.slug);
            }
        }
    }
}
