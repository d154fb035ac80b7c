//! Record types produced by extraction.
//!
//! These are plain value types projected out of a parsed document tree:
//! - [`ListingItem`]: one front-page teaser (title, date, link, optional preview)
//! - [`PreviewMedia`] / [`MediaKind`]: the teaser's image or video, if any
//! - [`Article`]: a full article page (title plus flattened body text)
//!
//! When an expected element is missing from the markup, the corresponding
//! field holds one of the sentinel constants instead of aborting extraction.
//! Sentinels mean "this one teaser was odd"; a document with none of the
//! expected markers at all is reported through
//! [`ExtractError`](crate::error::ExtractError) instead.

use serde::{Deserialize, Serialize};

/// Substituted when a teaser or article has no recoverable title.
pub const NO_TITLE: &str = "no_title";
/// Substituted when a teaser has no date sub-element.
pub const NO_DATE: &str = "no_date";
/// Substituted when neither the block nor a nested anchor carries a link.
pub const NO_LINK: &str = "no_link";

/// One teaser from a site's listing page, in document order.
///
/// Duplicate teasers in the source propagate; no uniqueness is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingItem {
    /// Display title, or [`NO_TITLE`].
    pub title: String,
    /// Date string exactly as found in the markup, or [`NO_DATE`].
    pub date: String,
    /// Outbound link, possibly relative to the site, or [`NO_LINK`].
    pub link: String,
    /// Preview image or video, when the teaser block carries one.
    pub preview: Option<PreviewMedia>,
}

impl ListingItem {
    /// Whether this teaser carries preview media.
    pub fn has_preview(&self) -> bool {
        self.preview.is_some()
    }
}

/// Preview media attached to a teaser. At most one per item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewMedia {
    /// The media's `src` URL as found in the markup.
    pub url: String,
    /// Whether the media is an image or a video.
    pub kind: MediaKind,
}

/// Closed set of preview media kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

/// A full article extracted from an article page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Headline, or [`NO_TITLE`].
    pub title: String,
    /// Body text, flattened from the content region in reading order. Stored
    /// raw; escaping is the renderer's concern.
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_item_has_preview() {
        let with = ListingItem {
            title: "t".into(),
            date: "d".into(),
            link: "/l".into(),
            preview: Some(PreviewMedia {
                url: "/img.png".into(),
                kind: MediaKind::Image,
            }),
        };
        let without = ListingItem {
            preview: None,
            ..with.clone()
        };
        assert!(with.has_preview());
        assert!(!without.has_preview());
    }

    #[test]
    fn test_media_kind_serialization() {
        assert_eq!(serde_json::to_string(&MediaKind::Image).unwrap(), "\"image\"");
        assert_eq!(serde_json::to_string(&MediaKind::Video).unwrap(), "\"video\"");
    }

    #[test]
    fn test_article_round_trips_through_json() {
        let article = Article {
            title: "Headline".into(),
            content: "Body text.".into(),
        };
        let json = serde_json::to_string(&article).unwrap();
        let back: Article = serde_json::from_str(&json).unwrap();
        assert_eq!(back, article);
    }
}
