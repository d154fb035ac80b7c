//! Profile-driven extraction of listings and articles.
//!
//! The two entry points turn a parsed document tree into typed records using
//! only the class tokens and shape flag carried by a
//! [`SiteProfile`](crate::sites::SiteProfile). All site knowledge is data;
//! the traversal logic below is shared by every site.
//!
//! A missing or oddly-shaped sub-element degrades that one field to a
//! sentinel and extraction moves on to the next block. Only a document with
//! none of the expected markers at all fails, as
//! [`ExtractError`](crate::error::ExtractError).

use crate::dom::Node;
use crate::error::ExtractError;
use crate::models::{Article, ListingItem, MediaKind, PreviewMedia, NO_DATE, NO_LINK, NO_TITLE};
use crate::select::{collect_text, find_by_attr_token, find_by_tag, has_attr_token};
use crate::sites::{SiteProfile, TitleShape};
use tracing::debug;

/// Extract every teaser from a listing page, in document order.
///
/// Returns [`ExtractError::NoListingBlocks`] when the document contains zero
/// blocks matching the profile's listing token, so callers can distinguish
/// "the site changed" from "one teaser was odd".
pub fn extract_listing(
    root: &Node,
    profile: &SiteProfile,
) -> Result<Vec<ListingItem>, ExtractError> {
    let blocks = find_by_attr_token(root, "class", profile.listing_block_token);
    if blocks.is_empty() {
        return Err(ExtractError::NoListingBlocks {
            token: profile.listing_block_token.to_string(),
        });
    }
    debug!(site = profile.slug, blocks = blocks.len(), "Found listing blocks");
    Ok(blocks
        .into_iter()
        .map(|block| extract_item(block, profile))
        .collect())
}

/// Extract a single article from an article page.
///
/// The title element is flattened with `collect_text`; the content is the
/// document-order concatenation of every content-region fragment (a single
/// outer container is simply the one-fragment case). A page with neither
/// marker yields [`ExtractError::NoArticleMarkers`].
pub fn extract_article(root: &Node, profile: &SiteProfile) -> Result<Article, ExtractError> {
    let title = find_by_attr_token(root, "class", profile.article_title_token)
        .into_iter()
        .next()
        .map(|el| collect_text(el).trim().to_string())
        .filter(|t| !t.is_empty());

    let fragments = find_by_attr_token(root, "class", profile.content_token);
    if title.is_none() && fragments.is_empty() {
        return Err(ExtractError::NoArticleMarkers);
    }

    let mut content = String::new();
    for fragment in &fragments {
        content.push_str(&collect_text(fragment));
    }
    Ok(Article {
        title: title.unwrap_or_else(|| NO_TITLE.to_string()),
        content,
    })
}

fn extract_item(block: &Node, profile: &SiteProfile) -> ListingItem {
    let preview = extract_preview(block, profile);
    let (title, date, anchor_link) = match profile.title_shape {
        TitleShape::Positioned => positioned_fields(block, profile),
        TitleShape::QuotedAnchor => quoted_anchor_fields(block, profile),
    };
    // The block itself may be the link (whole-teaser anchors); otherwise the
    // shape branch or any nested anchor supplies it.
    let link = block
        .attr("href")
        .map(String::from)
        .or(anchor_link)
        .or_else(|| {
            find_by_tag(block, "a")
                .into_iter()
                .next()
                .and_then(|a| a.attr("href"))
                .map(String::from)
        })
        .unwrap_or_else(|| NO_LINK.to_string());
    ListingItem {
        title,
        date,
        link,
        preview,
    }
}

/// First `img` (then `video`) with a `src` inside the teaser's preview
/// sub-block. A block with neither, or with no preview sub-block at all,
/// simply has no preview.
fn extract_preview(block: &Node, profile: &SiteProfile) -> Option<PreviewMedia> {
    let token = profile.preview_token?;
    let wrapper = find_by_attr_token(block, "class", token).into_iter().next()?;
    if let Some(src) = find_by_tag(wrapper, "img")
        .into_iter()
        .next()
        .and_then(|img| img.attr("src"))
    {
        return Some(PreviewMedia {
            url: src.to_string(),
            kind: MediaKind::Image,
        });
    }
    let src = find_by_tag(wrapper, "video")
        .into_iter()
        .next()
        .and_then(|video| video.attr("src"))?;
    Some(PreviewMedia {
        url: src.to_string(),
        kind: MediaKind::Video,
    })
}

/// Fixed-position shape: a titled sub-element whose first child's first child
/// is the title text, and a dated sub-element whose first child is the date
/// text.
fn positioned_fields(block: &Node, profile: &SiteProfile) -> (String, String, Option<String>) {
    let title = profile
        .title_token
        .and_then(|token| find_by_attr_token(block, "class", token).into_iter().next())
        .and_then(nested_leaf_text)
        .unwrap_or_else(|| NO_TITLE.to_string());
    let date = find_by_attr_token(block, "class", profile.date_token)
        .into_iter()
        .next()
        .and_then(first_text_child)
        .unwrap_or_else(|| NO_DATE.to_string());
    (title, date, None)
}

/// Quoted-anchor shape: an optional dated sub-element followed by the sibling
/// sequence `[leading text, <a>, trailing text]`. The title is the
/// concatenation of the three fragments (quote marks are literal title
/// content); the link comes from the anchor.
fn quoted_anchor_fields(block: &Node, profile: &SiteProfile) -> (String, String, Option<String>) {
    let mut date = NO_DATE.to_string();
    let (row, start) = match find_with_parent(block, &|n| {
        has_attr_token(n, "class", profile.date_token)
    }) {
        Some((parent, idx)) => {
            let date_el = &parent.children[idx];
            if let Some(text) = first_text_child(date_el) {
                date = text;
            }
            (parent, idx + 1)
        }
        // No date marker: the teaser row is wherever the anchor lives.
        None => match find_with_parent(block, &|n| n.tag == "a") {
            Some((parent, _)) => (parent, 0),
            None => {
                let flat = collect_text(block).trim().to_string();
                let title = if flat.is_empty() {
                    NO_TITLE.to_string()
                } else {
                    flat
                };
                return (title, date, None);
            }
        },
    };

    let mut title = String::new();
    let mut link = None;
    let mut seen_anchor = false;
    for node in &row.children[start..] {
        if node.is_text() {
            title.push_str(&node.text);
            if seen_anchor {
                // trailing quote fragment collected; the teaser row ends here
                break;
            }
        } else if !seen_anchor && node.tag == "a" {
            title.push_str(&collect_text(node));
            link = node.attr("href").map(String::from);
            seen_anchor = true;
        } else if seen_anchor {
            break;
        }
    }

    let title = title.trim().to_string();
    let title = if title.is_empty() {
        NO_TITLE.to_string()
    } else {
        title
    };
    (title, date, link)
}

/// First child's first child, when it is a non-empty text leaf.
fn nested_leaf_text(el: &Node) -> Option<String> {
    let leaf = el.children.first()?.children.first()?;
    if leaf.is_text() && !leaf.text.is_empty() {
        Some(leaf.text.clone())
    } else {
        None
    }
}

/// First child, when it is a text leaf.
fn first_text_child(el: &Node) -> Option<String> {
    el.children
        .first()
        .filter(|c| c.is_text())
        .map(|c| c.text.clone())
}

/// Pre-order search below `parent` returning the matched node's parent and
/// its index among that parent's children, so callers can read siblings.
/// The root itself is never a candidate.
fn find_with_parent<'a, F>(parent: &'a Node, pred: &F) -> Option<(&'a Node, usize)>
where
    F: Fn(&Node) -> bool,
{
    for (i, child) in parent.children.iter().enumerate() {
        if pred(child) {
            return Some((parent, i));
        }
        if let Some(hit) = find_with_parent(child, pred) {
            return Some(hit);
        }
    }
    None
}
