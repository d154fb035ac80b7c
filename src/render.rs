//! HTML output templates.
//!
//! Renders extracted records into the lightweight pages this proxy serves.
//! Templates are plain string building; the pages are small and fixed enough
//! that a template engine would be overhead.
//!
//! Teaser links are rewritten to point back at this server
//! (`/{site}/p/...`), and a teaser's preview URL rides along as an
//! `?img=`/`?video=` query parameter so the article page can show the media
//! the listing promised.

use crate::models::{Article, ListingItem, MediaKind, PreviewMedia};
use crate::sites::{self, SiteProfile};
use url::Url;

/// Minimal HTML escape for text and attribute positions.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Landing page listing the supported sites.
pub fn index_page() -> String {
    let mut page = String::new();
    page.push_str(
        "<!DOCTYPE html>\n<html>\n<head>\n<title>lite news</title>\n\
         <meta charset=\"utf-8\" />\n</head>\n<body>\n<h1>lite news</h1>\n<ul>\n",
    );
    for profile in sites::ALL {
        page.push_str(&format!(
            "<li><a href=\"/{}\">{}</a></li>\n",
            profile.slug,
            escape_html(profile.display_name)
        ));
    }
    page.push_str("</ul>\n</body>\n</html>\n");
    page
}

/// Listing page: one `<h2>` teaser per item, with its preview media inline.
pub fn listing_page(profile: &SiteProfile, items: &[ListingItem]) -> String {
    let mut page = String::new();
    page.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    page.push_str(&format!(
        "<title>{}</title>\n",
        escape_html(profile.display_name)
    ));
    page.push_str("<meta charset=\"utf-8\" />\n</head>\n<body>\n");
    page.push_str(&format!("<h1>{}</h1>\n", escape_html(profile.display_name)));
    for item in items {
        let href = teaser_href(profile, item);
        page.push_str(&format!(
            "<h2><a href=\"{}\">{}</a></h2>\n",
            escape_html(&href),
            escape_html(&item.title)
        ));
        match &item.preview {
            Some(PreviewMedia {
                url,
                kind: MediaKind::Image,
            }) => page.push_str(&format!("<img src=\"{}\" />\n", escape_html(url))),
            Some(PreviewMedia {
                url,
                kind: MediaKind::Video,
            }) => page.push_str(&format!(
                "<video src=\"{}\" autoplay loop></video>\n",
                escape_html(url)
            )),
            None => {}
        }
        page.push_str(&format!("<br />\n{}\n", escape_html(&item.date)));
    }
    page.push_str("</body>\n</html>\n");
    page
}

/// Article page. `image`/`video` are the preview URLs carried over from the
/// listing via query parameters, when present.
pub fn article_page(article: &Article, image: Option<&str>, video: Option<&str>) -> String {
    let title = escape_html(&article.title);
    let mut page = String::new();
    page.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    page.push_str(&format!("<title>{title}</title>\n"));
    page.push_str("<meta charset=\"utf-8\" />\n</head>\n<body>\n");
    page.push_str(&format!("<h1>{title}</h1>\n"));
    if let Some(url) = image {
        page.push_str(&format!("<img src=\"{}\" /> <br />\n", escape_html(url)));
    } else if let Some(url) = video {
        page.push_str(&format!(
            "<video src=\"{}\" autoplay loop></video> <br />\n",
            escape_html(url)
        ));
    }
    page.push_str(&escape_html(&article.content));
    page.push_str("\n</body>\n</html>\n");
    page
}

/// Local href for a teaser: `/{slug}/p/{upstream path below the article
/// prefix}`, plus the preview query parameter. Links that do not resolve to
/// the site's own origin are passed through untouched.
fn teaser_href(profile: &SiteProfile, item: &ListingItem) -> String {
    let Some(upstream) = upstream_path(profile, &item.link) else {
        return item.link.clone();
    };
    let rest = upstream
        .strip_prefix(profile.article_prefix)
        .filter(|r| r.starts_with('/'))
        .unwrap_or(&upstream);
    let mut href = format!("/{}/p{}", profile.slug, rest);
    if let Some(preview) = &item.preview {
        let param = match preview.kind {
            MediaKind::Image => "img",
            MediaKind::Video => "video",
        };
        href.push_str(&format!(
            "?{}={}",
            param,
            urlencoding::encode(&preview.url)
        ));
    }
    href
}

/// Site-relative path of a teaser link: relative links pass through,
/// absolute links count only when they point at the site's own host.
fn upstream_path(profile: &SiteProfile, link: &str) -> Option<String> {
    if link.starts_with('/') {
        return Some(link.to_string());
    }
    let parsed = Url::parse(link).ok()?;
    let base = Url::parse(profile.base_url).ok()?;
    if parsed.host_str() == base.host_str() {
        Some(parsed.path().to_string())
    } else {
        None
    }
}
