//! Artlebedev.ru news profile.
//!
//! The studio's news feed wraps each entry title in literal guillemet quote
//! characters that are *text siblings* of the anchor, not part of any titled
//! element: `дата «<a href=...>title</a>»`. The quoted-anchor shape branch
//! reassembles the three fragments, keeping the quote marks as part of the
//! title. Some entries carry no date element at all; those degrade to the
//! date sentinel.
//!
//! Article pages put the headline under `als-text-title` and the body inside
//! a single `without-cover` container.

use super::{SiteProfile, TitleShape};

pub const PROFILE: SiteProfile = SiteProfile {
    slug: "artlebedev",
    display_name: "Artlebedev.ru",
    base_url: "https://www.artlebedev.ru",
    listing_path: "/news/2020",
    article_prefix: "",
    listing_block_token: "item",
    preview_token: None,
    title_token: None,
    date_token: "date",
    title_shape: TitleShape::QuotedAnchor,
    article_title_token: "als-text-title",
    content_token: "without-cover",
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;
    use crate::extract::{extract_article, extract_listing};
    use crate::models::NO_DATE;

    const LISTING_FIXTURE: &str = "<html><body>\
<div class=\"item\"><div class=\"date\">1 апреля</div>«<a href=\"/news/2020/rozetkus\">Розеткус выходит в свет</a>»</div>\
<div class=\"item\">«<a href=\"/news/2020/typography\">Новая типографика</a>»</div>\
</body></html>";

    #[test]
    fn test_listing_fixture_reassembles_quoted_titles() {
        let doc = dom::parse_document(LISTING_FIXTURE);
        let items = extract_listing(&doc, &PROFILE).unwrap();
        assert_eq!(items.len(), 2);

        assert_eq!(items[0].date, "1 апреля");
        assert_eq!(items[0].title, "«Розеткус выходит в свет»");
        assert_eq!(items[0].link, "/news/2020/rozetkus");

        // no date element at all in the second entry
        assert_eq!(items[1].date, NO_DATE);
        assert_eq!(items[1].title, "«Новая типографика»");
        assert_eq!(items[1].link, "/news/2020/typography");
    }

    #[test]
    fn test_listing_preserves_document_order() {
        let doc = dom::parse_document(LISTING_FIXTURE);
        let items = extract_listing(&doc, &PROFILE).unwrap();
        assert!(items[0].title.contains("Розеткус"));
        assert!(items[1].title.contains("типографика"));
    }

    #[test]
    fn test_article_fixture_single_container() {
        let html = "<html><body>\
<div class=\"als-text-title\"><h1>О студии</h1></div>\
<div class=\"without-cover\"><p>Первый абзац.</p><p> Второй абзац.</p></div>\
</body></html>";
        let doc = dom::parse_document(html);
        let article = extract_article(&doc, &PROFILE).unwrap();
        assert_eq!(article.title, "О студии");
        assert_eq!(article.content, "Первый абзац. Второй абзац.");
    }
}
