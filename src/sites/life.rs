//! Life.ru site profile.
//!
//! Life.ru's front page repeats one teaser block per story, each block being
//! a whole-teaser `<a>` carrying the article link on itself. The CSS-module
//! class names below are stable hashes shipped by the site's build; when the
//! site redeploys with new hashes, extraction reports
//! `NoListingBlocks` rather than silently returning garbage.
//!
//! Article pages carry the headline in one titled element and the body as
//! one `styles_text__fxCxY` fragment per paragraph; the extractor
//! concatenates them in reading order.

use super::{SiteProfile, TitleShape};

pub const PROFILE: SiteProfile = SiteProfile {
    slug: "life",
    display_name: "Life.ru",
    base_url: "https://life.ru",
    listing_path: "/",
    article_prefix: "/p",
    listing_block_token: "styles_root__2aHN8",
    preview_token: Some("styles_imgWrapper__3XFTR"),
    title_token: Some("styles_title__VjSwt"),
    date_token: "styles_date__1zS9H",
    title_shape: TitleShape::Positioned,
    article_title_token: "styles_title__2F4Y1",
    content_token: "styles_text__fxCxY",
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;
    use crate::extract::{extract_article, extract_listing};
    use crate::models::MediaKind;

    const LISTING_FIXTURE: &str = "<html><body>\
<a class=\"styles_root__2aHN8\" href=\"/p/1001\">\
<div class=\"styles_imgWrapper__3XFTR\"><img src=\"https://cdn.life.ru/1.jpg\"></div>\
<div class=\"styles_title__VjSwt\"><span>Первая новость</span></div>\
<div class=\"styles_date__1zS9H\">12:30</div>\
</a>\
<a class=\"styles_root__2aHN8\" href=\"/p/1002\">\
<div class=\"styles_imgWrapper__3XFTR\"><video src=\"https://cdn.life.ru/2.mp4\"></video></div>\
<div class=\"styles_title__VjSwt\"><span>Вторая новость</span></div>\
<div class=\"styles_date__1zS9H\">13:45</div>\
</a>\
</body></html>";

    #[test]
    fn test_listing_fixture() {
        let doc = dom::parse_document(LISTING_FIXTURE);
        let items = extract_listing(&doc, &PROFILE).unwrap();
        assert_eq!(items.len(), 2);

        assert_eq!(items[0].title, "Первая новость");
        assert_eq!(items[0].date, "12:30");
        assert_eq!(items[0].link, "/p/1001");
        let p0 = items[0].preview.as_ref().unwrap();
        assert_eq!(p0.kind, MediaKind::Image);
        assert_eq!(p0.url, "https://cdn.life.ru/1.jpg");

        let p1 = items[1].preview.as_ref().unwrap();
        assert_eq!(p1.kind, MediaKind::Video);
        assert_eq!(p1.url, "https://cdn.life.ru/2.mp4");
    }

    #[test]
    fn test_article_fixture_concatenates_paragraphs() {
        let html = "<html><body>\
<div class=\"styles_title__2F4Y1\">Заголовок статьи</div>\
<p class=\"styles_text__fxCxY\">Первый абзац. </p>\
<p class=\"styles_text__fxCxY\">Второй абзац.</p>\
</body></html>";
        let doc = dom::parse_document(html);
        let article = extract_article(&doc, &PROFILE).unwrap();
        assert_eq!(article.title, "Заголовок статьи");
        assert_eq!(article.content, "Первый абзац. Второй абзац.");
    }

    #[test]
    fn test_redeployed_class_hashes_fail_loud() {
        let html = "<html><body>\
<a class=\"styles_root__9ZZZZ\" href=\"/p/1\"><div>changed</div></a>\
</body></html>";
        let doc = dom::parse_document(html);
        assert!(extract_listing(&doc, &PROFILE).is_err());
    }
}
