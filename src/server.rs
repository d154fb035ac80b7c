//! HTTP shell: routes requests to the right site profile.
//!
//! Three routes:
//! - `GET /` — landing page listing the supported sites
//! - `GET /{site}` — the site's listing page, re-rendered
//! - `GET /{site}/p/{*path}` — one article, re-rendered; `?img=`/`?video=`
//!   carry the teaser's preview media over from the listing
//!
//! An unknown site slug is a 404. An upstream fetch or extraction failure is
//! a 502, so "the site changed or is down" is visible to the client instead
//! of an empty page.

use crate::{render, sites};
use axum::Router;
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use serde::Deserialize;
use tracing::error;

/// Build the application router.
pub fn router() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/{site}", get(listing))
        .route("/{site}/p/{*path}", get(article))
}

async fn index() -> Html<String> {
    Html(render::index_page())
}

async fn listing(Path(site): Path<String>) -> Result<Html<String>, (StatusCode, String)> {
    let profile = lookup(&site)?;
    match sites::fetch_listing(profile).await {
        Ok(items) => Ok(Html(render::listing_page(profile, &items))),
        Err(e) => {
            error!(site = profile.slug, error = %e, "Listing fetch failed");
            Err((
                StatusCode::BAD_GATEWAY,
                format!("upstream fetch failed: {e}"),
            ))
        }
    }
}

/// Preview media forwarded from the listing page.
#[derive(Debug, Deserialize)]
struct ArticleQuery {
    img: Option<String>,
    video: Option<String>,
}

async fn article(
    Path((site, path)): Path<(String, String)>,
    Query(query): Query<ArticleQuery>,
) -> Result<Html<String>, (StatusCode, String)> {
    let profile = lookup(&site)?;
    match sites::fetch_article(profile, &path).await {
        Ok(article) => Ok(Html(render::article_page(
            &article,
            query.img.as_deref(),
            query.video.as_deref(),
        ))),
        Err(e) => {
            error!(site = profile.slug, %path, error = %e, "Article fetch failed");
            Err((
                StatusCode::BAD_GATEWAY,
                format!("upstream fetch failed: {e}"),
            ))
        }
    }
}

fn lookup(site: &str) -> Result<&'static sites::SiteProfile, (StatusCode, String)> {
    sites::by_slug(site).ok_or_else(|| (StatusCode::NOT_FOUND, format!("unknown site: {site}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_index_lists_sites() {
        let Html(page) = index().await;
        assert!(page.contains("/life"));
    }

    #[test]
    fn test_lookup_unknown_site_is_not_found() {
        let err = lookup("nonsense").unwrap_err();
        assert_eq!(err.0, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_listing_unknown_site_is_not_found() {
        let err = listing(Path("nonsense".to_string())).await.unwrap_err();
        assert_eq!(err.0, StatusCode::NOT_FOUND);
        assert!(err.1.contains("nonsense"));
    }
}
