use anyhow::{Context, Result};
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use chrono::Utc;
use tracing::{Level, instrument};

use common::config::SiteConfig;
use site::Lang;
use webapp::pages::{DocumentProps, Page, render_document};

// server-side render of a whole page
//
// the virtual dom is not Send, so it is built and rendered on the blocking pool
#[instrument(level=Level::DEBUG, skip(config))]
pub async fn render_page(config: &SiteConfig, page: Page, lang: Lang, path: &str) -> Result<Response> {
    let status = if page.is_found() {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };

    let props = DocumentProps {
        page,
        lang,
        path: path.to_owned(),
        app_entry: config.http.app_entry.clone(),
        // only decorative, a fresh log background per page view is enough
        seed: Utc::now().timestamp_millis().unsigned_abs(),
    };

    let html = tokio::task::spawn_blocking(move || render_document(props))
        .await
        .context("page render task failed")?;

    Ok((status, Html(html)).into_response())
}
