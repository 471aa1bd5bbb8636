use std::sync::Arc;

use axum::{
    extract::{Extension, Path, State},
    http::Uri,
    response::Response,
};

use common::config::SiteConfig;
use site::{content, nav::HOME_SECTIONS};
use webapp::pages::Page;

use crate::http::{AppError, lang::CurrentLang, render::render_page};

pub async fn home(
    State(config): State<Arc<SiteConfig>>,
    Extension(CurrentLang(lang)): Extension<CurrentLang>,
    uri: Uri,
) -> Result<Response, AppError> {
    Ok(render_page(&config, Page::Home { section: None }, lang, uri.path()).await?)
}

// the home page again, scrolled to one of its sections once mounted
pub async fn home_section(
    State(config): State<Arc<SiteConfig>>,
    Extension(CurrentLang(lang)): Extension<CurrentLang>,
    Path((_, section)): Path<(String, String)>,
    uri: Uri,
) -> Result<Response, AppError> {
    let page = match HOME_SECTIONS.into_iter().find(|s| *s == section) {
        Some(section) => Page::Home {
            section: Some(section),
        },
        None => Page::NotFound,
    };

    Ok(render_page(&config, page, lang, uri.path()).await?)
}

pub async fn project(
    State(config): State<Arc<SiteConfig>>,
    Extension(CurrentLang(lang)): Extension<CurrentLang>,
    Path((_, id)): Path<(String, String)>,
    uri: Uri,
) -> Result<Response, AppError> {
    let page = content::project(&id).map_or(Page::NotFound, Page::Project);

    Ok(render_page(&config, page, lang, uri.path()).await?)
}

pub async fn preview(
    State(config): State<Arc<SiteConfig>>,
    Extension(CurrentLang(lang)): Extension<CurrentLang>,
    Path((_, site)): Path<(String, String)>,
    uri: Uri,
) -> Result<Response, AppError> {
    let page = content::site(&site).map_or(Page::NotFound, Page::Preview);

    Ok(render_page(&config, page, lang, uri.path()).await?)
}

pub async fn colors(
    State(config): State<Arc<SiteConfig>>,
    Extension(CurrentLang(lang)): Extension<CurrentLang>,
    uri: Uri,
) -> Result<Response, AppError> {
    Ok(render_page(&config, Page::Colors, lang, uri.path()).await?)
}

pub async fn icons(
    State(config): State<Arc<SiteConfig>>,
    Extension(CurrentLang(lang)): Extension<CurrentLang>,
    uri: Uri,
) -> Result<Response, AppError> {
    Ok(render_page(&config, Page::Icons, lang, uri.path()).await?)
}

// anything unmatched; requests that skipped negotiation get the default language
pub async fn not_found(
    State(config): State<Arc<SiteConfig>>,
    current_lang: Option<Extension<CurrentLang>>,
    uri: Uri,
) -> Result<Response, AppError> {
    let lang = current_lang.map_or(config.lang.default, |Extension(CurrentLang(lang))| lang);

    Ok(render_page(&config, Page::NotFound, lang, uri.path()).await?)
}
