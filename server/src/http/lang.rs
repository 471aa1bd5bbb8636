use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{
        StatusCode, Uri,
        header::{ACCEPT_LANGUAGE, LOCATION, VARY},
    },
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::debug;

use common::config::SiteConfig;
use site::{Lang, lang::detect_preferred_lang};

// language of the request, taken from the first path segment and attached to the
// request via an extension with this type
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurrentLang(pub Lang);

// the language named by the first path segment, if any
pub fn path_lang(path: &str) -> Option<Lang> {
    let first = path.trim_start_matches('/').split('/').next()?;
    Lang::from_code(first)
}

// where a path without a language segment is sent; the query string is kept
pub fn localized_location(lang: Lang, uri: &Uri) -> String {
    let path = match uri.path() {
        "" | "/" => lang.root(),
        path => format!("/{}{path}", lang.code()),
    };

    match uri.query() {
        Some(query) => format!("{path}?{query}"),
        None => path,
    }
}

// language negotiation
//
// static prefixes pass through untouched.  a path that already starts with a
// supported language continues with CurrentLang attached; anything else is
// redirected under the language preferred by Accept-Language
pub async fn negotiate_lang(
    State(config): State<Arc<SiteConfig>>,
    mut req: Request,
    next: Next,
) -> Response {
    let path = req.uri().path();

    if config.lang.bypasses(path) {
        return next.run(req).await;
    }

    if let Some(lang) = path_lang(path) {
        req.extensions_mut().insert(CurrentLang(lang));
        return next.run(req).await;
    }

    let header = req
        .headers()
        .get(ACCEPT_LANGUAGE)
        .and_then(|header| header.to_str().ok());

    let lang = detect_preferred_lang(header, config.lang.default);
    let location = localized_location(lang, req.uri());

    debug!("redirecting {} to {location}", req.uri());

    (
        StatusCode::FOUND,
        [(LOCATION, location.as_str()), (VARY, "Accept-Language")],
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_segment_names_the_language() {
        assert_eq!(path_lang("/fr"), Some(Lang::Fr));
        assert_eq!(path_lang("/en/projects/monero-stack"), Some(Lang::En));
        assert_eq!(path_lang("/"), None);
        assert_eq!(path_lang("/english/about"), None);
        assert_eq!(path_lang("/projects/en"), None);
    }

    #[test]
    fn locations_keep_path_and_query() {
        let root: Uri = "/".parse().unwrap();
        assert_eq!(localized_location(Lang::En, &root), "/en");

        let section: Uri = "/projects?ref=cv".parse().unwrap();
        assert_eq!(localized_location(Lang::Fr, &section), "/fr/projects?ref=cv");

        let root_query: Uri = "/?a=1".parse().unwrap();
        assert_eq!(localized_location(Lang::Fr, &root_query), "/fr?a=1");
    }
}
