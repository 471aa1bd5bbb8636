use std::{net::SocketAddr, sync::Arc};

use anyhow::{Context, Result};
use async_cell::sync::AsyncCell;
use async_trait::async_trait;
use axum::{Router, extract::Request, middleware, routing::get};
use hyper::body::Incoming;
use hyper_util::rt::{TokioExecutor, TokioIo};
use tokio::{net::TcpListener, task::JoinHandle};
use tower::Service;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{error, info, instrument, warn};

use common::config::SiteConfig;
use site::{APP_PATH, ASSETS_PATH, DOCS_PATH, IMAGES_PATH};

use crate::{
    checks::static_subdirs,
    http::{lang::negotiate_lang, pages},
    service::SiteService,
};

pub struct HttpService {
    config: Arc<SiteConfig>,
    hyper_handle: AsyncCell<JoinHandle<Result<()>>>,
}

#[async_trait]
impl SiteService for HttpService {
    fn create(config: Arc<SiteConfig>) -> Self {
        HttpService {
            config,
            hyper_handle: AsyncCell::new(),
        }
    }

    #[instrument(skip(self))]
    async fn start(&self) -> Result<()> {
        info!("starting http service");

        let socket: SocketAddr = self
            .config
            .http
            .socket
            .parse()
            .with_context(|| format!("failed to parse http socket {}", self.config.http.socket))?;

        let listener = TcpListener::bind(socket)
            .await
            .with_context(|| format!("http listener failed to bind {socket}"))?;

        let router = router(self.config.clone());

        let hyper_handle = tokio::task::spawn(serve_http(listener, router));

        self.hyper_handle.set(hyper_handle);

        info!("listening on {socket}");
        Ok(())
    }

    async fn wait(&self) -> Result<()> {
        self.hyper_handle
            .take()
            .await
            .await
            .context("http service task panicked")?
    }
}

// every route of the site
//
// static prefixes are plain file services; everything else goes through language
// negotiation and ends up as a server-rendered page
pub fn router(config: Arc<SiteConfig>) -> Router {
    let static_root = &config.http.static_root;

    let mut router = Router::new()
        .route("/{lang}", get(pages::home))
        .route("/{lang}/", get(pages::home))
        .route("/{lang}/{section}", get(pages::home_section))
        .route("/{lang}/projects/{id}", get(pages::project))
        .route("/{lang}/projects/site/{site}", get(pages::preview))
        .route("/{lang}/utils/colors", get(pages::colors))
        .route("/{lang}/utils/icons", get(pages::icons))
        .fallback(pages::not_found);

    for (prefix, subdir) in [ASSETS_PATH, IMAGES_PATH, DOCS_PATH].into_iter().zip(static_subdirs()) {
        router = router.nest_service(
            prefix.trim_end_matches('/'),
            ServeDir::new(static_root.join(subdir)),
        );
    }

    router
        .nest_service(
            APP_PATH.trim_end_matches('/'),
            ServeDir::new(&config.http.app_root),
        )
        .layer(middleware::from_fn_with_state(config.clone(), negotiate_lang))
        .layer(TraceLayer::new_for_http())
        .with_state(config)
}

// the main http server loop
async fn serve_http(listener: TcpListener, router: Router) -> Result<()> {
    let service = hyper::service::service_fn(move |request: Request<Incoming>| {
        router.clone().call(request)
    });

    loop {
        let (stream, addr) = match listener.accept().await {
            Ok(conn) => conn,
            Err(err) => {
                warn!("failed to accept connection: {err}");
                continue;
            }
        };

        let service = service.clone();
        let io = TokioIo::new(stream);

        tokio::task::spawn(async move {
            if let Err(err) = hyper_util::server::conn::auto::Builder::new(TokioExecutor::new())
                .serve_connection(io, service)
                .await
            {
                error!("connection from {addr} failed: {err}");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use std::env::temp_dir;

    use axum::{
        body::Body,
        http::{
            StatusCode,
            header::{ACCEPT_LANGUAGE, LOCATION, VARY},
        },
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use common::server::{HttpConfig, LangConfig};
    use site::{Lang, nav::MENU};

    use super::*;

    fn test_router() -> Router {
        let root = temp_dir().join("portfolio-router-tests");

        router(Arc::new(SiteConfig {
            http: HttpConfig {
                socket: "127.0.0.1:0".to_owned(),
                static_root: root.join("static"),
                app_root: root.join("app"),
                app_entry: "/app/webapp.js".to_owned(),
            },
            lang: LangConfig::default(),
        }))
    }

    async fn get_with(uri: &str, accept_language: Option<&str>) -> axum::response::Response {
        let mut request = axum::http::Request::builder().uri(uri);
        if let Some(value) = accept_language {
            request = request.header(ACCEPT_LANGUAGE, value);
        }

        test_router()
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn root_redirects_to_the_preferred_language() {
        let response = get_with("/", Some("en-US,en;q=0.9")).await;

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers()[LOCATION], "/en");
        assert_eq!(response.headers()[VARY], "Accept-Language");
    }

    #[tokio::test]
    async fn missing_header_falls_back_to_french() {
        let response = get_with("/", None).await;

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers()[LOCATION], "/fr");
    }

    #[tokio::test]
    async fn redirect_keeps_path_and_query() {
        let response = get_with("/projects/monero-stack?from=cv", Some("de-DE,en;q=0.5")).await;

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers()[LOCATION],
            "/en/projects/monero-stack?from=cv"
        );
    }

    #[tokio::test]
    async fn localized_paths_are_rendered() {
        let response = get_with("/fr", Some("en")).await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("lang=\"fr\""));
        assert!(html.contains("<title>Accueil - Nicolas Métivier</title>"));
    }

    #[tokio::test]
    async fn static_prefixes_are_not_redirected() {
        let response = get_with("/assets/missing.css", None).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().get(LOCATION).is_none());
    }

    #[tokio::test]
    async fn unknown_project_is_a_localized_404() {
        let response = get_with("/en/projects/nope", None).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let html = body_text(response).await;
        assert!(html.contains("404 - Page not found"));
        assert!(html.contains("href=\"/en\""));
    }

    #[tokio::test]
    async fn project_page_is_rendered() {
        let response = get_with("/en/projects/monero-stack", None).await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("id=\"project\""));
        assert!(html.contains("data-island="));
    }

    #[tokio::test]
    async fn section_routes_scroll_on_load() {
        let response = get_with("/en/music", None).await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("id=\"redirect\""));

        let response = get_with("/en/about", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn tool_pages_and_previews_are_routed() {
        for uri in ["/fr/utils/colors", "/en/utils/icons", "/fr/projects/site/poule-noire"] {
            let response = get_with(uri, None).await;
            assert_eq!(response.status(), StatusCode::OK, "{uri}");
        }

        let response = get_with("/fr/projects/site/nope", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn deep_unknown_paths_use_the_request_language() {
        let response = get_with("/fr/a/b/c/d", None).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let html = body_text(response).await;
        assert!(html.contains("404 - Page non trouvée"));
    }

    #[tokio::test]
    async fn every_menu_entry_is_served() {
        for lang in [Lang::Fr, Lang::En] {
            for entry in MENU {
                let href = entry.localized_href(lang);
                let response = get_with(&href, None).await;
                assert_eq!(response.status(), StatusCode::OK, "{href}");
            }
        }

        let response = get_with("/en/", None).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
