use dioxus::prelude::*;

use site::{Lang, content::text::DEFAULT_TITLE};

use crate::{
    components::Footer,
    island::{Island, IslandMount},
    pages::{ColorsPage, HomePage, IconsPage, NotFoundPage, Page, PreviewPage, ProjectPage},
    style::{STYLES, THEME_SCRIPT},
};

#[derive(Clone, PartialEq, Props)]
pub struct DocumentProps {
    pub page: Page,
    pub lang: Lang,
    // request path, used for the menu highlight and the language switch
    pub path: String,
    // module script that mounts the islands
    pub app_entry: String,
    // seed of the decorative log background
    pub seed: u64,
}

// head and body of a page; the html element itself is added by render_document
#[component]
pub fn Document(props: DocumentProps) -> Element {
    let lang = props.lang;
    let page = props.page.clone();
    let loader = format!("import init from '{}';\ninit();", props.app_entry);

    let page_title = page.title(lang);
    let description = page.description(lang);

    rsx! {
        head {
            meta { charset: "utf-8" }
            meta {
                name: "viewport",
                content: "width=device-width, initial-scale=1.0",
            }
            meta { "property": "og:site_name", content: DEFAULT_TITLE }
            title { "{page_title}" }
            meta { name: "description", content: description }
            script { dangerous_inner_html: THEME_SCRIPT }
            style { dangerous_inner_html: STYLES }
        }
        body {
            div { class: "page",
                IslandMount { island: Island::LogBackground { seed: props.seed } }
                IslandMount {
                    island: Island::SidebarNav {
                        lang,
                        path: props.path.clone(),
                    },
                }
                main { class: "page-main",
                    PageBody { page, lang }
                }
                Footer { lang }
            }
            script { r#type: "module", dangerous_inner_html: loader }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct PageBodyProps {
    page: Page,
    lang: Lang,
}

#[component]
fn PageBody(props: PageBodyProps) -> Element {
    let lang = props.lang;

    match props.page {
        Page::Home { section } => rsx! {
            HomePage { lang, section: section.unwrap_or_default() }
        },
        Page::Project(project) => rsx! {
            ProjectPage { lang, project }
        },
        Page::Preview(site) => rsx! {
            PreviewPage { lang, site }
        },
        Page::Colors => rsx! {
            ColorsPage { lang }
        },
        Page::Icons => rsx! {
            IconsPage { lang }
        },
        Page::NotFound => rsx! {
            NotFoundPage { lang }
        },
    }
}

// renders a document to a string, doctype and html element included
pub fn render_document(props: DocumentProps) -> String {
    let lang = props.lang;
    let mut vdom = VirtualDom::new_with_props(Document, props);
    vdom.rebuild_in_place();
    format!(
        "<!DOCTYPE html><html lang=\"{}\">{}</html>",
        lang.code(),
        dioxus::ssr::render(&vdom)
    )
}

#[cfg(test)]
mod tests {
    use site::content;

    use super::*;

    fn document(page: Page, lang: Lang, path: &str) -> String {
        render_document(DocumentProps {
            page,
            lang,
            path: path.to_owned(),
            app_entry: "/app/webapp.js".to_owned(),
            seed: 1,
        })
    }

    #[test]
    fn document_frame() {
        let html = document(Page::Home { section: None }, Lang::En, "/en");

        assert!(html.starts_with("<!DOCTYPE html><html lang=\"en\"><head>"));
        assert!(html.ends_with("</body></html>"));
        assert!(html.contains("<title>Home - Nicolas Métivier</title>"));
        assert!(html.contains("Independent developer, trainer"));
        assert!(html.contains("id=\"log-background\""));
        assert!(html.contains("id=\"sidebar\""));
        assert!(html.contains("class=\"footer\""));
        assert!(html.contains("import init from '/app/webapp.js';"));
        assert!(html.contains("localStorage.getItem('theme')"));
    }

    #[test]
    fn not_found_document_is_localized() {
        let html = document(Page::NotFound, Lang::Fr, "/fr/nope");

        assert!(html.contains("lang=\"fr\""));
        assert!(html.contains("<title>404 - Page non trouvée</title>"));
        assert!(html.contains("Retour à l’accueil"));
    }

    #[test]
    fn project_document_mounts_the_project_island() {
        let project = content::project("deno-logger").unwrap();
        let html = document(Page::Project(project), Lang::Fr, "/fr/projects/deno-logger");

        assert!(html.contains("id=\"project\""));
        assert!(html.contains("project-title"));
    }
}
