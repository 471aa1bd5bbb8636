use dioxus::prelude::*;

use site::{
    Lang, SITE_HOST,
    content::{Site, text::PREVIEW},
};

use crate::components::Icon;

#[derive(Clone, PartialEq, Props)]
pub struct PreviewPageProps {
    lang: Lang,
    site: &'static Site,
}

// a site made for someone else, framed under a notice saying so
#[component]
pub fn PreviewPage(props: PreviewPageProps) -> Element {
    let site = props.site;
    let text = PREVIEW.pick(props.lang);

    rsx! {
        div { class: "preview-notice",
            p {
                "{text.notice} "
                strong { "{SITE_HOST}" }
                ". {text.not_original} "
                a {
                    href: site.url,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "{text.visit}"
                    Icon { name: "external-link" }
                }
            }
        }
        iframe {
            class: "preview-frame",
            src: site.url,
            title: site.name,
            "loading": "lazy",
        }
    }
}

#[cfg(test)]
mod tests {
    use site::content;

    use super::*;

    #[test]
    fn frames_the_original_site() {
        let site = content::site("poule-noire").unwrap();
        let html = dioxus::ssr::render_element(rsx! {
            PreviewPage { lang: Lang::En, site }
        });

        assert!(html.contains("<iframe"));
        assert!(html.contains("src=\"http://lapoulenoireduberry.com\""));
        assert!(html.contains("Visit the original site"));
        assert!(html.contains("nicolas-metivier.fr"));
    }
}
