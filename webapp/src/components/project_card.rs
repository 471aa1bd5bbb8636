use dioxus::prelude::*;

use site::{
    Lang,
    content::{Project, Site, text::SEE_PROJECT},
};

use crate::components::Icon;

#[derive(Clone, PartialEq, Props)]
pub struct ProjectCardProps {
    lang: Lang,
    project: &'static Project,
}

#[component]
pub fn ProjectCard(props: ProjectCardProps) -> Element {
    let lang = props.lang;
    let project = props.project;
    let name = project.name.pick(lang);

    rsx! {
        article { class: "card",
            if let Some(src) = project.card_image_src() {
                img { src, alt: "{name}", loading: "lazy" }
            }
            div { class: "card-body",
                h3 { class: "card-title", "{name}" }
                p { "{project.description.pick(lang)}" }
                a { class: "btn btn-primary", href: project.path(lang),
                    "{SEE_PROJECT.pick(lang)}"
                    Icon { name: "arrow-right" }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct SiteCardProps {
    lang: Lang,
    site: &'static Site,
}

#[component]
pub fn SiteCard(props: SiteCardProps) -> Element {
    let lang = props.lang;
    let site = props.site;

    // sites marked target_self are shown through the preview page
    let href = if site.target_self {
        site.path(lang)
    } else {
        site.url.to_owned()
    };

    rsx! {
        article { class: "card",
            img {
                src: "/images/{site.image}",
                alt: "{site.name}",
                loading: "lazy",
            }
            div { class: "card-body",
                h3 { class: "card-title", "{site.name}" }
                p { "{site.description.pick(lang)}" }
                a { class: "btn", href,
                    "{SEE_PROJECT.pick(lang)}"
                    Icon { name: "external-link" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use site::content::{self, SITES};

    use super::*;

    #[test]
    fn project_card_links_to_localized_page() {
        let project = content::project("monero-stack").unwrap();
        let html = dioxus::ssr::render_element(rsx! {
            ProjectCard { lang: Lang::En, project }
        });

        assert!(html.contains("href=\"/en/projects/monero-stack\""));
        assert!(html.contains("Self-hosted Monero infrastructure"));
        assert!(html.contains("/images/monero-stack.png"));
    }

    #[test]
    fn site_card_goes_through_preview() {
        let html = dioxus::ssr::render_element(rsx! {
            SiteCard { lang: Lang::Fr, site: &SITES[0] }
        });

        assert!(html.contains("href=\"/fr/projects/site/poule-noire\""));
    }
}
