use dioxus::prelude::*;

use site::{
    Lang, SITE_OWNER,
    content::text::{BUILT_WITH, FOOTER},
};

use crate::components::Icon;

#[derive(Clone, PartialEq, Props)]
pub struct FooterProps {
    lang: Lang,
}

#[component]
pub fn Footer(props: FooterProps) -> Element {
    let text = FOOTER.pick(props.lang);

    rsx! {
        footer { class: "footer",
            p {
                "{text.made} "
                Icon { name: "heart" }
                " {text.by}"
            }
            p { class: "footer-credits",
                span { "{text.built}" }
                for (name, url) in BUILT_WITH {
                    a {
                        href: url,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "{name}"
                    }
                }
            }
            p { "© {SITE_OWNER}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_is_localized() {
        let fr = dioxus::ssr::render_element(rsx! {
            Footer { lang: Lang::Fr }
        });
        let en = dioxus::ssr::render_element(rsx! {
            Footer { lang: Lang::En }
        });

        assert!(fr.contains("Réalisé avec"));
        assert!(en.contains("Made with"));
        assert!(en.contains("https://dioxuslabs.com/"));
    }
}
