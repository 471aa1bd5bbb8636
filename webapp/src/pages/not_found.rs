use dioxus::prelude::*;

use site::{Lang, content::text::NOT_FOUND};

#[derive(Clone, PartialEq, Props)]
pub struct NotFoundPageProps {
    lang: Lang,
}

#[component]
pub fn NotFoundPage(props: NotFoundPageProps) -> Element {
    let lang = props.lang;
    let text = NOT_FOUND.pick(lang);

    rsx! {
        div { class: "not-found",
            h1 { "{text.title}" }
            p { "{text.text}" }
            a { class: "btn btn-primary", href: lang.root(), "{text.button}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_back_to_the_localized_home() {
        let html = dioxus::ssr::render_element(rsx! {
            NotFoundPage { lang: Lang::En }
        });

        assert!(html.contains("<h1>404 - Page not found</h1>"));
        assert!(html.contains("href=\"/en\""));
    }
}
