use dioxus::prelude::*;

use site::{
    Lang,
    content::text::{COPIED, COPY},
};

use crate::{components::Icon, dom};

const TOAST_MS: u32 = 1500;

#[derive(Clone, PartialEq, Props)]
pub struct CopyBlockProps {
    lang: Lang,
    #[props(into)]
    text: String,
    // inline code instead of a preformatted block
    #[props(default)]
    inline: bool,
    // replaces the default "copied" message when not empty
    #[props(default)]
    toast: &'static str,
}

#[component]
pub fn CopyBlock(props: CopyBlockProps) -> Element {
    let mut copied = use_signal(|| false);

    let label = COPY.pick(props.lang);
    let message = if props.toast.is_empty() {
        COPIED.pick(props.lang)
    } else {
        props.toast
    };

    let text = props.text.clone();
    let copy = move |_| {
        let text = text.clone();
        spawn(async move {
            if dom::copy_text(&text).await {
                copied.set(true);
                dom::sleep_ms(TOAST_MS).await;
                copied.set(false);
            }
        });
    };

    let button = rsx! {
        button {
            class: "btn btn-icon",
            r#type: "button",
            title: label,
            "aria-label": label,
            onclick: copy,
            Icon { name: "copy" }
        }
    };

    let body = if props.inline {
        rsx! {
            span { class: "copy-inline",
                code { "{props.text}" }
                {button}
            }
        }
    } else {
        rsx! {
            div { class: "copy-block",
                pre {
                    code { "{props.text}" }
                }
                {button}
            }
        }
    };

    rsx! {
        {body}
        if copied() {
            div { class: "toast", role: "status", "{message}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_renders_code_and_localized_button() {
        let html = dioxus::ssr::render_element(rsx! {
            CopyBlock { lang: Lang::Fr, text: "docker compose up -d" }
        });

        assert!(html.contains("<code>docker compose up -d</code>"));
        assert!(html.contains("aria-label=\"Copier\""));
        assert!(!html.contains("toast"));
    }

    #[test]
    fn inline_variant() {
        let html = dioxus::ssr::render_element(rsx! {
            CopyBlock { lang: Lang::En, text: "ArrowLeft", inline: true }
        });

        assert!(html.contains("copy-inline"));
        assert!(html.contains("aria-label=\"Copy\""));
    }
}
