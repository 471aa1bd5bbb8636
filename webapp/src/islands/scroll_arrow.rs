use dioxus::prelude::*;

use site::{Lang, content::text::SCROLL_ARROW_LABEL};

use crate::components::{Icon, SmartLink};

#[derive(Clone, PartialEq, Props)]
pub struct ScrollArrowProps {
    lang: Lang,
    #[props(into)]
    href: String,
}

#[component]
pub fn ScrollArrow(props: ScrollArrowProps) -> Element {
    let lang = props.lang;

    rsx! {
        SmartLink { lang, href: props.href.clone(), class: "btn btn-icon scroll-arrow",
            Icon { name: "chevron-down" }
            span { class: "sr-only", "{SCROLL_ARROW_LABEL.pick(lang)}" }
        }
    }
}
