use dioxus::prelude::*;

use site::{Lang, nav};

use crate::dom;

#[derive(Clone, PartialEq, Props)]
pub struct SmartLinkProps {
    lang: Lang,
    #[props(into)]
    href: String,
    #[props(into)]
    class: String,
    children: Element,
}

// link that scrolls instead of navigating on the home routes
//
// when the current path is a home section, a click scrolls smoothly to the target
// section, pushes the link onto the history and tells the sidebar.  anywhere else,
// or when the target is not on the page, the browser navigates normally
#[component]
pub fn SmartLink(props: SmartLinkProps) -> Element {
    let lang = props.lang;
    let href = props.href.clone();

    let onclick = move |evt: MouseEvent| {
        let target = nav::scroll_target(&dom::location_path(), lang, &href);

        if let Some(target) = target {
            if dom::scroll_to_section(&target) {
                evt.prevent_default();
                dom::push_path(&href);
                dom::dispatch_popstate();
            }
        }
    };

    rsx! {
        a {
            href: "{props.href}",
            class: "{props.class}",
            onclick,
            {props.children}
        }
    }
}
