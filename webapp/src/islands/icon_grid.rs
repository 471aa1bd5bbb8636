use dioxus::prelude::*;

use site::{
    Lang,
    content::text::{CLOSE, ICONS_PAGE, NAME_COPIED, OPEN_FILTERS},
    icons::{self, IconEntry},
    lang::capitalize,
};

use crate::{
    components::{CopyBlock, Icon},
    dom::WindowListener,
};

#[derive(Clone, PartialEq, Props)]
pub struct IconGridProps {
    lang: Lang,
}

// icon catalog browser
//
// name search and a single category filter narrow the grid; clicking a category
// again clears it.  a tile opens the detail modal, which Escape closes
#[component]
pub fn IconGrid(props: IconGridProps) -> Element {
    let lang = props.lang;
    let text = ICONS_PAGE.pick(lang);

    let mut query = use_signal(String::new);
    let mut category = use_signal(|| None::<&'static str>);
    let mut selected = use_signal(|| None::<&'static IconEntry>);
    let mut filters_open = use_signal(|| false);
    let mut keys = use_signal(|| None::<WindowListener>);

    use_effect(move || {
        keys.set(WindowListener::keys(move |key| {
            if key == "Escape" {
                selected.set(None);
            }
        }));
    });

    use_drop(move || {
        if let Ok(mut slot) = keys.try_write() {
            slot.take();
        }
    });

    let current = category();
    let shown = icons::filter(&query.read(), current);
    let categories = icons::categories();

    rsx! {
        p { class: "screen-alert", "{text.screen_alert}" }
        div { class: "icon-browser",
            aside { class: if filters_open() { "icon-filters open" } else { "icon-filters" },
                h2 { "{text.categories}" }
                ul { class: "icon-categories",
                    for (name, count) in categories {
                        li { key: "{name}",
                            button {
                                class: if current == Some(name) { "icon-category active" } else { "icon-category" },
                                r#type: "button",
                                onclick: move |_| {
                                    let next = if category() == Some(name) { None } else { Some(name) };
                                    category.set(next);
                                },
                                span { "{capitalize(name)}" }
                                span { "{count}" }
                            }
                        }
                    }
                }
            }
            div {
                div { class: "icon-search",
                    button {
                        class: "btn btn-icon icon-filters-toggle",
                        r#type: "button",
                        "aria-label": OPEN_FILTERS.pick(lang),
                        onclick: move |_| filters_open.set(!filters_open()),
                        Icon { name: "list-filter-plus" }
                    }
                    input {
                        class: "search",
                        r#type: "search",
                        placeholder: text.search,
                        value: "{query}",
                        oninput: move |evt| query.set(evt.value()),
                    }
                }
                div { class: "icon-grid",
                    for entry in shown {
                        button {
                            key: "{entry.snake}",
                            class: "icon-tile",
                            r#type: "button",
                            title: entry.name,
                            onclick: move |_| selected.set(Some(entry)),
                            Icon { name: entry.snake }
                        }
                    }
                }
            }
        }
        if let Some(entry) = selected() {
            IconModal { lang, entry, selected }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct IconModalProps {
    lang: Lang,
    entry: &'static IconEntry,
    selected: Signal<Option<&'static IconEntry>>,
}

#[component]
fn IconModal(props: IconModalProps) -> Element {
    let lang = props.lang;
    let entry = props.entry;
    let mut selected = props.selected;
    let labels = ICONS_PAGE.pick(lang).meta;

    let categories = entry.meta.categories.join(", ");
    let tags = entry.meta.tags.join(", ");
    let contributors = entry.meta.contributors.join(", ");

    rsx! {
        div { class: "modal-backdrop", onclick: move |_| selected.set(None),
            div {
                class: "modal",
                role: "dialog",
                "aria-modal": "true",
                onclick: move |evt| evt.stop_propagation(),
                div { class: "modal-header",
                    h2 { "{entry.name}" }
                    button {
                        class: "btn btn-icon",
                        r#type: "button",
                        "aria-label": CLOSE.pick(lang),
                        onclick: move |_| selected.set(None),
                        Icon { name: "x" }
                    }
                }
                Icon { name: entry.snake, class: "icon-large" }
                dl {
                    dt { "{labels.name}" }
                    dd {
                        CopyBlock {
                            lang,
                            text: entry.name,
                            inline: true,
                            toast: NAME_COPIED.pick(lang),
                        }
                        code { "{entry.snake}" }
                    }
                    dt { "{labels.categories}" }
                    dd { "{categories}" }
                    dt { "{labels.tags}" }
                    dd { "{tags}" }
                    dt { "{labels.contributors}" }
                    dd { "{contributors}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use site::icons::ICONS;

    use super::*;

    #[test]
    fn lists_every_icon_and_category() {
        let html = dioxus::ssr::render_element(rsx! {
            IconGrid { lang: Lang::En }
        });

        assert_eq!(html.matches("class=\"icon-tile\"").count(), ICONS.len());
        assert!(html.contains("placeholder=\"Search icons...\""));
        assert!(html.contains("<span>Brands</span><span>3</span>"));
        assert!(!html.contains("modal"));
    }

    #[test]
    fn modal_shows_metadata() {
        let mut vdom = VirtualDom::new(|| {
            let selected = use_signal(|| icons::icon("at-sign"));
            let entry = icons::icon("at-sign").unwrap();
            rsx! {
                IconModal { lang: Lang::Fr, entry, selected }
            }
        });
        vdom.rebuild_in_place();
        let html = dioxus::ssr::render(&vdom);

        assert!(html.contains("<h2>AtSign</h2>"));
        assert!(html.contains("<code>at-sign</code>"));
        assert!(html.contains("Contributeurs"));
        assert!(html.contains("colebemis, ericfennis"));
        assert!(html.contains("aria-label=\"Fermer\""));
    }
}
