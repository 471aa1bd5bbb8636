use dioxus::prelude::*;

use site::{
    Lang,
    content::text::OPEN_NAVIGATION,
    spy::{ActiveSection, SpyEvent},
};

use crate::{
    components::{Icon, SectionChannel},
    dom::{self, VisibilityWatcher},
};

#[derive(Clone, PartialEq, Props)]
pub struct ScrollSpyNavProps {
    lang: Lang,
    channel: SectionChannel,
    // accent color for the active entry, as a css value
    #[props(into)]
    accent: String,
}

// two-level outline of the registered sections with the active one highlighted
//
// a new observer is started every time a section registers, covering every
// registered id.  hovering an entry pins it as active until the pointer leaves
#[component]
pub fn ScrollSpyNav(props: ScrollSpyNavProps) -> Element {
    let registry = props.channel.registry();
    let mut spy = use_signal(ActiveSection::default);
    let mut watcher = use_signal(|| None::<VisibilityWatcher>);
    let mut open = use_signal(|| false);

    use_effect(move || {
        let ids: Vec<String> = registry
            .read()
            .sections()
            .iter()
            .map(|s| s.id.clone())
            .collect();

        {
            let mut spy = spy.write();
            for id in &ids {
                spy.track(id.clone());
            }
        }

        watcher.set(VisibilityWatcher::start(
            dom::SPY_WATCH,
            ids.iter().map(String::as_str),
            move |batch| {
                spy.write().apply(SpyEvent::Visibility(batch));
            },
        ));
    });

    use_drop(move || {
        if let Ok(mut slot) = watcher.try_write() {
            slot.take();
        }
    });

    let outline = registry.read().outline();
    let entries: Vec<_> = {
        let state = spy.read();
        outline
            .into_iter()
            .map(|element| {
                let active = state.is_active(element.ids());
                let children: Vec<_> = element
                    .children
                    .iter()
                    .map(|child| {
                        let active = state.active() == Some(child.id.as_str());
                        (child.id.clone(), child.label.clone(), active)
                    })
                    .collect();
                (element.id, element.label, active, children)
            })
            .collect()
    };

    rsx! {
        nav {
            class: if open() { "spy-nav open" } else { "spy-nav" },
            style: "--accent: {props.accent}",
            button {
                class: "btn btn-icon spy-toggle",
                r#type: "button",
                "aria-label": OPEN_NAVIGATION.pick(props.lang),
                onclick: move |_| open.set(!open()),
                Icon { name: "list-filter-plus" }
            }
            ul { class: "spy-list",
                for (id, label, active, children) in entries {
                    li { key: "{id}",
                        SpyLink { spy, open, id, label, active }
                        if !children.is_empty() {
                            ul {
                                for (id, label, active) in children {
                                    li { key: "{id}",
                                        SpyLink { spy, open, id, label, active }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct SpyLinkProps {
    spy: Signal<ActiveSection>,
    open: Signal<bool>,
    id: String,
    label: String,
    active: bool,
}

#[component]
fn SpyLink(props: SpyLinkProps) -> Element {
    let mut spy = props.spy;
    let mut open = props.open;
    let id = props.id.clone();

    rsx! {
        a {
            class: if props.active { "spy-link active" } else { "spy-link" },
            href: "#{props.id}",
            onmouseenter: move |_| {
                spy.write().apply(SpyEvent::PointerEntered(id.clone()));
            },
            onmouseleave: move |_| {
                spy.write().apply(SpyEvent::PointerLeft);
            },
            onclick: move |_| open.set(false),
            "{props.label}"
        }
    }
}
