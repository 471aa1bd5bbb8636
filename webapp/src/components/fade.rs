use dioxus::prelude::*;

use crate::dom::{self, VisibilityWatcher};

#[derive(Clone, PartialEq, Props)]
pub struct FadeInProps {
    // element id the observer looks up
    #[props(into)]
    id: String,
    children: Element,
}

// reveals its children the first time a fifth of them is on screen, then stops
// watching
#[component]
pub fn FadeIn(props: FadeInProps) -> Element {
    let mut visible = use_signal(|| false);
    let mut watcher = use_signal(|| None::<VisibilityWatcher>);

    let id = props.id.clone();
    use_effect(move || {
        let started = VisibilityWatcher::start(dom::FADE_WATCH, [id.as_str()], move |batch| {
            if batch.iter().any(|o| o.intersecting) {
                visible.set(true);
                if let Some(w) = watcher.write().as_mut() {
                    w.stop();
                }
            }
        });

        watcher.set(started);
    });

    use_drop(move || {
        if let Ok(mut slot) = watcher.try_write() {
            slot.take();
        }
    });

    rsx! {
        div {
            id: "{props.id}",
            class: if visible() { "fade visible" } else { "fade" },
            {props.children}
        }
    }
}
