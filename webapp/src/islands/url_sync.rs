use dioxus::prelude::*;

use site::{Lang, url::SectionUrlSync};

use crate::dom::{self, VisibilityWatcher};

#[derive(Clone, PartialEq, Props)]
pub struct UrlSyncProps {
    lang: Lang,
    section_ids: Vec<String>,
}

// keeps the address bar on the home section being read
//
// the current history entry is replaced, never pushed, and a popstate is sent so
// the sidebar highlight follows
#[component]
pub fn UrlSync(props: UrlSyncProps) -> Element {
    let mut watcher = use_signal(|| None::<VisibilityWatcher>);

    let lang = props.lang;
    let ids = props.section_ids.clone();
    use_effect(move || {
        let mut sync = SectionUrlSync::new(lang, ids.iter().cloned());

        let started = VisibilityWatcher::start(
            dom::URL_WATCH,
            ids.iter().map(String::as_str),
            move |batch| {
                if let Some(path) = sync.observe(&batch, &dom::location_path()) {
                    dom::replace_path(&path);
                    dom::dispatch_popstate();
                }
            },
        );

        watcher.set(started);
    });

    use_drop(move || {
        if let Ok(mut slot) = watcher.try_write() {
            slot.take();
        }
    });

    rsx! {}
}
