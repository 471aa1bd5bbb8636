use dioxus::prelude::*;

use crate::dom::{self, Timer};

const RETRY_MS: u32 = 100;

#[derive(Clone, PartialEq, Props)]
pub struct RedirectToSectionProps {
    #[props(into)]
    section_id: String,
}

// scrolls to a section once the page is mounted
//
// the target may not be laid out yet when the bundle starts, so a missing element
// gets exactly one more try after a short delay
#[component]
pub fn RedirectToSection(props: RedirectToSectionProps) -> Element {
    let mut retry = use_signal(|| None::<Timer>);

    let id = props.section_id.clone();
    use_effect(move || {
        if dom::scroll_to_section(&id) {
            return;
        }

        let id = id.clone();
        retry.set(Some(Timer::once(RETRY_MS, move || {
            if !dom::scroll_to_section(&id) {
                tracing::debug!("section {id} not found, giving up");
            }
        })));
    });

    use_drop(move || {
        if let Ok(mut slot) = retry.try_write() {
            if let Some(mut timer) = slot.take() {
                timer.cancel();
            }
        }
    });

    rsx! {}
}
