use dioxus::prelude::*;

use site::logline::{self, LogGenerator, LogWindow};

use crate::dom::{self, WindowListener};

#[derive(Clone, PartialEq, Props)]
pub struct LogBackgroundProps {
    seed: u64,
}

// decorative scrolling server log behind the page
//
// the window holds as many lines as fit the viewport and is refilled from scratch
// on resize.  new entries arrive at random intervals and push the oldest out
#[component]
pub fn LogBackground(props: LogBackgroundProps) -> Element {
    let seed = props.seed;
    let mut generator = use_signal(|| LogGenerator::new(seed));
    let prompt = use_hook(|| LogGenerator::new(seed).prompt());
    let mut window = use_signal(|| LogWindow::new(0));
    let mut resize = use_signal(|| None::<WindowListener>);

    let mut refill = move || {
        let (width, height) = dom::viewport();
        let capacity = logline::visible_lines(width, height);
        let filled = LogWindow::filled(capacity, &mut generator.write(), dom::now());
        window.set(filled);
    };

    use_effect(move || {
        refill();
        resize.set(WindowListener::start("resize", refill));
    });

    use_future(move || async move {
        loop {
            let delay = generator.write().next_delay_ms();
            dom::sleep_ms(delay).await;

            let entry = generator.write().next_entry(dom::now());
            window.write().extend(entry);
        }
    });

    use_drop(move || {
        if let Ok(mut slot) = resize.try_write() {
            slot.take();
        }
    });

    let lines = window.read().lines();

    rsx! {
        div { class: "log-background", "aria-hidden": "true",
            for line in lines {
                div { class: "log-line log-{line.level}", "{line.text}" }
            }
            div { class: "log-prompt", "{prompt}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_render_shows_only_the_prompt() {
        let html = dioxus::ssr::render_element(rsx! {
            LogBackground { seed: 7 }
        });

        assert!(html.contains("mnlaugh@nicolas-metivier.fr:~$ ssh "));
        assert!(html.contains("aria-hidden=\"true\""));
        assert!(!html.contains("log-line"));
    }

    #[test]
    fn same_seed_renders_the_same_prompt() {
        let render = |seed: u64| {
            dioxus::ssr::render_element(rsx! {
                LogBackground { seed }
            })
        };

        assert_eq!(render(3), render(3));
    }
}
