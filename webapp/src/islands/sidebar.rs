use dioxus::prelude::*;

use site::{
    Lang, SITE_OWNER,
    content::text::{CHANGE_LANGUAGE, OPEN_NAVIGATION, TOGGLE_DARK},
    nav::{self, MENU},
};

use crate::{
    components::{Icon, SmartLink},
    dom::{self, WindowListener},
};

#[derive(Clone, PartialEq, Props)]
pub struct SidebarNavProps {
    lang: Lang,
    // the request path; the client takes over from location once mounted
    #[props(into)]
    path: String,
}

// site navigation
//
// menu links highlight against the current path, which is refreshed on every
// popstate (smart links dispatch one after pushing).  also carries the language
// switcher, the dark mode toggle and the mobile open/close button, which locks
// page scrolling while the menu is open
#[component]
pub fn SidebarNav(props: SidebarNavProps) -> Element {
    let lang = props.lang;

    let initial = props.path.clone();
    let mut path = use_signal(move || initial);
    let mut open = use_signal(|| false);
    let mut dark = use_signal(|| false);
    let mut popstate = use_signal(|| None::<WindowListener>);

    use_effect(move || {
        dark.set(dom::is_dark());
        path.set(dom::location_path());
        popstate.set(WindowListener::start("popstate", move || {
            path.set(dom::location_path())
        }));
    });

    use_drop(move || {
        if let Ok(mut slot) = popstate.try_write() {
            slot.take();
        }
        dom::set_scroll_locked(false);
    });

    let mut set_open = move |value: bool| {
        open.set(value);
        dom::set_scroll_locked(value);
    };

    let current = path();
    let links: Vec<_> = MENU
        .iter()
        .map(|entry| {
            let class = if nav::is_active(&current, lang, entry.href) {
                "sidebar-link active"
            } else {
                "sidebar-link"
            };
            (entry, class)
        })
        .collect();
    let switches: Vec<_> = lang
        .others()
        .map(|other| (other, nav::swap_lang(&current, other)))
        .collect();

    let toggle_icon: &'static str = if open() { "x" } else { "menu" };
    let theme_icon: &'static str = if dark() { "sun" } else { "moon" };

    rsx! {
        button {
            class: "btn btn-icon sidebar-toggle",
            r#type: "button",
            "aria-label": OPEN_NAVIGATION.pick(lang),
            "aria-expanded": "{open()}",
            onclick: move |_| set_open(!open()),
            Icon { name: toggle_icon }
        }
        aside { class: if open() { "sidebar open" } else { "sidebar" },
            a { class: "sidebar-brand", href: lang.root(), "{SITE_OWNER}" }
            nav {
                ul { class: "sidebar-menu",
                    for (entry, class) in links {
                        li { onclick: move |_| set_open(false),
                            SmartLink { lang, href: entry.localized_href(lang), class,
                                Icon { name: entry.icon }
                                span { "{entry.title.pick(lang)}" }
                            }
                        }
                    }
                }
            }
            div { class: "sidebar-tools",
                for (other, href) in switches {
                    a {
                        class: "btn",
                        href,
                        hreflang: other.code(),
                        title: CHANGE_LANGUAGE.pick(lang),
                        Icon { name: "languages" }
                        "{other.code().to_uppercase()}"
                    }
                }
                button {
                    class: "btn btn-icon",
                    r#type: "button",
                    "aria-label": TOGGLE_DARK.pick(lang),
                    onclick: move |_| {
                        let next = !dark();
                        dark.set(next);
                        dom::set_dark(next);
                    },
                    Icon { name: theme_icon }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(lang: Lang, path: &str) -> String {
        let path = path.to_owned();
        dioxus::ssr::render_element(rsx! {
            SidebarNav { lang, path }
        })
    }

    #[test]
    fn highlights_home_on_language_root() {
        let html = render(Lang::Fr, "/fr");

        assert!(html.contains("class=\"sidebar-link active\" href=\"/fr\"")
            || html.contains("href=\"/fr\" class=\"sidebar-link active\""));
        assert!(!html.contains("href=\"/fr/\""));
        assert_eq!(html.matches("sidebar-link active").count(), 1);
    }

    #[test]
    fn highlights_home_with_trailing_slash() {
        let html = render(Lang::En, "/en/");

        assert_eq!(html.matches("sidebar-link active").count(), 1);
        assert!(html.contains("href=\"/fr\""));
    }

    #[test]
    fn highlights_section_prefix() {
        let html = render(Lang::En, "/en/projects/monero-stack");

        assert!(html.contains("href=\"/en/projects\" class=\"sidebar-link active\"")
            || html.contains("class=\"sidebar-link active\" href=\"/en/projects\""));
        assert_eq!(html.matches("sidebar-link active").count(), 1);
        assert!(html.contains("Projects"));
    }

    #[test]
    fn language_switch_keeps_the_page() {
        let html = render(Lang::Fr, "/fr/projects/deno-logger");

        assert!(html.contains("href=\"/en/projects/deno-logger\""));
        assert!(html.contains(">EN"));
    }
}
