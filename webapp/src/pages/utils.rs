use dioxus::prelude::*;

use site::{
    Lang,
    content::text::{COLORS_PAGE, ICONS_PAGE},
    icons::ICONS,
};

use crate::island::{Island, IslandMount};

#[derive(Clone, PartialEq, Props)]
pub struct ColorsPageProps {
    lang: Lang,
}

#[component]
pub fn ColorsPage(props: ColorsPageProps) -> Element {
    let lang = props.lang;

    rsx! {
        h1 { "{COLORS_PAGE.pick(lang).title}" }
        IslandMount { island: Island::ColorGrid { lang } }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct IconsPageProps {
    lang: Lang,
}

#[component]
pub fn IconsPage(props: IconsPageProps) -> Element {
    let lang = props.lang;

    rsx! {
        h1 { "{ICONS_PAGE.pick(lang).title} ({ICONS.len()})" }
        IslandMount { island: Island::IconGrid { lang } }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_pages_mount_their_islands() {
        let colors = dioxus::ssr::render_element(rsx! {
            ColorsPage { lang: Lang::En }
        });
        assert!(colors.contains("<h1>Available Tailwind Colors</h1>"));
        assert!(colors.contains("id=\"color-grid\""));

        let icons = dioxus::ssr::render_element(rsx! {
            IconsPage { lang: Lang::Fr }
        });
        assert!(icons.contains(&format!("<h1>Icônes disponibles ({})</h1>", ICONS.len())));
        assert!(icons.contains("id=\"icon-grid\""));
    }
}
