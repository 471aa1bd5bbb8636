use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::error;

use site::Lang;

use crate::islands::{
    ColorGrid, IconGrid, LogBackground, ProjectBody, RedirectToSection, ScrollArrow, SidebarNav,
    UrlSync,
};

// an island and the props it is mounted with
//
// the server serializes this next to the rendered markup; the client reads it back
// and mounts the same component in the same place.  a given page carries at most
// one island of each kind, so the kind doubles as the mount point id
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Island {
    SidebarNav { lang: Lang, path: String },
    LogBackground { seed: u64 },
    ScrollArrow { lang: Lang, href: String },
    SectionUrlSync { lang: Lang, section_ids: Vec<String> },
    RedirectToSection { section_id: String },
    ProjectBody { lang: Lang, project_id: String },
    IconGrid { lang: Lang },
    ColorGrid { lang: Lang },
}

impl Island {
    pub fn mount_id(&self) -> &'static str {
        match self {
            Island::SidebarNav { .. } => "sidebar",
            Island::LogBackground { .. } => "log-background",
            Island::ScrollArrow { .. } => "scroll-arrow",
            Island::SectionUrlSync { .. } => "url-sync",
            Island::RedirectToSection { .. } => "redirect",
            Island::ProjectBody { .. } => "project",
            Island::IconGrid { .. } => "icon-grid",
            Island::ColorGrid { .. } => "color-grid",
        }
    }

    pub fn encode(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn decode(props: &str) -> serde_json::Result<Self> {
        serde_json::from_str(props)
    }

    pub fn render(&self) -> Element {
        match self.clone() {
            Island::SidebarNav { lang, path } => rsx! {
                SidebarNav { lang, path }
            },
            Island::LogBackground { seed } => rsx! {
                LogBackground { seed }
            },
            Island::ScrollArrow { lang, href } => rsx! {
                ScrollArrow { lang, href }
            },
            Island::SectionUrlSync { lang, section_ids } => rsx! {
                UrlSync { lang, section_ids }
            },
            Island::RedirectToSection { section_id } => rsx! {
                RedirectToSection { section_id }
            },
            Island::ProjectBody { lang, project_id } => rsx! {
                ProjectBody { lang, project_id }
            },
            Island::IconGrid { lang } => rsx! {
                IconGrid { lang }
            },
            Island::ColorGrid { lang } => rsx! {
                ColorGrid { lang }
            },
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct IslandMountProps {
    island: Island,
}

// server side: the rendered island inside its mount point, props attached
#[component]
pub fn IslandMount(props: IslandMountProps) -> Element {
    let island = props.island;
    let id = island.mount_id();

    match island.encode() {
        Ok(data) => rsx! {
            div { id: id, "data-island": data, {island.render()} }
        },
        Err(err) => {
            // still render the markup, the island just stays static
            error!("failed to encode props of island {id}: {err}");
            rsx! {
                div { id: id, {island.render()} }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct IslandRootProps {
    pub island: Island,
}

// client side: the root of the virtual dom mounted on one island
#[component]
pub fn IslandRoot(props: IslandRootProps) -> Element {
    props.island.render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn props_are_tagged_by_kind() {
        let island = Island::SectionUrlSync {
            lang: Lang::En,
            section_ids: vec!["home".to_owned(), "projects".to_owned()],
        };

        let json = island.encode().unwrap();
        assert_eq!(
            json,
            r#"{"kind":"section-url-sync","lang":"en","section_ids":["home","projects"]}"#
        );
        assert_eq!(Island::decode(&json).unwrap(), island);
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert!(Island::decode(r#"{"kind":"carousel"}"#).is_err());
        assert!(Island::decode(r#"{"kind":"icon-grid","lang":"de"}"#).is_err());
    }

    #[test]
    fn mount_point_carries_its_props() {
        let html = dioxus::ssr::render_element(rsx! {
            IslandMount {
                island: Island::ScrollArrow {
                    lang: Lang::Fr,
                    href: "/fr/projects".to_owned(),
                },
            }
        });

        assert!(html.contains("id=\"scroll-arrow\""));
        assert!(html.contains("data-island="));
        assert!(html.contains("scroll-arrow"));
        assert!(html.contains("href=\"/fr/projects\""));
    }
}
