use dioxus::prelude::*;

use site::{
    Lang, DOCS_PATH, IMAGES_PATH,
    content::{
        CERTS, CONTACTS, Cert, MUSIC, Music, PROJECTS, SITES,
        text::{
            CERTS_TITLE, CONTACT_TEXT, CONTACT_TITLE, HERO_CONTENT, HERO_TITLE, MUSIC_TITLE,
            PERSONAL_TITLE, PROJECTS_TITLE, SEE_PROJECT, SITES_TITLE,
        },
    },
    nav::HOME_SECTIONS,
    palette,
    url::{HOME_SECTION, section_path},
};

use crate::{
    components::{Icon, InlineRun, ProjectCard, RichBlocks, SiteCard},
    island::{Island, IslandMount},
};

#[derive(Clone, PartialEq, Props)]
pub struct HomePageProps {
    lang: Lang,
    // section to scroll to once mounted; empty for none
    #[props(default)]
    section: &'static str,
}

#[component]
pub fn HomePage(props: HomePageProps) -> Element {
    let lang = props.lang;
    let section_ids: Vec<String> = HOME_SECTIONS.iter().map(|s| s.to_string()).collect();
    let contacts = CONTACTS
        .iter()
        .map(|c| (c, palette::hex(c.color, 600).unwrap_or_default()));

    rsx! {
        section { id: HOME_SECTION, class: "hero",
            h1 { class: "hero-title",
                InlineRun { inlines: HERO_TITLE.pick(lang) }
            }
            div { class: "hero-content",
                RichBlocks { lang, blocks: HERO_CONTENT.pick(lang) }
            }
            IslandMount {
                island: Island::ScrollArrow {
                    lang,
                    href: section_path(lang, "projects"),
                },
            }
        }
        section { id: "projects", class: "content-section",
            h2 { "{PROJECTS_TITLE.pick(lang)}" }
            div { id: "websites",
                h3 { "🌐 {SITES_TITLE.pick(lang)}" }
                div { class: "card-grid",
                    for site in SITES.iter() {
                        SiteCard { key: "{site.id}", lang, site }
                    }
                }
            }
            div { id: "personals",
                h3 { "🧪 {PERSONAL_TITLE.pick(lang)}" }
                div { class: "card-grid",
                    for project in PROJECTS.iter() {
                        ProjectCard { key: "{project.id}", lang, project }
                    }
                }
            }
        }
        section { id: "certs", class: "content-section",
            h2 { "{CERTS_TITLE.pick(lang)}" }
            div { class: "card-grid",
                for cert in CERTS.iter() {
                    CertCard { key: "{cert.id}", lang, cert }
                }
            }
        }
        section { id: "music", class: "content-section",
            h2 { "{MUSIC_TITLE.pick(lang)}" }
            div { class: "card-grid",
                for music in MUSIC.iter() {
                    MusicCard { key: "{music.id}", music }
                }
            }
        }
        section { id: "contact", class: "content-section",
            h2 { "{CONTACT_TITLE.pick(lang)}" }
            p { "{CONTACT_TEXT.pick(lang)}" }
            ul { class: "contact-list",
                for (contact, color) in contacts {
                    li { key: "{contact.url}",
                        a {
                            class: "btn",
                            href: contact.url,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            style: "--contact: {color}",
                            Icon { name: contact.icon }
                            span { "{contact.label.pick(lang)}" }
                        }
                    }
                }
            }
        }
        IslandMount { island: Island::SectionUrlSync { lang, section_ids } }
        if !props.section.is_empty() {
            IslandMount {
                island: Island::RedirectToSection {
                    section_id: props.section.to_owned(),
                },
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct CertCardProps {
    lang: Lang,
    cert: &'static Cert,
}

#[component]
fn CertCard(props: CertCardProps) -> Element {
    let lang = props.lang;
    let cert = props.cert;
    let name = cert.name.pick(lang);

    rsx! {
        article { class: "card", id: cert.id,
            img { class: "card-image-dark", src: cert.image, alt: "{name}", loading: "lazy" }
            div { class: "card-body",
                h3 { class: "card-title", "{name}" }
                p {
                    InlineRun { inlines: cert.description.pick(lang) }
                }
                a {
                    class: "btn",
                    href: "{DOCS_PATH}{cert.file}",
                    target: "_blank",
                    "{SEE_PROJECT.pick(lang)}"
                    Icon { name: "chevron-right" }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct MusicCardProps {
    music: &'static Music,
}

#[component]
fn MusicCard(props: MusicCardProps) -> Element {
    let music = props.music;

    rsx! {
        a {
            class: "card",
            id: music.id,
            href: music.link(),
            target: "_blank",
            rel: "noopener noreferrer",
            img {
                src: "{IMAGES_PATH}music/{music.image}",
                alt: "{music.name}",
                loading: "lazy",
            }
            div { class: "card-body",
                h3 { class: "card-title", "{music.name}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_home_section_is_rendered() {
        let html = dioxus::ssr::render_element(rsx! {
            HomePage { lang: Lang::Fr }
        });

        for id in HOME_SECTIONS {
            assert!(html.contains(&format!("id=\"{id}\"")), "missing section {id}");
        }
        assert!(html.contains("href=\"/fr/projects\""));
        assert!(html.contains("id=\"url-sync\""));
        assert!(!html.contains("id=\"redirect\""));
    }

    #[test]
    fn cards_link_to_their_targets() {
        let html = dioxus::ssr::render_element(rsx! {
            HomePage { lang: Lang::En }
        });

        assert!(html.contains("href=\"/en/projects/site/poule-noire\""));
        assert!(html.contains("href=\"/en/projects/monero-stack\""));
        assert!(html.contains("href=\"/docs/attestation-secnumacademie.pdf\""));
        assert!(html.contains("href=\"https://distrokid.com/hyperfollow/mnlaugh/le-gorille\""));
        assert!(html.contains("src=\"/images/music/distrokid-le-gorille.jpeg\""));
        assert!(html.contains("href=\"mailto:contact@nicolas-metivier.fr\""));
    }

    #[test]
    fn section_routes_mount_the_redirect() {
        let html = dioxus::ssr::render_element(rsx! {
            HomePage { lang: Lang::En, section: "music" }
        });

        assert!(html.contains("id=\"redirect\""));
        assert!(html.contains("music"));
    }
}
