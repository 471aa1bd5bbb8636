use std::iter::once;

use dioxus::prelude::*;

use site::{
    Lang,
    content::{self, ProjectSection, text::OUTLINE_FALLBACK},
    palette,
    section::SectionLevel,
};

use crate::{
    components::{FadeIn, RichBlocks, Section, use_section_channel},
    islands::ScrollSpyNav,
};

const DEFAULT_ACCENT: &str = "#3b82f6";

#[derive(Clone, PartialEq, Props)]
pub struct ProjectBodyProps {
    lang: Lang,
    #[props(into)]
    project_id: String,
}

// top-level sections followed by their sub-sections, in page order
fn page_order(
    sections: impl Iterator<Item = &'static ProjectSection>,
) -> Vec<(&'static ProjectSection, SectionLevel)> {
    sections
        .flat_map(|s| {
            once((s, SectionLevel::Top)).chain(s.children.iter().map(|c| (c, SectionLevel::Sub)))
        })
        .collect()
}

// project page body
//
// every heading registers itself with the page's section channel; the outline
// beside the text is built from those registrations.  sections are rendered as
// siblings so they register in reading order
#[component]
pub fn ProjectBody(props: ProjectBodyProps) -> Element {
    let lang = props.lang;
    let channel = use_section_channel(OUTLINE_FALLBACK.pick(lang));

    let Some(project) = content::project(&props.project_id) else {
        return rsx! {};
    };

    let accent = palette::hex(project.main_color, 500).unwrap_or(DEFAULT_ACCENT);
    let sections = page_order(project.intro_sections.iter().chain(project.sections.iter()));

    rsx! {
        div { class: "project", style: "--accent: {accent}",
            article {
                h1 { class: "project-title", "{project.name.pick(lang)}" }
                p { class: "note", "{project.description.pick(lang)}" }
                if let Some(image) = project.image {
                    FadeIn { id: "project-image",
                        img {
                            class: "project-image",
                            src: image.src,
                            alt: image.alt.pick(lang),
                        }
                    }
                }
                for (section, level) in sections {
                    Section {
                        key: "{section.id}",
                        channel,
                        id: section.id,
                        label: section.title.pick(lang),
                        level,
                        if let Some(intro) = section.intro {
                            RichBlocks { lang, blocks: intro.pick(lang) }
                        }
                        if let Some(body) = section.content {
                            FadeIn { id: format!("{}-body", section.id),
                                RichBlocks { lang, blocks: body.pick(lang) }
                            }
                        }
                    }
                }
            }
            aside {
                ScrollSpyNav { lang, channel, accent }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_sections_follow_their_parent() {
        let project = content::project("monero-stack").unwrap();
        let order: Vec<_> = page_order(project.intro_sections.iter().chain(project.sections.iter()))
            .into_iter()
            .map(|(s, level)| (s.id, level))
            .collect();

        assert_eq!(order[0], ("presentation", SectionLevel::Top));
        assert_eq!(order[3], ("mise-en-place", SectionLevel::Top));
        assert_eq!(order[4], ("compose", SectionLevel::Sub));
        assert_eq!(order.last(), Some(&("wallet", SectionLevel::Sub)));
    }

    #[test]
    fn renders_localized_sections() {
        let html = dioxus::ssr::render_element(rsx! {
            ProjectBody { lang: Lang::En, project_id: "monero-stack" }
        });

        assert!(html.contains("Self-hosted Monero infrastructure"));
        assert!(html.contains("<h2>⚙️ Setup</h2>"));
        assert!(html.contains("<h3>Wallet connection</h3>"));
        assert!(html.contains("id=\"mise-en-place\""));
        assert!(html.contains("class=\"spy-nav\""));
        assert!(html.contains("--accent: #f97316"));
    }

    #[test]
    fn unknown_project_renders_nothing() {
        let html = dioxus::ssr::render_element(rsx! {
            ProjectBody { lang: Lang::Fr, project_id: "nope" }
        });

        assert!(!html.contains("project-title"));
    }
}
