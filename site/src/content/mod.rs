// static site content
//
// all text is compiled in.  long-form text uses a small rich-text model (blocks of
// inline runs) so the same tables render on the server and inside islands without
// carrying html strings around.
use crate::lang::{Lang, LangData};

mod home;
mod projects;
pub mod text;

pub use home::{CERTS, CONTACTS, MUSIC, SITES};
pub use projects::PROJECTS;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Inline {
    Text(&'static str),
    Strong(&'static str),
    Code(&'static str),
    Break,
    Link {
        href: &'static str,
        label: &'static str,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Block {
    Paragraph(&'static [Inline]),
    List(&'static [&'static [Inline]]),
    // a copyable code block
    Code(&'static str),
    // small, muted paragraph
    Note(&'static [Inline]),
}

pub type RichText = &'static [Block];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Image {
    pub src: &'static str,
    pub alt: LangData<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectSection {
    pub id: &'static str,
    pub title: LangData<&'static str>,
    pub intro: Option<LangData<RichText>>,
    pub content: Option<LangData<RichText>>,
    pub children: &'static [ProjectSection],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Project {
    pub id: &'static str,
    pub name: LangData<&'static str>,
    pub description: LangData<&'static str>,
    pub image: Option<Image>,
    pub card_image: Option<Image>,
    // palette color used for the page title and the section navigation
    pub main_color: &'static str,
    pub intro_sections: &'static [ProjectSection],
    pub sections: &'static [ProjectSection],
}

impl Project {
    pub fn path(&self, lang: Lang) -> String {
        format!("/{}/projects/{}", lang.code(), self.id)
    }

    pub fn card_image_src(&self) -> Option<&'static str> {
        self.card_image.or(self.image).map(|i| i.src)
    }
}

// a site built for someone else, shown through the preview page
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Site {
    pub id: &'static str,
    pub name: &'static str,
    pub url: &'static str,
    pub target_self: bool,
    pub image: &'static str,
    pub description: LangData<&'static str>,
}

impl Site {
    pub fn path(&self, lang: Lang) -> String {
        format!("/{}/projects/site/{}", lang.code(), self.id)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cert {
    pub id: &'static str,
    pub name: LangData<&'static str>,
    pub description: LangData<&'static [Inline]>,
    pub image: &'static str,
    // file under the docs directory
    pub file: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Music {
    pub id: &'static str,
    pub name: &'static str,
    pub image: &'static str,
}

impl Music {
    pub fn link(&self) -> String {
        format!("https://distrokid.com/hyperfollow/mnlaugh/{}", self.id)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    pub label: LangData<&'static str>,
    pub url: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

pub fn project(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

pub fn site(id: &str) -> Option<&'static Site> {
    SITES.iter().find(|s| s.id == id)
}

// flat text of an inline run, used for titles and alt text
pub fn plain_text(inlines: &[Inline]) -> String {
    inlines
        .iter()
        .map(|i| match i {
            Inline::Text(t) | Inline::Strong(t) | Inline::Code(t) => *t,
            Inline::Link { label, .. } => *label,
            Inline::Break => " ",
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{icons, palette};

    fn section_ids(sections: &[ProjectSection], out: &mut Vec<&'static str>) {
        for section in sections {
            out.push(section.id);
            section_ids(section.children, out);
        }
    }

    #[test]
    fn project_lookup() {
        assert_eq!(project("monero-stack").map(|p| p.id), Some("monero-stack"));
        assert!(project("missing").is_none());
        assert_eq!(
            project("deno-logger").map(|p| p.path(Lang::En)).as_deref(),
            Some("/en/projects/deno-logger")
        );
    }

    #[test]
    fn site_lookup() {
        let site = site("poule-noire").unwrap();
        assert_eq!(site.path(Lang::Fr), "/fr/projects/site/poule-noire");
    }

    #[test]
    fn section_ids_unique_per_project() {
        for project in PROJECTS {
            let mut ids = Vec::new();
            section_ids(project.intro_sections, &mut ids);
            section_ids(project.sections, &mut ids);

            let mut deduped = ids.clone();
            deduped.sort();
            deduped.dedup();
            assert_eq!(deduped.len(), ids.len(), "{}", project.id);
        }
    }

    #[test]
    fn referenced_colors_and_icons_exist() {
        for project in PROJECTS {
            assert!(palette::color(project.main_color).is_some());
        }
        for contact in CONTACTS {
            assert!(palette::color(contact.color).is_some());
            assert!(icons::icon(contact.icon).is_some());
        }
    }

    #[test]
    fn plain_text_flattens_breaks() {
        let title = [Inline::Text("Hi"), Inline::Break, Inline::Strong("there")];
        assert_eq!(plain_text(&title), "Hi there");
    }

    #[test]
    fn card_image_prefers_card_variant() {
        let monero = project("monero-stack").unwrap();
        assert_eq!(monero.card_image_src(), Some("/images/monero-stack.png"));

        let logger = project("deno-logger").unwrap();
        assert_eq!(logger.card_image_src(), Some("/images/deno-logger.png"));
    }
}
