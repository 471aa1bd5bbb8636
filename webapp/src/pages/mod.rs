// server-rendered pages
//
// a page is static markup with islands mounted into it; only the islands come
// alive in the browser

use site::{
    Lang, SITE_OWNER,
    content::{
        Project, Site,
        text::{COLORS_PAGE, HOME_DESCRIPTION, HOME_TITLE, ICONS_PAGE, NOT_FOUND},
    },
};

mod document;
mod home;
mod not_found;
mod preview;
mod project;
mod utils;

pub use document::{Document, DocumentProps, render_document};
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use preview::PreviewPage;
pub use project::ProjectPage;
pub use utils::{ColorsPage, IconsPage};

#[derive(Clone, Debug, PartialEq)]
pub enum Page {
    // the home page, optionally scrolled to one of its sections on load
    Home { section: Option<&'static str> },
    Project(&'static Project),
    Preview(&'static Site),
    Colors,
    Icons,
    NotFound,
}

impl Page {
    pub fn title(&self, lang: Lang) -> String {
        match self {
            Page::Home { .. } => HOME_TITLE.pick(lang).to_owned(),
            Page::Project(project) => format!("{} - {SITE_OWNER}", project.name.pick(lang)),
            Page::Preview(site) => site.name.to_owned(),
            Page::Colors => COLORS_PAGE.pick(lang).title.to_owned(),
            Page::Icons => ICONS_PAGE.pick(lang).title.to_owned(),
            Page::NotFound => NOT_FOUND.pick(lang).title.to_owned(),
        }
    }

    pub fn description(&self, lang: Lang) -> &'static str {
        match self {
            Page::Project(project) => project.description.pick(lang),
            Page::Preview(site) => site.description.pick(lang),
            _ => HOME_DESCRIPTION.pick(lang),
        }
    }

    pub fn is_found(&self) -> bool {
        !matches!(self, Page::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use site::content;

    use super::*;

    #[test]
    fn titles_are_localized() {
        assert_eq!(
            Page::Home { section: None }.title(Lang::Fr),
            "Accueil - Nicolas Métivier"
        );
        assert_eq!(Page::NotFound.title(Lang::En), "404 - Page not found");

        let site = content::site("poule-noire").unwrap();
        assert_eq!(Page::Preview(site).title(Lang::En), "La Poule Noire du Berry");
    }

    #[test]
    fn project_pages_describe_the_project() {
        let project = content::project("monero-stack").unwrap();
        let page = Page::Project(project);

        assert!(page.title(Lang::En).ends_with(" - Nicolas Métivier"));
        assert_eq!(page.description(Lang::Fr), project.description.fr);
        assert!(page.is_found());
        assert!(!Page::NotFound.is_found());
    }
}
