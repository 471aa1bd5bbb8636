use std::sync::LazyLock;

use regex::Regex;

use crate::{
    lang::{Lang, LangData, SUPPORTED},
    url::HOME_SECTION,
};

// the sections of the home page, in page order; they double as the candidates of
// the url sync and as the routes that jump to a section instead of navigating
pub const HOME_SECTIONS: [&str; 5] = [HOME_SECTION, "projects", "certs", "music", "contact"];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MenuEntry {
    pub title: LangData<&'static str>,
    pub href: &'static str,
    // name of an entry in the icon catalog
    pub icon: &'static str,
}

impl MenuEntry {
    // the root entry maps to the bare language root, which is the only home url
    // without a trailing slash
    pub fn localized_href(&self, lang: Lang) -> String {
        if self.href == "/" {
            lang.root()
        } else {
            format!("/{}{}", lang.code(), self.href)
        }
    }
}

pub const MENU: [MenuEntry; 5] = [
    MenuEntry {
        title: LangData::new("Accueil", "Home"),
        href: "/",
        icon: "house",
    },
    MenuEntry {
        title: LangData::new("Projets", "Projects"),
        href: "/projects",
        icon: "folder",
    },
    MenuEntry {
        title: LangData::new("Certificats", "Certifications"),
        href: "/certs",
        icon: "graduation-cap",
    },
    MenuEntry {
        title: LangData::new("Musique", "Music"),
        href: "/music",
        icon: "disc-3",
    },
    MenuEntry {
        title: LangData::new("Contact", "Contact"),
        href: "/contact",
        icon: "mail-search",
    },
];

// whether a menu entry matches the current path
//
// the root entry is active on "/" and on the language root, with or without a
// trailing slash; every other entry is a plain prefix match on its localized href
pub fn is_active(path: &str, lang: Lang, href: &str) -> bool {
    if href == "/" {
        let path = path.strip_suffix('/').unwrap_or(path);
        return path.is_empty() || path == lang.root();
    }

    path.starts_with(&format!("/{}{}", lang.code(), href))
}

static LANG_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    let codes = SUPPORTED.map(Lang::code).join("|");
    Regex::new(&format!("^/({codes})(/|$)")).expect("static language prefix pattern")
});

// the same page in another language
//
// only a whole leading language segment is replaced, so "/frog" is not treated as
// french.  paths without a language segment go to the language root
pub fn swap_lang(path: &str, to: Lang) -> String {
    match LANG_PREFIX.captures(path) {
        Some(caps) => {
            let rest = &path[caps.get(0).map_or(0, |m| m.end())..];
            let sep = caps.get(2).map_or("", |m| m.as_str());
            if rest.is_empty() {
                to.root()
            } else {
                format!("/{}{}{}", to.code(), sep, rest)
            }
        }
        None => to.root(),
    }
}

// routes where menu links jump to a section of the current page
pub fn is_home_route(path: &str, lang: Lang) -> bool {
    let path = path.strip_suffix('/').filter(|p| !p.is_empty()).unwrap_or(path);

    HOME_SECTIONS
        .iter()
        .any(|section| crate::url::section_path(lang, section) == path)
}

// the section a smart link should scroll to, or None for a normal navigation
pub fn scroll_target(path: &str, lang: Lang, href: &str) -> Option<String> {
    if !is_home_route(path, lang) {
        return None;
    }

    let root = lang.root();
    let id = href
        .strip_prefix(&root)
        .filter(|rest| rest.is_empty() || rest.starts_with('/'))
        .unwrap_or(href)
        .trim_matches('/');

    if id.is_empty() {
        Some(HOME_SECTION.to_owned())
    } else {
        Some(id.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_entry_active_on_root_and_lang_root() {
        assert!(is_active("/", Lang::Fr, "/"));
        assert!(is_active("/fr", Lang::Fr, "/"));
        assert!(is_active("/fr/", Lang::Fr, "/"));
        assert!(is_active(&MENU[0].localized_href(Lang::Fr), Lang::Fr, "/"));
        assert!(!is_active("/fr/projects", Lang::Fr, "/"));
        assert!(!is_active("/en", Lang::Fr, "/"));
    }

    #[test]
    fn other_entries_match_by_prefix() {
        assert!(is_active("/en/projects", Lang::En, "/projects"));
        assert!(is_active("/en/projects/deno-logger", Lang::En, "/projects"));
        assert!(!is_active("/fr/projects", Lang::En, "/projects"));
        assert!(!is_active("/en/music", Lang::En, "/projects"));
    }

    #[test]
    fn swap_replaces_leading_segment_only() {
        assert_eq!(swap_lang("/fr/projects/deno-logger", Lang::En), "/en/projects/deno-logger");
        assert_eq!(swap_lang("/fr", Lang::En), "/en");
        assert_eq!(swap_lang("/en/", Lang::Fr), "/fr");
        assert_eq!(swap_lang("/frog", Lang::En), "/en");
        assert_eq!(swap_lang("/", Lang::En), "/en");
    }

    #[test]
    fn scroll_only_on_home_routes() {
        assert_eq!(scroll_target("/fr", Lang::Fr, "/fr/projects").as_deref(), Some("projects"));
        assert_eq!(scroll_target("/fr/music/", Lang::Fr, "/fr/certs").as_deref(), Some("certs"));
        assert_eq!(scroll_target("/fr/contact", Lang::Fr, "/fr/").as_deref(), Some("home"));
        assert_eq!(scroll_target("/fr/contact", Lang::Fr, "/fr").as_deref(), Some("home"));
        assert_eq!(scroll_target("/fr/projects/monero-stack", Lang::Fr, "/fr/music"), None);
        assert_eq!(scroll_target("/en/projects", Lang::Fr, "/fr/music"), None);
    }

    #[test]
    fn menu_hrefs_are_localized() {
        let hrefs: Vec<_> = MENU.iter().map(|m| m.localized_href(Lang::En)).collect();
        assert_eq!(hrefs, vec!["/en", "/en/projects", "/en/certs", "/en/music", "/en/contact"]);
    }
}
