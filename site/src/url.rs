use crate::{
    lang::Lang,
    spy::{Observation, VisibilityMap},
};

pub const HOME_SECTION: &str = "home";

// history path of a home-page section; the home section itself is the bare root
pub fn section_path(lang: Lang, section: &str) -> String {
    if section == HOME_SECTION {
        lang.root()
    } else {
        format!("/{}/{}", lang.code(), section)
    }
}

// keeps the address bar in step with the section being read
//
// fed the same kind of observation batches as the scroll-spy.  `observe` returns
// the path to write with history.replaceState when the topmost visible candidate
// maps to a path other than the current one, and None otherwise
#[derive(Clone, Debug, PartialEq)]
pub struct SectionUrlSync {
    lang: Lang,
    map: VisibilityMap,
    current: Option<String>,
}

impl SectionUrlSync {
    pub fn new<I, S>(lang: Lang, candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SectionUrlSync {
            lang,
            map: VisibilityMap::new(candidates),
            current: None,
        }
    }

    pub fn candidates(&self) -> &[String] {
        self.map.ids()
    }

    pub fn observe(&mut self, batch: &[Observation], location: &str) -> Option<String> {
        self.map.update(batch);

        let top = self.map.topmost()?.to_owned();
        let path = section_path(self.lang, &top);
        self.current = Some(top);

        if path == location {
            None
        } else {
            Some(path)
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::HOME_SECTIONS;

    #[test]
    fn paths_for_sections() {
        assert_eq!(section_path(Lang::Fr, "projects"), "/fr/projects");
        assert_eq!(section_path(Lang::Fr, "home"), "/fr");
        assert_eq!(section_path(Lang::En, "music"), "/en/music");
    }

    #[test]
    fn replaces_when_topmost_changes() {
        let mut sync = SectionUrlSync::new(Lang::Fr, HOME_SECTIONS);

        let next = sync.observe(&[Observation::visible("projects", 12.0)], "/fr");
        assert_eq!(next.as_deref(), Some("/fr/projects"));
        assert_eq!(sync.current(), Some("projects"));
    }

    #[test]
    fn same_path_is_not_rewritten() {
        let mut sync = SectionUrlSync::new(Lang::En, HOME_SECTIONS);

        let next = sync.observe(&[Observation::visible("home", 0.0)], "/en");
        assert_eq!(next, None);
    }

    #[test]
    fn nothing_visible_is_a_no_op() {
        let mut sync = SectionUrlSync::new(Lang::Fr, HOME_SECTIONS);

        assert_eq!(sync.observe(&[Observation::hidden("music")], "/fr"), None);
        assert_eq!(sync.current(), None);
    }

    #[test]
    fn scrolling_back_up_returns_to_root() {
        let mut sync = SectionUrlSync::new(Lang::Fr, HOME_SECTIONS);
        sync.observe(&[Observation::visible("projects", 10.0)], "/fr");

        let next = sync.observe(
            &[
                Observation::visible("home", -20.0),
                Observation::visible("projects", 400.0),
            ],
            "/fr/projects",
        );

        assert_eq!(next.as_deref(), Some("/fr"));
    }
}
