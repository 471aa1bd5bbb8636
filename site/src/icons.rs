// icon catalog
//
// outline icons are drawn on a 24x24 grid with a 2px round stroke; brand icons are
// filled and carry their own viewBox.  the catalog is also what the icons page
// browses, hence the metadata.
use std::collections::BTreeMap;

use Shape::{Circle, Path, Rect};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Path(&'static str),
    Circle { cx: f32, cy: f32, r: f32 },
    Rect { x: f32, y: f32, w: f32, h: f32, rx: f32 },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IconStyle {
    Stroke,
    Fill,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconMeta {
    pub contributors: &'static [&'static str],
    pub tags: &'static [&'static str],
    pub categories: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconEntry {
    pub name: &'static str,
    pub snake: &'static str,
    pub view_box: &'static str,
    pub style: IconStyle,
    pub shapes: &'static [Shape],
    pub meta: IconMeta,
}

impl IconEntry {
    pub fn has_category(&self, category: &str) -> bool {
        self.meta.categories.contains(&category)
    }
}

const GRID: &str = "0 0 24 24";

macro_rules! outline {
    ($name:literal, $snake:literal, [$($shape:expr),+ $(,)?], contributors: [$($c:literal),*], tags: [$($t:literal),*], categories: [$($cat:literal),*]) => {
        IconEntry {
            name: $name,
            snake: $snake,
            view_box: GRID,
            style: IconStyle::Stroke,
            shapes: &[$($shape),+],
            meta: IconMeta {
                contributors: &[$($c),*],
                tags: &[$($t),*],
                categories: &[$($cat),*],
            },
        }
    };
}

pub const ICONS: &[IconEntry] = &[
    outline!("AtSign", "at-sign",
        [Circle { cx: 12.0, cy: 12.0, r: 4.0 }, Path("M16 8v5a3 3 0 0 0 6 0v-1a10 10 0 1 0-4 8")],
        contributors: ["colebemis", "ericfennis"],
        tags: ["mention", "at", "email", "message", "@"],
        categories: ["text", "account", "social"]),
    outline!("ArrowLeft", "arrow-left",
        [Path("m12 19-7-7 7-7"), Path("M19 12H5")],
        contributors: ["colebemis", "ericfennis"],
        tags: ["previous", "back", "direction", "west", "<-"],
        categories: ["arrows", "navigation"]),
    outline!("ArrowRight", "arrow-right",
        [Path("M5 12h14"), Path("m12 5 7 7-7 7")],
        contributors: ["colebemis", "ericfennis"],
        tags: ["forward", "next", "direction", "east", "->"],
        categories: ["arrows", "navigation"]),
    outline!("Check", "check",
        [Path("M20 6 9 17l-5-5")],
        contributors: ["colebemis", "ericfennis"],
        tags: ["done", "todo", "tick", "complete", "task"],
        categories: ["notifications"]),
    outline!("ChevronDown", "chevron-down",
        [Path("m6 9 6 6 6-6")],
        contributors: ["colebemis", "ericfennis"],
        tags: ["backwards", "reverse", "slow", "dropdown"],
        categories: ["arrows", "navigation"]),
    outline!("ChevronRight", "chevron-right",
        [Path("m9 18 6-6-6-6")],
        contributors: ["colebemis", "ericfennis"],
        tags: ["forward", "next", "continue", "proceed"],
        categories: ["arrows", "navigation"]),
    outline!("Code", "code",
        [Path("m16 18 6-6-6-6"), Path("m8 6-6 6 6 6")],
        contributors: ["colebemis", "ericfennis"],
        tags: ["source", "programming", "html", "xml"],
        categories: ["text", "development"]),
    outline!("Copy", "copy",
        [Rect { x: 8.0, y: 8.0, w: 14.0, h: 14.0, rx: 2.0 },
         Path("M4 16c-1.1 0-2-.9-2-2V4c0-1.1.9-2 2-2h10c1.1 0 2 .9 2 2")],
        contributors: ["colebemis", "ericfennis", "karsa-mistmere"],
        tags: ["clone", "duplicate", "multiple"],
        categories: ["text"]),
    outline!("Disc3", "disc-3",
        [Circle { cx: 12.0, cy: 12.0, r: 10.0 }, Path("M6 12c0-1.7.7-3.2 1.8-4.2"),
         Circle { cx: 12.0, cy: 12.0, r: 2.0 }, Path("M18 12c0 1.7-.7 3.2-1.8 4.2")],
        contributors: ["danielbayley"],
        tags: ["album", "music", "vinyl", "record", "cd", "dvd", "format", "dj", "spin", "rotate", "rpm"],
        categories: ["multimedia"]),
    outline!("ExternalLink", "external-link",
        [Path("M15 3h6v6"), Path("M10 14 21 3"),
         Path("M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6")],
        contributors: ["colebemis", "ericfennis", "jguddas"],
        tags: ["outbound", "share", "open", "new"],
        categories: ["arrows", "text", "social"]),
    outline!("FileText", "file-text",
        [Path("M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z"),
         Path("M14 2v4a2 2 0 0 0 2 2h4"), Path("M10 9H8"), Path("M16 13H8"), Path("M16 17H8")],
        contributors: ["colebemis", "ericfennis", "karsa-mistmere"],
        tags: ["data", "txt", "pdf", "document"],
        categories: ["files", "text"]),
    outline!("Folder", "folder",
        [Path("M20 20a2 2 0 0 0 2-2V8a2 2 0 0 0-2-2h-7.9a2 2 0 0 1-1.69-.9L9.6 3.9A2 2 0 0 0 7.93 3H4a2 2 0 0 0-2 2v13a2 2 0 0 0 2 2Z")],
        contributors: ["colebemis", "ericfennis", "karsa-mistmere"],
        tags: ["directory"],
        categories: ["files"]),
    outline!("GraduationCap", "graduation-cap",
        [Path("M21.42 10.922a1 1 0 0 0-.019-1.838L12.83 5.18a2 2 0 0 0-1.66 0L2.6 9.08a1 1 0 0 0 0 1.832l8.57 3.908a2 2 0 0 0 1.66 0z"),
         Path("M22 10v6"), Path("M6 12.5V16a6 3 0 0 0 12 0v-3.5")],
        contributors: ["mittalyashu", "ericfennis", "jguddas"],
        tags: ["school", "university", "learn", "study", "mortarboard", "education", "ceremony", "academic", "hat", "diploma", "bachelors", "masters", "doctorate"],
        categories: ["buildings", "people"]),
    outline!("Heart", "heart",
        [Path("M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z")],
        contributors: ["colebemis", "ericfennis"],
        tags: ["like", "love", "emotion", "suit", "playing", "cards"],
        categories: ["medical", "social", "emoji", "gaming"]),
    outline!("House", "house",
        [Path("M15 21v-8a1 1 0 0 0-1-1h-4a1 1 0 0 0-1 1v8"),
         Path("M3 10a2 2 0 0 1 .709-1.528l7-5.999a2 2 0 0 1 2.582 0l7 5.999A2 2 0 0 1 21 10v9a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z")],
        contributors: ["colebemis", "ericfennis", "karsa-mistmere", "jguddas"],
        tags: ["home", "living", "building", "residence", "architecture"],
        categories: ["buildings", "navigation"]),
    outline!("Languages", "languages",
        [Path("m5 8 6 6"), Path("m4 14 6-6 2-3"), Path("M2 5h12"), Path("M7 2h1"),
         Path("m22 22-5-10-5 10"), Path("M14 18h6")],
        contributors: ["ericfennis", "karsa-mistmere"],
        tags: ["translate"],
        categories: ["text"]),
    outline!("ListFilterPlus", "list-filter-plus",
        [Path("M10 18h4"), Path("M11 6H3"), Path("M15 6h6"), Path("M18 9V3"), Path("M7 12h8")],
        contributors: ["jguddas", "karsa-mistmere"],
        tags: ["filter", "plus", "options", "add"],
        categories: ["layout", "text"]),
    outline!("MailSearch", "mail-search",
        [Path("M22 12.5V6a2 2 0 0 0-2-2H4a2 2 0 0 0-2 2v12c0 1.1.9 2 2 2h7.5"),
         Path("m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"),
         Circle { cx: 18.0, cy: 18.0, r: 3.0 }, Path("m22 22-1.5-1.5")],
        contributors: ["danielbayley", "karsa-mistmere"],
        tags: ["email", "message", "letter", "search", "lookup", "filter", "inbox"],
        categories: ["mail"]),
    outline!("Menu", "menu",
        [Path("M4 12h16"), Path("M4 6h16"), Path("M4 18h16")],
        contributors: ["colebemis", "ericfennis"],
        tags: ["bars", "navigation", "hamburger", "options"],
        categories: ["layout", "account"]),
    outline!("Moon", "moon",
        [Path("M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z")],
        contributors: ["colebemis", "ericfennis"],
        tags: ["dark", "night"],
        categories: ["accessibility", "weather"]),
    outline!("Music", "music",
        [Path("M9 18V5l12-2v13"), Circle { cx: 6.0, cy: 18.0, r: 3.0 }, Circle { cx: 18.0, cy: 16.0, r: 3.0 }],
        contributors: ["colebemis", "ericfennis"],
        tags: ["note", "quaver", "eighth note"],
        categories: ["multimedia", "files"]),
    outline!("Search", "search",
        [Circle { cx: 11.0, cy: 11.0, r: 8.0 }, Path("m21 21-4.3-4.3")],
        contributors: ["colebemis", "ericfennis"],
        tags: ["find", "scan", "magnifier", "magnifying glass", "lens"],
        categories: ["text", "social"]),
    outline!("Sun", "sun",
        [Circle { cx: 12.0, cy: 12.0, r: 4.0 }, Path("M12 2v2"), Path("M12 20v2"),
         Path("m4.93 4.93 1.41 1.41"), Path("m17.66 17.66 1.41 1.41"), Path("M2 12h2"),
         Path("M20 12h2"), Path("m6.34 17.66-1.41 1.41"), Path("m19.07 4.93-1.41 1.41")],
        contributors: ["colebemis", "ericfennis"],
        tags: ["brightness", "weather", "light", "summer"],
        categories: ["accessibility", "weather", "seasons"]),
    outline!("Terminal", "terminal",
        [Path("m4 17 6-6-6-6"), Path("M12 19h8")],
        contributors: ["colebemis", "ericfennis"],
        tags: ["code", "command line", "prompt", "shell"],
        categories: ["development"]),
    outline!("X", "x",
        [Path("M18 6 6 18"), Path("m6 6 12 12")],
        contributors: ["colebemis", "ericfennis"],
        tags: ["cancel", "close", "delete", "remove", "times", "clear"],
        categories: ["notifications", "math"]),
    IconEntry {
        name: "Discord",
        snake: "discord",
        view_box: "0 0 640 512",
        style: IconStyle::Fill,
        shapes: &[Path("M524.5 69.8a1.5 1.5 0 0 0 -.8-.7A485.1 485.1 0 0 0 404.1 32a1.8 1.8 0 0 0 -1.9 .9 337.5 337.5 0 0 0 -14.9 30.6 447.8 447.8 0 0 0 -134.4 0 309.5 309.5 0 0 0 -15.1-30.6 1.9 1.9 0 0 0 -1.9-.9A483.7 483.7 0 0 0 116.1 69.1a1.7 1.7 0 0 0 -.8 .7C39.1 183.7 18.2 294.7 28.4 404.4a2 2 0 0 0 .8 1.4A487.7 487.7 0 0 0 176 479.9a1.9 1.9 0 0 0 2.1-.7A348.2 348.2 0 0 0 208.1 430.4a1.9 1.9 0 0 0 -1-2.6 321.2 321.2 0 0 1 -45.9-21.9 1.9 1.9 0 0 1 -.2-3.1c3.1-2.3 6.2-4.7 9.1-7.1a1.8 1.8 0 0 1 1.9-.3c96.2 43.9 200.4 43.9 295.5 0a1.8 1.8 0 0 1 1.9 .2c2.9 2.4 6 4.9 9.1 7.2a1.9 1.9 0 0 1 -.2 3.1 301.4 301.4 0 0 1 -45.9 21.8 1.9 1.9 0 0 0 -1 2.6 391.1 391.1 0 0 0 30 48.8 1.9 1.9 0 0 0 2.1 .7A486 486 0 0 0 610.7 405.7a1.9 1.9 0 0 0 .8-1.4C623.7 277.6 590.9 167.5 524.5 69.8zM222.5 337.6c-29 0-52.8-26.6-52.8-59.2S193.1 219.1 222.5 219.1c29.7 0 53.3 26.8 52.8 59.2C275.3 311 251.9 337.6 222.5 337.6zm195.4 0c-29 0-52.8-26.6-52.8-59.2S388.4 219.1 417.9 219.1c29.7 0 53.3 26.8 52.8 59.2C470.7 311 447.5 337.6 417.9 337.6z")],
        meta: IconMeta {
            contributors: &[],
            tags: &[],
            categories: &["brands", "social", "account"],
        },
    },
    IconEntry {
        name: "LinkedIn",
        snake: "linkedin",
        view_box: GRID,
        style: IconStyle::Fill,
        shapes: &[Path("M4.983 3.5a2.5 2.5 0 1 1-.002 5.001A2.5 2.5 0 0 1 4.983 3.5zM3 9h4v12H3zM9 9h3.6v1.71h.05c.5-.94 1.72-1.93 3.54-1.93 3.8 0 4.5 2.5 4.5 5.75V21h-4v-5.25c0-1.25 0-2.86-1.75-2.86S13 14.5 13 15.7V21H9z")],
        meta: IconMeta {
            contributors: &[],
            tags: &[],
            categories: &["brands", "social"],
        },
    },
    IconEntry {
        name: "GitHub",
        snake: "github",
        view_box: GRID,
        style: IconStyle::Fill,
        shapes: &[Path("M12 0C5.37 0 0 5.373 0 12c0 5.303 3.438 9.8 8.207 11.385.6.113.82-.26.82-.577v-2.234c-3.338.724-4.033-1.415-4.033-1.415-.546-1.387-1.333-1.757-1.333-1.757-1.09-.745.083-.729.083-.729 1.205.085 1.84 1.237 1.84 1.237 1.07 1.835 2.807 1.305 3.492.998.108-.775.418-1.305.76-1.605-2.665-.3-5.466-1.334-5.466-5.933 0-1.31.47-2.38 1.236-3.22-.124-.303-.535-1.523.117-3.176 0 0 1.008-.322 3.3 1.23a11.513 11.513 0 0 1 3-.404c1.02.004 2.047.137 3.003.404 2.29-1.552 3.297-1.23 3.297-1.23.653 1.653.242 2.873.118 3.176.77.84 1.235 1.91 1.235 3.22 0 4.61-2.803 5.63-5.475 5.922.43.372.813 1.103.813 2.222v3.293c0 .32.218.694.825.576C20.565 21.796 24 17.3 24 12c0-6.627-5.373-12-12-12Z")],
        meta: IconMeta {
            contributors: &[],
            tags: &[],
            categories: &["brands", "development"],
        },
    },
];

// lookup by kebab-case name
pub fn icon(snake: &str) -> Option<&'static IconEntry> {
    ICONS.iter().find(|i| i.snake == snake)
}

// case-insensitive name search, optionally restricted to one category; catalog
// order is kept
pub fn filter(query: &str, category: Option<&str>) -> Vec<&'static IconEntry> {
    let query = query.to_lowercase();

    ICONS
        .iter()
        .filter(|i| category.is_none_or(|c| i.has_category(c)))
        .filter(|i| i.name.to_lowercase().contains(&query))
        .collect()
}

// every category with the number of icons in it, sorted by name
pub fn categories() -> Vec<(&'static str, usize)> {
    let mut counts: BTreeMap<&'static str, usize> = BTreeMap::new();

    for entry in ICONS {
        for cat in entry.meta.categories {
            *counts.entry(*cat).or_default() += 1;
        }
    }

    counts.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_names_are_unique() {
        let mut names: Vec<_> = ICONS.iter().map(|i| i.snake).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), ICONS.len());
    }

    #[test]
    fn menu_icons_exist() {
        for entry in crate::nav::MENU {
            assert!(icon(entry.icon).is_some(), "{}", entry.icon);
        }
    }

    #[test]
    fn search_is_case_insensitive() {
        let names: Vec<_> = filter("CHEV", None).iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["ChevronDown", "ChevronRight"]);
    }

    #[test]
    fn category_restricts_results() {
        let names: Vec<_> = filter("", Some("brands")).iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["Discord", "LinkedIn", "GitHub"]);

        assert!(filter("house", Some("brands")).is_empty());
    }

    #[test]
    fn categories_are_sorted_and_counted() {
        let cats = categories();

        let names: Vec<_> = cats.iter().map(|(c, _)| *c).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);

        assert!(cats.contains(&("brands", 3)));
        assert!(cats.contains(&("weather", 2)));
    }
}
