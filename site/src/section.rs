use serde::{Deserialize, Serialize};

// the two heading ranks a navigable section can have
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionLevel {
    #[default]
    Top,
    Sub,
}

impl SectionLevel {
    pub fn heading_tag(self) -> &'static str {
        match self {
            SectionLevel::Top => "h2",
            SectionLevel::Sub => "h3",
        }
    }
}

// one navigable heading, as announced by the content component that renders it
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct RegisteredSection {
    pub id: String,
    pub label: String,
    pub level: SectionLevel,
}

impl RegisteredSection {
    pub fn new(id: impl Into<String>, label: impl Into<String>, level: SectionLevel) -> Self {
        RegisteredSection {
            id: id.into(),
            label: label.into(),
            level,
        }
    }

    pub fn top(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(id, label, SectionLevel::Top)
    }

    pub fn sub(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(id, label, SectionLevel::Sub)
    }
}

// a node of the navigation outline
//
// top-level nodes own their sub-level nodes; sub-level nodes never have children
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SectionElement {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SectionElement>,
}

impl SectionElement {
    fn leaf(section: &RegisteredSection) -> Self {
        SectionElement {
            id: section.id.clone(),
            label: section.label.clone(),
            children: Vec::new(),
        }
    }

    // the node itself followed by its children, in outline order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.id.as_str()).chain(self.children.iter().map(|c| c.id.as_str()))
    }
}

pub const FALLBACK_GROUP_ID: &str = "other";
pub const FALLBACK_GROUP_LABEL: &str = "Other";

// build the two-level outline from the flat registration list
//
// single pass in registration order.  a sub-level entry goes under the most recent
// top-level entry; if none has been seen yet, it goes into one fallback group that
// is created the first time it is needed, at that position in the outline
pub fn organize_sections(sections: &[RegisteredSection]) -> Vec<SectionElement> {
    organize_sections_with_fallback(sections, FALLBACK_GROUP_LABEL)
}

pub fn organize_sections_with_fallback(
    sections: &[RegisteredSection],
    fallback_label: &str,
) -> Vec<SectionElement> {
    let mut outline: Vec<SectionElement> = Vec::new();

    // index into outline rather than a reference, so the vec can keep growing
    let mut parent: Option<usize> = None;

    for section in sections {
        match section.level {
            SectionLevel::Top => {
                outline.push(SectionElement::leaf(section));
                parent = Some(outline.len() - 1);
            }
            SectionLevel::Sub => {
                let idx = match parent {
                    Some(idx) => idx,
                    None => {
                        outline.push(SectionElement {
                            id: FALLBACK_GROUP_ID.to_owned(),
                            label: fallback_label.to_owned(),
                            children: Vec::new(),
                        });
                        let idx = outline.len() - 1;
                        parent = Some(idx);
                        idx
                    }
                };

                outline[idx].children.push(SectionElement::leaf(section));
            }
        }
    }

    outline
}

// every id of an outline, flattened in display order
pub fn flatten_ids(outline: &[SectionElement]) -> Vec<String> {
    outline
        .iter()
        .flat_map(|node| node.ids())
        .map(str::to_owned)
        .collect()
}

// accumulated registrations for one page view
//
// sections are never removed; they live as long as the page does
#[derive(Clone, Debug, PartialEq)]
pub struct SectionRegistry {
    sections: Vec<RegisteredSection>,
    fallback_label: String,
}

impl Default for SectionRegistry {
    fn default() -> Self {
        SectionRegistry::new()
    }
}

impl SectionRegistry {
    pub fn new() -> Self {
        SectionRegistry {
            sections: Vec::new(),
            fallback_label: FALLBACK_GROUP_LABEL.to_owned(),
        }
    }

    pub fn with_fallback_label(label: impl Into<String>) -> Self {
        SectionRegistry {
            sections: Vec::new(),
            fallback_label: label.into(),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.sections.iter().any(|s| s.id == id)
    }

    // returns false (and changes nothing) when the id was already registered
    pub fn register(&mut self, section: RegisteredSection) -> bool {
        if self.contains(&section.id) {
            return false;
        }

        self.sections.push(section);
        true
    }

    pub fn sections(&self) -> &[RegisteredSection] {
        &self.sections
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn first_id(&self) -> Option<&str> {
        self.sections.first().map(|s| s.id.as_str())
    }

    // a fresh snapshot every call; the outline is never patched in place
    pub fn outline(&self) -> Vec<SectionElement> {
        organize_sections_with_fallback(&self.sections, &self.fallback_label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(outline: &[SectionElement]) -> Vec<(String, Vec<String>)> {
        outline
            .iter()
            .map(|n| {
                (
                    n.id.clone(),
                    n.children.iter().map(|c| c.id.clone()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn duplicate_registration_keeps_first() {
        let mut registry = SectionRegistry::new();

        assert!(registry.register(RegisteredSection::top("intro", "Intro")));
        assert!(!registry.register(RegisteredSection::sub("intro", "Changed")));

        assert_eq!(registry.sections().len(), 1);

        let outline = registry.outline();
        assert_eq!(outline.len(), 1);
        assert_eq!(outline[0].label, "Intro");
        assert!(outline[0].children.is_empty());
    }

    #[test]
    fn sub_sections_group_under_latest_top() {
        let sections = vec![
            RegisteredSection::top("a", "A"),
            RegisteredSection::sub("x", "X"),
            RegisteredSection::top("b", "B"),
            RegisteredSection::sub("y", "Y"),
        ];

        assert_eq!(
            ids(&organize_sections(&sections)),
            vec![
                ("a".to_owned(), vec!["x".to_owned()]),
                ("b".to_owned(), vec!["y".to_owned()]),
            ]
        );
    }

    #[test]
    fn orphans_go_to_a_single_leading_fallback_group() {
        let sections = vec![
            RegisteredSection::sub("x", "X"),
            RegisteredSection::sub("y", "Y"),
            RegisteredSection::top("a", "A"),
            RegisteredSection::sub("z", "Z"),
        ];

        let outline = organize_sections(&sections);

        assert_eq!(outline[0].id, FALLBACK_GROUP_ID);
        assert_eq!(outline[0].label, "Other");
        assert_eq!(
            ids(&outline),
            vec![
                ("other".to_owned(), vec!["x".to_owned(), "y".to_owned()]),
                ("a".to_owned(), vec!["z".to_owned()]),
            ]
        );
    }

    #[test]
    fn fallback_label_is_configurable() {
        let mut registry = SectionRegistry::with_fallback_label("Autres");
        registry.register(RegisteredSection::sub("x", "X"));

        assert_eq!(registry.outline()[0].label, "Autres");
    }

    #[test]
    fn flatten_follows_display_order() {
        let sections = vec![
            RegisteredSection::top("a", "A"),
            RegisteredSection::sub("x", "X"),
            RegisteredSection::top("b", "B"),
        ];

        assert_eq!(flatten_ids(&organize_sections(&sections)), vec!["a", "x", "b"]);
    }

    #[test]
    fn empty_registry_has_empty_outline() {
        let registry = SectionRegistry::default();
        assert!(registry.outline().is_empty());
        assert_eq!(registry.first_id(), None);
    }
}
