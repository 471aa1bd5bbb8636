use std::collections::HashMap;

// visibility bookkeeping for a fixed, ordered set of section ids
//
// the browser reports intersections in batches that only contain the entries
// whose state changed, so the last known state of every section is kept here and
// each batch is merged in before the topmost visible section is recomputed
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VisibilityMap {
    order: Vec<String>,
    visible: HashMap<String, f64>,
}

// one entry of an observation batch
#[derive(Clone, Debug, PartialEq)]
pub struct Observation {
    pub id: String,
    pub intersecting: bool,
    // top edge of the element relative to the viewport, in css pixels
    pub top: f64,
}

impl Observation {
    pub fn visible(id: impl Into<String>, top: f64) -> Self {
        Observation {
            id: id.into(),
            intersecting: true,
            top,
        }
    }

    pub fn hidden(id: impl Into<String>) -> Self {
        Observation {
            id: id.into(),
            intersecting: false,
            top: 0.0,
        }
    }
}

impl VisibilityMap {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut order: Vec<String> = Vec::new();
        for id in ids {
            let id = id.into();
            if !order.contains(&id) {
                order.push(id);
            }
        }

        VisibilityMap {
            order,
            visible: HashMap::new(),
        }
    }

    pub fn ids(&self) -> &[String] {
        &self.order
    }

    pub fn track(&mut self, id: impl Into<String>) {
        let id = id.into();
        if !self.order.contains(&id) {
            self.order.push(id);
        }
    }

    // ids that are not tracked are dropped silently
    pub fn update(&mut self, batch: &[Observation]) {
        for obs in batch {
            if !self.order.contains(&obs.id) {
                continue;
            }

            if obs.intersecting {
                self.visible.insert(obs.id.clone(), obs.top);
            } else {
                self.visible.remove(&obs.id);
            }
        }
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.visible.contains_key(id)
    }

    pub fn any_visible(&self) -> bool {
        !self.visible.is_empty()
    }

    // smallest top edge wins; equal edges fall back to tracking order
    pub fn topmost(&self) -> Option<&str> {
        self.order
            .iter()
            .enumerate()
            .filter_map(|(idx, id)| self.visible.get(id).map(|top| (idx, id, *top)))
            .min_by(|(ia, _, ta), (ib, _, tb)| ta.total_cmp(tb).then(ia.cmp(ib)))
            .map(|(_, id, _)| id.as_str())
    }
}

// inputs of the active-section state machine
#[derive(Clone, Debug, PartialEq)]
pub enum SpyEvent {
    Visibility(Vec<Observation>),
    PointerEntered(String),
    PointerLeft,
}

// active-section resolver
//
// observation batches move the active id to the topmost visible section unless a
// navigation entry is hovered, in which case the hovered id wins until the pointer
// leaves.  when nothing is visible the previous active id is kept.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActiveSection {
    map: VisibilityMap,
    active: Option<String>,
    hovered: Option<String>,
}

impl ActiveSection {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let map = VisibilityMap::new(ids);
        let active = map.ids().first().cloned();

        ActiveSection {
            map,
            active,
            hovered: None,
        }
    }

    // sections registered after the resolver was created; the first one ever
    // tracked becomes the initial active id
    pub fn track(&mut self, id: impl Into<String>) {
        self.map.track(id);
        if self.active.is_none() {
            self.active = self.map.ids().first().cloned();
        }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    pub fn map(&self) -> &VisibilityMap {
        &self.map
    }

    // returns true when the active id changed
    pub fn apply(&mut self, event: SpyEvent) -> bool {
        let before = self.active.clone();

        match event {
            SpyEvent::Visibility(batch) => {
                self.map.update(&batch);
                if self.hovered.is_none() {
                    self.resolve();
                }
            }
            SpyEvent::PointerEntered(id) => {
                self.active = Some(id.clone());
                self.hovered = Some(id);
            }
            SpyEvent::PointerLeft => {
                self.hovered = None;
                self.resolve();
            }
        }

        before != self.active
    }

    fn resolve(&mut self) {
        if let Some(id) = self.map.topmost() {
            self.active = Some(id.to_owned());
        }
    }

    // a navigation entry is highlighted for itself and for any of its children
    pub fn is_active<'a>(&self, mut ids: impl Iterator<Item = &'a str>) -> bool {
        match self.active.as_deref() {
            Some(active) => ids.any(|id| id == active),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::{organize_sections, RegisteredSection};

    fn spy() -> ActiveSection {
        ActiveSection::new(["intro", "setup", "usage", "faq"])
    }

    #[test]
    fn starts_on_first_section() {
        assert_eq!(spy().active(), Some("intro"));
        assert_eq!(ActiveSection::default().active(), None);
    }

    #[test]
    fn topmost_visible_wins() {
        let mut spy = spy();

        let changed = spy.apply(SpyEvent::Visibility(vec![
            Observation::visible("usage", 120.0),
            Observation::visible("setup", 40.0),
        ]));

        assert!(changed);
        assert_eq!(spy.active(), Some("setup"));
    }

    #[test]
    fn nothing_visible_keeps_previous() {
        let mut spy = spy();
        spy.apply(SpyEvent::Visibility(vec![Observation::visible("usage", 10.0)]));

        let changed = spy.apply(SpyEvent::Visibility(vec![Observation::hidden("usage")]));

        assert!(!changed);
        assert_eq!(spy.active(), Some("usage"));
        assert!(!spy.map().any_visible());
    }

    #[test]
    fn partial_batches_merge_with_known_state() {
        let mut spy = spy();
        spy.apply(SpyEvent::Visibility(vec![
            Observation::visible("setup", 30.0),
            Observation::visible("usage", 300.0),
        ]));

        // only setup changed; usage is still on screen
        spy.apply(SpyEvent::Visibility(vec![Observation::hidden("setup")]));

        assert_eq!(spy.active(), Some("usage"));
    }

    #[test]
    fn equal_tops_use_registration_order() {
        let mut spy = spy();
        spy.apply(SpyEvent::Visibility(vec![
            Observation::visible("faq", 0.0),
            Observation::visible("setup", 0.0),
        ]));

        assert_eq!(spy.active(), Some("setup"));
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut spy = spy();
        spy.apply(SpyEvent::Visibility(vec![Observation::visible("missing", -50.0)]));

        assert_eq!(spy.active(), Some("intro"));
        assert!(!spy.map().is_visible("missing"));
    }

    #[test]
    fn hover_overrides_until_pointer_leaves() {
        let mut spy = spy();
        spy.apply(SpyEvent::Visibility(vec![Observation::visible("setup", 10.0)]));

        spy.apply(SpyEvent::PointerEntered("faq".to_owned()));
        assert_eq!(spy.active(), Some("faq"));

        // observations while hovering are recorded but do not move the highlight
        spy.apply(SpyEvent::Visibility(vec![
            Observation::hidden("setup"),
            Observation::visible("usage", 5.0),
        ]));
        assert_eq!(spy.active(), Some("faq"));

        spy.apply(SpyEvent::PointerLeft);
        assert_eq!(spy.active(), Some("usage"));
        assert_eq!(spy.hovered(), None);
    }

    #[test]
    fn leaving_with_nothing_visible_keeps_hovered_id() {
        let mut spy = spy();
        spy.apply(SpyEvent::PointerEntered("faq".to_owned()));
        spy.apply(SpyEvent::PointerLeft);

        assert_eq!(spy.active(), Some("faq"));
    }

    #[test]
    fn late_tracking_sets_initial_active() {
        let mut spy = ActiveSection::default();
        spy.track("a");
        spy.track("b");

        assert_eq!(spy.active(), Some("a"));
        assert_eq!(spy.map().ids(), ["a".to_owned(), "b".to_owned()]);
    }

    #[test]
    fn parent_entry_active_through_child() {
        let outline = organize_sections(&[
            RegisteredSection::top("intro", "Intro"),
            RegisteredSection::sub("setup", "Setup"),
            RegisteredSection::top("usage", "Usage"),
        ]);

        let mut spy = ActiveSection::new(["intro", "setup", "usage"]);
        spy.apply(SpyEvent::Visibility(vec![Observation::visible("setup", 0.0)]));

        assert!(spy.is_active(outline[0].ids()));
        assert!(!spy.is_active(outline[1].ids()));
    }
}
