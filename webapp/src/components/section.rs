use dioxus::prelude::*;

use site::section::{RegisteredSection, SectionLevel, SectionRegistry};

// registration handle
//
// created by the page that owns the section navigation and handed explicitly to
// every content component that announces a heading.  duplicate ids leave the
// registry untouched, so they do not re-render the navigation
#[derive(Clone, Copy, PartialEq)]
pub struct SectionChannel(Signal<SectionRegistry>);

impl SectionChannel {
    pub fn register(mut self, section: RegisteredSection) {
        if self.0.peek().contains(&section.id) {
            return;
        }

        self.0.write().register(section);
    }

    pub fn registry(&self) -> Signal<SectionRegistry> {
        self.0
    }
}

pub fn use_section_channel(fallback_label: &str) -> SectionChannel {
    let label = fallback_label.to_owned();
    SectionChannel(use_signal(move || SectionRegistry::with_fallback_label(label)))
}

#[derive(Clone, PartialEq, Props)]
pub struct SectionProps {
    channel: SectionChannel,
    #[props(into)]
    id: String,
    #[props(into)]
    label: String,
    #[props(default)]
    level: SectionLevel,
    children: Element,
}

// a navigable content section
//
// registration happens after the first render, so sections rendered as siblings
// register in document order
#[component]
pub fn Section(props: SectionProps) -> Element {
    let channel = props.channel;
    let section = RegisteredSection::new(props.id.clone(), props.label.clone(), props.level);

    use_effect(move || channel.register(section.clone()));

    let heading = match props.level {
        SectionLevel::Top => rsx! {
            h2 { "{props.label}" }
        },
        SectionLevel::Sub => rsx! {
            h3 { "{props.label}" }
        },
    };

    rsx! {
        section { id: "{props.id}", class: "content-section",
            {heading}
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Props)]
    struct HarnessProps {
        level: SectionLevel,
    }

    #[allow(non_snake_case)]
    fn Harness(props: HarnessProps) -> Element {
        let channel = use_section_channel("Autres");

        rsx! {
            Section { channel, id: "setup", label: "Mise en place", level: props.level,
                p { "body" }
            }
        }
    }

    #[test]
    fn renders_heading_for_level() {
        let mut vdom = VirtualDom::new_with_props(
            Harness,
            HarnessProps {
                level: SectionLevel::Top,
            },
        );
        vdom.rebuild_in_place();
        let html = dioxus::ssr::render(&vdom);

        assert!(html.contains("id=\"setup\""));
        assert!(html.contains("class=\"content-section\""));
        assert!(html.contains("<h2>Mise en place</h2>"));
        assert!(html.contains("<p>body</p>"));

        let mut vdom = VirtualDom::new_with_props(
            Harness,
            HarnessProps {
                level: SectionLevel::Sub,
            },
        );
        vdom.rebuild_in_place();
        let html = dioxus::ssr::render(&vdom);

        assert!(html.contains("<h3>Mise en place</h3>"));
    }

    #[test]
    fn duplicate_registration_keeps_first() {
        let mut vdom = VirtualDom::new(|| {
            let channel = use_section_channel("Other");
            let registry = channel.registry();

            use_hook(|| {
                channel.register(RegisteredSection::top("a", "First"));
                channel.register(RegisteredSection::sub("a", "Second"));
                channel.register(RegisteredSection::sub("b", "Child"));
            });

            let outline = registry.peek().outline();
            rsx! {
                for element in outline {
                    span { "{element.id}:{element.label}:{element.children.len()}" }
                }
            }
        });
        vdom.rebuild_in_place();
        let html = dioxus::ssr::render(&vdom);

        assert!(html.contains("<span>a:First:1</span>"));
        assert_eq!(html.matches("<span>").count(), 1);
    }
}
