use dioxus::prelude::*;

use site::icons::{self, IconStyle, Shape};

#[derive(Clone, PartialEq, Props)]
pub struct IconProps {
    // kebab-case catalog name
    name: &'static str,
    #[props(default)]
    class: String,
}

// inline svg from the icon catalog; unknown names render nothing
#[component]
pub fn Icon(props: IconProps) -> Element {
    let Some(entry) = icons::icon(props.name) else {
        return rsx! {};
    };

    let class = if props.class.is_empty() {
        String::from("icon")
    } else {
        format!("icon {}", props.class)
    };

    let (fill, stroke) = match entry.style {
        IconStyle::Stroke => ("none", "currentColor"),
        IconStyle::Fill => ("currentColor", "none"),
    };

    rsx! {
        svg {
            class,
            view_box: entry.view_box,
            fill,
            stroke,
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",

            for shape in entry.shapes.iter() {
                match *shape {
                    Shape::Path(d) => rsx! {
                        path { d }
                    },
                    Shape::Circle { cx, cy, r } => rsx! {
                        circle { cx: "{cx}", cy: "{cy}", r: "{r}" }
                    },
                    Shape::Rect { x, y, w, h, rx } => rsx! {
                        rect {
                            x: "{x}",
                            y: "{y}",
                            width: "{w}",
                            height: "{h}",
                            rx: "{rx}",
                        }
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_catalog_shapes() {
        let html = dioxus::ssr::render_element(rsx! {
            Icon { name: "at-sign" }
        });

        assert!(html.contains("<svg"));
        assert!(html.contains("viewBox=\"0 0 24 24\""));
        assert!(html.contains("<circle"));
        assert!(html.contains("stroke=\"currentColor\""));
    }

    #[test]
    fn brand_icons_are_filled() {
        let html = dioxus::ssr::render_element(rsx! {
            Icon { name: "github", class: "big" }
        });

        assert!(html.contains("class=\"icon big\""));
        assert!(html.contains("fill=\"currentColor\""));
    }

    #[test]
    fn unknown_icon_renders_nothing() {
        let html = dioxus::ssr::render_element(rsx! {
            Icon { name: "no-such-icon" }
        });

        assert!(!html.contains("<svg"));
    }
}
