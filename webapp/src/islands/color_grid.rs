use dioxus::prelude::*;

use site::{Lang, content::text::COLORS_PAGE, lang::capitalize, palette};

#[derive(Clone, PartialEq, Props)]
pub struct ColorGridProps {
    lang: Lang,
}

#[component]
pub fn ColorGrid(props: ColorGridProps) -> Element {
    let text = COLORS_PAGE.pick(props.lang);
    let mut query = use_signal(String::new);

    let colors = palette::filter_colors(&query.read());

    rsx! {
        input {
            class: "search",
            r#type: "search",
            autofocus: true,
            placeholder: text.search,
            value: "{query}",
            oninput: move |evt| query.set(evt.value()),
        }
        for color in colors {
            div { key: "{color.name}", class: "color-row",
                span { class: "color-name", "{capitalize(color.name)}" }
                for swatch in color.swatches() {
                    div {
                        class: if swatch.light_text() { "swatch light-text" } else { "swatch" },
                        style: "background-color: {swatch.hex}",
                        title: "{color.name}-{swatch.shade}",
                        span { "{swatch.shade}" }
                        span { "{swatch.hex}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_row_per_color_with_every_shade() {
        let html = dioxus::ssr::render_element(rsx! {
            ColorGrid { lang: Lang::Fr }
        });

        assert_eq!(html.matches("class=\"color-row\"").count(), palette::PALETTE.len());
        assert_eq!(
            html.matches("class=\"swatch").count(),
            palette::PALETTE.len() * palette::SHADES.len()
        );
        assert!(html.contains("title=\"orange-500\""));
        assert!(html.contains("placeholder=\"Rechercher une couleur...\""));
    }

    #[test]
    fn dark_shades_get_light_text() {
        let html = dioxus::ssr::render_element(rsx! {
            ColorGrid { lang: Lang::En }
        });

        // shades 500 through 950
        assert_eq!(html.matches("swatch light-text").count(), palette::PALETTE.len() * 6);
    }
}
