use dioxus::prelude::*;

use site::{
    Lang,
    content::{Block, Inline, RichText},
};

use crate::components::CopyBlock;

#[derive(Clone, PartialEq, Props)]
pub struct InlineRunProps {
    inlines: &'static [Inline],
}

#[component]
pub fn InlineRun(props: InlineRunProps) -> Element {
    rsx! {
        for inline in props.inlines.iter() {
            match *inline {
                Inline::Text(text) => rsx! { "{text}" },
                Inline::Strong(text) => rsx! {
                    strong { "{text}" }
                },
                Inline::Code(text) => rsx! {
                    code { "{text}" }
                },
                Inline::Break => rsx! {
                    br {}
                },
                Inline::Link { href, label } => rsx! {
                    a {
                        href,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "{label}"
                    }
                },
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct RichBlocksProps {
    lang: Lang,
    blocks: RichText,
}

// code blocks come out as copy blocks, which only do something inside an island
#[component]
pub fn RichBlocks(props: RichBlocksProps) -> Element {
    let lang = props.lang;

    rsx! {
        div { class: "rich",
            for block in props.blocks.iter() {
                match *block {
                    Block::Paragraph(inlines) => rsx! {
                        p {
                            InlineRun { inlines }
                        }
                    },
                    Block::List(items) => rsx! {
                        ul {
                            for inlines in items.iter() {
                                li {
                                    InlineRun { inlines: *inlines }
                                }
                            }
                        }
                    },
                    Block::Code(code) => rsx! {
                        CopyBlock { lang, text: code }
                    },
                    Block::Note(inlines) => rsx! {
                        p { class: "note",
                            InlineRun { inlines }
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

    const SAMPLE: RichText = &[
        Block::Paragraph(&[
            Inline::Text("Use "),
            Inline::Code("cargo"),
            Inline::Break,
            Inline::Strong("now"),
        ]),
        Block::List(&[&[Inline::Text("one")], &[Inline::Text("two")]]),
        Block::Note(&[Inline::Link {
            href: "https://example.org",
            label: "link",
        }]),
    ];

    #[test]
    fn renders_blocks_in_order() {
        let html = dioxus::ssr::render_element(rsx! {
            RichBlocks { lang: Lang::En, blocks: SAMPLE }
        });

        assert!(html.contains("Use <code>cargo</code>"));
        assert!(html.contains("<strong>now</strong>"));
        assert!(html.contains("<li>one</li><li>two</li>"));
        assert!(html.contains("class=\"note\""));
        assert!(html.contains("href=\"https://example.org\""));
        assert!(html.find("cargo") < html.find("two"));
    }
}
