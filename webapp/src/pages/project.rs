use dioxus::prelude::*;

use site::{Lang, content::Project};

use crate::island::{Island, IslandMount};

#[derive(Clone, PartialEq, Props)]
pub struct ProjectPageProps {
    lang: Lang,
    project: &'static Project,
}

// the project body is one island: its outline is built from what the sections
// register once they are mounted
#[component]
pub fn ProjectPage(props: ProjectPageProps) -> Element {
    rsx! {
        IslandMount {
            island: Island::ProjectBody {
                lang: props.lang,
                project_id: props.project.id.to_owned(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use site::content;

    use super::*;

    #[test]
    fn outline_is_empty_until_mounted() {
        let project = content::project("monero-stack").unwrap();
        let html = dioxus::ssr::render_element(rsx! {
            ProjectPage { lang: Lang::Fr, project }
        });

        assert!(html.contains("id=\"project\""));
        assert!(html.contains("id=\"mise-en-place\""));
        assert!(html.contains("class=\"spy-list\""));
        assert!(!html.contains("spy-link"));
    }
}
