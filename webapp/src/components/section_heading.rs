use dioxus::prelude::*;

use portfolio::animation::{Direction, fade_in, text_variant};

#[derive(Clone, PartialEq, Props)]
pub struct SectionHeadingProps {
    #[props(into)]
    title: String,
    #[props(into)]
    subtitle: Option<String>,
    #[props(default)]
    centered: bool,
}

#[component]
pub fn SectionHeading(props: SectionHeadingProps) -> Element {
    rsx! {
        div {
            class: if props.centered { "section-heading centered" } else { "section-heading" },
            h2 { style: "{text_variant(0.1).style()}", "{props.title}" }
            if let Some(subtitle) = props.subtitle {
                p { style: "{fade_in(Direction::Up, 0.3).style()}", "{subtitle}" }
            }
        }
    }
}
