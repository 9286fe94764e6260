use dioxus::prelude::*;

use portfolio::{
    animation::{Direction, fade_in},
    content::{ABOUT_PARAGRAPHS, FEATURES, Feature},
};

use crate::components::section_heading::SectionHeading;

#[derive(Clone, PartialEq, Props)]
struct FeatureCardProps {
    feature: Feature,
}

#[component]
fn FeatureCard(props: FeatureCardProps) -> Element {
    let feature = props.feature;

    rsx! {
        div { class: "card", style: "{fade_in(Direction::Up, feature.delay).style()}",
            div { class: "feature-icon", "{feature.icon.glyph()}" }
            h3 { "{feature.title}" }
            p { "{feature.description}" }
        }
    }
}

#[component]
pub fn About() -> Element {
    rsx! {
        section { id: "about", class: "section",
            div { class: "container",
                SectionHeading {
                    title: "About Me",
                    subtitle: "Cybersecurity professional focused on defense, forensics and offensive testing",
                }

                div { class: "about-row",
                    div { class: "card", style: "{fade_in(Direction::Right, 0.2).style()}",
                        h3 { "My Background" }
                        for paragraph in ABOUT_PARAGRAPHS {
                            p { "{paragraph}" }
                        }
                    }

                    div { class: "grid",
                        for feature in FEATURES {
                            FeatureCard { key: "{feature.title}", feature: *feature }
                        }
                    }
                }
            }
        }
    }
}
