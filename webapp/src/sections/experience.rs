use dioxus::prelude::*;

use portfolio::{
    animation::{Direction, fade_in},
    content::{EXPERIENCES, Experience},
};

use crate::components::section_heading::SectionHeading;

#[derive(Clone, PartialEq, Props)]
struct TimelineEntryProps {
    experience: Experience,
    index: usize,
}

#[component]
fn TimelineEntry(props: TimelineEntryProps) -> Element {
    let experience = props.experience;
    let delay = props.index as f32 * 0.2;

    rsx! {
        div { class: "timeline-entry", style: "{fade_in(Direction::Up, delay).style()}",
            div { class: "timeline-marker" }
            div { class: "card",
                div { class: "timeline-header",
                    h3 { "{experience.title}" }
                    span { class: "tag", "{experience.period}" }
                }
                p { class: "organization", "{experience.organization}" }
                ul {
                    for line in experience.description {
                        li { "{line}" }
                    }
                }
                for project in experience.projects {
                    div { class: "subproject",
                        h4 { "{project.name}" }
                        p { "{project.description}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ExperienceTimeline() -> Element {
    rsx! {
        section { id: "experience", class: "section",
            div { class: "container",
                SectionHeading {
                    title: "Experience",
                    subtitle: "Where I've put security into practice",
                    centered: true,
                }

                div { class: "timeline",
                    for (index, experience) in EXPERIENCES.iter().enumerate() {
                        TimelineEntry {
                            key: "{experience.title}-{experience.period}",
                            experience: *experience,
                            index,
                        }
                    }
                }
            }
        }
    }
}
