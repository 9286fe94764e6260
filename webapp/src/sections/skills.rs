use dioxus::prelude::*;

use portfolio::{
    animation::{Direction, fade_in},
    content::SKILL_CATEGORIES,
};

use crate::components::section_heading::SectionHeading;

#[component]
pub fn Skills() -> Element {
    rsx! {
        section { id: "skills", class: "section",
            div { class: "container",
                SectionHeading {
                    title: "Skills",
                    subtitle: "Tools and disciplines I work with every day",
                    centered: true,
                }

                div { class: "grid",
                    for category in SKILL_CATEGORIES {
                        div {
                            key: "{category.title}",
                            class: "card",
                            style: "{fade_in(Direction::Up, category.delay).style()}",
                            h3 { "{category.title}" }
                            div { class: "tag-list",
                                for skill in category.skills {
                                    span { class: "tag", "{skill}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
