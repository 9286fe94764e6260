use dioxus::prelude::*;

use portfolio::{
    animation::{Direction, STAGGER_BASE, STAGGER_STEP, fade_in, stagger},
    content::{ALL_WRITEUPS_URL, WRITEUPS, Writeup},
    writeups::TagFilter,
};

use crate::components::{animated_button::AnimatedButton, section_heading::SectionHeading};

#[derive(Clone, PartialEq, Props)]
struct WriteupCardProps {
    writeup: Writeup,
    index: usize,
}

#[component]
fn WriteupCard(props: WriteupCardProps) -> Element {
    let writeup = props.writeup;
    let delay = stagger(props.index, STAGGER_STEP, STAGGER_BASE);

    rsx! {
        a {
            class: "card media-card",
            href: "{writeup.url}",
            target: "_blank",
            rel: "noopener noreferrer",
            style: "{fade_in(Direction::Up, delay).style()}",
            img { src: "{writeup.image}", alt: "{writeup.title}", loading: "lazy" }
            div { class: "card-body",
                div { class: "card-meta",
                    span { "{writeup.date}" }
                    span { "{writeup.read_time}" }
                }
                h3 { "{writeup.title}" }
                p { "{writeup.description}" }
                div { class: "tag-list",
                    for tag in writeup.tags {
                        span { class: "tag", "{tag}" }
                    }
                }
                span { class: "read-more", "Read More →" }
            }
        }
    }
}

#[component]
pub fn Writeups() -> Element {
    let mut filter = use_signal(TagFilter::default);

    let tags = filter.read().tags().to_vec();
    let shown: Vec<Writeup> = filter.read().filter(WRITEUPS).into_iter().copied().collect();

    rsx! {
        section { id: "writeups", class: "section",
            div { class: "container",
                SectionHeading {
                    title: "Writeups",
                    subtitle: "CTF solutions, research notes and investigations",
                    centered: true,
                }

                div { class: "filter-bar",
                    for tag in tags {
                        button {
                            key: "{tag}",
                            class: if filter.read().is_active(tag) { "filter-chip active" } else { "filter-chip" },
                            onclick: move |_| {
                                filter.with_mut(|f| f.select(tag));
                            },
                            "{tag}"
                        }
                    }
                }

                div { class: "grid",
                    for (index, writeup) in shown.into_iter().enumerate() {
                        WriteupCard { key: "{writeup.id}", writeup, index }
                    }
                }

                div { class: "hero-actions",
                    AnimatedButton { href: ALL_WRITEUPS_URL, external: true, "View All Writeups" }
                }
            }
        }
    }
}
