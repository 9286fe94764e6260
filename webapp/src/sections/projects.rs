use dioxus::prelude::*;

use portfolio::{
    animation::{Direction, Easing, STAGGER_BASE, STAGGER_STEP, fade_in, slide_in, stagger, zoom_in},
    content::{PROJECTS, Project},
    gallery::{ProjectSelection, card_tags},
};

use crate::components::{animated_button::AnimatedButton, section_heading::SectionHeading};

#[derive(Clone, PartialEq, Props)]
struct ProjectCardProps {
    project: Project,
    index: usize,
    selection: Signal<ProjectSelection>,
}

#[component]
fn ProjectCard(props: ProjectCardProps) -> Element {
    let project = props.project;
    let mut selection = props.selection;
    let (tags, hidden) = card_tags(&project);
    let delay = stagger(props.index, STAGGER_STEP, STAGGER_BASE);

    rsx! {
        div {
            class: "card media-card",
            style: "{fade_in(Direction::Up, delay).style()}",
            onclick: move |_| selection.with_mut(|s| s.select(&project)),
            img { src: "{project.image}", alt: "{project.title}", loading: "lazy" }
            div { class: "card-body",
                h3 { "{project.title}" }
                p { "{project.description}" }
                div { class: "tag-list",
                    for tag in tags {
                        span { class: "tag", "{tag}" }
                    }
                    if hidden > 0 {
                        span { class: "tag", "+{hidden}" }
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct ProjectModalProps {
    project: Project,
    selection: Signal<ProjectSelection>,
}

// clicks on the backdrop close the modal; the panel swallows its own clicks so that
// interacting with the content does not
#[component]
fn ProjectModal(props: ProjectModalProps) -> Element {
    let project = props.project;
    let mut selection = props.selection;

    let panel = slide_in(
        Direction::Up,
        Easing::Spring {
            stiffness: 100.0,
            damping: 12.0,
        },
        0.0,
        0.5,
    );

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| selection.with_mut(|s| s.close()),
            div {
                class: "modal-panel",
                style: "{panel.style()}",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                button {
                    class: "icon-btn modal-close",
                    "aria-label": "Close",
                    onclick: move |_| selection.with_mut(|s| s.close()),
                    "✕"
                }
                img {
                    class: "modal-image",
                    style: "{zoom_in(0.1, 0.4).style()}",
                    src: "{project.image}",
                    alt: "{project.title}",
                }
                div { class: "modal-body",
                    h3 { "{project.title}" }
                    div { class: "tag-list",
                        for tag in project.tags {
                            span { class: "tag", "{tag}" }
                        }
                    }
                    p { "{project.detailed_description}" }
                    div { class: "hero-actions",
                        if let Some(demo) = project.demo_link {
                            AnimatedButton { href: demo, primary: true, external: true, "Live Demo" }
                        }
                        if let Some(code) = project.code_link {
                            AnimatedButton { href: code, external: true, "View Code" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Projects() -> Element {
    let selection = use_signal(ProjectSelection::default);
    let current = selection.read().current(PROJECTS).copied();

    rsx! {
        section { id: "projects", class: "section",
            div { class: "container",
                SectionHeading {
                    title: "Projects",
                    subtitle: "A selection of tools and research I've built",
                    centered: true,
                }

                div { class: "grid",
                    for (index, project) in PROJECTS.iter().enumerate() {
                        ProjectCard {
                            key: "{project.id}",
                            project: *project,
                            index,
                            selection,
                        }
                    }
                }
            }

            if let Some(project) = current {
                ProjectModal { project, selection }
            }
        }
    }
}
