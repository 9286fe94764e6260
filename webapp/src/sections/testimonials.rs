use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use portfolio::{
    animation::{Direction, fade_in},
    carousel::Carousel,
    content::{TESTIMONIALS, Testimonial},
};

use crate::{
    common::{task::use_task_slot, use_site_config},
    components::section_heading::SectionHeading,
};

// ticks the carousel until cancelled; a paused carousel ignores the tick
fn start_auto_advance(mut carousel: Signal<Carousel>, interval_ms: u32) -> Task {
    spawn(async move {
        loop {
            TimeoutFuture::new(interval_ms).await;
            carousel.with_mut(|c| c.tick());
        }
    })
}

#[derive(Clone, PartialEq, Props)]
struct SlideProps {
    testimonial: Testimonial,
}

#[component]
fn Slide(props: SlideProps) -> Element {
    let testimonial = props.testimonial;

    rsx! {
        div { class: "carousel-slide",
            blockquote { "“{testimonial.quote}”" }
            div { class: "avatar",
                if let Some(avatar) = testimonial.avatar {
                    img { src: "{avatar}", alt: "{testimonial.name}" }
                } else {
                    "{testimonial.initials()}"
                }
            }
            h4 { "{testimonial.name}" }
            p { "{testimonial.role}, {testimonial.company}" }
        }
    }
}

#[component]
pub fn Testimonials() -> Element {
    let config = use_site_config();
    let interval_ms = config.carousel.interval_ms;

    let mut carousel = use_signal(|| Carousel::new(TESTIMONIALS.len()));

    let auto_advance = use_task_slot();
    use_hook(|| auto_advance.replace(start_auto_advance(carousel, interval_ms)));

    let state = *carousel.read();
    let pause_slot = auto_advance.clone();
    let resume_slot = auto_advance.clone();

    rsx! {
        section { id: "testimonials", class: "section",
            div { class: "container",
                SectionHeading {
                    title: "Testimonials",
                    subtitle: "What colleagues and clients say",
                    centered: true,
                }

                if !state.is_empty() {
                    div {
                        class: "carousel",
                        style: "{fade_in(Direction::Up, 0.2).style()}",
                        onmouseenter: move |_| {
                            carousel.with_mut(|c| c.pause());
                            pause_slot.cancel();
                        },
                        onmouseleave: move |_| {
                            carousel.with_mut(|c| c.resume());
                            resume_slot.replace(start_auto_advance(carousel, interval_ms));
                        },

                        div { class: "carousel-viewport",
                            div {
                                class: "carousel-track",
                                style: "transform: translateX(-{state.offset_percent()}%);",
                                for testimonial in TESTIMONIALS {
                                    Slide { key: "{testimonial.id}", testimonial: *testimonial }
                                }
                            }
                        }

                        button {
                            class: "icon-btn carousel-arrow prev",
                            "aria-label": "Previous testimonial",
                            onclick: move |_| carousel.with_mut(|c| c.previous()),
                            "‹"
                        }
                        button {
                            class: "icon-btn carousel-arrow next",
                            "aria-label": "Next testimonial",
                            onclick: move |_| carousel.with_mut(|c| c.next()),
                            "›"
                        }

                        div { class: "carousel-indicators",
                            for index in 0..state.len() {
                                button {
                                    key: "{index}",
                                    class: if index == state.index() { "indicator active" } else { "indicator" },
                                    "aria-label": "Go to testimonial {index + 1}",
                                    onclick: move |_| {
                                        carousel.with_mut(|c| c.go_to(index));
                                    },
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
