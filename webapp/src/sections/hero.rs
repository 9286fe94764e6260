use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use portfolio::{
    animation::{Direction, fade_in, text_variant},
    content::{HERO_TITLES, OWNER_SHORT, TAGLINE},
    typing::{TypingTimings, Typewriter},
};

use crate::{
    common::{
        task::{timeout_ms, use_task_slot},
        use_site_config,
    },
    components::animated_button::AnimatedButton,
};

#[component]
pub fn Hero() -> Element {
    let config = use_site_config();
    let mut typed = use_signal(String::new);

    // the typewriter is a single loop that sleeps for whatever delay the last step asked for
    let typing = use_task_slot();
    use_hook(|| {
        let timings = TypingTimings::from(&config.typing);
        typing.replace(spawn(async move {
            let mut writer = Typewriter::new(HERO_TITLES.iter().copied(), timings);
            TimeoutFuture::new(timeout_ms(timings.initial)).await;

            loop {
                let delay = writer.step();
                typed.set(writer.text().to_owned());
                TimeoutFuture::new(timeout_ms(delay)).await;
            }
        }));
    });

    rsx! {
        section { id: "hero", class: "hero",
            div { class: "container",
                p { class: "hero-subtitle", style: "{fade_in(Direction::Down, 0.1).style()}",
                    "Hi, I'm {OWNER_SHORT}"
                }
                h1 { class: "hero-title", style: "{text_variant(0.2).style()}",
                    "Cybersecurity Specialist &"
                    br {}
                    span { class: "typed", "{typed}" }
                }
                p { class: "hero-subtitle", style: "{fade_in(Direction::Up, 0.4).style()}",
                    "{TAGLINE}. I secure systems, investigate incidents and break things before attackers do."
                }
                div { class: "hero-actions", style: "{fade_in(Direction::Up, 0.6).style()}",
                    AnimatedButton { href: "#contact", primary: true, "Hire Me" }
                    AnimatedButton { href: "#projects", "View Projects" }
                }
            }

            a { class: "scroll-cue", href: "#about", "aria-label": "Scroll to about",
                span { "Scroll Down" }
                span { "↓" }
            }
        }
    }
}
