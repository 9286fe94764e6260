use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;
use gloo_events::EventListener;

use portfolio::{
    animation::nav_reveal,
    content::{BRAND, NAV_ITEMS, NavItem},
    nav::NavState,
};

use crate::{
    common::{
        use_site_config,
        viewport::{DocumentViewport, scroll_offset},
    },
    components::{animated_button::AnimatedButton, theme_toggle::ThemeToggle},
};

fn navigate_to(mut nav: Signal<NavState>, anchor: &str) {
    // a missing target is logged by navigate()
    nav.with_mut(|n| n.navigate(anchor, &DocumentViewport));
}

#[derive(Clone, PartialEq, Props)]
struct NavBarButtonProps {
    item: NavItem,
    nav: Signal<NavState>,
}

#[component]
fn NavBarButton(props: NavBarButtonProps) -> Element {
    let item = props.item;
    let nav = props.nav;

    rsx! {
        li {
            a {
                class: "nav-link",
                href: "{item.href()}",
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    navigate_to(nav, item.anchor);
                },
                "{item.label}"
            }
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    let config = use_site_config();
    let threshold = config.nav.scroll_threshold_px;

    let mut nav = use_signal(|| {
        let mut state = NavState::new(threshold);
        state.on_scroll(scroll_offset());
        state
    });

    // the window listener lives exactly as long as the bar; dropping it unregisters it
    let listener = use_hook(|| {
        let listener = web_sys::window().map(|window| {
            EventListener::new(&window, "scroll", move |_| {
                let mut next = *nav.peek();
                if next.on_scroll(scroll_offset()) {
                    nav.set(next);
                }
            })
        });
        Rc::new(RefCell::new(listener))
    });

    use_drop(move || {
        listener.borrow_mut().take();
    });

    let state = *nav.read();

    rsx! {
        nav {
            class: if state.is_scrolled() { "navbar scrolled" } else { "navbar" },
            style: "{nav_reveal().style()}",
            div { class: "container nav-row",
                a {
                    class: "brand",
                    href: "#hero",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        navigate_to(nav, "hero");
                    },
                    "{BRAND}"
                }

                ul { class: "nav-links",
                    for item in NAV_ITEMS {
                        NavBarButton { key: "{item.anchor}", item: *item, nav }
                    }
                }

                div { class: "nav-actions",
                    ThemeToggle {}
                    AnimatedButton {
                        href: config.site.resume_url.clone(),
                        primary: true,
                        external: true,
                        "Resume"
                    }
                    button {
                        class: "icon-btn menu-button",
                        "aria-label": "Toggle menu",
                        onclick: move |_| nav.with_mut(|n| n.toggle_menu()),
                        if state.is_menu_open() {
                            "✕"
                        } else {
                            "☰"
                        }
                    }
                }
            }

            div { class: if state.is_menu_open() { "mobile-menu open" } else { "mobile-menu" },
                ul {
                    for item in NAV_ITEMS {
                        NavBarButton { key: "{item.anchor}", item: *item, nav }
                    }
                }
                AnimatedButton {
                    href: config.site.resume_url.clone(),
                    primary: true,
                    external: true,
                    class: "btn-block",
                    "Resume"
                }
            }
        }
    }
}
