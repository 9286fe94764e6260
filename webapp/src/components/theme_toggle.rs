use dioxus::prelude::*;

use portfolio::theme::{Theme, ThemeMode};

use crate::common::storage::LocalThemeStore;

#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_context::<Signal<Theme>>();
    let store = use_context::<LocalThemeStore>();

    let mode = theme.read().mode();

    rsx! {
        button {
            class: "icon-btn",
            "aria-label": "Toggle theme",
            onclick: move |_| {
                theme.with_mut(|t| t.toggle(&store));
            },
            if mode == ThemeMode::Dark {
                "☀"
            } else {
                "☾"
            }
        }
    }
}
