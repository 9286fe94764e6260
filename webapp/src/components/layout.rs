use dioxus::prelude::*;

use portfolio::theme::Theme;

use crate::components::{footer::Footer, navigation::NavBar};

#[derive(Clone, PartialEq, Props)]
pub struct LayoutProps {
    children: Element,
}

// the theme class sits on the outermost element so every palette variable resolves
// against the active mode
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let theme = use_context::<Signal<Theme>>();
    let class = theme.read().mode().css_class();

    rsx! {
        div { class: "app {class}",
            NavBar {}
            main { {props.children} }
            Footer {}
        }
    }
}
