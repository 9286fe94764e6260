use dioxus::prelude::*;

// the one call-to-action control used across the page
//
// with an href it renders as a link (optionally opening in a new tab), otherwise as a
// button, which inside a form is the submit control
#[derive(Clone, PartialEq, Props)]
pub struct AnimatedButtonProps {
    #[props(into)]
    href: Option<String>,
    #[props(default)]
    primary: bool,
    #[props(default)]
    external: bool,
    #[props(default)]
    submit: bool,
    #[props(default)]
    disabled: bool,
    #[props(default, into)]
    class: String,
    children: Element,
}

#[component]
pub fn AnimatedButton(props: AnimatedButtonProps) -> Element {
    let variant = if props.primary {
        "btn btn-primary"
    } else {
        "btn btn-secondary"
    };
    let class = format!("{variant} {}", props.class);

    match props.href {
        Some(href) => rsx! {
            a {
                class: "{class}",
                href: "{href}",
                target: props.external.then_some("_blank"),
                rel: props.external.then_some("noopener noreferrer"),
                {props.children}
            }
        },
        None => rsx! {
            button {
                class: "{class}",
                r#type: if props.submit { "submit" } else { "button" },
                disabled: props.disabled,
                {props.children}
            }
        },
    }
}
