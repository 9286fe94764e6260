use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use portfolio::{
    animation::{Direction, fade_in},
    contact::{ContactForm, Field, FormStatus, Submitter},
    content::{CONTACT_EMAIL, LOCATION, SOCIAL_LINKS},
};

use crate::{
    common::{relay::Relay, task::use_task_slot, use_site_config},
    components::{animated_button::AnimatedButton, section_heading::SectionHeading},
};

#[derive(Clone, PartialEq, Props)]
struct FormInputProps {
    field: Field,
    #[props(into)]
    label: String,
    #[props(into)]
    placeholder: String,
    #[props(default)]
    multiline: bool,
    #[props(default = "text".to_string(), into)]
    kind: String,
    form: Signal<ContactForm>,
}

#[component]
fn FormInput(props: FormInputProps) -> Element {
    let field = props.field;
    let mut form = props.form;
    let value = form.read().fields().get(field).to_owned();
    let id = format!("{field:?}").to_lowercase();

    rsx! {
        div { class: "form-field",
            label { r#for: "{id}", "{props.label}" }
            if props.multiline {
                textarea {
                    class: "form-input",
                    id: "{id}",
                    name: "{id}",
                    rows: "5",
                    required: true,
                    placeholder: "{props.placeholder}",
                    value: "{value}",
                    oninput: move |evt: FormEvent| form.with_mut(|f| f.set_field(field, evt.value())),
                }
            } else {
                input {
                    class: "form-input",
                    id: "{id}",
                    name: "{id}",
                    r#type: "{props.kind}",
                    required: true,
                    placeholder: "{props.placeholder}",
                    value: "{value}",
                    oninput: move |evt: FormEvent| form.with_mut(|f| f.set_field(field, evt.value())),
                }
            }
        }
    }
}

#[component]
pub fn Contact() -> Element {
    let config = use_site_config();
    let revert_ms = config.contact.status_revert_ms;
    let relay = use_hook(|| Relay::from_config(&config.contact));

    let mut form = use_signal(ContactForm::new);

    // the banner goes away on its own; a newer outcome restarts the countdown
    let revert = use_task_slot();

    let status = form.read().status().clone();

    rsx! {
        section { id: "contact", class: "section",
            div { class: "container",
                SectionHeading {
                    title: "Get In Touch",
                    subtitle: "Have a project in mind or need a security assessment? Let's talk.",
                    centered: true,
                }

                div { class: "contact-grid",
                    div { class: "card", style: "{fade_in(Direction::Right, 0.2).style()}",
                        h3 { "Let's work together" }
                        p {
                            "I'm always open to discussing security work, research collaborations or CTF teams."
                        }
                        div { class: "contact-detail",
                            span { class: "feature-icon", "✉" }
                            a { href: "mailto:{CONTACT_EMAIL}", "{CONTACT_EMAIL}" }
                        }
                        div { class: "contact-detail",
                            span { class: "feature-icon", "⌖" }
                            span { "{LOCATION}" }
                        }
                        div { class: "social-links",
                            for link in SOCIAL_LINKS {
                                a {
                                    key: "{link.label}",
                                    class: "social-link",
                                    href: "{link.href}",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    "aria-label": "{link.label}",
                                    "{link.icon.glyph()}"
                                }
                            }
                        }
                    }

                    form {
                        class: "card",
                        style: "{fade_in(Direction::Left, 0.3).style()}",
                        onsubmit: move |evt: FormEvent| {
                            evt.prevent_default();
                            let relay = relay.clone();
                            let revert = revert.clone();
                            async move {
                                let Some(message) = form.with_mut(|f| f.begin_submit()) else {
                                    return;
                                };

                                let outcome = relay.submit(&message).await;
                                form.with_mut(|f| f.finish(outcome));

                                // replacing the slot cancels any older countdown, so only the
                                // newest outcome decides when the banner clears
                                revert.replace(spawn(async move {
                                    TimeoutFuture::new(revert_ms).await;
                                    form.with_mut(|f| f.expire());
                                }));
                            }
                        },

                        FormInput {
                            field: Field::Name,
                            label: "Your Name",
                            placeholder: "John Doe",
                            form,
                        }
                        FormInput {
                            field: Field::Email,
                            label: "Your Email",
                            placeholder: "john@example.com",
                            kind: "email",
                            form,
                        }
                        FormInput {
                            field: Field::Message,
                            label: "Your Message",
                            placeholder: "Tell me about your project...",
                            multiline: true,
                            form,
                        }

                        AnimatedButton {
                            primary: true,
                            submit: true,
                            disabled: status.is_submitting(),
                            class: "btn-block",
                            if status.is_submitting() {
                                span { class: "spinner" }
                            } else {
                                "Send Message"
                            }
                        }

                        if let Some(banner) = status.banner() {
                            div {
                                class: if matches!(status, FormStatus::Success(_)) { "form-banner success" } else { "form-banner error" },
                                "{banner}"
                            }
                        }
                    }
                }
            }
        }
    }
}
