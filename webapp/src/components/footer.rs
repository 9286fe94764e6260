use chrono::{Datelike, Local};
use dioxus::prelude::*;

use portfolio::{
    content::{BRAND, CONTACT_EMAIL, LOCATION, OWNER_NAME, QUICK_LINKS, SOCIAL_LINKS, TAGLINE},
    nav::Viewport,
};

use crate::common::{use_site_config, viewport::DocumentViewport};

#[component]
pub fn Footer() -> Element {
    let config = use_site_config();
    let year = Local::now().year();

    rsx! {
        footer { class: "site-footer",
            div { class: "container",
                div { class: "footer-grid",
                    div {
                        a { class: "brand", href: "#hero", "{BRAND}" }
                        p { "{TAGLINE}" }
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

                    div {
                        h4 { "Quick Links" }
                        ul {
                            for link in QUICK_LINKS {
                                li { key: "{link.anchor}",
                                    a {
                                        href: "{link.href()}",
                                        onclick: move |evt: MouseEvent| {
                                            evt.prevent_default();
                                            DocumentViewport.scroll_to_anchor(link.anchor);
                                        },
                                        "{link.label}"
                                    }
                                }
                            }
                        }
                    }

                    div {
                        h4 { "Contact" }
                        ul {
                            li {
                                a { href: "mailto:{CONTACT_EMAIL}", "{CONTACT_EMAIL}" }
                            }
                            li { "{LOCATION}" }
                            li {
                                a {
                                    href: "{config.site.resume_url}",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    "Download Resume"
                                }
                            }
                        }
                    }
                }

                div { class: "footer-bottom",
                    p { "© {year} {OWNER_NAME}. All rights reserved." }
                    button {
                        class: "icon-btn",
                        "aria-label": "Back to top",
                        onclick: move |_| DocumentViewport.scroll_to_top(),
                        "↑"
                    }
                }
            }
        }
    }
}
