// portfolio interaction core
//
// everything in this crate is free of DOM access so that it can be exercised by plain unit
// tests; the webapp owns the timers, listeners, and storage, and drives the state machines
// defined here through &mut self transitions held inside dioxus signals
pub mod animation;
pub mod carousel;
pub mod config;
pub mod contact;
pub mod content;
pub mod gallery;
pub mod nav;
pub mod theme;
pub mod typing;
pub mod writeups;

// every section is addressable by a same-page anchor, and nothing else is used to refer
// to a section from another component
pub const SECTION_ANCHORS: &[&str] = &[
    "hero",
    "about",
    "experience",
    "skills",
    "projects",
    "writeups",
    "testimonials",
    "contact",
];
