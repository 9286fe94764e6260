#![allow(non_snake_case)]
use dioxus::prelude::*;

use tracing::{Level, error};

use portfolio::{config::SiteConfig, theme::Theme};

mod common;
use common::storage::LocalThemeStore;

mod components;
use components::layout::Layout;

mod sections;
use sections::{
    about::About, contact::Contact, experience::ExperienceTimeline, hero::Hero,
    projects::Projects, skills::Skills, testimonials::Testimonials, writeups::Writeups,
};

const SITE_CONFIG: &str = include_str!("../portfolio.toml");

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

// a broken config file should not take the page down, so fall back to the built-in values
fn load_config() -> SiteConfig {
    match SiteConfig::from_toml(SITE_CONFIG) {
        Ok(config) => config,
        Err(err) => {
            error!(%err, "failed to parse portfolio.toml, using defaults");
            SiteConfig::default()
        }
    }
}

#[component]
pub fn App() -> Element {
    let config = use_context_provider(load_config);
    let store =
        use_context_provider(|| LocalThemeStore::new(config.site.storage_prefix.clone()));
    use_context_provider(|| Signal::new(Theme::load(&store)));

    rsx! {
        document::Title { "{config.site.title}" }
        style { "{common::style::PAGE_STYLES}" }
        Layout {
            Hero {}
            About {}
            ExperienceTimeline {}
            Skills {}
            Projects {}
            Writeups {}
            Testimonials {}
            Contact {}
        }
    }
}
