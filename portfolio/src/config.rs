use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

// portfolio configuration
//
// the site is a static bundle, so the config file is compiled in by the webapp rather than
// read at runtime.  every table and field has a default, which means a partial file (or an
// empty string) yields a working configuration
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteSection,
    pub nav: NavConfig,
    pub carousel: CarouselConfig,
    pub typing: TypingConfig,
    pub contact: ContactConfig,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct SiteSection {
    // prefix applied to every local storage key
    pub storage_prefix: String,
    pub resume_url: String,
    pub title: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        SiteSection {
            storage_prefix: String::from("portfolio"),
            resume_url: String::from("/resume.pdf"),
            title: String::from("Junaid | Cybersecurity Specialist"),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct NavConfig {
    pub scroll_threshold_px: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        NavConfig {
            scroll_threshold_px: 10.0,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub interval_ms: u32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        CarouselConfig { interval_ms: 6000 }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct TypingConfig {
    pub initial_ms: u32,
    pub type_tick_ms: u32,
    pub delete_tick_ms: u32,
    pub hold_full_ms: u32,
    pub hold_empty_ms: u32,
}

impl Default for TypingConfig {
    fn default() -> Self {
        TypingConfig {
            initial_ms: 1000,
            type_tick_ms: 100,
            delete_tick_ms: 50,
            hold_full_ms: 2000,
            hold_empty_ms: 500,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct ContactConfig {
    // when unset, submissions go to the simulated relay
    pub relay_url: Option<String>,
    pub simulated_delay_ms: u32,
    pub status_revert_ms: u32,
}

impl Default for ContactConfig {
    fn default() -> Self {
        ContactConfig {
            relay_url: None,
            simulated_delay_ms: 1500,
            status_revert_ms: 5000,
        }
    }
}

impl SiteConfig {
    #[instrument(level=Level::DEBUG, skip(doc))]
    pub fn from_toml(doc: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(doc)?;

        debug!("successfully parsed site config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = SiteConfig::from_toml("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.carousel.interval_ms, 6000);
        assert_eq!(config.contact.status_revert_ms, 5000);
        assert_eq!(config.nav.scroll_threshold_px, 10.0);
    }

    #[test]
    fn partial_tables_keep_remaining_defaults() {
        let doc = r#"
            [contact]
            relay_url = "https://relay.example.com/send"

            [typing]
            type_tick_ms = 80
        "#;
        let config = SiteConfig::from_toml(doc).unwrap();

        assert_eq!(
            config.contact.relay_url.as_deref(),
            Some("https://relay.example.com/send")
        );
        assert_eq!(config.contact.simulated_delay_ms, 1500);
        assert_eq!(config.typing.type_tick_ms, 80);
        assert_eq!(config.typing.hold_full_ms, 2000);
        assert_eq!(config.site.storage_prefix, "portfolio");
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(SiteConfig::from_toml("[carousel]\ninterval_ms = \"soon\"").is_err());
    }

    #[test]
    fn shipped_webapp_config_matches_defaults() {
        let doc = include_str!("../../webapp/portfolio.toml");
        assert_eq!(SiteConfig::from_toml(doc).unwrap(), SiteConfig::default());
    }
}
