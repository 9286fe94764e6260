pub mod relay;
pub mod storage;
pub mod style;
pub mod task;
pub mod viewport;

use dioxus::prelude::*;

use portfolio::config::SiteConfig;

// site-wide context
//
// the config is parsed once in App and provided as context; components read it through
// this helper instead of threading it through props
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>()
}
