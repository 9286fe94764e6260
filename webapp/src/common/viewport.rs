use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

use portfolio::nav::Viewport;

// the live document
//
// anchors that are not in the document are reported back as missing rather than treated
// as errors, since sections may legitimately be absent from a trimmed build
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DocumentViewport;

impl Viewport for DocumentViewport {
    fn scroll_to_anchor(&self, anchor: &str) -> bool {
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(anchor));

        let Some(element) = element else {
            return false;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    fn scroll_to_top(&self) {
        if let Some(window) = web_sys::window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}

pub fn scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}
