use tracing::debug;

// the rendering environment, as far as navigation is concerned
//
// the webapp implements this over the document; scroll_to_anchor() reports whether an
// element with that id existed, and must never fail otherwise
pub trait Viewport {
    fn scroll_to_anchor(&self, anchor: &str) -> bool;

    fn scroll_to_top(&self);
}

// navigation bar state
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavState {
    scrolled: bool,
    menu_open: bool,
    threshold: f64,
}

impl NavState {
    pub fn new(threshold: f64) -> Self {
        NavState {
            scrolled: false,
            menu_open: false,
            threshold,
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    // returns true if the visual style changed, so callers can skip redundant writes
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        let scrolled = offset > self.threshold;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    // activating an entry always closes the mobile menu, whether or not the target exists
    pub fn navigate(&mut self, anchor: &str, viewport: &impl Viewport) -> bool {
        self.menu_open = false;

        let anchor = anchor.trim_start_matches('#');
        let found = viewport.scroll_to_anchor(anchor);
        if !found {
            debug!(anchor, "navigation target not found");
        }
        found
    }
}

impl Default for NavState {
    fn default() -> Self {
        NavState::new(10.0)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    struct FakeViewport {
        anchors: Vec<&'static str>,
        scrolled_to: RefCell<Vec<String>>,
    }

    impl FakeViewport {
        fn new(anchors: Vec<&'static str>) -> Self {
            FakeViewport {
                anchors,
                scrolled_to: RefCell::new(Vec::new()),
            }
        }
    }

    impl Viewport for FakeViewport {
        fn scroll_to_anchor(&self, anchor: &str) -> bool {
            if self.anchors.contains(&anchor) {
                self.scrolled_to.borrow_mut().push(anchor.to_owned());
                true
            } else {
                false
            }
        }

        fn scroll_to_top(&self) {
            self.scrolled_to.borrow_mut().push(String::from("top"));
        }
    }

    #[test]
    fn style_switches_past_threshold() {
        let mut nav = NavState::default();
        assert!(!nav.on_scroll(10.0));
        assert!(!nav.is_scrolled());
        assert!(nav.on_scroll(10.5));
        assert!(nav.is_scrolled());
        assert!(!nav.on_scroll(400.0));
        assert!(nav.on_scroll(0.0));
        assert!(!nav.is_scrolled());
    }

    #[test]
    fn navigating_closes_open_menu_and_scrolls() {
        let viewport = FakeViewport::new(vec!["about", "contact"]);
        let mut nav = NavState::default();
        nav.toggle_menu();
        assert!(nav.is_menu_open());

        assert!(nav.navigate("#contact", &viewport));
        assert!(!nav.is_menu_open());
        assert_eq!(viewport.scrolled_to.borrow().as_slice(), &["contact"]);
    }

    #[test]
    fn missing_target_is_a_no_op() {
        let viewport = FakeViewport::new(vec!["about"]);
        let mut nav = NavState::default();
        nav.toggle_menu();

        assert!(!nav.navigate("writeups", &viewport));
        assert!(!nav.is_menu_open());
        assert!(viewport.scrolled_to.borrow().is_empty());
    }

    #[test]
    fn toggling_menu_does_not_scroll() {
        let viewport = FakeViewport::new(vec!["about"]);
        let mut nav = NavState::default();
        nav.toggle_menu();
        nav.toggle_menu();
        assert!(!nav.is_menu_open());
        assert!(viewport.scrolled_to.borrow().is_empty());
    }
}
