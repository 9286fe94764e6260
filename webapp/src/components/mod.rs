pub mod animated_button;
pub mod footer;
pub mod layout;
pub mod navigation;
pub mod section_heading;
pub mod theme_toggle;
