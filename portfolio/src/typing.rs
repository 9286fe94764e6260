use std::time::Duration;

use crate::config::TypingConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingTimings {
    pub initial: Duration,
    pub type_tick: Duration,
    pub delete_tick: Duration,
    pub hold_full: Duration,
    pub hold_empty: Duration,
}

impl Default for TypingTimings {
    fn default() -> Self {
        TypingTimings::from(&TypingConfig::default())
    }
}

impl From<&TypingConfig> for TypingTimings {
    fn from(config: &TypingConfig) -> Self {
        let ms = |v: u32| Duration::from_millis(u64::from(v));
        TypingTimings {
            initial: ms(config.initial_ms),
            type_tick: ms(config.type_tick_ms),
            delete_tick: ms(config.delete_tick_ms),
            hold_full: ms(config.hold_full_ms),
            hold_empty: ms(config.hold_empty_ms),
        }
    }
}

// hero typing effect
//
// each step() types or deletes one character and returns how long to wait before the
// next step.  lengths are counted in chars so titles with multibyte text slice cleanly
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    titles: Vec<String>,
    timings: TypingTimings,
    index: usize,
    shown: usize,
    deleting: bool,
}

impl Typewriter {
    pub fn new<S: Into<String>>(titles: impl IntoIterator<Item = S>, timings: TypingTimings) -> Self {
        Typewriter {
            titles: titles.into_iter().map(Into::into).collect(),
            timings,
            index: 0,
            shown: 0,
            deleting: false,
        }
    }

    pub fn title_index(&self) -> usize {
        self.index
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn text(&self) -> &str {
        let Some(title) = self.titles.get(self.index) else {
            return "";
        };
        match title.char_indices().nth(self.shown) {
            Some((end, _)) => &title[..end],
            None => title,
        }
    }

    pub fn step(&mut self) -> Duration {
        let Some(title) = self.titles.get(self.index) else {
            return self.timings.hold_empty;
        };
        let full = title.chars().count();

        if self.deleting {
            self.shown = self.shown.saturating_sub(1);
        } else {
            self.shown = (self.shown + 1).min(full);
        }

        if !self.deleting && self.shown == full {
            self.deleting = true;
            self.timings.hold_full
        } else if self.deleting && self.shown == 0 {
            self.deleting = false;
            self.index = (self.index + 1) % self.titles.len();
            self.timings.hold_empty
        } else if self.deleting {
            self.timings.delete_tick
        } else {
            self.timings.type_tick
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn types_holds_deletes_and_advances() {
        let mut tw = Typewriter::new(["ab", "c"], TypingTimings::default());
        assert_eq!(tw.text(), "");

        assert_eq!(tw.step(), ms(100));
        assert_eq!(tw.text(), "a");

        assert_eq!(tw.step(), ms(2000));
        assert_eq!(tw.text(), "ab");
        assert!(tw.is_deleting());

        assert_eq!(tw.step(), ms(50));
        assert_eq!(tw.text(), "a");

        assert_eq!(tw.step(), ms(500));
        assert_eq!(tw.text(), "");
        assert_eq!(tw.title_index(), 1);

        assert_eq!(tw.step(), ms(2000));
        assert_eq!(tw.text(), "c");
    }

    #[test]
    fn wraps_to_first_title() {
        let mut tw = Typewriter::new(["x", "y"], TypingTimings::default());
        // type + delete each single-char title
        for _ in 0..4 {
            tw.step();
        }
        assert_eq!(tw.title_index(), 0);
        assert!(!tw.is_deleting());
    }

    #[test]
    fn multibyte_titles_slice_on_char_boundaries() {
        let mut tw = Typewriter::new(["éé"], TypingTimings::default());
        tw.step();
        assert_eq!(tw.text(), "é");
        tw.step();
        assert_eq!(tw.text(), "éé");
    }

    #[test]
    fn empty_title_list_is_inert() {
        let mut tw = Typewriter::new(Vec::<String>::new(), TypingTimings::default());
        assert_eq!(tw.step(), ms(500));
        assert_eq!(tw.text(), "");
    }

    #[test]
    fn timings_follow_config() {
        let config = TypingConfig {
            type_tick_ms: 80,
            ..TypingConfig::default()
        };
        let timings = TypingTimings::from(&config);
        assert_eq!(timings.type_tick, ms(80));
        assert_eq!(timings.initial, ms(1000));
    }
}
