// testimonial carousel
//
// the index is always in [0, len) and wraps in both directions.  an empty carousel is
// allowed (it simply renders nothing) and every transition on it is a no-op
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
    paused: bool,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Carousel {
            index: 0,
            len,
            paused: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn previous(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    // jump straight to an indicator; out of range requests are rejected
    pub fn go_to(&mut self, index: usize) -> bool {
        if index < self.len {
            self.index = index;
            true
        } else {
            false
        }
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    // called by the auto-advance timer
    pub fn tick(&mut self) {
        if !self.paused {
            self.next();
        }
    }

    // horizontal translation of the track, in percent of the viewport width
    pub fn offset_percent(&self) -> usize {
        self.index * 100
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn previous_from_first_wraps_to_last() {
        let mut c = Carousel::new(4);
        c.previous();
        assert_eq!(c.index(), 3);
    }

    #[test]
    fn next_len_times_is_identity() {
        for len in 1..6 {
            for start in 0..len {
                let mut c = Carousel::new(len);
                assert!(c.go_to(start));
                for _ in 0..len {
                    c.next();
                }
                assert_eq!(c.index(), start);
            }
        }
    }

    #[test]
    fn previous_inverts_next() {
        let mut c = Carousel::new(5);
        for start in 0..5 {
            c.go_to(start);
            c.next();
            c.previous();
            assert_eq!(c.index(), start);
            c.previous();
            c.next();
            assert_eq!(c.index(), start);
        }
    }

    #[test]
    fn go_to_rejects_out_of_range() {
        let mut c = Carousel::new(3);
        c.next();
        assert!(!c.go_to(3));
        assert_eq!(c.index(), 1);
        assert!(c.go_to(2));
        assert_eq!(c.offset_percent(), 200);
    }

    #[test]
    fn paused_carousel_ignores_ticks() {
        let mut c = Carousel::new(4);
        c.pause();
        c.tick();
        assert_eq!(c.index(), 0);

        // manual controls still work while hovered
        c.next();
        assert_eq!(c.index(), 1);

        c.resume();
        c.tick();
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut c = Carousel::new(0);
        c.next();
        c.previous();
        c.tick();
        assert!(!c.go_to(0));
        assert_eq!(c.index(), 0);
        assert!(c.is_empty());
    }
}
