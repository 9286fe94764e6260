use std::fmt;

// entrance animation presets
//
// these are the declarative descriptors that every visual component attaches to its root
// element.  a descriptor is rendered into a handful of css custom properties plus a single
// `animation` shorthand, and the stylesheet carries one keyframe rule (`pf-enter`) that
// interpolates from those properties to the resting position
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    CubicBezier(f32, f32, f32, f32),
    EaseOut,
    // css has no native spring, so stiffness and damping are folded into an overshooting
    // bezier when rendered
    Spring { stiffness: f32, damping: f32 },
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Easing::CubicBezier(a, b, c, d) => write!(f, "cubic-bezier({a}, {b}, {c}, {d})"),
            Easing::EaseOut => write!(f, "ease-out"),
            Easing::Spring { stiffness, damping } => {
                let overshoot = (stiffness / (damping + stiffness)).clamp(0.0, 1.0) * 0.6 + 1.0;
                write!(f, "cubic-bezier(0.34, {overshoot:.2}, 0.64, 1)")
            }
        }
    }
}

// a css length used for the starting offset
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Offset {
    Px(f32),
    Percent(f32),
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Offset::Px(v) => write!(f, "{v}px"),
            Offset::Percent(v) => write!(f, "{v}%"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub from_x: Offset,
    pub from_y: Offset,
    pub from_opacity: f32,
    pub from_scale: f32,
    pub delay: f32,
    pub duration: f32,
    pub easing: Easing,
}

const DEFAULT_EASE: Easing = Easing::CubicBezier(0.22, 1.0, 0.36, 1.0);

const DEFAULT_SPRING: Easing = Easing::Spring {
    stiffness: 100.0,
    damping: 10.0,
};

impl Transition {
    // inline style for the animated element; the keyframe reads the custom properties
    pub fn style(&self) -> String {
        format!(
            "--from-x: {}; --from-y: {}; --from-opacity: {}; --from-scale: {}; animation: pf-enter {}s {} {}s both;",
            self.from_x,
            self.from_y,
            self.from_opacity,
            self.from_scale,
            self.duration,
            self.easing,
            self.delay,
        )
    }
}

// the element travels in `direction`, so it starts offset the opposite way
fn offsets(direction: Direction, magnitude: Offset) -> (Offset, Offset) {
    let neg = |o: Offset| match o {
        Offset::Px(v) => Offset::Px(-v),
        Offset::Percent(v) => Offset::Percent(-v),
    };
    let zero = Offset::Px(0.0);

    match direction {
        Direction::Up => (zero, magnitude),
        Direction::Down => (zero, neg(magnitude)),
        Direction::Left => (magnitude, zero),
        Direction::Right => (neg(magnitude), zero),
    }
}

pub fn fade_in(direction: Direction, delay: f32) -> Transition {
    let (from_x, from_y) = offsets(direction, Offset::Px(40.0));
    Transition {
        from_x,
        from_y,
        from_opacity: 0.0,
        from_scale: 1.0,
        delay,
        duration: 0.5,
        easing: DEFAULT_EASE,
    }
}

pub fn text_variant(delay: f32) -> Transition {
    Transition {
        from_x: Offset::Px(0.0),
        from_y: Offset::Px(50.0),
        from_opacity: 0.0,
        from_scale: 1.0,
        delay,
        duration: 1.25,
        easing: DEFAULT_SPRING,
    }
}

// slide_in names the edge the panel enters from horizontally (left starts at -100%) but
// keeps the travel sense vertically (up starts below at +100%); it does not fade
pub fn slide_in(direction: Direction, easing: Easing, delay: f32, duration: f32) -> Transition {
    let zero = Offset::Px(0.0);
    let (from_x, from_y) = match direction {
        Direction::Left => (Offset::Percent(-100.0), zero),
        Direction::Right => (Offset::Percent(100.0), zero),
        Direction::Up => (zero, Offset::Percent(100.0)),
        Direction::Down => (zero, Offset::Percent(-100.0)),
    };
    Transition {
        from_x,
        from_y,
        from_opacity: 1.0,
        from_scale: 1.0,
        delay,
        duration,
        easing,
    }
}

pub fn zoom_in(delay: f32, duration: f32) -> Transition {
    Transition {
        from_x: Offset::Px(0.0),
        from_y: Offset::Px(0.0),
        from_opacity: 0.0,
        from_scale: 0.0,
        delay,
        duration,
        easing: Easing::EaseOut,
    }
}

pub fn nav_reveal() -> Transition {
    Transition {
        from_x: Offset::Px(0.0),
        from_y: Offset::Px(-50.0),
        from_opacity: 0.0,
        from_scale: 1.0,
        delay: 0.1,
        duration: 0.8,
        easing: Easing::Spring {
            stiffness: 80.0,
            damping: 10.0,
        },
    }
}

pub const STAGGER_STEP: f32 = 0.1;
pub const STAGGER_BASE: f32 = 0.3;

// delay for the index-th child of a staggered container
pub fn stagger(index: usize, step: f32, base: f32) -> f32 {
    base + index as f32 * step
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_in_starts_opposite_to_travel() {
        let up = fade_in(Direction::Up, 0.0);
        assert_eq!(up.from_y, Offset::Px(40.0));
        assert_eq!(up.from_x, Offset::Px(0.0));

        let right = fade_in(Direction::Right, 0.0);
        assert_eq!(right.from_x, Offset::Px(-40.0));

        let down = fade_in(Direction::Down, 0.2);
        assert_eq!(down.from_y, Offset::Px(-40.0));
        assert_eq!(down.delay, 0.2);
    }

    #[test]
    fn slide_in_uses_full_width_without_fading() {
        let t = slide_in(Direction::Left, Easing::EaseOut, 0.0, 0.5);
        assert_eq!(t.from_x, Offset::Percent(-100.0));
        assert_eq!(t.from_y, Offset::Px(0.0));
        assert_eq!(t.from_opacity, 1.0);
    }

    #[test]
    fn slide_in_enters_from_the_named_edge() {
        let right = slide_in(Direction::Right, Easing::EaseOut, 0.0, 0.5);
        assert_eq!(right.from_x, Offset::Percent(100.0));

        let up = slide_in(Direction::Up, Easing::EaseOut, 0.0, 0.5);
        assert_eq!(up.from_y, Offset::Percent(100.0));
        assert_eq!(up.from_x, Offset::Px(0.0));

        let down = slide_in(Direction::Down, Easing::EaseOut, 0.0, 0.5);
        assert_eq!(down.from_y, Offset::Percent(-100.0));
    }

    #[test]
    fn style_carries_delay_and_easing() {
        let style = fade_in(Direction::Up, 0.5).style();
        assert!(style.contains("--from-y: 40px;"));
        assert!(style.contains("animation: pf-enter 0.5s cubic-bezier(0.22, 1, 0.36, 1) 0.5s both;"));
    }

    #[test]
    fn zoom_starts_collapsed() {
        let t = zoom_in(0.1, 0.3);
        assert_eq!(t.from_scale, 0.0);
        assert!(t.style().contains("ease-out"));
    }

    #[test]
    fn stagger_offsets_children() {
        assert_eq!(stagger(0, STAGGER_STEP, STAGGER_BASE), 0.3);
        assert!((stagger(3, STAGGER_STEP, STAGGER_BASE) - 0.6).abs() < 1e-6);
    }
}
