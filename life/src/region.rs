use crate::{Pos, Rect};

/// A set of positions described by a membership test
pub trait Region {
    fn contains(&self, pos: Pos) -> bool;
}
impl<F> Region for F
where
    F: Fn(Pos) -> bool,
{
    fn contains(&self, pos: Pos) -> bool {
        self(pos)
    }
}
impl Region for Rect {
    fn contains(&self, pos: Pos) -> bool {
        Rect::contains(self, pos)
    }
}

/// Positions within `radius` of `center`, boundary included
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle {
    pub center: Pos,
    pub radius: u32,
}
impl Circle {
    pub fn new(center: Pos, radius: u32) -> Self {
        Self { center, radius }
    }
    pub fn bounding_rect(&self) -> Rect {
        let r = i64::from(self.radius);
        Rect::min_max(
            self.center - Pos::new(r, r),
            self.center + Pos::new(r, r),
        )
    }
}
impl Region for Circle {
    fn contains(&self, pos: Pos) -> bool {
        let r = i128::from(self.radius);
        pos.distance_squared(self.center) <= r * r
    }
}

/// Positions strictly further than `inner` and at most `outer` from `center`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Annulus {
    pub center: Pos,
    pub inner: u32,
    pub outer: u32,
}
impl Annulus {
    pub fn new(center: Pos, inner: u32, outer: u32) -> Self {
        debug_assert!(inner <= outer, "inner radius {inner} exceeds outer {outer}");
        Self {
            center,
            inner,
            outer,
        }
    }
    pub fn bounding_rect(&self) -> Rect {
        Circle::new(self.center, self.outer).bounding_rect()
    }
}
impl Region for Annulus {
    fn contains(&self, pos: Pos) -> bool {
        let d = pos.distance_squared(self.center);
        let inner = i128::from(self.inner);
        let outer = i128::from(self.outer);
        inner * inner < d && d <= outer * outer
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn circle() {
        let c = Circle::new(Pos::new(2, 2), 2);
        assert!(c.contains(Pos::new(2, 2)));
        assert!(c.contains(Pos::new(4, 2)));
        assert!(c.contains(Pos::new(3, 3)));
        assert!(!c.contains(Pos::new(4, 4)));
        assert!(!c.contains(Pos::new(5, 2)));
        let inside = c.bounding_rect().positions().filter(|&p| c.contains(p)).count();
        assert_eq!(inside, 13);
    }

    #[test]
    fn annulus_excludes_the_hole() {
        let a = Annulus::new(Pos::ORIGIN, 1, 2);
        assert!(!a.contains(Pos::ORIGIN));
        assert!(!a.contains(Pos::new(1, 0)));
        assert!(a.contains(Pos::new(1, 1)));
        assert!(a.contains(Pos::new(0, -2)));
        assert!(!a.contains(Pos::new(2, 2)));
    }

    #[test]
    fn closures_and_rects() {
        let diagonal = |p: Pos| p.x == p.y;
        assert!(diagonal.contains(Pos::new(3, 3)));
        assert!(!diagonal.contains(Pos::new(3, 4)));
        let rect = Rect::from_size(2, 2);
        assert!(Region::contains(&rect, Pos::new(1, 1)));
        assert!(!Region::contains(&rect, Pos::new(2, 1)));
    }
}
