//! Coordinates on the unbounded grid

use std::fmt::{Debug, Display};
use std::ops::{Add, Neg, Sub};

use crate::Direction;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
/// x increases to the east
/// y increases to the south
pub struct Pos {
    pub x: i64,
    pub y: i64,
}
impl Pos {
    pub const ORIGIN: Self = Self::new(0, 0);

    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
    /// the neighboring position one cell away in `dir`
    pub fn step(self, dir: Direction) -> Self {
        self + dir.offset()
    }
    pub fn neighbors(self) -> impl Iterator<Item = Pos> {
        Direction::ALL.into_iter().map(move |dir| self.step(dir))
    }
    /// squared euclidean distance, used by the round regions
    pub fn distance_squared(self, other: Pos) -> i128 {
        let dx = i128::from(self.x) - i128::from(other.x);
        let dy = i128::from(self.y) - i128::from(other.y);
        dx * dx + dy * dy
    }
}
impl From<(i64, i64)> for Pos {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}
impl Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}
impl Add for Pos {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
impl Sub for Pos {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
impl Neg for Pos {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn arithmetic() {
        let a = Pos::new(3, -2);
        let b = Pos::new(-1, 5);
        assert_eq!(a + b, Pos::new(2, 3));
        assert_eq!(a - b, Pos::new(4, -7));
        assert_eq!(-a, Pos::new(-3, 2));
        assert_eq!(a + -a, Pos::ORIGIN);
    }

    #[test]
    fn neighbors_are_distinct_and_adjacent() {
        let center = Pos::new(10, -4);
        let neighbors: Vec<Pos> = center.neighbors().collect();
        assert_eq!(neighbors.len(), 8);
        for (i, a) in neighbors.iter().enumerate() {
            assert_eq!((a.x - center.x).abs().max((a.y - center.y).abs()), 1);
            assert!(!neighbors[i + 1..].contains(a));
        }
    }

    #[test]
    fn display() {
        assert_eq!(Pos::new(-3, 7).to_string(), "-3,7");
    }
}
