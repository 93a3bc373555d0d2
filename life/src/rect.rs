use std::ops::RangeInclusive;

use itertools::iproduct;

use crate::Pos;

/// An inclusive window of positions between a north west and a south east corner
///
/// A rect whose south east corner lies north or west of its north west corner
/// contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    nw: Pos,
    se: Pos,
}
impl Rect {
    /// corners are taken as given, so `min` past `max` is empty
    pub const fn min_max(min: Pos, max: Pos) -> Self {
        Self { nw: min, se: max }
    }
    /// the rect spanned by two opposite corners, in any order
    pub fn new(a: Pos, b: Pos) -> Self {
        Self::min_max(
            Pos::new(a.x.min(b.x), a.y.min(b.y)),
            Pos::new(a.x.max(b.x), a.y.max(b.y)),
        )
    }
    /// `width` columns and `height` rows with the north west corner at the origin
    ///
    /// a zero width or height gives an empty rect
    pub fn from_size(width: u32, height: u32) -> Self {
        Self::min_max(
            Pos::ORIGIN,
            Pos::new(i64::from(width) - 1, i64::from(height) - 1),
        )
    }
    /// smallest rect holding every given position, empty without any
    pub fn bounding(positions: impl IntoIterator<Item = Pos>) -> Self {
        let empty = Self::min_max(Pos::new(i64::MAX, i64::MAX), Pos::new(i64::MIN, i64::MIN));
        positions.into_iter().fold(empty, |rect, pos| {
            Self::min_max(
                Pos::new(rect.nw.x.min(pos.x), rect.nw.y.min(pos.y)),
                Pos::new(rect.se.x.max(pos.x), rect.se.y.max(pos.y)),
            )
        })
    }

    pub fn is_empty(&self) -> bool {
        self.se.x < self.nw.x || self.se.y < self.nw.y
    }
    pub fn contains(&self, pos: Pos) -> bool {
        self.columns().contains(&pos.x) && self.rows().contains(&pos.y)
    }

    pub fn width(&self) -> u64 {
        span(self.nw.x, self.se.x)
    }
    pub fn height(&self) -> u64 {
        span(self.nw.y, self.se.y)
    }
    pub fn area(&self) -> u64 {
        self.width().saturating_mul(self.height())
    }

    pub fn north(&self) -> i64 {
        self.nw.y
    }
    pub fn south(&self) -> i64 {
        self.se.y
    }
    pub fn west(&self) -> i64 {
        self.nw.x
    }
    pub fn east(&self) -> i64 {
        self.se.x
    }
    pub fn nw(&self) -> Pos {
        self.nw
    }
    pub fn se(&self) -> Pos {
        self.se
    }

    /// every position, row by row from the north west corner
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        iproduct!(self.rows(), self.columns()).map(|(y, x)| Pos::new(x, y))
    }
    /// y of every row, north to south
    pub fn rows(&self) -> RangeInclusive<i64> {
        if self.is_empty() {
            1..=0
        } else {
            self.nw.y..=self.se.y
        }
    }
    /// x of every column, west to east
    pub fn columns(&self) -> RangeInclusive<i64> {
        if self.is_empty() {
            1..=0
        } else {
            self.nw.x..=self.se.x
        }
    }
}

fn span(min: i64, max: i64) -> u64 {
    if max < min {
        0
    } else {
        max.abs_diff(min) + 1
    }
}
