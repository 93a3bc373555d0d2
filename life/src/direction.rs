use std::fmt::Debug;
use std::iter::FusedIterator;

use crate::Pos;

/// One of the eight cells surrounding a position
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}
impl Direction {
    /// clockwise starting from north
    pub const ALL: [Direction; 8] = [
        Self::N,
        Self::NE,
        Self::E,
        Self::SE,
        Self::S,
        Self::SW,
        Self::W,
        Self::NW,
    ];

    /// unit offset, north is negative y
    pub fn offset(self) -> Pos {
        match self {
            Self::N => Pos::new(0, -1),
            Self::NE => Pos::new(1, -1),
            Self::E => Pos::new(1, 0),
            Self::SE => Pos::new(1, 1),
            Self::S => Pos::new(0, 1),
            Self::SW => Pos::new(-1, 1),
            Self::W => Pos::new(-1, 0),
            Self::NW => Pos::new(-1, -1),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::N => Self::S,
            Self::NE => Self::SW,
            Self::E => Self::W,
            Self::SE => Self::NW,
            Self::S => Self::N,
            Self::SW => Self::NE,
            Self::W => Self::E,
            Self::NW => Self::SE,
        }
    }

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// The subset of directions holding a living neighbor
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NeighborSet {
    bits: u8,
}
impl NeighborSet {
    pub fn empty() -> Self {
        Self { bits: 0 }
    }
    pub fn insert(&mut self, dir: Direction) {
        self.bits |= dir.bit();
    }
    pub fn contains(self, dir: Direction) -> bool {
        self.bits & dir.bit() != 0
    }
    #[allow(clippy::cast_possible_truncation)] // at most 8
    pub fn len(self) -> u8 {
        self.bits.count_ones() as u8
    }
    pub fn is_empty(self) -> bool {
        self.bits == 0
    }
    pub fn iter(self) -> NeighborSetIter {
        NeighborSetIter { set: self, next: 0 }
    }
}
impl FromIterator<Direction> for NeighborSet {
    fn from_iter<T: IntoIterator<Item = Direction>>(iter: T) -> Self {
        let mut set = Self::empty();
        iter.into_iter().for_each(|dir| set.insert(dir));
        set
    }
}
impl IntoIterator for NeighborSet {
    type Item = Direction;
    type IntoIter = NeighborSetIter;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
impl Debug for NeighborSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

pub struct NeighborSetIter {
    set: NeighborSet,
    next: usize,
}
impl Iterator for NeighborSetIter {
    type Item = Direction;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&dir) = Direction::ALL.get(self.next) {
            self.next += 1;
            if self.set.contains(dir) {
                return Some(dir);
            }
        }
        None
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.len();
        (size, Some(size))
    }
}
impl FusedIterator for NeighborSetIter {}
impl ExactSizeIterator for NeighborSetIter {
    fn len(&self) -> usize {
        Direction::ALL[self.next.min(8)..]
            .iter()
            .filter(|&&dir| self.set.contains(dir))
            .count()
    }
}
