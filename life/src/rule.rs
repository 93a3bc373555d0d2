use std::fmt::{Debug, Display};

use crate::{CellDifference, CellState};

/// Decides what happens to a cell given its state and how many of its neighbors are alive
///
/// Implementations must be pure: the answer may only depend on the two arguments.
pub trait StateChangeRule {
    fn change(&self, state: CellState, living_neighbors: u8) -> CellDifference;

    fn next_state(&self, state: CellState, living_neighbors: u8) -> CellState {
        state.apply(self.change(state, living_neighbors))
    }
}
impl<F> StateChangeRule for F
where
    F: Fn(CellState, u8) -> CellDifference,
{
    fn change(&self, state: CellState, living_neighbors: u8) -> CellDifference {
        self(state, living_neighbors)
    }
}

/// A set of neighbor counts in `0..=8`
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NeighborCounts {
    bits: u16,
}
impl NeighborCounts {
    pub const MAX: u8 = 8;

    pub const fn empty() -> Self {
        Self { bits: 0 }
    }
    pub const fn from_bits(bits: u16) -> Self {
        Self {
            bits: bits & 0x1ff,
        }
    }
    pub fn insert(&mut self, count: u8) {
        assert!(count <= Self::MAX, "neighbor count {count} out of range");
        self.bits |= 1 << count;
    }
    pub fn contains(self, count: u8) -> bool {
        count <= Self::MAX && self.bits & (1 << count) != 0
    }
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..=Self::MAX).filter(move |&count| self.contains(count))
    }
}
impl FromIterator<u8> for NeighborCounts {
    fn from_iter<T: IntoIterator<Item = u8>>(iter: T) -> Self {
        let mut counts = Self::empty();
        iter.into_iter().for_each(|count| counts.insert(count));
        counts
    }
}
impl Debug for NeighborCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
impl Display for NeighborCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.iter().try_for_each(|count| write!(f, "{count}"))
    }
}

/// Outer totalistic rule in birth/survive form
///
/// A dead cell is born when its living neighbor count is in `birth`.
/// A living cell dies when its living neighbor count is not in `survive`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Rule {
    pub birth: NeighborCounts,
    pub survive: NeighborCounts,
}
impl Rule {
    pub fn new(birth: NeighborCounts, survive: NeighborCounts) -> Self {
        Self { birth, survive }
    }
    /// B3/S23
    pub const fn conway() -> Self {
        Self {
            birth: NeighborCounts::from_bits(1 << 3),
            survive: NeighborCounts::from_bits(1 << 2 | 1 << 3),
        }
    }
}
impl Default for Rule {
    fn default() -> Self {
        Self::conway()
    }
}
impl StateChangeRule for Rule {
    fn change(&self, state: CellState, living_neighbors: u8) -> CellDifference {
        debug_assert!(living_neighbors <= NeighborCounts::MAX);
        match state {
            CellState::Dead if self.birth.contains(living_neighbors) => CellDifference::Birth,
            CellState::Living if !self.survive.contains(living_neighbors) => {
                CellDifference::Death
            }
            _ => CellDifference::NoChange,
        }
    }
}
impl Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "B{}/S{}", self.birth, self.survive)
    }
}
