use std::collections::HashSet;
use std::fmt::Debug;
use std::rc::Rc;

use crate::{CellState, Pos, Rect};

type CellFn = dyn Fn(Pos) -> CellState;

/// The state of every cell on the unbounded grid
///
/// A board is a pure function from position to state. Boards are never
/// modified, every edit layers a new board over the previous one and the
/// previous one stays valid. Cloning only bumps a reference count.
#[derive(Clone)]
pub struct Board(Rc<CellFn>);

impl Board {
    pub fn empty() -> Self {
        Self::from_fn(|_| CellState::Dead)
    }
    /// `f` must return the same state every time it is called with the same position
    pub fn from_fn(f: impl Fn(Pos) -> CellState + 'static) -> Self {
        Self(Rc::new(f))
    }
    /// same as folding `birth` over the empty board, but queried in constant time
    pub fn from_points(points: impl IntoIterator<Item = Pos>) -> Self {
        let living: HashSet<Pos> = points.into_iter().collect();
        Self::from_fn(move |pos| CellState::from(living.contains(&pos)))
    }

    pub fn get(&self, pos: Pos) -> CellState {
        (self.0)(pos)
    }
    pub fn is_alive(&self, pos: Pos) -> bool {
        self.get(pos).is_alive()
    }

    pub fn set(&self, at: Pos, state: CellState) -> Self {
        let prev = self.clone();
        Self::from_fn(move |pos| if pos == at { state } else { prev.get(pos) })
    }
    pub fn birth(&self, at: Pos) -> Self {
        self.set(at, CellState::Living)
    }
    pub fn death(&self, at: Pos) -> Self {
        self.set(at, CellState::Dead)
    }

    /// living cells inside `rect`, row by row
    pub fn living_in(&self, rect: Rect) -> Vec<Pos> {
        rect.positions().filter(|&pos| self.is_alive(pos)).collect()
    }
    pub fn population(&self, rect: Rect) -> usize {
        rect.positions().filter(|&pos| self.is_alive(pos)).count()
    }
    pub fn eq_within(&self, other: &Board, rect: Rect) -> bool {
        rect.positions().all(|pos| self.get(pos) == other.get(pos))
    }
}
impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}
impl FromIterator<Pos> for Board {
    fn from_iter<T: IntoIterator<Item = Pos>>(iter: T) -> Self {
        Self::from_points(iter)
    }
}
impl Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Board( {:p} )", Rc::as_ptr(&self.0).cast::<()>())
    }
}
