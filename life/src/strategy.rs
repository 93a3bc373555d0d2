//! Ways of turning one generation into the next
//!
//! All strategies agree on every cell inside the window of a [`Materialized`]
//! strategy after a single step. They differ in how much they remember:
//! [`Recursive`] remembers nothing, [`Memoized`] shares one bounded cache of
//! recently queried cells between the boards it produces, and [`Materialized`] evaluates its whole window up
//! front.

use std::cell::{Cell, RefCell};
use std::num::NonZeroUsize;
use std::rc::Rc;

use either::Either;
use lru::LruCache;
use tracing::{trace, trace_span};

use crate::{Board, Boundary, CellState, ConfigError, Pos, Rect, StateChangeRule, StrategyKind};

pub trait AdvanceStrategy {
    fn advance(&self, board: &Board) -> Board;
    fn name(&self) -> &'static str;
}
impl<T> AdvanceStrategy for Box<T>
where
    T: AdvanceStrategy + ?Sized,
{
    fn advance(&self, board: &Board) -> Board {
        (**self).advance(board)
    }
    fn name(&self) -> &'static str {
        (**self).name()
    }
}
impl<L, R> AdvanceStrategy for Either<L, R>
where
    L: AdvanceStrategy,
    R: AdvanceStrategy,
{
    fn advance(&self, board: &Board) -> Board {
        match self {
            Either::Left(strategy) => strategy.advance(board),
            Either::Right(strategy) => strategy.advance(board),
        }
    }
    fn name(&self) -> &'static str {
        match self {
            Either::Left(strategy) => strategy.name(),
            Either::Right(strategy) => strategy.name(),
        }
    }
}

fn step_cell<R>(rule: &R, board: &Board, pos: Pos) -> CellState
where
    R: StateChangeRule + ?Sized,
{
    rule.next_state(board.get(pos), board.living_neighbors(pos))
}

/// Each query of the next board re-evaluates the previous board around it
///
/// Nothing is cached, so querying a cell `n` generations ahead costs `9^n`
/// queries of the starting board.
pub struct Recursive<R> {
    rule: Rc<R>,
}
impl<R> Recursive<R> {
    pub fn new(rule: R) -> Self {
        Self::from_shared(Rc::new(rule))
    }
    pub fn from_shared(rule: Rc<R>) -> Self {
        Self { rule }
    }
}
impl<R> AdvanceStrategy for Recursive<R>
where
    R: StateChangeRule + 'static,
{
    fn advance(&self, board: &Board) -> Board {
        let rule = Rc::clone(&self.rule);
        let prev = board.clone();
        Board::from_fn(move |pos| step_cell(&*rule, &prev, pos))
    }
    fn name(&self) -> &'static str {
        "recursive"
    }
}

/// Evaluates every cell of a `width`x`height` window at the origin into a buffer
///
/// Cells outside the window are answered according to the [`Boundary`].
pub struct Materialized<R> {
    rule: Rc<R>,
    width: u32,
    height: u32,
    boundary: Boundary,
}
impl<R> Materialized<R> {
    pub fn new(rule: R, width: u32, height: u32) -> Self {
        Self::from_shared(Rc::new(rule), width, height)
    }
    /// a zero `width` or `height` leaves nothing to store, every cell reads as dead
    pub fn from_shared(rule: Rc<R>, width: u32, height: u32) -> Self {
        Self {
            rule,
            width,
            height,
            boundary: Boundary::default(),
        }
    }
    pub fn with_boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = boundary;
        self
    }
    pub fn window(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }
}
impl<R> AdvanceStrategy for Materialized<R>
where
    R: StateChangeRule + 'static,
{
    fn advance(&self, board: &Board) -> Board {
        let window = self.window();
        let _span = trace_span!("materialize", width = self.width, height = self.height).entered();
        let cells: Vec<CellState> = window
            .positions()
            .map(|pos| step_cell(&*self.rule, board, pos))
            .collect();
        if cells.is_empty() {
            return Board::empty();
        }
        let buffer = Buffer {
            cells,
            width: i128::from(self.width),
        };
        match self.boundary {
            Boundary::Dead => Board::from_fn(move |pos| {
                if window.contains(pos) {
                    buffer.get(pos)
                } else {
                    CellState::Dead
                }
            }),
            Boundary::Wrap => Board::from_fn(move |pos| buffer.get(pos)),
        }
    }
    fn name(&self) -> &'static str {
        "array"
    }
}

struct Buffer {
    cells: Vec<CellState>,
    width: i128,
}
impl Buffer {
    /// row-major index, positions past the end fold back onto the start
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // rem_euclid is in 0..len
    fn get(&self, pos: Pos) -> CellState {
        let len = self.cells.len() as i128;
        let index = (i128::from(pos.y) * self.width + i128::from(pos.x)).rem_euclid(len);
        self.cells[index as usize]
    }
}

/// Like [`Recursive`], but remembers recently queried cells of the boards it produced
///
/// All boards produced by one strategy share a single bounded cache keyed by
/// board and position, so memory stays the same however many generations
/// are produced.
pub struct Memoized<R> {
    rule: Rc<R>,
    cache: Rc<RefCell<StepCache>>,
    next_board: Cell<u64>,
}

struct StepCache {
    lru: LruCache<(u64, Pos), CellState>,
    hit: u64,
    miss: u64,
}
impl StepCache {
    fn new(capacity: NonZeroUsize) -> Self {
        Self {
            lru: LruCache::new(capacity),
            hit: 0,
            miss: 0,
        }
    }
}

impl<R> Memoized<R> {
    pub const DEFAULT_CAPACITY: usize = 1 << 20;

    pub fn new(rule: R) -> Self {
        Self::from_shared(Rc::new(rule))
    }
    pub fn from_shared(rule: Rc<R>) -> Self {
        let capacity = NonZeroUsize::new(Self::DEFAULT_CAPACITY).unwrap_or(NonZeroUsize::MIN);
        Self {
            rule,
            cache: Rc::new(RefCell::new(StepCache::new(capacity))),
            next_board: Cell::new(0),
        }
    }
    /// number of cells remembered across all produced boards
    pub fn with_capacity(mut self, capacity: NonZeroUsize) -> Self {
        self.cache = Rc::new(RefCell::new(StepCache::new(capacity)));
        self
    }
    /// cells currently remembered, never more than the capacity
    pub fn cached_cells(&self) -> usize {
        self.cache.borrow().lru.len()
    }
}
impl<R> AdvanceStrategy for Memoized<R>
where
    R: StateChangeRule + 'static,
{
    fn advance(&self, board: &Board) -> Board {
        let rule = Rc::clone(&self.rule);
        let cache = Rc::clone(&self.cache);
        let prev = board.clone();
        let id = self.next_board.get();
        self.next_board.set(id + 1);
        {
            let mut cache = self.cache.borrow_mut();
            trace!(board = id, hit = cache.hit, miss = cache.miss, "step cache");
            cache.hit = 0;
            cache.miss = 0;
        }
        Board::from_fn(move |pos| {
            // the borrow must end before recursing into `prev`, which uses the same cache
            let cached = {
                let mut cache = cache.borrow_mut();
                let cached = cache.lru.get(&(id, pos)).copied();
                if cached.is_some() {
                    cache.hit += 1;
                } else {
                    cache.miss += 1;
                }
                cached
            };
            cached.unwrap_or_else(|| {
                let state = step_cell(&*rule, &prev, pos);
                cache.borrow_mut().lru.put((id, pos), state);
                state
            })
        })
    }
    fn name(&self) -> &'static str {
        "memoized"
    }
}

pub type AnyStrategy<R> = Either<Recursive<R>, Either<Materialized<R>, Memoized<R>>>;

/// builds the strategy named by `kind`
///
/// `width`, `height` and `boundary` only matter for [`StrategyKind::Array`],
/// which needs a window of at least one cell.
pub fn pick_advance_strategy<R>(
    kind: StrategyKind,
    rule: R,
    width: u32,
    height: u32,
    boundary: Boundary,
) -> Result<AnyStrategy<R>, ConfigError> {
    Ok(match kind {
        StrategyKind::Recursive => Either::Left(Recursive::new(rule)),
        StrategyKind::Array => {
            if width == 0 || height == 0 {
                return Err(ConfigError::EmptyWindow { width, height });
            }
            Either::Right(Either::Left(
                Materialized::new(rule, width, height).with_boundary(boundary),
            ))
        }
        StrategyKind::Memoized => Either::Right(Either::Right(Memoized::new(rule))),
    })
}
