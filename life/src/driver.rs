//! Repeatedly advancing a board until it repeats itself or runs out of turns

use std::collections::VecDeque;
use std::fmt::Display;
use std::iter::FusedIterator;
use std::ops::ControlFlow;
use std::time::Duration;

use num_bigint::BigUint;
use tracing::{debug, trace_span};

use crate::{AdvanceStrategy, Board, Rect};

/// A value tagged with the generation that produced it
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Iterated<T> {
    pub generation: u64,
    pub value: T,
}
impl<T> Iterated<T> {
    /// generation 0
    pub fn new(value: T) -> Self {
        Self {
            generation: 0,
            value,
        }
    }
    /// the next generation
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Iterated<U> {
        Iterated {
            generation: self.generation + 1,
            value: f(self.value),
        }
    }
    pub fn as_ref(&self) -> Iterated<&T> {
        Iterated {
            generation: self.generation,
            value: &self.value,
        }
    }
}

#[derive(Clone, Debug)]
pub enum Completion {
    Incomplete(Iterated<Board>),
    /// the board matches the one `period` generations earlier, a period of 1 means it settled
    Cycle(Iterated<Board>, usize),
    Limited(Iterated<Board>),
}
impl Completion {
    pub fn state(&self) -> &Iterated<Board> {
        match self {
            Self::Incomplete(state) | Self::Cycle(state, _) | Self::Limited(state) => state,
        }
    }
    pub fn into_state(self) -> Iterated<Board> {
        match self {
            Self::Incomplete(state) | Self::Cycle(state, _) | Self::Limited(state) => state,
        }
    }
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Incomplete(_))
    }
    /// `None` until the simulation is over
    pub fn summary(&self) -> Option<Summary> {
        match *self {
            Self::Incomplete(_) => None,
            Self::Cycle(ref state, 1) => Some(Summary::Settled {
                generation: state.generation,
            }),
            Self::Cycle(ref state, period) => Some(Summary::Cycle {
                generation: state.generation,
                period,
            }),
            Self::Limited(ref state) => Some(Summary::Limited {
                generation: state.generation,
            }),
        }
    }
}

/// How a simulation ended
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Summary {
    NothingSimulated,
    /// stopped changing, a cycle of period 1
    Settled { generation: u64 },
    Cycle { generation: u64, period: usize },
    Limited { generation: u64 },
    Cancelled { generation: u64 },
}
impl Summary {
    /// generation of the last board, if any board was simulated
    pub fn generation(self) -> Option<u64> {
        match self {
            Self::NothingSimulated => None,
            Self::Settled { generation }
            | Self::Cycle { generation, .. }
            | Self::Limited { generation }
            | Self::Cancelled { generation } => Some(generation),
        }
    }
}
impl Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::NothingSimulated => write!(f, "Nothing was simulated"),
            Self::Settled { generation } => {
                write!(f, "Settled into a still life at generation {generation}")
            }
            Self::Cycle { generation, period } => write!(
                f,
                "Found a cycle of period {period} at generation {generation}"
            ),
            Self::Limited { generation } => {
                write!(f, "Stopped at the turn limit after generation {generation}")
            }
            Self::Cancelled { generation } => write!(f, "Cancelled at generation {generation}"),
        }
    }
}

/// Shows generations as they are produced
pub trait Presenter {
    fn start(&mut self, _initial: &Iterated<Board>) {}
    /// `Break` stops the simulation before the next generation
    fn present(&mut self, prev: &Iterated<Board>, next: &Iterated<Board>) -> ControlFlow<()>;
}
impl<F> Presenter for F
where
    F: FnMut(&Iterated<Board>, &Iterated<Board>) -> ControlFlow<()>,
{
    fn present(&mut self, prev: &Iterated<Board>, next: &Iterated<Board>) -> ControlFlow<()> {
        self(prev, next)
    }
}

/// Waits between generations
pub trait Pacer {
    fn pause(&mut self);
}
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDelay;
impl Pacer for NoDelay {
    fn pause(&mut self) {}
}
#[derive(Clone, Copy, Debug)]
pub struct Delay(pub Duration);
impl Pacer for Delay {
    fn pause(&mut self) {
        std::thread::sleep(self.0);
    }
}

/// canonical encodings of recent generations, most recent first
#[derive(Debug)]
struct History {
    encodings: VecDeque<BigUint>,
    len: usize,
}
impl History {
    fn new(len: usize) -> Self {
        Self {
            encodings: VecDeque::with_capacity(len),
            len,
        }
    }
    /// generations since `encoding` was last seen
    fn period(&self, encoding: &BigUint) -> Option<usize> {
        self.encodings
            .iter()
            .position(|seen| seen == encoding)
            .map(|i| i + 1)
    }
    fn push(&mut self, encoding: BigUint) {
        self.encodings.push_front(encoding);
        self.encodings.truncate(self.len);
    }
}

/// A lazy, finite sequence of generations
///
/// Each item is the next generation classified by [`Completion`]. The last
/// item is always terminal and nothing follows it. A board is only compared
/// with earlier ones inside `window`, so cells outside of it can differ
/// between two boards considered equal.
pub struct Simulation<S> {
    strategy: S,
    window: Rect,
    max_turns: u64,
    current: Iterated<Board>,
    history: History,
    done: bool,
}
impl<S> Simulation<S>
where
    S: AdvanceStrategy,
{
    pub const DEFAULT_HISTORY_LEN: usize = 100;

    pub fn new(board: Board, strategy: S, window: Rect, max_turns: u64) -> Self {
        let mut history = History::new(Self::DEFAULT_HISTORY_LEN);
        history.push(board.canonical(window));
        Self {
            strategy,
            window,
            max_turns,
            current: Iterated::new(board),
            history,
            done: false,
        }
    }
    /// number of past generations checked for a repeat, cycles longer than this go unnoticed
    pub fn with_history_len(mut self, len: usize) -> Self {
        self.history.len = len;
        self.history.encodings.truncate(len);
        self
    }

    pub fn current(&self) -> &Iterated<Board> {
        &self.current
    }
    pub fn strategy(&self) -> &S {
        &self.strategy
    }
    pub fn window(&self) -> Rect {
        self.window
    }
    pub fn max_turns(&self) -> u64 {
        self.max_turns
    }

    /// runs to the end without looking at intermediate generations
    pub fn run(self) -> Summary {
        self.last()
            .and_then(|completion| completion.summary())
            .unwrap_or(Summary::NothingSimulated)
    }

    /// runs to the end, showing every generation to `presenter` and pausing
    /// with `pacer` between them
    pub fn run_with(mut self, presenter: &mut dyn Presenter, pacer: &mut dyn Pacer) -> Summary {
        if self.max_turns == 0 {
            return Summary::NothingSimulated;
        }
        presenter.start(&self.current);
        let mut prev = self.current.clone();
        while let Some(completion) = self.next() {
            let flow = presenter.present(&prev, completion.state());
            if let Some(summary) = completion.summary() {
                return summary;
            }
            let next = completion.into_state();
            if flow.is_break() {
                debug!(generation = next.generation, "cancelled");
                return Summary::Cancelled {
                    generation: next.generation,
                };
            }
            pacer.pause();
            prev = next;
        }
        Summary::NothingSimulated
    }
}

impl<S> Iterator for Simulation<S>
where
    S: AdvanceStrategy,
{
    type Item = Completion;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.current.generation >= self.max_turns {
            self.done = true;
            return None;
        }
        let _span = trace_span!(
            "step",
            generation = self.current.generation + 1,
            strategy = self.strategy.name()
        )
        .entered();

        let next = self
            .current
            .as_ref()
            .map(|board| self.strategy.advance(board));
        let encoding = next.value.canonical(self.window);
        self.current = next.clone();

        let completion = if let Some(period) = self.history.period(&encoding) {
            debug!(generation = next.generation, period, "repeated");
            Completion::Cycle(next, period)
        } else if next.generation >= self.max_turns {
            debug!(generation = next.generation, "turn limit");
            Completion::Limited(next)
        } else {
            self.history.push(encoding);
            Completion::Incomplete(next)
        };
        self.done = completion.is_terminal();
        Some(completion)
    }
}
impl<S> FusedIterator for Simulation<S> where S: AdvanceStrategy {}
