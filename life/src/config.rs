//! Everything needed to set up a simulation, checked before the first generation runs

use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use crate::{
    pick_advance_strategy, AnyStrategy, Board, ConfigError, Pattern, Pos, RandomPlacement,
    RandomSource, Rect, Rule, Simulation,
};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum StrategyKind {
    Recursive,
    #[default]
    Array,
    Memoized,
}
impl StrategyKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Recursive => "recursive",
            Self::Array => "array",
            Self::Memoized => "memoized",
        }
    }
}
impl Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
impl FromStr for StrategyKind {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recursive" => Ok(Self::Recursive),
            "array" => Ok(Self::Array),
            "memoized" => Ok(Self::Memoized),
            _ => Err(ConfigError::UnknownStrategy(s.to_owned())),
        }
    }
}

/// What the array strategy answers for cells outside its window
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Boundary {
    /// everything outside the window is dead
    #[default]
    Dead,
    /// positions are folded back onto the window's row-major buffer
    Wrap,
}
impl Boundary {
    pub fn name(self) -> &'static str {
        match self {
            Self::Dead => "dead",
            Self::Wrap => "wrap",
        }
    }
}
impl Display for Boundary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
impl FromStr for Boundary {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dead" => Ok(Self::Dead),
            "wrap" => Ok(Self::Wrap),
            _ => Err(ConfigError::UnknownBoundary(s.to_owned())),
        }
    }
}

/// Where the first generation comes from
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum InitialBoard {
    Points(Vec<Pos>),
    Pattern(Pattern),
    Random(RandomPlacement),
}

/// `random` is only used for [`InitialBoard::Random`]
pub fn create_board(
    initial: &InitialBoard,
    random: &mut dyn RandomSource,
) -> Result<Board, ConfigError> {
    match initial {
        InitialBoard::Points(points) => Ok(Board::from_points(points.iter().copied())),
        InitialBoard::Pattern(pattern) => Ok(pattern.board()),
        InitialBoard::Random(placement) => Board::random(*placement, random),
    }
}

/// reads `x,y` pairs separated by `;`, e.g. `0,1;1,2;2,0`
pub fn parse_points(s: &str) -> Result<Vec<Pos>, ConfigError> {
    let invalid = || ConfigError::InvalidPoints(s.to_owned());
    s.split(';')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (x, y) = pair.split_once(',').ok_or_else(invalid)?;
            let x = x.trim().parse().map_err(|_| invalid())?;
            let y = y.trim().parse().map_err(|_| invalid())?;
            Ok(Pos::new(x, y))
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    /// window used for cycle detection and by the array strategy
    pub width: u32,
    pub height: u32,
    /// generations to run before giving up, 0 runs nothing
    pub max_turns: u64,
    /// how many past generations are checked for a repeat
    pub history_len: usize,
    pub rule: Rule,
    pub strategy: StrategyKind,
    pub boundary: Boundary,
    /// pause between generations when presenting
    pub delay: Duration,
}
impl SimulationConfig {
    pub const DEFAULT_SIZE: u32 = 32;
    pub const DEFAULT_MAX_TURNS: u64 = 100;

    pub fn window(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyWindow {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
    pub fn advance_strategy(&self) -> Result<AnyStrategy<Rule>, ConfigError> {
        pick_advance_strategy(
            self.strategy,
            self.rule,
            self.width,
            self.height,
            self.boundary,
        )
    }
    /// the configured simulation starting from `board`
    pub fn simulation(&self, board: Board) -> Result<Simulation<AnyStrategy<Rule>>, ConfigError> {
        self.validate()?;
        let strategy = self.advance_strategy()?;
        Ok(
            Simulation::new(board, strategy, self.window(), self.max_turns)
                .with_history_len(self.history_len),
        )
    }
}
impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_SIZE,
            height: Self::DEFAULT_SIZE,
            max_turns: Self::DEFAULT_MAX_TURNS,
            history_len: Simulation::<AnyStrategy<Rule>>::DEFAULT_HISTORY_LEN,
            rule: Rule::conway(),
            strategy: StrategyKind::default(),
            boundary: Boundary::default(),
            delay: Duration::ZERO,
        }
    }
}
