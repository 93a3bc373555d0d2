use std::fmt::Display;
use std::str::FromStr;

use itertools::iproduct;

use crate::{Board, ConfigError, Pos};

/// Well known starting configurations, placed just south east of the origin
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Pattern {
    Block,
    Blinker,
    Toad,
    Beacon,
    Glider,
    Lwss,
    RPentomino,
    Pulsar,
    GosperGliderGun,
}

const BLOCK: &[(i64, i64)] = &[(0, 0), (1, 0), (0, 1), (1, 1)];
/// horizontal phase
const BLINKER: &[(i64, i64)] = &[(0, 1), (1, 1), (2, 1)];
const TOAD: &[(i64, i64)] = &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)];
const BEACON: &[(i64, i64)] = &[
    (0, 0),
    (1, 0),
    (0, 1),
    (1, 1),
    (2, 2),
    (3, 2),
    (2, 3),
    (3, 3),
];
/// travels south east
const GLIDER: &[(i64, i64)] = &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];
/// travels west
const LWSS: &[(i64, i64)] = &[
    (1, 0),
    (4, 0),
    (0, 1),
    (0, 2),
    (4, 2),
    (0, 3),
    (1, 3),
    (2, 3),
    (3, 3),
];
const R_PENTOMINO: &[(i64, i64)] = &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)];
#[rustfmt::skip]
const GOSPER_GLIDER_GUN: &[(i64, i64)] = &[
    (24, 0),
    (22, 1), (24, 1),
    (12, 2), (13, 2), (20, 2), (21, 2), (34, 2), (35, 2),
    (11, 3), (15, 3), (20, 3), (21, 3), (34, 3), (35, 3),
    (0, 4), (1, 4), (10, 4), (16, 4), (20, 4), (21, 4),
    (0, 5), (1, 5), (10, 5), (14, 5), (16, 5), (17, 5), (22, 5), (24, 5),
    (10, 6), (16, 6), (24, 6),
    (11, 7), (15, 7),
    (12, 8), (13, 8),
];

impl Pattern {
    pub const ALL: [Pattern; 9] = [
        Self::Block,
        Self::Blinker,
        Self::Toad,
        Self::Beacon,
        Self::Glider,
        Self::Lwss,
        Self::RPentomino,
        Self::Pulsar,
        Self::GosperGliderGun,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::Blinker => "blinker",
            Self::Toad => "toad",
            Self::Beacon => "beacon",
            Self::Glider => "glider",
            Self::Lwss => "lwss",
            Self::RPentomino => "r-pentomino",
            Self::Pulsar => "pulsar",
            Self::GosperGliderGun => "gosper-glider-gun",
        }
    }

    pub fn points(self) -> Vec<Pos> {
        let cells = match self {
            Self::Block => BLOCK,
            Self::Blinker => BLINKER,
            Self::Toad => TOAD,
            Self::Beacon => BEACON,
            Self::Glider => GLIDER,
            Self::Lwss => LWSS,
            Self::RPentomino => R_PENTOMINO,
            Self::GosperGliderGun => GOSPER_GLIDER_GUN,
            Self::Pulsar => return pulsar(),
        };
        cells.iter().copied().map(Pos::from).collect()
    }

    pub fn board(self) -> Board {
        Board::from_points(self.points())
    }
}

/// the pulsar is symmetric, each arm is three cells long
fn pulsar() -> Vec<Pos> {
    const ARMS: [i64; 6] = [2, 3, 4, 8, 9, 10];
    const EDGES: [i64; 4] = [0, 5, 7, 12];
    let horizontal = iproduct!(EDGES, ARMS).map(|(y, x)| Pos::new(x, y));
    let vertical = iproduct!(ARMS, EDGES).map(|(y, x)| Pos::new(x, y));
    horizontal.chain(vertical).collect()
}

impl Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
impl FromStr for Pattern {
    type Err = ConfigError;
    /// names are matched ignoring case, '-' and '_' are interchangeable
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|pattern| pattern.name() == normalized)
            .ok_or_else(|| ConfigError::UnknownPattern(s.to_owned()))
    }
}

#[cfg(test)]
mod test {
    use crate::{ConfigError, Pattern, Rect};

    #[test]
    fn names_round_trip() {
        for pattern in Pattern::ALL {
            assert_eq!(pattern.name().parse::<Pattern>(), Ok(pattern));
        }
        assert_eq!("Gosper_Glider_Gun".parse::<Pattern>(), Ok(Pattern::GosperGliderGun));
        assert_eq!(
            "spaceship".parse::<Pattern>(),
            Err(ConfigError::UnknownPattern("spaceship".to_owned()))
        );
    }

    #[test]
    fn populations() {
        let populations = Pattern::ALL.map(|pattern| pattern.points().len());
        assert_eq!(populations, [4, 3, 6, 8, 5, 9, 5, 48, 36]);
    }

    #[test]
    fn points_are_distinct() {
        for pattern in Pattern::ALL {
            let points = pattern.points();
            let board = pattern.board();
            let bounds = Rect::bounding(points.iter().copied());
            assert_eq!(board.population(bounds), points.len(), "{pattern}");
            assert!(bounds.west() >= 0 && bounds.north() >= 0, "{pattern}");
        }
    }
}
