#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum CellState {
    Living,
    #[default]
    Dead,
}
impl CellState {
    pub fn is_alive(self) -> bool {
        self == Self::Living
    }
    /// the state after `difference` happened to a cell in this state
    pub fn apply(self, difference: CellDifference) -> Self {
        match difference {
            CellDifference::Birth => Self::Living,
            CellDifference::Death => Self::Dead,
            CellDifference::NoChange => self,
        }
    }
}
impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            Self::Living
        } else {
            Self::Dead
        }
    }
}

/// What happened to a single cell between two boards
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum CellDifference {
    Birth,
    Death,
    #[default]
    NoChange,
}
impl CellDifference {
    pub fn between(before: CellState, after: CellState) -> Self {
        match (before, after) {
            (CellState::Dead, CellState::Living) => Self::Birth,
            (CellState::Living, CellState::Dead) => Self::Death,
            _ => Self::NoChange,
        }
    }
    pub fn is_change(self) -> bool {
        self != Self::NoChange
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const STATES: [CellState; 2] = [CellState::Living, CellState::Dead];

    #[test]
    fn between_then_apply_recovers_after() {
        for before in STATES {
            for after in STATES {
                let difference = CellDifference::between(before, after);
                assert_eq!(before.apply(difference), after);
                assert_eq!(difference.is_change(), before != after);
            }
        }
    }

    #[test]
    fn apply_is_idempotent_for_births_and_deaths() {
        for state in STATES {
            let born = state.apply(CellDifference::Birth);
            assert_eq!(born.apply(CellDifference::Birth), born);
            let died = state.apply(CellDifference::Death);
            assert_eq!(died.apply(CellDifference::Death), died);
        }
        assert_eq!(CellState::default(), CellState::Dead);
        assert!(CellState::from(true).is_alive());
    }
}
