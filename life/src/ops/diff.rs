use crate::{Board, CellDifference, Pos, Rect};

/// Pointwise difference from one board to another
#[derive(Clone, Debug)]
pub struct Difference {
    before: Board,
    after: Board,
}
impl Difference {
    pub fn at(&self, pos: Pos) -> CellDifference {
        CellDifference::between(self.before.get(pos), self.after.get(pos))
    }
    /// cells inside `rect` that were born or died, row by row
    pub fn changes(&self, rect: Rect) -> Vec<(Pos, CellDifference)> {
        rect.positions()
            .map(|pos| (pos, self.at(pos)))
            .filter(|(_, difference)| difference.is_change())
            .collect()
    }
}

impl Board {
    /// what happened to each cell going from `before` to `self`
    pub fn subtract(&self, before: &Board) -> Difference {
        Difference {
            before: before.clone(),
            after: self.clone(),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::{test_board, Board, CellDifference, Pos, Rect};

    #[test]
    fn blinker_changes() {
        let horizontal = test_board! {"
            ...
            ooo
            ...
        "};
        let vertical = test_board! {"
            .o.
            .o.
            .o.
        "};
        let difference = vertical.subtract(&horizontal);
        assert_eq!(difference.at(Pos::new(1, 1)), CellDifference::NoChange);
        assert_eq!(difference.at(Pos::new(1, 0)), CellDifference::Birth);
        assert_eq!(difference.at(Pos::new(0, 1)), CellDifference::Death);
        assert_eq!(
            difference.changes(Rect::from_size(3, 3)),
            vec![
                (Pos::new(1, 0), CellDifference::Birth),
                (Pos::new(0, 1), CellDifference::Death),
                (Pos::new(2, 1), CellDifference::Death),
                (Pos::new(1, 2), CellDifference::Birth),
            ]
        );
    }

    #[test]
    fn a_board_minus_itself_is_unchanged() {
        let board = test_board! {"
            oo
            o.
        "};
        assert!(board.subtract(&board).changes(Rect::from_size(4, 4)).is_empty());
        assert!(Board::empty()
            .subtract(&Board::empty())
            .changes(Rect::from_size(4, 4))
            .is_empty());
    }
}
