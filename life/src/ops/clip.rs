use crate::{Board, CellState, Pos, Region};

impl Board {
    /// keeps cells inside `region`, everything outside is dead
    pub fn clip(&self, region: impl Region + 'static) -> Board {
        let prev = self.clone();
        Board::from_fn(move |pos| {
            if region.contains(pos) {
                prev.get(pos)
            } else {
                CellState::Dead
            }
        })
    }
    /// kills every cell inside `region`
    pub fn clear(&self, region: impl Region + 'static) -> Board {
        let prev = self.clone();
        Board::from_fn(move |pos| {
            if region.contains(pos) {
                CellState::Dead
            } else {
                prev.get(pos)
            }
        })
    }
    /// every cell inside `region` is alive, the rest is unchanged
    pub fn fill(&self, region: impl Region + 'static) -> Board {
        let prev = self.clone();
        Board::from_fn(move |pos| {
            if region.contains(pos) {
                CellState::Living
            } else {
                prev.get(pos)
            }
        })
    }
    /// moves every cell by `offset`
    pub fn translate(&self, offset: Pos) -> Board {
        let prev = self.clone();
        Board::from_fn(move |pos| prev.get(pos - offset))
    }
}

#[cfg(test)]
mod test {
    use crate::{test_board, Annulus, Board, Circle, Pos, Rect};

    #[test]
    fn clip_and_clear_partition_the_board() {
        let board = test_board! {"
            oooo
            oooo
            oooo
            oooo
        "};
        let rect = Rect::new(Pos::new(1, 1), Pos::new(2, 2));
        let window = Rect::from_size(4, 4);
        let clipped = board.clip(rect);
        let cleared = board.clear(rect);
        assert_eq!(clipped.population(window), 4);
        assert_eq!(cleared.population(window), 12);
        assert_eq!(clipped.living_in(window), rect.positions().collect::<Vec<_>>());
        for pos in window.positions() {
            assert_ne!(clipped.is_alive(pos), cleared.is_alive(pos));
        }
    }

    #[test]
    fn fill_round_regions() {
        let ring = Board::empty().fill(Annulus::new(Pos::ORIGIN, 1, 2));
        let disc = Board::empty().fill(Circle::new(Pos::ORIGIN, 2));
        let window = Rect::new(Pos::new(-3, -3), Pos::new(3, 3));
        assert!(!ring.is_alive(Pos::ORIGIN));
        assert!(disc.is_alive(Pos::ORIGIN));
        assert_eq!(disc.population(window) - ring.population(window), 5);
    }

    #[test]
    fn translate() {
        let board = test_board! {"
            o.
            .o
        "};
        let moved = board.translate(Pos::new(3, -1));
        assert_eq!(
            moved.living_in(Rect::new(Pos::new(-5, -5), Pos::new(5, 5))),
            vec![Pos::new(3, -1), Pos::new(4, 0)]
        );
    }
}
