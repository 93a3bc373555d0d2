use crate::{Board, Direction, NeighborSet, Pos};

impl Board {
    /// number of living cells among the eight surrounding `pos`
    #[allow(clippy::cast_possible_truncation)] // at most 8
    pub fn living_neighbors(&self, pos: Pos) -> u8 {
        pos.neighbors().filter(|&n| self.is_alive(n)).count() as u8
    }
    /// directions from `pos` that hold a living cell
    pub fn living_neighbor_set(&self, pos: Pos) -> NeighborSet {
        Direction::ALL
            .into_iter()
            .filter(|&dir| self.is_alive(pos.step(dir)))
            .collect()
    }
}

#[cfg(test)]
mod test {
    use crate::{test_board, Direction, Pos};

    #[test]
    fn counts() {
        let board = test_board! {"
            o.o.
            .oo.
            ...o
        "};
        assert_eq!(board.living_neighbors(Pos::new(1, 1)), 3);
        assert_eq!(board.living_neighbors(Pos::new(2, 1)), 3);
        assert_eq!(board.living_neighbors(Pos::new(1, 0)), 4);
        assert_eq!(board.living_neighbors(Pos::new(3, 3)), 1);
        assert_eq!(board.living_neighbors(Pos::new(-1, -1)), 1);
        assert_eq!(board.living_neighbors(Pos::new(10, 10)), 0);
    }

    #[test]
    fn the_center_is_not_its_own_neighbor() {
        let board = test_board! {"
            ooo
            ooo
            ooo
        "};
        assert_eq!(board.living_neighbors(Pos::new(1, 1)), 8);
        assert_eq!(board.living_neighbors(Pos::new(0, 0)), 3);
    }

    #[test]
    fn set_matches_count() {
        let board = test_board! {"
            o..
            .o.
            ..o
        "};
        let set = board.living_neighbor_set(Pos::new(1, 1));
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![Direction::SE, Direction::NW]
        );
        for pos in [Pos::new(0, 0), Pos::new(1, 0), Pos::new(2, 1), Pos::new(3, 3)] {
            assert_eq!(board.living_neighbor_set(pos).len(), board.living_neighbors(pos));
        }
    }
}
