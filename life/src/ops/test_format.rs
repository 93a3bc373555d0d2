use crate::{Board, Pos, Rect};

// macros make formatting nicer

/// this has very little error handling, see `Board::from_test_format`
#[macro_export]
macro_rules! test_board {
    {$s:literal} => {
        $crate::Board::from_test_format($s)
    };
}

impl Board {
    /// expects lines of '.'s (dead) and 'o's (alive)
    ///
    /// The first character of the first row is placed at the origin.
    /// Blank lines and leading/trailing spaces are ignored.
    pub fn from_test_format(s: &str) -> Board {
        Board::from_points(parse_points(s))
    }
    /// writes every row of `rect` as a line of '.'s and 'o's
    pub fn to_test_format(&self, rect: Rect) -> String {
        let mut out = String::new();
        for y in rect.rows() {
            for x in rect.columns() {
                let c = if self.is_alive(Pos::new(x, y)) { 'o' } else { '.' };
                out.push(c);
            }
            out.push('\n');
        }
        out
    }
}

fn parse_points(s: &str) -> Vec<Pos> {
    let mut points = Vec::new();
    for (y, row) in (0_i64..).zip(s.split_ascii_whitespace()) {
        for (x, b) in (0_i64..).zip(row.bytes()) {
            if parse_bit(b) {
                points.push(Pos::new(x, y));
            }
        }
    }
    points
}
fn parse_bit(b: u8) -> bool {
    match b {
        b'.' => false,
        b'o' => true,
        _ => panic!("Invalid byte {b:02x}"),
    }
}

#[cfg(test)]
mod test {
    use unindent::unindent;

    use crate::{Board, Pos, Rect};

    #[test]
    fn board() {
        let parsed = test_board! {"
            .o.
            ..o
            ooo
        "};
        let actual = Board::from_points([
            Pos::new(1, 0),
            Pos::new(2, 1),
            Pos::new(0, 2),
            Pos::new(1, 2),
            Pos::new(2, 2),
        ]);
        assert!(parsed.eq_within(&actual, Rect::new(Pos::new(-2, -2), Pos::new(4, 4))));
    }

    #[test]
    fn write() {
        let fmt = unindent(
            "
            ....
            ..o.
            ...o
            .ooo
            ",
        );
        let board = Board::from_test_format(&fmt);
        let window = Rect::new(Pos::new(0, 0), Pos::new(3, 3));
        assert_eq!(board.to_test_format(window), fmt);

        let shifted = Rect::new(Pos::new(1, 1), Pos::new(4, 2));
        assert_eq!(board.to_test_format(shifted), ".o..\n..o.\n");
    }

    #[test]
    #[should_panic(expected = "Invalid byte")]
    fn rejects_other_characters() {
        Board::from_test_format("o.x");
    }
}
