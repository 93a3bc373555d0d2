use num_bigint::BigUint;
use tracing::trace;

use crate::{Board, Rect};

impl Board {
    /// exact encoding of the cells inside `rect`
    ///
    /// Cells are concatenated row by row from the north west corner, the first
    /// cell being the most significant bit. A living cell is a 1.
    /// Two boards have the same encoding for a given `rect` iff they are
    /// `eq_within` that `rect`. The encoding is `rect.area()` bits long, so
    /// the rect has to be small enough for that many bits to fit in memory.
    pub fn canonical(&self, rect: Rect) -> BigUint {
        let bits = rect.area();
        let mut bytes = Vec::with_capacity(usize::try_from(bits.div_ceil(8)).unwrap_or(0));
        let mut byte = 0_u8;
        let mut filled = 0_u32;
        for pos in rect.positions() {
            byte = (byte << 1) | u8::from(self.is_alive(pos));
            filled += 1;
            if filled == 8 {
                bytes.push(byte);
                byte = 0;
                filled = 0;
            }
        }
        let padding = if filled == 0 { 0 } else { 8 - filled };
        if filled != 0 {
            bytes.push(byte << padding);
        }
        trace!(bits, "canonical");
        BigUint::from_bytes_be(&bytes) >> padding
    }
}

#[cfg(test)]
mod test {
    use num_bigint::BigUint;

    use crate::{test_board, Board, Pos, Rect};

    #[test]
    fn bits_are_row_major() {
        let board = test_board! {"
            o..
            .oo
        "};
        assert_eq!(board.canonical(Rect::from_size(3, 2)), BigUint::from(0b100_011_u32));
        assert_eq!(board.canonical(Rect::from_size(2, 2)), BigUint::from(0b10_01_u32));
        assert_eq!(board.canonical(Rect::from_size(3, 1)), BigUint::from(0b100_u32));
    }

    #[test]
    fn longer_than_a_byte() {
        let board = test_board! {"
            ........o
            o.......o
        "};
        // bits 8, 9 and 17 counted from the most significant end of 18
        let expected = BigUint::from(0b11_0000_0001_u32);
        assert_eq!(board.canonical(Rect::from_size(9, 2)), expected);
    }

    #[test]
    fn empty_window_and_empty_board() {
        assert_eq!(Board::empty().canonical(Rect::from_size(0, 0)), BigUint::from(0_u32));
        assert_eq!(Board::empty().canonical(Rect::from_size(13, 7)), BigUint::from(0_u32));
    }

    #[test]
    fn equal_within_iff_equal_encoding() {
        let window = Rect::new(Pos::new(-2, -2), Pos::new(5, 5));
        let a = test_board! {"
            .o.
            ..o
            ooo
        "};
        let b = a.birth(Pos::new(9, 9));
        let c = a.birth(Pos::new(-2, 5));
        assert!(a.eq_within(&b, window));
        assert_eq!(a.canonical(window), b.canonical(window));
        assert!(!a.eq_within(&c, window));
        assert_ne!(a.canonical(window), c.canonical(window));
    }
}
