use std::collections::HashMap;

use rand::Rng;
use tracing::debug;

use crate::{Board, ConfigError, Pos, Rect};

/// Uniform values in `[0, 1)`
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}
impl<R> RandomSource for R
where
    R: Rng,
{
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// `count` living cells spread over a `width`x`height` window at the origin
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct RandomPlacement {
    pub width: u32,
    pub height: u32,
    pub count: u64,
}

impl Board {
    /// every cell of the window is equally likely to be picked, no cell is picked twice
    ///
    /// Only the picked cells are stored, so the window may be far larger than `count`.
    pub fn random(
        placement: RandomPlacement,
        random: &mut dyn RandomSource,
    ) -> Result<Board, ConfigError> {
        let RandomPlacement {
            width,
            height,
            count,
        } = placement;
        let area = Rect::from_size(width, height).area();
        if count > area {
            return Err(ConfigError::TooManyCells {
                count,
                width,
                height,
            });
        }
        let width = u64::from(width);
        #[allow(clippy::cast_possible_wrap)] // both are below 2^32
        let positions = sample_indices(area, count, random)
            .into_iter()
            .map(|i| Pos::new((i % width) as i64, (i / width) as i64));
        let board = Board::from_points(positions);
        debug!(width, height, count, "random board");
        Ok(board)
    }
}

/// the first `count` entries of a Fisher-Yates shuffle of `0..len`
///
/// Untouched entries hold their own index, so only swapped ones are stored.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn sample_indices(len: u64, count: u64, random: &mut dyn RandomSource) -> Vec<u64> {
    let count = count.min(len);
    let mut swapped: HashMap<u64, u64> = HashMap::new();
    let mut picked = Vec::with_capacity(usize::try_from(count).unwrap_or(0));
    for i in 0..count {
        let remaining = len - i;
        let unit = random.next_unit();
        debug_assert!((0.0..1.0).contains(&unit), "random source gave {unit}");
        let j = i + ((unit * remaining as f64) as u64).min(remaining - 1);
        let at_j = swapped.get(&j).copied().unwrap_or(j);
        let at_i = swapped.get(&i).copied().unwrap_or(i);
        swapped.insert(j, at_i);
        picked.push(at_j);
    }
    picked
}
