// lints
#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::items_after_statements,
    clippy::module_name_repetitions,
    clippy::manual_range_contains,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod board;
mod cell;
mod config;
mod direction;
mod driver;
mod error;
mod pattern;
mod pos;
mod rect;
mod region;
mod rule;
mod strategy;
mod ops {
    mod canonical;
    mod clip;
    mod diff;
    mod neighbors;
    mod random;
    mod rule_format;
    mod test_format;

    pub use diff::*;
    pub use random::*;
    pub use rule_format::*;
}

pub use board::*;
pub use cell::*;
pub use config::*;
pub use direction::*;
pub use driver::*;
pub use error::*;
pub use ops::*;
pub use pattern::*;
pub use pos::*;
pub use rect::*;
pub use region::*;
pub use rule::*;
pub use strategy::*;
