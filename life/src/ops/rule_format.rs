use std::error::Error;
use std::fmt::{Debug, Display};
use std::str::FromStr;

use tracing::trace;

use crate::{NeighborCounts, Rule};

/// parses rules of the form `B3/S23`
///
/// ```text
/// Rule  ::= "B" Digit* "/S" Digit*
/// Digit ::= "0" .. "8"
/// ```
pub fn parse_rule(src: &str) -> Result<Rule, RuleError> {
    RuleReader::new(src).read()
}

impl FromStr for Rule {
    type Err = RuleError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_rule(s)
    }
}

// parsing

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleErrorKind {
    Syntax,
    DigitOutOfRange,
    TrailingInput,
}
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RuleErrorHint {
    MissingBirth,
    MissingSurvive,
    DigitOutOfRange,
    TrailingInput,
    InvalidChar,
}

#[derive(Clone, PartialEq, Eq)]
struct RuleErrorData {
    src: String,
    column: usize,
    hint: RuleErrorHint,
}
#[derive(Clone, PartialEq, Eq)]
pub struct RuleError(Box<RuleErrorData>);
impl RuleError {
    fn new(src: &str, column: usize, hint: RuleErrorHint) -> Self {
        Self(Box::new(RuleErrorData {
            src: src.to_owned(),
            column,
            hint,
        }))
    }
    pub fn kind(&self) -> RuleErrorKind {
        match self.0.hint {
            RuleErrorHint::DigitOutOfRange => RuleErrorKind::DigitOutOfRange,
            RuleErrorHint::TrailingInput => RuleErrorKind::TrailingInput,
            RuleErrorHint::MissingBirth
            | RuleErrorHint::MissingSurvive
            | RuleErrorHint::InvalidChar => RuleErrorKind::Syntax,
        }
    }
    pub fn src(&self) -> &str {
        &self.0.src
    }
    /// 0 based byte offset into `src`
    pub fn column(&self) -> usize {
        self.0.column
    }
    pub fn hint(&self) -> &'static str {
        match self.0.hint {
            RuleErrorHint::MissingBirth => "Rules start with 'B' followed by the birth counts",
            RuleErrorHint::MissingSurvive => "Birth counts are followed by '/S'",
            RuleErrorHint::DigitOutOfRange => "Neighbor counts go from 0 to 8",
            RuleErrorHint::TrailingInput => "Nothing may follow the survive counts",
            RuleErrorHint::InvalidChar => "Invalid character",
        }
    }
}
impl Debug for RuleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleError")
            .field("src", &self.src())
            .field("column", &self.column())
            .field("hint", &self.0.hint)
            .finish()
    }
}
impl Display for RuleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let src = self.src();
        let column = self.column() + 1;
        let mark = "^";
        let hint = self.hint();
        write!(
            f,
            "Failed to parse rule at column {column}:\n{src}\n{mark:>column$}\n{hint}"
        )
    }
}
impl Error for RuleError {}

type RuleResult<T> = Result<T, RuleError>;

struct RuleReader<'src> {
    src: &'src str,
    at: usize,
}
impl<'src> RuleReader<'src> {
    fn new(src: &'src str) -> Self {
        Self { src, at: 0 }
    }

    fn read(mut self) -> RuleResult<Rule> {
        self.expect(b"B", RuleErrorHint::MissingBirth)?;
        let birth = self.consume_counts()?;
        self.expect(b"/S", RuleErrorHint::MissingSurvive)?;
        let survive = self.consume_counts()?;
        if self.peak().is_some() {
            return self.fail_unexpected(RuleErrorHint::TrailingInput);
        }
        let rule = Rule::new(birth, survive);
        trace!(src = self.src, %rule, "parsed rule");
        Ok(rule)
    }

    fn expect(&mut self, literal: &[u8], hint: RuleErrorHint) -> RuleResult<()> {
        for &expected in literal {
            if self.peak() == Some(expected) {
                self.consume();
            } else {
                return self.fail_unexpected(hint);
            }
        }
        Ok(())
    }
    fn consume_counts(&mut self) -> RuleResult<NeighborCounts> {
        let mut counts = NeighborCounts::empty();
        while let Some(b @ b'0'..=b'9') = self.peak() {
            let count = b - b'0';
            if count > NeighborCounts::MAX {
                return self.fail(RuleErrorHint::DigitOutOfRange);
            }
            self.consume();
            counts.insert(count);
        }
        Ok(counts)
    }

    fn peak(&self) -> Option<u8> {
        self.src.as_bytes().get(self.at).copied()
    }
    fn consume(&mut self) {
        self.at += 1;
    }

    /// characters that can't appear anywhere in a rule get their own hint
    fn fail_unexpected<T>(&self, hint: RuleErrorHint) -> RuleResult<T> {
        match self.peak() {
            Some(b'B' | b'S' | b'/' | b'0'..=b'9') | None => self.fail(hint),
            Some(_) => self.fail(RuleErrorHint::InvalidChar),
        }
    }
    fn fail<T>(&self, hint: RuleErrorHint) -> RuleResult<T> {
        Err(RuleError::new(self.src, self.at, hint))
    }
}

// tests

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use crate::{parse_rule, CellDifference, CellState, NeighborCounts, Rule, RuleErrorKind, StateChangeRule};

    #[test]
    fn conway() {
        let rule = parse_rule("B3/S23").expect("valid rule");
        assert_eq!(rule, Rule::conway());
        assert_eq!(rule.change(CellState::Dead, 3), CellDifference::Birth);
        assert_eq!(rule.change(CellState::Living, 2), CellDifference::NoChange);
        assert_eq!(rule.change(CellState::Living, 4), CellDifference::Death);
    }

    #[test]
    fn empty_sets_and_repeats() {
        let rule: Rule = "B/S".parse().expect("valid rule");
        assert_eq!(rule.birth, NeighborCounts::empty());
        assert_eq!(rule.survive, NeighborCounts::empty());
        assert_eq!(rule.change(CellState::Living, 2), CellDifference::Death);

        let rule: Rule = "B3366/S0".parse().expect("valid rule");
        assert_eq!(rule.to_string(), "B36/S0");
    }

    fn assert_error(src: &str, kind: RuleErrorKind, column: usize) {
        let error = parse_rule(src).expect_err("invalid rule");
        assert_eq!(error.kind(), kind, "{error}");
        assert_eq!(error.column(), column, "{error}");
        assert_eq!(error.src(), src);
    }

    #[test]
    fn errors() {
        assert_error("", RuleErrorKind::Syntax, 0);
        assert_error("3/S23", RuleErrorKind::Syntax, 0);
        assert_error("b3/s23", RuleErrorKind::Syntax, 0);
        assert_error("B3", RuleErrorKind::Syntax, 2);
        assert_error("B3/23", RuleErrorKind::Syntax, 3);
        assert_error("B3x/S23", RuleErrorKind::Syntax, 2);
        assert_error("B39/S23", RuleErrorKind::DigitOutOfRange, 2);
        assert_error("B3/S239", RuleErrorKind::DigitOutOfRange, 6);
        assert_error("B3/S23/", RuleErrorKind::TrailingInput, 6);
        assert_error("B3/S23B", RuleErrorKind::TrailingInput, 6);
        assert_error("B3/S23 ", RuleErrorKind::Syntax, 6);
    }

    #[test]
    fn display() {
        let error = parse_rule("B3/S2x").expect_err("invalid rule");
        assert_eq!(
            error.to_string(),
            "Failed to parse rule at column 6:\nB3/S2x\n     ^\nInvalid character"
        );
        let error = parse_rule("B9/S").expect_err("invalid rule");
        assert_eq!(error.hint(), "Neighbor counts go from 0 to 8");
    }

    proptest! {
        #[test]
        fn round_trip(birth in prop::collection::vec(0_u8..=8, 0..12), survive in prop::collection::vec(0_u8..=8, 0..12)) {
            let digits = |counts: &[u8]| counts.iter().map(u8::to_string).collect::<String>();
            let src = format!("B{}/S{}", digits(&birth), digits(&survive));
            let rule = parse_rule(&src).expect("valid rule");
            for count in 0..=8 {
                let born = rule.change(CellState::Dead, count) == CellDifference::Birth;
                let died = rule.change(CellState::Living, count) == CellDifference::Death;
                prop_assert_eq!(born, birth.contains(&count));
                prop_assert_eq!(died, !survive.contains(&count));
            }
            prop_assert_eq!(parse_rule(&rule.to_string()).expect("canonical form"), rule);
        }
    }
}
