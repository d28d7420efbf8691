use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::GraphQLParseError;
use smallvec::SmallVec;

/// Expected token kinds recorded by a failure. Most failures expect 1-3
/// kinds, so they stay inline.
pub type ExpectedKinds = SmallVec<[GraphQLTokenKind; 4]>;

/// The result of running a [`Parser`] at a cursor position.
pub type ParseOutcome<T> = Result<Parsed<T>, ParseFailure>;

/// A successful parse: the produced value and the cursor position just past
/// the consumed tokens.
#[derive(Clone, Debug, PartialEq)]
pub struct Parsed<T> {
    pub value: T,
    pub next: usize,

    /// The furthest failure observed while producing this value (e.g. the
    /// attempt that stopped a `many`). It does not affect success; it is
    /// carried along so that a later failure can report the deepest point
    /// the input was understood to.
    pub furthest_failure: Option<ParseFailure>,
}

impl<T> Parsed<T> {
    pub fn new(value: T, next: usize) -> Self {
        Self {
            value,
            next,
            furthest_failure: None,
        }
    }

    /// Transforms the value, keeping the cursor and failure context.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Parsed<U> {
        Parsed {
            value: f(self.value),
            next: self.next,
            furthest_failure: self.furthest_failure,
        }
    }

    /// Folds `failure` into this result's failure context.
    pub fn with_failure(mut self, failure: Option<ParseFailure>) -> Self {
        self.furthest_failure =
            ParseFailure::furthest_of(self.furthest_failure, failure);
        self
    }
}

/// A failed parse: the token index where no alternative could continue and
/// the token kinds that would have allowed progress there.
#[derive(Clone, Debug, PartialEq)]
pub struct ParseFailure {
    pub position: usize,
    pub expected: ExpectedKinds,
}

impl ParseFailure {
    pub fn new(
        position: usize,
        expected: impl IntoIterator<Item = GraphQLTokenKind>,
    ) -> Self {
        Self {
            position,
            expected: expected.into_iter().collect(),
        }
    }

    /// Combines two failures: the one further into the input wins, and
    /// failures at the same position union their expectations.
    pub fn merge(mut self, other: ParseFailure) -> ParseFailure {
        if other.position > self.position {
            return other;
        }
        if other.position == self.position {
            for kind in other.expected {
                if !self.expected.contains(&kind) {
                    self.expected.push(kind);
                }
            }
        }
        self
    }

    /// Merges with an optional earlier failure.
    pub fn merged_with(self, other: Option<ParseFailure>) -> ParseFailure {
        match other {
            Some(other) => self.merge(other),
            None => self,
        }
    }

    pub fn furthest_of(
        a: Option<ParseFailure>,
        b: Option<ParseFailure>,
    ) -> Option<ParseFailure> {
        match (a, b) {
            (Some(a), Some(b)) => Some(a.merge(b)),
            (a, None) => a,
            (None, b) => b,
        }
    }

    /// Converts this failure into a user-facing [`GraphQLParseError`],
    /// describing the token found at the failure position.
    ///
    /// Positions past the end of `tokens` report the last token (which, for
    /// tokenizer output, is always `Eof`).
    pub fn into_parse_error(
        self,
        tokens: &[GraphQLToken<'_>],
    ) -> GraphQLParseError {
        let found = tokens
            .get(self.position)
            .or_else(|| tokens.last())
            .copied()
            .unwrap_or_else(|| {
                GraphQLToken::new(GraphQLTokenKind::Eof, "", Default::default())
            });
        GraphQLParseError::unexpected(&found, self.expected.into_vec())
    }
}

/// A parser over a token slice.
///
/// Parsers are pure: the same tokens and position always give the same
/// outcome, and nothing but the returned value carries state between calls.
/// Backtracking is simply calling another parser at the same position.
///
/// Any `Fn(&[GraphQLToken], usize) -> ParseOutcome<T>` is a parser, which
/// includes plain `fn` items (the grammar uses those for recursive rules).
pub trait Parser<'src, T> {
    fn parse(
        &self,
        tokens: &[GraphQLToken<'src>],
        pos: usize,
    ) -> ParseOutcome<T>;
}

impl<'src, T, F> Parser<'src, T> for F
where
    F: Fn(&[GraphQLToken<'src>], usize) -> ParseOutcome<T>,
{
    fn parse(
        &self,
        tokens: &[GraphQLToken<'src>],
        pos: usize,
    ) -> ParseOutcome<T> {
        self(tokens, pos)
    }
}
