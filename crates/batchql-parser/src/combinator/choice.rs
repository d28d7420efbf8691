use crate::combinator::ParseFailure;
use crate::combinator::ParseOutcome;
use crate::combinator::Parser;
use crate::token::GraphQLToken;

/// A tuple of alternative parsers producing the same value type.
///
/// Implemented for tuples of 2 to 6 parsers.
pub trait Choice<'src, T> {
    fn parse_choice(
        &self,
        tokens: &[GraphQLToken<'src>],
        pos: usize,
    ) -> ParseOutcome<T>;
}

macro_rules! impl_choice {
    ($(($parser_ty:ident, $parser:ident)),+) => {
        impl<'src, T, $($parser_ty),+> Choice<'src, T> for ($($parser_ty,)+)
        where
            $($parser_ty: Parser<'src, T>),+
        {
            fn parse_choice(
                &self,
                tokens: &[GraphQLToken<'src>],
                pos: usize,
            ) -> ParseOutcome<T> {
                let ($($parser,)+) = self;
                let mut failure: Option<ParseFailure> = None;
                $(
                    match $parser.parse(tokens, pos) {
                        Ok(parsed) => return Ok(parsed.with_failure(failure)),
                        Err(err) => {
                            failure = ParseFailure::furthest_of(failure, Some(err));
                        },
                    }
                )+
                Err(failure.unwrap_or_else(|| ParseFailure::new(pos, [])))
            }
        }
    };
}

impl_choice!((P1, p1), (P2, p2));
impl_choice!((P1, p1), (P2, p2), (P3, p3));
impl_choice!((P1, p1), (P2, p2), (P3, p3), (P4, p4));
impl_choice!((P1, p1), (P2, p2), (P3, p3), (P4, p4), (P5, p5));
impl_choice!((P1, p1), (P2, p2), (P3, p3), (P4, p4), (P5, p5), (P6, p6));

/// Tries each alternative from the same position, left to right; the first
/// success wins.
///
/// When every alternative fails, the failures are merged: the one that got
/// furthest is reported, and alternatives failing at the same position
/// contribute their expected kinds.
pub fn choice<'src, T>(
    alternatives: impl Choice<'src, T>,
) -> impl Parser<'src, T> {
    move |tokens: &[GraphQLToken<'src>], pos: usize| -> ParseOutcome<T> {
        alternatives.parse_choice(tokens, pos)
    }
}
