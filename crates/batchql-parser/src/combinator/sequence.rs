use crate::combinator::ParseFailure;
use crate::combinator::ParseOutcome;
use crate::combinator::Parsed;
use crate::combinator::Parser;
use crate::token::GraphQLToken;

/// A tuple of parsers that run one after another.
///
/// Implemented for tuples of 2 to 6 parsers; the values are returned as a
/// tuple in the same order.
pub trait Sequence<'src, T> {
    fn parse_sequence(
        &self,
        tokens: &[GraphQLToken<'src>],
        pos: usize,
    ) -> ParseOutcome<T>;
}

macro_rules! impl_sequence {
    ($(($parser_ty:ident, $value_ty:ident, $parser:ident, $value:ident)),+) => {
        impl<'src, $($parser_ty, $value_ty),+> Sequence<'src, ($($value_ty,)+)>
            for ($($parser_ty,)+)
        where
            $($parser_ty: Parser<'src, $value_ty>),+
        {
            fn parse_sequence(
                &self,
                tokens: &[GraphQLToken<'src>],
                pos: usize,
            ) -> ParseOutcome<($($value_ty,)+)> {
                let ($($parser,)+) = self;
                let mut next = pos;
                let mut furthest: Option<ParseFailure> = None;
                $(
                    let $value = match $parser.parse(tokens, next) {
                        Ok(parsed) => {
                            next = parsed.next;
                            furthest = ParseFailure::furthest_of(
                                furthest,
                                parsed.furthest_failure,
                            );
                            parsed.value
                        },
                        Err(failure) => {
                            return Err(failure.merged_with(furthest));
                        },
                    };
                )+
                Ok(Parsed {
                    value: ($($value,)+),
                    next,
                    furthest_failure: furthest,
                })
            }
        }
    };
}

impl_sequence!((P1, T1, p1, v1), (P2, T2, p2, v2));
impl_sequence!((P1, T1, p1, v1), (P2, T2, p2, v2), (P3, T3, p3, v3));
impl_sequence!(
    (P1, T1, p1, v1),
    (P2, T2, p2, v2),
    (P3, T3, p3, v3),
    (P4, T4, p4, v4)
);
impl_sequence!(
    (P1, T1, p1, v1),
    (P2, T2, p2, v2),
    (P3, T3, p3, v3),
    (P4, T4, p4, v4),
    (P5, T5, p5, v5)
);
impl_sequence!(
    (P1, T1, p1, v1),
    (P2, T2, p2, v2),
    (P3, T3, p3, v3),
    (P4, T4, p4, v4),
    (P5, T5, p5, v5),
    (P6, T6, p6, v6)
);

/// Runs every parser in `parsers` in order; all must succeed.
pub fn sequence<'src, T>(
    parsers: impl Sequence<'src, T>,
) -> impl Parser<'src, T> {
    move |tokens: &[GraphQLToken<'src>], pos: usize| -> ParseOutcome<T> {
        parsers.parse_sequence(tokens, pos)
    }
}
