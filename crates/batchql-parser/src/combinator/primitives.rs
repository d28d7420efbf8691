use crate::combinator::ParseFailure;
use crate::combinator::ParseOutcome;
use crate::combinator::Parsed;
use crate::combinator::Parser;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;

/// Matches a single token of `kind` and yields it.
pub fn expect<'src>(
    kind: GraphQLTokenKind,
) -> impl Parser<'src, GraphQLToken<'src>> {
    move |tokens: &[GraphQLToken<'src>], pos: usize|
        -> ParseOutcome<GraphQLToken<'src>> {
        match tokens.get(pos) {
            Some(token) if token.kind == kind => {
                Ok(Parsed::new(*token, pos + 1))
            },
            _ => Err(ParseFailure::new(pos, [kind])),
        }
    }
}

/// Matches a `Name` token whose text is exactly `text`.
///
/// Keywords are ordinary names to the tokenizer, so the grammar asks for
/// them by spelling.
pub fn keyword<'src>(
    text: &'static str,
) -> impl Parser<'src, GraphQLToken<'src>> {
    move |tokens: &[GraphQLToken<'src>], pos: usize|
        -> ParseOutcome<GraphQLToken<'src>> {
        match tokens.get(pos) {
            Some(token) if token.is_keyword(text) => {
                Ok(Parsed::new(*token, pos + 1))
            },
            _ => Err(ParseFailure::new(pos, [GraphQLTokenKind::Name])),
        }
    }
}

/// Transforms the value of a successful parse.
pub fn map<'src, A, B>(
    parser: impl Parser<'src, A>,
    f: impl Fn(A) -> B,
) -> impl Parser<'src, B> {
    move |tokens: &[GraphQLToken<'src>], pos: usize| -> ParseOutcome<B> {
        parser.parse(tokens, pos).map(|parsed| parsed.map(&f))
    }
}

/// Succeeds with `None` (consuming nothing) when `parser` fails.
pub fn optional<'src, T>(
    parser: impl Parser<'src, T>,
) -> impl Parser<'src, Option<T>> {
    move |tokens: &[GraphQLToken<'src>], pos: usize|
        -> ParseOutcome<Option<T>> {
        match parser.parse(tokens, pos) {
            Ok(parsed) => Ok(parsed.map(Some)),
            Err(failure) => Ok(Parsed::new(None, pos).with_failure(Some(failure))),
        }
    }
}

/// Applies `parser` zero or more times, greedily.
///
/// Stops at the first failure without consuming the failed attempt. An
/// attempt that succeeds without consuming anything also stops the loop
/// (and its value is dropped) so `many` always terminates.
pub fn many<'src, T>(
    parser: impl Parser<'src, T>,
) -> impl Parser<'src, Vec<T>> {
    move |tokens: &[GraphQLToken<'src>], pos: usize|
        -> ParseOutcome<Vec<T>> {
        let mut values = vec![];
        let mut next = pos;
        let mut furthest = None;
        loop {
            match parser.parse(tokens, next) {
                Ok(parsed) => {
                    furthest = ParseFailure::furthest_of(
                        furthest,
                        parsed.furthest_failure,
                    );
                    if parsed.next == next {
                        break;
                    }
                    values.push(parsed.value);
                    next = parsed.next;
                },
                Err(failure) => {
                    furthest = ParseFailure::furthest_of(furthest, Some(failure));
                    break;
                },
            }
        }
        Ok(Parsed {
            value: values,
            next,
            furthest_failure: furthest,
        })
    }
}

/// Like [`many`], but requires at least one match.
pub fn many1<'src, T>(
    parser: impl Parser<'src, T>,
) -> impl Parser<'src, Vec<T>> {
    let repeated = many(parser);
    move |tokens: &[GraphQLToken<'src>], pos: usize|
        -> ParseOutcome<Vec<T>> {
        let parsed = repeated.parse(tokens, pos)?;
        if parsed.value.is_empty() {
            return Err(parsed
                .furthest_failure
                .unwrap_or_else(|| ParseFailure::new(pos, [])));
        }
        Ok(parsed)
    }
}

/// Parses zero or more `item`s separated by `separator`.
///
/// A trailing separator is left unconsumed.
pub fn separated_by<'src, T, S>(
    item: impl Parser<'src, T>,
    separator: impl Parser<'src, S>,
) -> impl Parser<'src, Vec<T>> {
    move |tokens: &[GraphQLToken<'src>], pos: usize|
        -> ParseOutcome<Vec<T>> {
        let first = match item.parse(tokens, pos) {
            Ok(parsed) => parsed,
            Err(failure) => {
                return Ok(Parsed::new(vec![], pos).with_failure(Some(failure)));
            },
        };
        let mut furthest = first.furthest_failure;
        let mut next = first.next;
        let mut values = vec![first.value];
        loop {
            let after_separator = match separator.parse(tokens, next) {
                Ok(parsed) => {
                    furthest = ParseFailure::furthest_of(
                        furthest,
                        parsed.furthest_failure,
                    );
                    parsed.next
                },
                Err(failure) => {
                    furthest = ParseFailure::furthest_of(furthest, Some(failure));
                    break;
                },
            };
            match item.parse(tokens, after_separator) {
                Ok(parsed) if parsed.next > next => {
                    furthest = ParseFailure::furthest_of(
                        furthest,
                        parsed.furthest_failure,
                    );
                    values.push(parsed.value);
                    next = parsed.next;
                },
                Ok(_) => break,
                Err(failure) => {
                    furthest = ParseFailure::furthest_of(furthest, Some(failure));
                    break;
                },
            }
        }
        Ok(Parsed {
            value: values,
            next,
            furthest_failure: furthest,
        })
    }
}

/// Runs `first` then `second`, keeping only the first value.
pub fn left<'src, A, B>(
    first: impl Parser<'src, A>,
    second: impl Parser<'src, B>,
) -> impl Parser<'src, A> {
    move |tokens: &[GraphQLToken<'src>], pos: usize| -> ParseOutcome<A> {
        let a = first.parse(tokens, pos)?;
        match second.parse(tokens, a.next) {
            Ok(b) => Ok(Parsed {
                value: a.value,
                next: b.next,
                furthest_failure: ParseFailure::furthest_of(
                    a.furthest_failure,
                    b.furthest_failure,
                ),
            }),
            Err(failure) => Err(failure.merged_with(a.furthest_failure)),
        }
    }
}

/// Runs `first` then `second`, keeping only the second value.
pub fn right<'src, A, B>(
    first: impl Parser<'src, A>,
    second: impl Parser<'src, B>,
) -> impl Parser<'src, B> {
    move |tokens: &[GraphQLToken<'src>], pos: usize| -> ParseOutcome<B> {
        let a = first.parse(tokens, pos)?;
        match second.parse(tokens, a.next) {
            Ok(b) => Ok(b.with_failure(a.furthest_failure)),
            Err(failure) => Err(failure.merged_with(a.furthest_failure)),
        }
    }
}

/// Parses `open`, `inner`, `close` and yields the inner value.
pub fn delimited<'src, O, T, C>(
    open: impl Parser<'src, O>,
    inner: impl Parser<'src, T>,
    close: impl Parser<'src, C>,
) -> impl Parser<'src, T> {
    left(right(open, inner), close)
}
