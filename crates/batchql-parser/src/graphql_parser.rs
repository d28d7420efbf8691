//! Grammar parser for executable GraphQL documents.
//!
//! This module provides [`GraphQLParser`], which tokenizes a source string
//! once and then applies a grammar assembled from the primitives in
//! [`crate::combinator`].
//!
//! # Architecture
//!
//! Every grammar rule is a plain `fn` with the parser signature
//! `(&[GraphQLToken], usize) -> ParseOutcome<T>`. Rules that recurse
//! (selection sets, values, type annotations) refer to themselves by name,
//! which keeps every rule a pure function of the token slice.
//!
//! Commas are insignificant in GraphQL: list-like rules accept any number
//! of them between, before and after items.
//!
//! Nesting depth is checked once over the token stream before the grammar
//! runs, so deeply nested input fails with an error instead of exhausting
//! the stack.

use crate::ast;
use crate::combinator::choice;
use crate::combinator::delimited;
use crate::combinator::expect;
use crate::combinator::keyword;
use crate::combinator::left;
use crate::combinator::many;
use crate::combinator::many1;
use crate::combinator::map;
use crate::combinator::optional;
use crate::combinator::right;
use crate::combinator::separated_by;
use crate::combinator::sequence;
use crate::combinator::ParseFailure;
use crate::combinator::ParseOutcome;
use crate::combinator::Parsed;
use crate::combinator::Parser;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token_source::tokenize;
use crate::GraphQLLexError;
use crate::GraphQLParseError;
use crate::GraphQLParseErrorKind;

/// Parses a single executable GraphQL document.
///
/// # Example
///
/// ```rust
/// use batchql_parser::GraphQLParser;
///
/// let parser = GraphQLParser::new("query ($id: ID!) { user(id: $id) { name } }")?;
/// let doc = parser.parse_executable_document()?;
/// assert_eq!(doc.operations().count(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct GraphQLParser<'src> {
    tokens: Vec<GraphQLToken<'src>>,
}

impl<'src> GraphQLParser<'src> {
    /// Maximum depth of nested `{ }` and `[ ]` pairs.
    pub const MAX_NESTING_DEPTH: usize = 64;

    /// Tokenizes `source`, failing on the first unrecognized character.
    pub fn new(source: &'src str) -> Result<Self, GraphQLLexError> {
        Ok(Self {
            tokens: tokenize(source)?,
        })
    }

    /// The token stream being parsed (always terminated by `Eof`).
    pub fn tokens(&self) -> &[GraphQLToken<'src>] {
        &self.tokens
    }

    /// Parses the whole input as an executable document.
    ///
    /// The input must be consumed completely; anything left over after the
    /// last definition is reported as an unexpected token.
    pub fn parse_executable_document(
        &self,
    ) -> Result<ast::Document, GraphQLParseError> {
        self.check_nesting_depth()?;
        left(document, expect(GraphQLTokenKind::Eof))
            .parse(&self.tokens, 0)
            .map(|parsed| parsed.value)
            .map_err(|failure| failure.into_parse_error(&self.tokens))
    }

    fn check_nesting_depth(&self) -> Result<(), GraphQLParseError> {
        let mut depth = 0usize;
        for token in &self.tokens {
            match token.kind {
                GraphQLTokenKind::CurlyBraceOpen
                | GraphQLTokenKind::SquareBracketOpen => {
                    depth += 1;
                    if depth > Self::MAX_NESTING_DEPTH {
                        return Err(GraphQLParseError::new(
                            "maximum nesting depth exceeded",
                            token.position,
                            GraphQLParseErrorKind::NestingTooDeep {
                                limit: Self::MAX_NESTING_DEPTH,
                            },
                        ));
                    }
                },
                GraphQLTokenKind::CurlyBraceClose
                | GraphQLTokenKind::SquareBracketClose => {
                    depth = depth.saturating_sub(1);
                },
                _ => {},
            }
        }
        Ok(())
    }
}

// =============================================================================
// Shared helpers
// =============================================================================

/// Skips insignificant commas. Never fails, and never shows up in the
/// expected-token list of an error.
fn commas<'src>(tokens: &[GraphQLToken<'src>], pos: usize) -> ParseOutcome<()> {
    let skipped = many(expect(GraphQLTokenKind::Comma)).parse(tokens, pos)?;
    Ok(Parsed::new((), skipped.next))
}

/// One or more `item`s, each optionally followed by commas.
fn comma_list1<'src, T>(
    item: impl Parser<'src, T>,
) -> impl Parser<'src, Vec<T>> {
    right(commas, many1(left(item, commas)))
}

/// Zero or more `item`s separated by commas, tolerating leading and
/// trailing commas.
fn comma_list<'src, T>(
    item: impl Parser<'src, T>,
) -> impl Parser<'src, Vec<T>> {
    delimited(commas, separated_by(item, commas), commas)
}

fn position_at(
    tokens: &[GraphQLToken<'_>],
    pos: usize,
) -> crate::SourcePosition {
    tokens.get(pos).map(|token| token.position).unwrap_or_default()
}

fn name<'src>(tokens: &[GraphQLToken<'src>], pos: usize) -> ParseOutcome<String> {
    map(expect(GraphQLTokenKind::Name), |token: GraphQLToken<'src>| {
        token.text.to_string()
    })
    .parse(tokens, pos)
}

/// A fragment name: any name except `on`.
fn fragment_name<'src>(
    tokens: &[GraphQLToken<'src>],
    pos: usize,
) -> ParseOutcome<String> {
    let parsed = name(tokens, pos)?;
    if parsed.value == "on" {
        return Err(ParseFailure::new(pos, [GraphQLTokenKind::Name]));
    }
    Ok(parsed)
}

// =============================================================================
// Definitions
// =============================================================================

fn document<'src>(
    tokens: &[GraphQLToken<'src>],
    pos: usize,
) -> ParseOutcome<ast::Document> {
    map(
        many1(choice((
            map(operation_definition, ast::Definition::Operation),
            map(fragment_definition, ast::Definition::Fragment),
        ))),
        |definitions| ast::Document { definitions },
    )
    .parse(tokens, pos)
}

fn operation_kind<'src>(
    tokens: &[GraphQLToken<'src>],
    pos: usize,
) -> ParseOutcome<ast::OperationKind> {
    choice((
        map(keyword("query"), |_| ast::OperationKind::Query),
        map(keyword("mutation"), |_| ast::OperationKind::Mutation),
        map(keyword("subscription"), |_| ast::OperationKind::Subscription),
    ))
    .parse(tokens, pos)
}

fn operation_definition<'src>(
    tokens: &[GraphQLToken<'src>],
    pos: usize,
) -> ParseOutcome<ast::OperationDefinition> {
    let position = position_at(tokens, pos);
    choice((
        map(
            sequence((
                operation_kind,
                optional(name),
                optional(variable_definitions),
                directives,
                selection_set,
            )),
            move |(kind, name, variable_definitions, directives, selection_set)| {
                ast::OperationDefinition {
                    kind,
                    name,
                    variable_definitions: variable_definitions.unwrap_or_default(),
                    directives,
                    selection_set,
                    position,
                }
            },
        ),
        map(selection_set, move |selection_set| ast::OperationDefinition {
            kind: ast::OperationKind::Query,
            name: None,
            variable_definitions: vec![],
            directives: vec![],
            selection_set,
            position,
        }),
    ))
    .parse(tokens, pos)
}

fn fragment_definition<'src>(
    tokens: &[GraphQLToken<'src>],
    pos: usize,
) -> ParseOutcome<ast::FragmentDefinition> {
    let position = position_at(tokens, pos);
    map(
        sequence((
            keyword("fragment"),
            fragment_name,
            keyword("on"),
            name,
            directives,
            selection_set,
        )),
        move |(_, name, _, type_condition, directives, selection_set)| {
            ast::FragmentDefinition {
                name,
                type_condition,
                directives,
                selection_set,
                position,
            }
        },
    )
    .parse(tokens, pos)
}

fn variable_definitions<'src>(
    tokens: &[GraphQLToken<'src>],
    pos: usize,
) -> ParseOutcome<Vec<ast::VariableDefinition>> {
    delimited(
        expect(GraphQLTokenKind::ParenOpen),
        comma_list1(variable_definition),
        expect(GraphQLTokenKind::ParenClose),
    )
    .parse(tokens, pos)
}

fn variable_definition<'src>(
    tokens: &[GraphQLToken<'src>],
    pos: usize,
) -> ParseOutcome<ast::VariableDefinition> {
    map(
        sequence((
            expect(GraphQLTokenKind::Dollar),
            name,
            expect(GraphQLTokenKind::Colon),
            type_annotation,
            optional(right(expect(GraphQLTokenKind::Equals), value)),
            directives,
        )),
        |(_, name, _, type_annotation, default_value, directives)| {
            ast::VariableDefinition {
                name,
                type_annotation,
                default_value,
                directives,
            }
        },
    )
    .parse(tokens, pos)
}

fn type_annotation<'src>(
    tokens: &[GraphQLToken<'src>],
    pos: usize,
) -> ParseOutcome<ast::TypeAnnotation> {
    let base = choice((
        map(name, ast::TypeAnnotation::Named),
        map(
            delimited(
                expect(GraphQLTokenKind::SquareBracketOpen),
                type_annotation,
                expect(GraphQLTokenKind::SquareBracketClose),
            ),
            |inner| ast::TypeAnnotation::List(Box::new(inner)),
        ),
    ));
    map(
        sequence((base, optional(expect(GraphQLTokenKind::Bang)))),
        |(annotation, bang)| match bang {
            Some(_) => ast::TypeAnnotation::NonNull(Box::new(annotation)),
            None => annotation,
        },
    )
    .parse(tokens, pos)
}

// =============================================================================
// Selections
// =============================================================================

fn selection_set<'src>(
    tokens: &[GraphQLToken<'src>],
    pos: usize,
) -> ParseOutcome<ast::SelectionSet> {
    map(
        delimited(
            expect(GraphQLTokenKind::CurlyBraceOpen),
            comma_list1(selection),
            expect(GraphQLTokenKind::CurlyBraceClose),
        ),
        ast::SelectionSet::new,
    )
    .parse(tokens, pos)
}

fn selection<'src>(
    tokens: &[GraphQLToken<'src>],
    pos: usize,
) -> ParseOutcome<ast::Selection> {
    choice((
        map(field, ast::Selection::Field),
        right(
            expect(GraphQLTokenKind::Ellipsis),
            choice((
                map(inline_fragment_body, ast::Selection::InlineFragment),
                map(fragment_spread_body, ast::Selection::FragmentSpread),
            )),
        ),
    ))
    .parse(tokens, pos)
}

fn field<'src>(
    tokens: &[GraphQLToken<'src>],
    pos: usize,
) -> ParseOutcome<ast::Field> {
    map(
        sequence((
            optional(left(name, expect(GraphQLTokenKind::Colon))),
            name,
            optional(arguments),
            directives,
            optional(selection_set),
        )),
        |(alias, name, arguments, directives, selection_set)| ast::Field {
            alias,
            name,
            arguments: arguments.unwrap_or_default(),
            directives,
            selection_set,
        },
    )
    .parse(tokens, pos)
}

/// Everything after `...` in an inline fragment.
fn inline_fragment_body<'src>(
    tokens: &[GraphQLToken<'src>],
    pos: usize,
) -> ParseOutcome<ast::InlineFragment> {
    map(
        sequence((
            optional(right(keyword("on"), name)),
            directives,
            selection_set,
        )),
        |(type_condition, directives, selection_set)| ast::InlineFragment {
            type_condition,
            directives,
            selection_set,
        },
    )
    .parse(tokens, pos)
}

/// Everything after `...` in a named fragment spread.
fn fragment_spread_body<'src>(
    tokens: &[GraphQLToken<'src>],
    pos: usize,
) -> ParseOutcome<ast::FragmentSpread> {
    map(
        sequence((fragment_name, directives)),
        |(fragment_name, directives)| ast::FragmentSpread {
            fragment_name,
            directives,
        },
    )
    .parse(tokens, pos)
}

// =============================================================================
// Arguments and directives
// =============================================================================

fn arguments<'src>(
    tokens: &[GraphQLToken<'src>],
    pos: usize,
) -> ParseOutcome<Vec<ast::Argument>> {
    delimited(
        expect(GraphQLTokenKind::ParenOpen),
        comma_list1(argument),
        expect(GraphQLTokenKind::ParenClose),
    )
    .parse(tokens, pos)
}

fn argument<'src>(
    tokens: &[GraphQLToken<'src>],
    pos: usize,
) -> ParseOutcome<ast::Argument> {
    map(
        sequence((name, expect(GraphQLTokenKind::Colon), value)),
        |(name, _, value)| ast::Argument { name, value },
    )
    .parse(tokens, pos)
}

fn directives<'src>(
    tokens: &[GraphQLToken<'src>],
    pos: usize,
) -> ParseOutcome<Vec<ast::DirectiveAnnotation>> {
    many(map(
        sequence((
            expect(GraphQLTokenKind::At),
            name,
            optional(arguments),
        )),
        |(_, name, arguments)| ast::DirectiveAnnotation {
            name,
            arguments: arguments.unwrap_or_default(),
        },
    ))
    .parse(tokens, pos)
}

// =============================================================================
// Values
// =============================================================================

fn value<'src>(
    tokens: &[GraphQLToken<'src>],
    pos: usize,
) -> ParseOutcome<ast::Value> {
    let raw = |token: GraphQLToken<'_>| token.text.to_string();
    choice((
        map(right(expect(GraphQLTokenKind::Dollar), name), ast::Value::Variable),
        map(expect(GraphQLTokenKind::IntValue), move |t| ast::Value::Int(raw(t))),
        map(expect(GraphQLTokenKind::FloatValue), move |t| ast::Value::Float(raw(t))),
        map(expect(GraphQLTokenKind::StringValue), move |t| ast::Value::String(raw(t))),
        choice((
            map(expect(GraphQLTokenKind::True), |_| ast::Value::Boolean(true)),
            map(expect(GraphQLTokenKind::False), |_| ast::Value::Boolean(false)),
            map(expect(GraphQLTokenKind::Null), |_| ast::Value::Null),
            map(name, ast::Value::Enum),
        )),
        choice((list_value, object_value)),
    ))
    .parse(tokens, pos)
}

fn list_value<'src>(
    tokens: &[GraphQLToken<'src>],
    pos: usize,
) -> ParseOutcome<ast::Value> {
    map(
        delimited(
            expect(GraphQLTokenKind::SquareBracketOpen),
            comma_list(value),
            expect(GraphQLTokenKind::SquareBracketClose),
        ),
        ast::Value::List,
    )
    .parse(tokens, pos)
}

fn object_value<'src>(
    tokens: &[GraphQLToken<'src>],
    pos: usize,
) -> ParseOutcome<ast::Value> {
    map(
        delimited(
            expect(GraphQLTokenKind::CurlyBraceOpen),
            comma_list(map(
                sequence((name, expect(GraphQLTokenKind::Colon), value)),
                |(name, _, value)| ast::ObjectField { name, value },
            )),
            expect(GraphQLTokenKind::CurlyBraceClose),
        ),
        ast::Value::Object,
    )
    .parse(tokens, pos)
}
