//! Deterministic parser combinators over a token slice.
//!
//! A parser is any function from `(tokens, position)` to a
//! [`ParseOutcome`]. There is no cursor object: the position is passed in
//! and the next position is returned, so backtracking is just re-running an
//! alternative from the same index.
//!
//! # Example
//!
//! ```rust
//! use batchql_parser::combinator::expect;
//! use batchql_parser::combinator::sequence;
//! use batchql_parser::combinator::Parser;
//! use batchql_parser::token::GraphQLTokenKind;
//! use batchql_parser::token_source::tokenize;
//!
//! let tokens = tokenize("a: b").unwrap();
//! let aliased = sequence((
//!     expect(GraphQLTokenKind::Name),
//!     expect(GraphQLTokenKind::Colon),
//!     expect(GraphQLTokenKind::Name),
//! ));
//! let parsed = aliased.parse(&tokens, 0).unwrap();
//! assert_eq!(parsed.value.2.text, "b");
//! assert_eq!(parsed.next, 3);
//! ```

mod choice;
mod parse_outcome;
mod primitives;
mod sequence;

pub use choice::choice;
pub use choice::Choice;
pub use parse_outcome::ExpectedKinds;
pub use parse_outcome::ParseFailure;
pub use parse_outcome::ParseOutcome;
pub use parse_outcome::Parsed;
pub use parse_outcome::Parser;
pub use primitives::delimited;
pub use primitives::expect;
pub use primitives::keyword;
pub use primitives::left;
pub use primitives::many;
pub use primitives::many1;
pub use primitives::map;
pub use primitives::optional;
pub use primitives::right;
pub use primitives::separated_by;
pub use sequence::sequence;
pub use sequence::Sequence;
