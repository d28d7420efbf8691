//! This module provides the core token types produced by the tokenizer and
//! consumed by the combinators.

mod graphql_token;
mod graphql_token_kind;

pub use graphql_token::GraphQLToken;
pub use graphql_token::GraphQLTokenCategory;
pub use graphql_token::KEYWORDS;
pub use graphql_token_kind::GraphQLTokenKind;
