//! A [`GraphQLTokenSource`](crate::token_source::GraphQLTokenSource) that
//! lexes from a `&str` input.
//!
//! Token text borrows directly from the source string, so lexing allocates
//! only for error messages.
//!
//! # Usage
//!
//! ```rust
//! use batchql_parser::token::GraphQLTokenKind;
//! use batchql_parser::token_source::StrGraphQLTokenSource;
//!
//! let kinds: Vec<GraphQLTokenKind> = StrGraphQLTokenSource::new("{ name }")
//!     .map(|token| token.map(|t| t.kind))
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(kinds, vec![
//!     GraphQLTokenKind::CurlyBraceOpen,
//!     GraphQLTokenKind::Name,
//!     GraphQLTokenKind::CurlyBraceClose,
//!     GraphQLTokenKind::Eof,
//! ]);
//! ```

use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::GraphQLLexError;
use crate::GraphQLLexErrorKind;
use crate::SourcePosition;

type LexResult<'src> = Result<GraphQLToken<'src>, GraphQLLexError>;

/// A tokenizer over a `&str`.
///
/// Yields `Ok` tokens until (and including) `Eof`, or a single `Err` at the
/// first lexing failure; either way the iterator is exhausted afterwards.
pub struct StrGraphQLTokenSource<'src> {
    /// The full source text being lexed.
    source: &'src str,

    /// Current byte offset from the start of `source`.
    curr_byte_offset: usize,

    /// Current 0-based line number.
    curr_line: usize,

    /// Current UTF-8 character column (0-based).
    curr_col_utf8: usize,

    /// Current UTF-16 code unit column (0-based).
    curr_col_utf16: usize,

    /// Whether the previous character was `\r`, so that `\r\n` counts as a
    /// single line terminator.
    last_char_was_cr: bool,

    /// Whether the EOF token (or an error) has been emitted.
    finished: bool,
}

impl<'src> StrGraphQLTokenSource<'src> {
    /// Creates a new token source from a string slice.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            curr_byte_offset: 0,
            curr_line: 0,
            curr_col_utf8: 0,
            curr_col_utf16: 0,
            last_char_was_cr: false,
            finished: false,
        }
    }

    // Position and scanning helpers

    fn remaining(&self) -> &'src str {
        &self.source[self.curr_byte_offset..]
    }

    fn curr_position(&self) -> SourcePosition {
        SourcePosition::new(
            self.curr_line,
            self.curr_col_utf8,
            self.curr_col_utf16,
            self.curr_byte_offset,
        )
    }

    fn peek_char(&self) -> Option<char> {
        self.peek_char_nth(0)
    }

    fn peek_char_nth(&self, n: usize) -> Option<char> {
        self.remaining().chars().nth(n)
    }

    /// Consumes the next character and updates position tracking.
    ///
    /// Handles `\n`, `\r`, and `\r\n` line terminators and tracks both the
    /// UTF-8 character column and the UTF-16 code unit column.
    fn consume(&mut self) -> Option<char> {
        let ch = self.peek_char()?;

        if ch == '\n' {
            if self.last_char_was_cr {
                // Second half of `\r\n`; the line was already advanced.
                self.last_char_was_cr = false;
            } else {
                self.curr_line += 1;
                self.curr_col_utf8 = 0;
                self.curr_col_utf16 = 0;
            }
        } else if ch == '\r' {
            self.curr_line += 1;
            self.curr_col_utf8 = 0;
            self.curr_col_utf16 = 0;
            self.last_char_was_cr = true;
        } else {
            self.curr_col_utf8 += 1;
            self.curr_col_utf16 += ch.len_utf16();
            self.last_char_was_cr = false;
        }

        self.curr_byte_offset += ch.len_utf8();
        Some(ch)
    }

    fn consume_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(ch) = self.peek_char() {
            if !pred(ch) {
                break;
            }
            self.consume();
        }
    }

    /// Builds a token spanning from `start` to the current offset.
    fn make_token(
        &self,
        kind: GraphQLTokenKind,
        start: SourcePosition,
    ) -> GraphQLToken<'src> {
        let text = &self.source[start.byte_offset()..self.curr_byte_offset];
        GraphQLToken::new(kind, text, start)
    }

    fn punctuator(
        &mut self,
        kind: GraphQLTokenKind,
        start: SourcePosition,
    ) -> LexResult<'src> {
        self.consume();
        Ok(self.make_token(kind, start))
    }

    // Lexer main loop

    /// Advances to the next token, skipping whitespace and comments.
    fn next_token(&mut self) -> LexResult<'src> {
        loop {
            self.skip_whitespace();
            let start = self.curr_position();

            return match self.peek_char() {
                None => Ok(self.make_token(GraphQLTokenKind::Eof, start)),

                Some('#') => {
                    self.consume_while(|ch| ch != '\n' && ch != '\r');
                    continue;
                },

                Some('!') => self.punctuator(GraphQLTokenKind::Bang, start),
                Some('$') => self.punctuator(GraphQLTokenKind::Dollar, start),
                Some('(') => self.punctuator(GraphQLTokenKind::ParenOpen, start),
                Some(')') => self.punctuator(GraphQLTokenKind::ParenClose, start),
                Some(',') => self.punctuator(GraphQLTokenKind::Comma, start),
                Some(':') => self.punctuator(GraphQLTokenKind::Colon, start),
                Some('=') => self.punctuator(GraphQLTokenKind::Equals, start),
                Some('@') => self.punctuator(GraphQLTokenKind::At, start),
                Some('[') => {
                    self.punctuator(GraphQLTokenKind::SquareBracketOpen, start)
                },
                Some(']') => {
                    self.punctuator(GraphQLTokenKind::SquareBracketClose, start)
                },
                Some('{') => {
                    self.punctuator(GraphQLTokenKind::CurlyBraceOpen, start)
                },
                Some('}') => {
                    self.punctuator(GraphQLTokenKind::CurlyBraceClose, start)
                },

                Some('.') => self.lex_ellipsis(start),
                Some('"') => self.lex_string(start),
                Some(c) if is_name_start(c) => Ok(self.lex_name(start)),
                Some(c) if c == '-' || c.is_ascii_digit() => self.lex_number(start),

                Some(ch) => Err(GraphQLLexError::new(
                    start,
                    ch,
                    GraphQLLexErrorKind::UnexpectedCharacter,
                    format!("Unexpected character {}", describe_char(ch)),
                )),
            };
        }
    }

    /// Skips the GraphQL "ignored" whitespace characters (space, tab, line
    /// terminators, and the BOM).
    fn skip_whitespace(&mut self) {
        self.consume_while(|ch| matches!(ch, ' ' | '\t' | '\n' | '\r' | '\u{FEFF}'));
    }

    // Ellipsis lexing

    /// Lexes `...`. Anything shorter is an error; spaced-out dots are not
    /// consolidated.
    fn lex_ellipsis(&mut self, start: SourcePosition) -> LexResult<'src> {
        if self.remaining().starts_with("...") {
            self.consume();
            self.consume();
            self.consume();
            return Ok(self.make_token(GraphQLTokenKind::Ellipsis, start));
        }

        let message = if self.remaining().starts_with("..") {
            "Unexpected `..` (use `...` for spread operator)"
        } else {
            "Unexpected `.`"
        };
        Err(GraphQLLexError::new(
            start,
            '.',
            GraphQLLexErrorKind::InvalidDots,
            message,
        ))
    }

    // Name lexing

    /// Lexes a name or keyword.
    ///
    /// Names match the pattern: `/[_A-Za-z][_0-9A-Za-z]*/`
    ///
    /// `true`, `false`, and `null` are emitted as distinct token kinds.
    fn lex_name(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        self.consume();
        self.consume_while(is_name_continue);

        let name = &self.source[start.byte_offset()..self.curr_byte_offset];
        let kind = match name {
            "true" => GraphQLTokenKind::True,
            "false" => GraphQLTokenKind::False,
            "null" => GraphQLTokenKind::Null,
            _ => GraphQLTokenKind::Name,
        };

        self.make_token(kind, start)
    }

    // Number lexing

    /// Lexes an integer or float literal.
    ///
    /// Handles:
    /// - Optional negative sign: `-`
    /// - Integer part: `0` or `[1-9][0-9]*`
    /// - Optional decimal part: `.[0-9]+`
    /// - Optional exponent: `[eE][+-]?[0-9]+`
    fn lex_number(&mut self, start: SourcePosition) -> LexResult<'src> {
        let mut is_float = false;

        if self.peek_char() == Some('-') {
            self.consume();
        }

        match self.peek_char() {
            Some('0') => {
                self.consume();
                if let Some(ch) = self.peek_char()
                    && ch.is_ascii_digit() {
                    return Err(self.number_error(
                        start,
                        "Invalid number: leading zeros are not allowed",
                    ));
                }
            },
            Some(ch) if ch.is_ascii_digit() => {
                self.consume_while(|ch| ch.is_ascii_digit());
            },
            Some(_) | None => {
                return Err(GraphQLLexError::new(
                    start,
                    '-',
                    GraphQLLexErrorKind::InvalidNumber,
                    "Unexpected `-`",
                ));
            },
        }

        // A `.` only continues the number when a digit follows it.
        if self.peek_char() == Some('.')
            && let Some(ch) = self.peek_char_nth(1)
            && ch.is_ascii_digit() {
            is_float = true;
            self.consume();
            self.consume_while(|ch| ch.is_ascii_digit());
        }

        if let Some(ch) = self.peek_char()
            && (ch == 'e' || ch == 'E') {
            is_float = true;
            self.consume();

            if let Some(ch) = self.peek_char()
                && (ch == '+' || ch == '-') {
                self.consume();
            }

            if !matches!(self.peek_char(), Some(ch) if ch.is_ascii_digit()) {
                return Err(self.number_error(
                    start,
                    "Invalid number: exponent must have at least one digit",
                ));
            }
            self.consume_while(|ch| ch.is_ascii_digit());
        }

        // `123abc` is not a number followed by a name.
        if let Some(ch) = self.peek_char()
            && (is_name_start(ch) || ch == '.') {
            return Err(self.number_error(
                start,
                "Invalid number: unexpected character after numeric literal",
            ));
        }

        let kind = if is_float {
            GraphQLTokenKind::FloatValue
        } else {
            GraphQLTokenKind::IntValue
        };
        Ok(self.make_token(kind, start))
    }

    fn number_error(
        &self,
        start: SourcePosition,
        message: &str,
    ) -> GraphQLLexError {
        let invalid_text =
            &self.source[start.byte_offset()..self.curr_byte_offset];
        let character = self.peek_char().unwrap_or('-');
        GraphQLLexError::new(
            self.curr_position(),
            character,
            GraphQLLexErrorKind::InvalidNumber,
            format!("{message}: `{invalid_text}`"),
        )
    }

    // String lexing

    /// Lexes a string literal (single-line or block string). The token text
    /// keeps its quotes and escape sequences verbatim.
    fn lex_string(&mut self, start: SourcePosition) -> LexResult<'src> {
        if self.remaining().starts_with("\"\"\"") {
            return self.lex_block_string(start);
        }

        self.consume();
        loop {
            match self.peek_char() {
                None | Some('\n') | Some('\r') => {
                    return Err(GraphQLLexError::new(
                        start,
                        '"',
                        GraphQLLexErrorKind::UnterminatedString,
                        "Unterminated string literal",
                    ));
                },
                Some('"') => {
                    self.consume();
                    break;
                },
                Some('\\') => {
                    self.consume();
                    if self.peek_char().is_some() {
                        self.consume();
                    }
                },
                Some(_) => {
                    self.consume();
                },
            }
        }

        Ok(self.make_token(GraphQLTokenKind::StringValue, start))
    }

    fn lex_block_string(&mut self, start: SourcePosition) -> LexResult<'src> {
        self.consume();
        self.consume();
        self.consume();

        loop {
            if self.remaining().starts_with("\\\"\"\"") {
                for _ in 0..4 {
                    self.consume();
                }
                continue;
            }
            if self.remaining().starts_with("\"\"\"") {
                self.consume();
                self.consume();
                self.consume();
                break;
            }
            if self.consume().is_none() {
                return Err(GraphQLLexError::new(
                    start,
                    '"',
                    GraphQLLexErrorKind::UnterminatedString,
                    "Unterminated block string",
                ));
            }
        }

        Ok(self.make_token(GraphQLTokenKind::StringValue, start))
    }
}

// Iterator implementation

impl<'src> Iterator for StrGraphQLTokenSource<'src> {
    type Item = LexResult<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = self.next_token();
        match &result {
            Ok(token) if token.kind != GraphQLTokenKind::Eof => (),
            _ => self.finished = true,
        }

        Some(result)
    }
}

// Helper functions

/// Returns `true` if `ch` can start a GraphQL name.
fn is_name_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

/// Returns `true` if `ch` can continue a GraphQL name.
fn is_name_continue(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphanumeric()
}

/// Returns a human-readable description of a character for error messages.
///
/// Printable characters are shown in backticks; invisible and control
/// characters are shown as their code point.
fn describe_char(ch: char) -> String {
    if ch.is_control() || (ch.is_whitespace() && ch != ' ') {
        format!("U+{:04X}", ch as u32)
    } else {
        format!("`{ch}`")
    }
}
