use crate::GraphQLParseErrorKind;
use crate::SourcePosition;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;

/// A parse error with location information.
///
/// Parse errors are always scoped to the single document being parsed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct GraphQLParseError {
    /// Human-readable primary error message.
    ///
    /// Examples: "expected `:`, found integer `1`", "expected name, found end
    /// of input"
    message: String,

    /// Where the error was detected.
    position: SourcePosition,

    /// Categorized error kind for programmatic handling.
    kind: GraphQLParseErrorKind,
}

impl GraphQLParseError {
    pub fn new(
        message: impl Into<String>,
        position: SourcePosition,
        kind: GraphQLParseErrorKind,
    ) -> Self {
        Self {
            message: message.into(),
            position,
            kind,
        }
    }

    /// Builds the error reported when `found` did not match any of the
    /// `expected` token kinds.
    pub fn unexpected(
        found: &GraphQLToken<'_>,
        expected: Vec<GraphQLTokenKind>,
    ) -> Self {
        let expected_display = describe_expected(&expected);
        if found.kind == GraphQLTokenKind::Eof {
            Self::new(
                format!("expected {expected_display}, found end of input"),
                found.position,
                GraphQLParseErrorKind::UnexpectedEof { expected },
            )
        } else {
            Self::new(
                format!(
                    "expected {expected_display}, found {} `{}`",
                    found.kind.display_name(),
                    found.text,
                ),
                found.position,
                GraphQLParseErrorKind::UnexpectedToken {
                    expected,
                    found: found.text.to_string(),
                },
            )
        }
    }

    /// Returns the human-readable error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the position where the error was detected.
    pub fn position(&self) -> SourcePosition {
        self.position
    }

    /// Returns the categorized error kind.
    pub fn kind(&self) -> &GraphQLParseErrorKind {
        &self.kind
    }

    /// Formats this error as a single-line summary.
    ///
    /// Produces output like:
    /// ```text
    /// 1:14: error: expected `:`, found integer `1`
    /// ```
    pub fn format_oneline(&self) -> String {
        format!("{}: error: {}", self.position, self.message)
    }

    /// Formats this error with the offending source line and a caret under
    /// the error column.
    ///
    /// ```text
    /// error: expected `:`, found integer `1`
    ///   --> <input>:1:14
    ///    |
    ///  1 | query { user(id 1) }
    ///    |                 ^
    /// ```
    pub fn format_detailed(&self, source: Option<&str>) -> String {
        let mut output = String::new();
        output.push_str("error: ");
        output.push_str(&self.message);
        output.push('\n');
        output.push_str(&format!("  --> <input>:{}\n", self.position));

        let line_num = self.position.line();
        if let Some(line_content) = source.and_then(|src| source_line(src, line_num)) {
            let display_line_num = line_num + 1;
            let width = display_line_num.to_string().len().max(2);
            output.push_str(&format!("{:>width$} |\n", ""));
            output.push_str(&format!(
                "{display_line_num:>width$} | {line_content}\n"
            ));
            output.push_str(&format!(
                "{:>width$} | {:>padding$}^\n",
                "",
                "",
                padding = self.position.col_utf8(),
            ));
        }

        output
    }
}

/// The 0-based `line` of `source`, splitting on `\n`, `\r\n` and a lone
/// `\r` like the tokenizer does.
fn source_line(source: &str, line: usize) -> Option<&str> {
    let mut rest = source;
    for _ in 0..line {
        let end = rest.find(['\n', '\r'])?;
        let terminator_len = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + terminator_len..];
    }
    let end = rest.find(['\n', '\r']).unwrap_or(rest.len());
    Some(&rest[..end])
}

fn describe_expected(expected: &[GraphQLTokenKind]) -> String {
    match expected {
        [] => "more input".to_string(),
        [only] => only.display_name().to_string(),
        [init @ .., last] => format!(
            "one of {} or {}",
            init.iter()
                .map(|kind| kind.display_name())
                .collect::<Vec<_>>()
                .join(", "),
            last.display_name(),
        ),
    }
}
