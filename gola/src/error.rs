use thiserror::Error;

/// Why the lexer rejected a piece of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    InvalidCharacter(char),
    /// A letter and a digit touch without whitespace, e.g. `x1` or `1x`.
    Adjacent(char),
    NumberOutOfRange(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} at column {column}", describe(.kind))]
pub struct LexError {
    pub kind: LexErrorKind,
    /// 1-based column of the first offending character.
    pub column: usize,
}

fn describe(kind: &LexErrorKind) -> String {
    match kind {
        LexErrorKind::InvalidCharacter(ch) => format!("invalid character {:?}", ch),
        LexErrorKind::Adjacent(ch) => format!("{:?} must be separated from the previous token", ch),
        LexErrorKind::NumberOutOfRange(digits) => format!("integer literal {} is out of range", digits),
    }
}

#[derive(Debug, Error)]
pub enum GolaError {
    #[error("lex error: {0}")]
    Lex(#[from] LexError),

    #[error("expression syntax error: {0}")]
    ExpressionSyntax(String),

    #[error("statement syntax error: {0}")]
    StatementSyntax(String),

    #[error("undefined variable `{0}`")]
    UndefinedVariable(String),

    #[error("division by zero")]
    DivisionByZero,

    #[error("arithmetic overflow")]
    Overflow,

    #[error("input {0:?} is not an integer literal")]
    InputFormat(String),

    #[error("no input left for `read`")]
    InputUnavailable,

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// A failure tied to the source line that caused it.
#[derive(Debug, Error)]
#[error("line {line}: {error}")]
pub struct LineError {
    pub line: usize,
    #[source]
    pub error: GolaError,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lex_error_reports_column() {
        let err = LexError {
            kind: LexErrorKind::InvalidCharacter(';'),
            column: 7,
        };
        assert_eq!(err.to_string(), "invalid character ';' at column 7");
    }

    #[test]
    fn lex_error_converts_into_gola_error() {
        let err: GolaError = LexError {
            kind: LexErrorKind::Adjacent('1'),
            column: 2,
        }
        .into();
        assert!(matches!(err, GolaError::Lex(_)));
        assert!(err.to_string().starts_with("lex error:"));
    }

    #[test]
    fn line_error_prefixes_line_number() {
        let err = LineError {
            line: 3,
            error: GolaError::UndefinedVariable("q".to_string()),
        };
        assert_eq!(err.to_string(), "line 3: undefined variable `q`");
    }

    fn _assert_send_sync_static<T: Send + Sync + 'static>() {}

    #[test]
    fn gola_error_is_send_sync_static() {
        _assert_send_sync_static::<GolaError>();
        _assert_send_sync_static::<LineError>();
    }
}
