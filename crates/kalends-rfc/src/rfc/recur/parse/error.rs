//! Recurrence parsing error types.

use std::fmt;

/// Result type for recurrence parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Error type for recurrence parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Kind of error.
    pub kind: ParseErrorKind,
    /// Line number where the error occurred (1-based).
    pub line: usize,
    /// Column number where the error occurred (1-based).
    pub column: usize,
    /// Additional context about the error.
    pub context: Option<String>,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(kind: ParseErrorKind, line: usize, column: usize) -> Self {
        Self {
            kind,
            line,
            column,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at line {}, column {}", self.kind, self.line, self.column)?;
        if let Some(ref ctx) = self.context {
            write!(f, ": {ctx}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Kinds of parse errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Input ended before a rule was found.
    UnexpectedEof,
    /// Line is neither a known property nor a rule body.
    InvalidContentLine,
    /// Missing colon separator.
    MissingColon,
    /// Invalid date format.
    InvalidDate,
    /// Rule part is not of the form `NAME=VALUE`, or its name is unknown.
    InvalidRRule,
    /// Rule has no FREQ part.
    MissingFrequency,
    /// Invalid frequency.
    InvalidFrequency,
    /// Invalid weekday.
    InvalidWeekday,
    /// Invalid integer value.
    InvalidInteger,
    /// The same rule part or property appears twice.
    DuplicatePart,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof => write!(f, "unexpected end of input"),
            Self::InvalidContentLine => write!(f, "invalid content line format"),
            Self::MissingColon => write!(f, "missing colon separator"),
            Self::InvalidDate => write!(f, "invalid date format"),
            Self::InvalidRRule => write!(f, "invalid recurrence rule"),
            Self::MissingFrequency => write!(f, "missing FREQ rule part"),
            Self::InvalidFrequency => write!(f, "invalid frequency"),
            Self::InvalidWeekday => write!(f, "invalid weekday"),
            Self::InvalidInteger => write!(f, "invalid integer value"),
            Self::DuplicatePart => write!(f, "duplicate rule part"),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
