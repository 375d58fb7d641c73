//! # Error reporting for reading of linear programs
//!
//! A collection of enums and structures describing any problems encountered during reading and
//! parsing.
use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::io;

use crate::algorithm::revised_simplex::state::SizeExceeded;

/// An `Import` error is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy.
#[derive(Debug)]
pub enum Import {
    /// The input couldn't be opened, or reading was interrupted.
    IO(io::Error),
    /// Contents of the input could not be parsed into a linear program.
    ///
    /// # Note
    ///
    /// If the linear program is inconsistent, that will not be represented with this error. This
    /// variant should only be created for syntactically incorrect input.
    Parse(ParseError),
    /// The announced dimensions are larger than the solver accepts.
    ///
    /// Detected before any coefficient is read.
    Size(SizeExceeded),
    /// There is a logical inconsistency in the linear program that was read.
    LinearProgram(InconsistencyError),
}

impl Display for Import {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Import::IO(error) => error.fmt(f),
            Import::Parse(error) => error.fmt(f),
            Import::Size(error) => error.fmt(f),
            Import::LinearProgram(error) => error.fmt(f),
        }
    }
}

impl Error for Import {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Import::IO(error) => Some(error),
            Import::Parse(error) => Some(error),
            Import::Size(error) => Some(error),
            Import::LinearProgram(error) => Some(error),
        }
    }
}

impl From<io::Error> for Import {
    fn from(error: io::Error) -> Self {
        Import::IO(error)
    }
}

impl From<ParseError> for Import {
    fn from(error: ParseError) -> Self {
        Import::Parse(error)
    }
}

impl From<SizeExceeded> for Import {
    fn from(error: SizeExceeded) -> Self {
        Import::Size(error)
    }
}

impl From<InconsistencyError> for Import {
    fn from(error: InconsistencyError) -> Self {
        Import::LinearProgram(error)
    }
}

/// A `ParseError` represents all errors encountered during parsing.
///
/// It may recursively hold more ParseErrors to provide more detail. At the end of this chain, there
/// may be a token location containing the token number and the token, at which the error was
/// caused.
#[derive(Debug)]
pub struct ParseError {
    description: String,
    source: Option<ParseErrorSource>,
}

/// A `ParseErrorSource` can be used with a `ParseError` to describe its cause.
///
/// It can be either a token number and token contents, or another `ParseError` with its own
/// description and optionally, a cause.
#[derive(Debug)]
enum ParseErrorSource {
    TokenLocation(usize, String),
    Nested(Box<ParseError>),
}

/// A `TokenLocation` references a token of the input by its 1-based position among all
/// whitespace separated tokens.
pub(super) type TokenLocation<'a> = (usize, &'a str);

impl ParseError {
    /// Create a new `ParseError` with only a description.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into(), source: None, }
    }

    /// Create a new `ParseError` instance with a `TokenLocation` as a cause.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    /// * `token_location`: Position and contents of the token that caused the error.
    pub fn with_token_location(
        description: impl Into<String>,
        token_location: TokenLocation,
    ) -> Self {
        let (position, token) = token_location;
        Self {
            description: description.into(),
            source: Some(ParseErrorSource::TokenLocation(position, token.to_string())),
        }
    }

    /// Wrap a new `ParseError` around an existing one.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    /// * `parse_error`: What caused this `ParseError`.
    pub fn with_cause(description: impl Into<String>, parse_error: ParseError) -> Self {
        Self {
            description: description.into(),
            source: Some(ParseErrorSource::Nested(Box::new(parse_error))),
        }
    }

    /// Get all descriptions in the chain, leading up to this one.
    fn chain_description(&self) -> Vec<String> {
        let mut descriptions = vec![self.description.clone()];

        if let Some(ref source) = self.source {
            match source {
                ParseErrorSource::TokenLocation(position, token) => {
                    descriptions.push(format!("\tCaused at token\t{}:\t\"{}\"", position, token));
                }
                ParseErrorSource::Nested(error) => {
                    descriptions.append(&mut error.chain_description());
                }
            }
        }

        descriptions
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ParseError: {}", self.chain_description().join("\n"))
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        if let Some(ParseErrorSource::Nested(ref error)) = self.source {
            Some(error.as_ref())
        } else {
            None
        }
    }
}

/// An `InconsistencyError` is returned when the data of a linear program doesn't fit together.
///
/// This `Error` is not returned when the linear program is infeasible or unbounded. It is meant
/// only for descriptions of linear programs, and should not be used after the solver started.
#[derive(Debug, Eq, PartialEq)]
pub struct InconsistencyError {
    description: String,
}

impl InconsistencyError {
    /// Wrap a text in an `InconsistencyError`.
    ///
    /// # Arguments
    ///
    /// * `description`: A human-readable text meant for the end user.
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into(), }
    }
}

impl Display for InconsistencyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ProgramError: {}", self.description)
    }
}

impl Error for InconsistencyError {}

#[cfg(test)]
mod test {
    use std::error::Error;

    use crate::io::error::{Import, InconsistencyError, ParseError};

    #[test]
    fn parse_error_chain() {
        let inner = ParseError::with_token_location("not a number", (4, "abc"));
        let outer = ParseError::with_cause("couldn't read the objective", inner);

        let text = outer.to_string();
        assert!(text.starts_with("ParseError: couldn't read the objective"));
        assert!(text.contains("not a number"));
        assert!(text.contains("Caused at token\t4:\t\"abc\""));
        assert!(outer.source().is_some());
    }

    #[test]
    fn import_wraps() {
        let error: Import = InconsistencyError::new("b has the wrong length").into();
        assert_eq!(error.to_string(), "ProgramError: b has the wrong length");
        assert!(error.source().is_some());
    }
}
