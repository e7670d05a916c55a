use std::fmt;

/// An option name as given on the command line, in either its short or long form.
///
/// Most query methods accept `impl Into<Name>`, so a bare `char` or `&str` works:
/// `parser.value('v')` and `parser.value("verbose")` address the same option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Name {
    Short(char),
    Long(String),
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Name::Short(c) => write!(f, "-{c}"),
            Name::Long(s) => write!(f, "--{s}"),
        }
    }
}

impl From<char> for Name {
    fn from(c: char) -> Self {
        Name::Short(c)
    }
}

impl From<&str> for Name {
    fn from(s: &str) -> Self {
        Name::Long(s.to_string())
    }
}

impl From<String> for Name {
    fn from(s: String) -> Self {
        Name::Long(s)
    }
}

/// A variant of this enum is returned when registration, parsing or value retrieval
/// cannot proceed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A short character or long name (exact or abbreviated) is not registered.
    #[error("unknown option '{0}'")]
    UnknownOption(Name),

    /// An abbreviated long option prefix matched more than one registered long name.
    #[error("option '--{0}' is ambiguous")]
    AmbiguousOption(String),

    /// A required-argument option reached the end of input without a value token.
    #[error("option '{0}' requires an argument")]
    MissingArgument(Name),

    /// An inline `=value` was supplied to a long option that takes no argument.
    #[error("option '--{name}' does not take an argument (got '{value}')")]
    DoesNotTakeArgument { name: String, value: String },

    /// Typed value retrieval found neither a parsed value nor a default.
    #[error("option '{0}' has no value")]
    ValueEmpty(Name),

    /// An option was registered under a short or long name that is already taken.
    #[error("option '{0}' is already registered")]
    DuplicateOption(Name),

    /// A value could not be converted to the requested type.
    #[error("invalid value '{value}' for option '{name}': {cause}")]
    InvalidValue {
        name: Name,
        value: String,
        cause: String,
    },
}
