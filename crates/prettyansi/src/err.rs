//! Helper module with this crate's error type.
//!
//! Negotiation errors never leave the crate. They explain why a palette ended
//! up plain and show up in the log, but callers only ever observe the empty
//! palette.

/// The enumeration of error kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ErrorKind {
    /// The caller asked for plain output.
    Disabled,
    /// The `NO_COLOR` environment variable is defined.
    EnvironmentDisabled,
    /// Standard output is not connected to a terminal.
    NotATerminal,
    /// `TERM` is undefined or `dumb`.
    UnsupportedTerminalType,
    /// A standard stream has no valid console handle.
    HandleUnavailable,
    /// Reading a console mode failed.
    ModeQueryFailed,
    /// Writing a console mode failed.
    ModeSetFailed,
    /// The operating system predates virtual terminal processing.
    UnsupportedOsVersion,
}

impl ErrorKind {
    /// Turn the error kind to an error message.
    pub fn as_str(&self) -> &'static str {
        match *self {
            Self::Disabled => "colors disabled by caller",
            Self::EnvironmentDisabled => "colors disabled by NO_COLOR",
            Self::NotATerminal => "standard output is not a terminal",
            Self::UnsupportedTerminalType => "TERM is undefined or dumb",
            Self::HandleUnavailable => "standard stream has no console handle",
            Self::ModeQueryFailed => "unable to read console mode",
            Self::ModeSetFailed => "unable to write console mode",
            Self::UnsupportedOsVersion => "operating system lacks virtual terminal processing",
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error { kind, source: None }
    }
}

/// A negotiation error.
#[derive(Debug)]
pub(crate) struct Error {
    kind: ErrorKind,
    source: Option<std::io::Error>,
}

impl Error {
    /// Create a new error with an underlying operating system error.
    pub fn with_source(kind: ErrorKind, source: std::io::Error) -> Self {
        Self {
            kind,
            source: Some(source),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.kind.as_str())?;
        if let Some(ref source) = self.source {
            write!(f, ": {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|error| error as &(dyn std::error::Error + 'static))
    }
}

/// Convenience alias for negotiation results.
pub(crate) type Result<T> = core::result::Result<T, Error>;
