use crate::compat::TryReserveError;

/// Errors reported by URL cracking, creation and escaping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Misconfigured arguments: version tag mismatch, a zero-capacity field buffer,
    /// probing a transformed value, or a password without a user name
    InvalidParameter,
    /// Missing `:` or a scheme other than `http`/`https`
    UnrecognizedScheme,
    /// Missing `//`, empty authority, or a bad port
    MalformedUrl,
    /// Output does not fit; `required` includes room for the NUL terminator
    InsufficientBuffer { required: usize },
    /// Working copy allocation failed
    OutOfMemory,
}

impl Error {
    /// The equivalent WinHTTP/Win32 error code
    pub fn code(self) -> u32 {
        match self {
            Self::InvalidParameter => 87,
            Self::UnrecognizedScheme => 12006,
            Self::MalformedUrl => 12005,
            Self::InsufficientBuffer { .. } => 122,
            Self::OutOfMemory => 14,
        }
    }
}

impl From<TryReserveError> for Error {
    fn from(_: TryReserveError) -> Self {
        Self::OutOfMemory
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidParameter => f.write_str("Invalid parameter"),
            Self::UnrecognizedScheme => f.write_str("Unrecognized scheme"),
            Self::MalformedUrl => f.write_str("Malformed URL"),
            Self::InsufficientBuffer { required } => {
                write!(f, "Insufficient buffer, {required} units required")
            }
            Self::OutOfMemory => f.write_str("Out of memory"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type for URL operations
pub type Result<T> = core::result::Result<T, Error>;
