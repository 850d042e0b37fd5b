//! Crate-level error types.

use std::fmt;

/// Errors produced by the scroll-orbit crate.
#[derive(Debug)]
pub enum OrbitError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// A path, region or camera parameter failed validation.
    InvalidParameter(String),
    /// The external frame renderer reported a failure.
    Render(String),
}

impl fmt::Display for OrbitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::InvalidParameter(msg) => {
                write!(f, "invalid parameter: {msg}")
            }
            Self::Render(msg) => write!(f, "render error: {msg}"),
        }
    }
}

impl std::error::Error for OrbitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for OrbitError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_message() {
        let err = OrbitError::InvalidParameter("radius_x must be > 0".into());
        assert_eq!(err.to_string(), "invalid parameter: radius_x must be > 0");
    }

    #[test]
    fn io_errors_expose_source() {
        use std::error::Error as _;
        let err = OrbitError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert!(err.source().is_some());
        assert!(OrbitError::Render("lost".into()).source().is_none());
    }
}
