// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Assembly(AssemblyError),
    Image(String),
}

/// Specific error types for the static-page assembly step.
/// Used to report which partial broke the build.
#[derive(Debug, Clone)]
pub enum AssemblyError {
    /// A named section partial could not be read.
    MissingPartial { name: String, detail: String },

    /// The concatenated page could not be written.
    WriteFailed { path: String, detail: String },
}

impl fmt::Display for AssemblyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssemblyError::MissingPartial { name, detail } => {
                write!(f, "cannot read partial '{}': {}", name, detail)
            }
            AssemblyError::WriteFailed { path, detail } => {
                write!(f, "cannot write output '{}': {}", path, detail)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Assembly(e) => write!(f, "Assembly Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
        }
    }
}

impl From<AssemblyError> for Error {
    fn from(err: AssemblyError) -> Self {
        Error::Assembly(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn assembly_error_names_the_partial() {
        let err: Error = AssemblyError::MissingPartial {
            name: "hero".into(),
            detail: "No such file or directory".into(),
        }
        .into();
        let rendered = format!("{}", err);
        assert!(rendered.contains("hero"));
        assert!(rendered.contains("No such file"));
    }

    #[test]
    fn assembly_error_write_failure_names_the_path() {
        let err = AssemblyError::WriteFailed {
            path: "/out/index.html".into(),
            detail: "Permission denied".into(),
        };
        assert!(format!("{}", err).contains("/out/index.html"));
    }
}
