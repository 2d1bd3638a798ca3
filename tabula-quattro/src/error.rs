//! Errors produced while renaming or packaging fonts.

use std::path::PathBuf;

use thiserror::Error;
use write_fonts::{
    read::ReadError,
    types::NameId,
    BuilderError,
};

use crate::scheme::Selector;

/// Anything that can stop a run.
///
/// There is no recovery: the first error aborts the remaining work, and
/// files written before it stay on disk.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Unrecognized style '{0}'")]
    UnrecognizedStyle(String),

    #[error("No {name_id} record{}", .selector.map(|s| format!(" for {s}")).unwrap_or_default())]
    MissingName {
        name_id: NameId,
        selector: Option<Selector>,
    },

    #[error("Malformed version string '{0}'")]
    MalformedVersion(String),

    #[error("Failed to read font: {0}")]
    Read(#[from] ReadError),

    #[error(transparent)]
    Build(#[from] BuilderError),

    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write archive: {0}")]
    Zip(#[from] zip::result::ZipError),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Error {
        let path = path.into();
        move |source| Error::Io { path, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheme::WINDOWS_ENGLISH;

    #[test]
    fn missing_name_message() {
        let err = Error::MissingName {
            name_id: NameId::SUBFAMILY_NAME,
            selector: Some(WINDOWS_ENGLISH),
        };
        assert_eq!(err.to_string(), "No SUBFAMILY_NAME record for (3, 1, 0x409)");

        let err = Error::MissingName {
            name_id: NameId::VERSION_STRING,
            selector: None,
        };
        assert_eq!(err.to_string(), "No VERSION_STRING record");
    }
}
