//! Loading GraphQL sources from disk.

use crate::ast;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, ReadContentError>;

/// Read a UTF-8 encoded GraphQL file from disk.
pub fn read_content(file_path: impl AsRef<Path>) -> Result<String> {
    let file_path = file_path.as_ref();
    if !file_path.is_file() {
        return Err(ReadContentError::PathIsNotAFile(file_path.to_path_buf()));
    }

    let bytes = std::fs::read(file_path).map_err(|err| ReadContentError::FileReadError {
        file_path: file_path.to_path_buf(),
        err,
    })?;

    String::from_utf8(bytes).map_err(|err| ReadContentError::FileDecodeError {
        file_path: file_path.to_path_buf(),
        err,
    })
}

/// Read and parse an executable document (operations and fragments).
pub fn read_executable_document(
    file_path: impl AsRef<Path>,
) -> Result<ast::operation::Document> {
    let file_path = file_path.as_ref();
    let content = read_content(file_path)?;
    ast::operation::parse(content.as_str()).map_err(|err| ReadContentError::ParseError {
        file_path: file_path.to_path_buf(),
        err: err.to_string(),
    })
}

#[derive(Debug, Error)]
pub enum ReadContentError {
    #[error("File at {file_path:?} is not valid UTF-8: {err}")]
    FileDecodeError {
        file_path: PathBuf,
        err: std::string::FromUtf8Error,
    },

    #[error("Failed to read file at {file_path:?}: {err}")]
    FileReadError {
        file_path: PathBuf,
        err: std::io::Error,
    },

    #[error("Failed to parse executable document at {file_path:?}: {err}")]
    ParseError {
        file_path: PathBuf,
        err: String,
    },

    #[error("Path {0:?} is not a file")]
    PathIsNotAFile(PathBuf),
}
impl ReadContentError {
    pub fn file_path(&self) -> &Path {
        match self {
            Self::FileDecodeError { file_path, .. }
            | Self::FileReadError { file_path, .. }
            | Self::ParseError { file_path, .. }
            | Self::PathIsNotAFile(file_path) => file_path.as_path(),
        }
    }
}
// `std::io::Error` isn't `PartialEq`; read errors compare by kind.
impl std::cmp::PartialEq for ReadContentError {
    fn eq(&self, other: &Self) -> bool {
        use ReadContentError as E;
        self.file_path() == other.file_path() && match (self, other) {
            (E::FileDecodeError { err: a, .. }, E::FileDecodeError { err: b, .. }) => a == b,
            (E::FileReadError { err: a, .. }, E::FileReadError { err: b, .. }) =>
                a.kind() == b.kind(),
            (E::ParseError { err: a, .. }, E::ParseError { err: b, .. }) => a == b,
            (E::PathIsNotAFile(_), E::PathIsNotAFile(_)) => true,
            _ => false,
        }
    }
}
