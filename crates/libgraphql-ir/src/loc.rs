use crate::ast;
use std::path::Path;
use std::path::PathBuf;

/// Very similar to graphql_parser's [Pos](graphql_parser::Pos), except it
/// includes an optional path to the file the position refers to.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FilePosition {
    pub col: usize,
    pub file: Option<PathBuf>,
    pub line: usize,
}
impl FilePosition {
    pub(crate) fn from_pos(file: Option<&Path>, pos: ast::AstPos) -> Self {
        Self {
            col: pos.column,
            file: file.map(|f| f.to_path_buf()),
            line: pos.line,
        }
    }
}
impl std::fmt::Display for FilePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{}:{}:{}", file.display(), self.line, self.col),
            None => write!(f, "{}:{}", self.line, self.col),
        }
    }
}

/// Where something was defined: in a schema document, in an executable
/// document, or implicitly by GraphQL itself (built-in scalars, `__typename`).
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum SourceLocation {
    ExecutableDocument(FilePosition),
    GraphQLBuiltIn,
    Schema(FilePosition),
}
impl SourceLocation {
    pub(crate) fn executable(file: Option<&Path>, pos: ast::AstPos) -> Self {
        Self::ExecutableDocument(FilePosition::from_pos(file, pos))
    }

    pub(crate) fn schema(file: Option<&Path>, pos: ast::AstPos) -> Self {
        Self::Schema(FilePosition::from_pos(file, pos))
    }

    pub fn file_position(&self) -> Option<&FilePosition> {
        match self {
            Self::ExecutableDocument(pos)
            | Self::Schema(pos) => Some(pos),
            Self::GraphQLBuiltIn => None,
        }
    }
}
impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExecutableDocument(pos)
            | Self::Schema(pos) => pos.fmt(f),
            Self::GraphQLBuiltIn => f.write_str("<graphql built-in>"),
        }
    }
}
