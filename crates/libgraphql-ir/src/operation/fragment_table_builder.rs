use crate::ast;
use crate::loc;
use crate::operation::FragmentEntry;
use crate::operation::FragmentTable;
use indexmap::IndexMap;
use std::path::Path;
use thiserror::Error;

/// Builder for constructing a [`FragmentTable`].
///
/// Fragments may be collected from several documents, e.g. a shared library
/// of fragments plus the document holding the operations that spread them.
///
/// ```
/// use libgraphql_ir::ast;
/// use libgraphql_ir::operation::FragmentTableBuilder;
///
/// let shared = ast::operation::parse("fragment UserFields on User { id name }").unwrap();
/// let local = ast::operation::parse(
///     "query { me { ...UserFields ...Extra } } fragment Extra on User { email }",
/// ).unwrap();
///
/// let mut builder = FragmentTableBuilder::new();
/// builder.add_from_document_ast(&shared, None).unwrap();
/// builder.add_from_document_ast(&local, None).unwrap();
/// let table = builder.build();
///
/// assert_eq!(table.names().collect::<Vec<_>>(), vec!["UserFields", "Extra"]);
/// ```
#[derive(Debug, Default)]
pub struct FragmentTableBuilder<'ast> {
    fragments: IndexMap<&'ast str, FragmentEntry<'ast>>,
}

impl<'ast> FragmentTableBuilder<'ast> {
    pub fn new() -> Self {
        Self {
            fragments: IndexMap::new(),
        }
    }

    /// Add a single fragment definition.
    ///
    /// Returns an error if a fragment with the same name was already added.
    pub fn add_fragment(
        &mut self,
        definition: &'ast ast::operation::FragmentDefinition,
        file_path: Option<&'ast Path>,
    ) -> Result<(), FragmentTableBuildError> {
        let entry = FragmentEntry {
            definition,
            file_path,
        };

        if let Some(existing) = self.fragments.get(entry.name()) {
            return Err(FragmentTableBuildError::DuplicateFragmentDefinition {
                first_def_location: existing.def_location(),
                fragment_name: entry.name().to_string(),
                second_def_location: entry.def_location(),
            });
        }

        self.fragments.insert(entry.name(), entry);
        Ok(())
    }

    /// Add every fragment definition in `document`. Operation definitions
    /// are ignored.
    pub fn add_from_document_ast(
        &mut self,
        document: &'ast ast::operation::Document,
        file_path: Option<&'ast Path>,
    ) -> Result<(), Vec<FragmentTableBuildError>> {
        let errors: Vec<_> = document.definitions
            .iter()
            .filter_map(|def| match def {
                ast::operation::Definition::Fragment(frag_def) => Some(frag_def),
                ast::operation::Definition::Operation(_) => None,
            })
            .filter_map(|frag_def| self.add_fragment(frag_def, file_path).err())
            .collect();

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(())
    }

    pub fn build(self) -> FragmentTable<'ast> {
        FragmentTable {
            fragments: self.fragments,
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum FragmentTableBuildError {
    #[error(
        "Duplicate fragment definition: '{fragment_name}' (at \
        {first_def_location} and {second_def_location})"
    )]
    DuplicateFragmentDefinition {
        first_def_location: loc::SourceLocation,
        fragment_name: String,
        second_def_location: loc::SourceLocation,
    },
}
