use crate::ast;
use crate::loc;
use indexmap::IndexMap;
use std::path::Path;

/// A named fragment definition borrowed from a parsed document, along with
/// the path of the file it came from (if any).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FragmentEntry<'ast> {
    pub(super) definition: &'ast ast::operation::FragmentDefinition,
    pub(super) file_path: Option<&'ast Path>,
}
impl<'ast> FragmentEntry<'ast> {
    pub fn def_location(&self) -> loc::SourceLocation {
        loc::SourceLocation::executable(self.file_path, self.definition.position)
    }

    pub fn definition(&self) -> &'ast ast::operation::FragmentDefinition {
        self.definition
    }

    pub fn file_path(&self) -> Option<&'ast Path> {
        self.file_path
    }

    pub fn name(&self) -> &'ast str {
        let definition = self.definition;
        definition.name.as_str()
    }

    /// The name of the type this fragment's type condition names.
    pub fn type_condition_name(&self) -> &'ast str {
        let definition = self.definition;
        let ast::operation::TypeCondition::On(type_name) = &definition.type_condition;
        type_name.as_str()
    }
}

/// Read-only lookup table from fragment name to fragment definition.
///
/// The table borrows every definition from the documents it was built from;
/// it never copies or mutates AST nodes. Build one with
/// [`FragmentTableBuilder`](crate::operation::FragmentTableBuilder) or
/// [`FragmentTable::from_document`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FragmentTable<'ast> {
    pub(super) fragments: IndexMap<&'ast str, FragmentEntry<'ast>>,
}
impl<'ast> FragmentTable<'ast> {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_document(
        document: &'ast ast::operation::Document,
        file_path: Option<&'ast Path>,
    ) -> Result<Self, Vec<crate::operation::FragmentTableBuildError>> {
        let mut builder = crate::operation::FragmentTableBuilder::new();
        builder.add_from_document_ast(document, file_path)?;
        Ok(builder.build())
    }

    pub fn get(&self, fragment_name: &str) -> Option<&FragmentEntry<'ast>> {
        self.fragments.get(fragment_name)
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Fragment names in the order their definitions were added.
    pub fn names(&self) -> impl Iterator<Item = &'ast str> + '_ {
        self.fragments.keys().copied()
    }
}
