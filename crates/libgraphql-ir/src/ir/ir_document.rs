use crate::ir::SelectionMap;
use crate::ir::TypedChildren;
use crate::loc;
use crate::operation::OperationKind;
use crate::types::ObjectType;

/// The rewritten form of a single operation.
#[derive(Clone, Debug, PartialEq)]
pub struct IrDocument<'schema, 'ast> {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) name: Option<String>,
    pub(crate) operation_kind: OperationKind,
    pub(crate) root_type: &'schema ObjectType,
    pub(crate) typed_children: TypedChildren<'schema, 'ast>,
}
impl<'schema, 'ast> IrDocument<'schema, 'ast> {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn operation_kind(&self) -> OperationKind {
        self.operation_kind
    }

    pub fn root_type(&self) -> &'schema ObjectType {
        self.root_type
    }

    pub fn root_type_name(&self) -> &'schema str {
        self.root_type.name()
    }

    /// The fields selected on the root type, or `None` if every root
    /// selection was statically eliminated.
    pub fn selection_map(&self) -> Option<&SelectionMap<'schema, 'ast>> {
        self.typed_children.get(self.root_type.name())
    }

    /// Root selections keyed by type. Holds at most one entry: the root
    /// operation type.
    pub fn typed_children(&self) -> &TypedChildren<'schema, 'ast> {
        &self.typed_children
    }
}
