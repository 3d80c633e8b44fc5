use crate::ir::FieldOccurrence;
use crate::ir::TypedChildren;
use crate::ir::VariableBindings;
use crate::types::Field;
use crate::types::ObjectType;

/// The merged result of every statically reachable selection of one response
/// key, for one concrete parent type, at one position in the tree.
#[derive(Clone, Debug, PartialEq)]
pub struct IrField<'schema, 'ast> {
    pub(crate) field_definition: &'schema Field,
    pub(crate) occurrences: Vec<FieldOccurrence<'ast>>,
    pub(crate) parent_type: &'schema ObjectType,
    pub(crate) response_key: String,
    pub(crate) typed_children: TypedChildren<'schema, 'ast>,
}
impl<'schema, 'ast> IrField<'schema, 'ast> {
    pub(crate) fn new(
        response_key: impl Into<String>,
        parent_type: &'schema ObjectType,
        field_definition: &'schema Field,
        occurrence: FieldOccurrence<'ast>,
        typed_children: TypedChildren<'schema, 'ast>,
    ) -> Self {
        Self {
            field_definition,
            occurrences: vec![occurrence],
            parent_type,
            response_key: response_key.into(),
            typed_children,
        }
    }

    /// The field's definition on [`IrField::parent_type`].
    pub fn field_definition(&self) -> &'schema Field {
        self.field_definition
    }

    pub fn field_name(&self) -> &'schema str {
        self.field_definition.name()
    }

    /// Whether this field is selected under `bindings`: it is when at least
    /// one of its occurrences is. `None` if that can't be decided without
    /// variables missing from `bindings`.
    pub fn is_included(&self, bindings: &VariableBindings) -> Option<bool> {
        let mut undecided = false;
        for occurrence in &self.occurrences {
            match occurrence.is_included(bindings) {
                Some(true) => return Some(true),
                Some(false) => (),
                None => undecided = true,
            }
        }
        (!undecided).then_some(false)
    }

    /// Merge another node for the same response key and parent type into
    /// this one. Occurrences are appended after this node's own, and child
    /// selections are merged per concrete type.
    pub(crate) fn merge(&mut self, other: IrField<'schema, 'ast>) {
        debug_assert_eq!(self.response_key, other.response_key);
        debug_assert_eq!(self.parent_type.name(), other.parent_type.name());
        self.occurrences.extend(other.occurrences);
        self.typed_children.merge(other.typed_children);
    }

    /// Every AST selection that contributed to this node, in document order.
    pub fn occurrences(&self) -> &[FieldOccurrence<'ast>] {
        &self.occurrences
    }

    /// The concrete object type this field was selected on.
    pub fn parent_type(&self) -> &'schema ObjectType {
        self.parent_type
    }

    pub fn parent_type_name(&self) -> &'schema str {
        self.parent_type.name()
    }

    /// The alias if one was given, otherwise the field name.
    pub fn response_key(&self) -> &str {
        self.response_key.as_str()
    }

    /// Sub-selections grouped by concrete type. Empty for fields returning a
    /// scalar or enum.
    pub fn typed_children(&self) -> &TypedChildren<'schema, 'ast> {
        &self.typed_children
    }
}
