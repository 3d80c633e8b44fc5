use crate::ir::IrField;
use crate::ir::VariableBindings;
use indexmap::IndexMap;
use indexmap::map::Entry;

/// Ordered mapping from response key to [`IrField`] for one concrete type.
///
/// Keys keep the order in which they were first selected anywhere in the
/// document, including inside fragments.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionMap<'schema, 'ast> {
    pub(crate) fields: IndexMap<String, IrField<'schema, 'ast>>,
}
impl<'schema, 'ast> SelectionMap<'schema, 'ast> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains_key(&self, response_key: &str) -> bool {
        self.fields.contains_key(response_key)
    }

    pub fn fields(&self) -> impl Iterator<Item = &IrField<'schema, 'ast>> {
        self.fields.values()
    }

    pub fn get(&self, response_key: &str) -> Option<&IrField<'schema, 'ast>> {
        self.fields.get(response_key)
    }

    /// The fields to resolve under `bindings`, in response-key order.
    /// `None` if any field's inclusion depends on a variable missing from
    /// `bindings`.
    pub fn included_fields(
        &self,
        bindings: &VariableBindings,
    ) -> Option<Vec<&IrField<'schema, 'ast>>> {
        let mut included = vec![];
        for field in self.fields.values() {
            if field.is_included(bindings)? {
                included.push(field);
            }
        }
        Some(included)
    }

    /// Add a field node, merging it into an existing node with the same
    /// response key if there is one.
    pub(crate) fn insert_or_merge(&mut self, field: IrField<'schema, 'ast>) {
        match self.fields.entry(field.response_key.to_string()) {
            Entry::Occupied(mut entry) => entry.get_mut().merge(field),
            Entry::Vacant(entry) => {
                entry.insert(field);
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &IrField<'schema, 'ast>)> {
        self.fields.iter().map(|(key, field)| (key.as_str(), field))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(|key| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Merge `other` into this map. Keys only in `other` are appended in
    /// `other`'s order; keys in both have their nodes merged recursively,
    /// with `other`'s occurrences following this map's.
    pub fn merge(&mut self, other: SelectionMap<'schema, 'ast>) {
        for (_, field) in other.fields {
            self.insert_or_merge(field);
        }
    }
}
