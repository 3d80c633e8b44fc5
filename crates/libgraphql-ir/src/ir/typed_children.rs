use crate::ir::SelectionMap;
use indexmap::IndexMap;

/// Mapping from concrete object type name to the [`SelectionMap`] that
/// applies to values of that type.
///
/// A type with no entry has no statically applicable fields at this
/// position; executors treat it as an empty selection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TypedChildren<'schema, 'ast> {
    pub(crate) by_type: IndexMap<&'schema str, SelectionMap<'schema, 'ast>>,
}
impl<'schema, 'ast> TypedChildren<'schema, 'ast> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, type_name: &str) -> Option<&SelectionMap<'schema, 'ast>> {
        self.by_type.get(type_name)
    }

    pub fn is_empty(&self) -> bool {
        self.by_type.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'schema str, &SelectionMap<'schema, 'ast>)> {
        self.by_type.iter().map(|(type_name, map)| (*type_name, map))
    }

    pub fn len(&self) -> usize {
        self.by_type.len()
    }

    /// Union of the concrete types of both sides; selection maps for types
    /// present on both sides are merged recursively.
    pub fn merge(&mut self, other: TypedChildren<'schema, 'ast>) {
        for (type_name, selection_map) in other.by_type {
            self.selection_map_mut(type_name).merge(selection_map);
        }
    }

    pub(crate) fn selection_map_mut(
        &mut self,
        type_name: &'schema str,
    ) -> &mut SelectionMap<'schema, 'ast> {
        self.by_type.entry(type_name).or_default()
    }

    /// Concrete type names in the order they first received a field.
    pub fn type_names(&self) -> impl Iterator<Item = &'schema str> + '_ {
        self.by_type.keys().copied()
    }
}
