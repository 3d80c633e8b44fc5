use crate::ir::IrDocument;
use crate::operation::OperationKind;
use indexmap::IndexMap;

/// Every operation of a rewritten document, grouped by [`OperationKind`] and
/// then keyed by operation name (`None` for an anonymous operation).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IrForest<'schema, 'ast> {
    pub(crate) by_kind: IndexMap<
        OperationKind,
        IndexMap<Option<String>, IrDocument<'schema, 'ast>>,
    >,
}
impl<'schema, 'ast> IrForest<'schema, 'ast> {
    pub(crate) fn contains(&self, kind: OperationKind, name: Option<&str>) -> bool {
        self.get(kind, name).is_some()
    }

    /// Operations in the order they were defined within each kind, with
    /// kinds in the order they were first seen.
    pub fn documents(&self) -> impl Iterator<Item = &IrDocument<'schema, 'ast>> {
        self.by_kind.values().flat_map(|docs| docs.values())
    }

    pub fn documents_of_kind(
        &self,
        kind: OperationKind,
    ) -> impl Iterator<Item = &IrDocument<'schema, 'ast>> {
        self.by_kind.get(&kind).into_iter().flat_map(|docs| docs.values())
    }

    pub fn get(
        &self,
        kind: OperationKind,
        name: Option<&str>,
    ) -> Option<&IrDocument<'schema, 'ast>> {
        self.by_kind.get(&kind)?.get(&name.map(str::to_string))
    }

    pub(crate) fn insert(&mut self, document: IrDocument<'schema, 'ast>) {
        self.by_kind
            .entry(document.operation_kind)
            .or_default()
            .insert(document.name.clone(), document);
    }

    pub fn is_empty(&self) -> bool {
        self.by_kind.values().all(|docs| docs.is_empty())
    }

    pub fn len(&self) -> usize {
        self.by_kind.values().map(|docs| docs.len()).sum()
    }

    /// Look up a named operation regardless of its kind.
    pub fn operation(&self, name: &str) -> Option<&IrDocument<'schema, 'ast>> {
        self.by_kind.values().find_map(|docs| docs.get(&Some(name.to_string())))
    }
}
