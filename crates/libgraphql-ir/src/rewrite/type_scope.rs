use crate::loc;
use crate::rewrite::RewriteError;
use crate::schema::Schema;
use crate::types::ObjectType;
use indexmap::IndexMap;

/// The set of concrete object types a selection set may apply to at some
/// position in an operation, in a stable order.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeScope<'schema> {
    types: IndexMap<&'schema str, &'schema ObjectType>,
}
impl<'schema> TypeScope<'schema> {
    /// Whether the concrete object type named `type_name` is in scope.
    pub fn contains(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }

    /// The scope of a selection set nested under a field whose declared
    /// (innermost) return type is `type_name`: every concrete type that can
    /// satisfy it. `None` if the type is a scalar, an enum, or undefined.
    pub fn for_output_type(schema: &'schema Schema, type_name: &str) -> Option<Self> {
        let kind = schema.type_(type_name)?.kind();
        kind.is_composite().then(|| Self::from_types(schema.possible_types(type_name)))
    }

    pub(crate) fn from_types(types: impl IntoIterator<Item = &'schema ObjectType>) -> Self {
        Self {
            types: types.into_iter().map(|obj| (obj.name(), obj)).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'schema ObjectType> + '_ {
        self.types.values().copied()
    }

    /// Number of concrete types in scope.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Restrict this scope to the types that satisfy `type_condition`.
    ///
    /// No condition leaves the scope unchanged. An object type condition
    /// keeps at most that type; an interface keeps its implementers; a union
    /// keeps its members. The result keeps this scope's order and may be
    /// empty.
    pub fn narrow(
        &self,
        schema: &'schema Schema,
        type_condition: Option<&str>,
        location: &loc::SourceLocation,
    ) -> Result<Self, RewriteError> {
        let Some(type_name) = type_condition else {
            return Ok(self.clone());
        };

        let satisfying = schema.possible_type_names(type_name)
            .ok_or_else(|| RewriteError::UnknownTypeCondition {
                location: location.clone(),
                type_name: type_name.to_string(),
            })?;

        let narrowed = Self {
            types: self.types.iter()
                .filter(|(name, _)| satisfying.iter().any(|s| s == *name))
                .map(|(name, obj)| (*name, *obj))
                .collect(),
        };
        tracing::trace!(
            "Narrowed [{}] by `{type_name}` at {location} to {} type(s): [{}]",
            self.type_names().collect::<Vec<_>>().join(", "),
            narrowed.len(),
            narrowed.type_names().collect::<Vec<_>>().join(", "),
        );
        Ok(narrowed)
    }

    pub fn singleton(object_type: &'schema ObjectType) -> Self {
        Self::from_types([object_type])
    }

    pub fn type_names(&self) -> impl Iterator<Item = &'schema str> + '_ {
        self.types.keys().copied()
    }
}
