use crate::operation::OperationKind;
use crate::schema::SchemaBuilder;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use indexmap::IndexMap;

/// Represents a fully built, typechecked, and immutable GraphQL schema.
///
/// Besides the named types themselves, a [`Schema`] carries a precomputed
/// index from every composite type to the closed set of concrete
/// [`ObjectType`]s that can satisfy it (see [`Schema::possible_types`]).
/// Nothing about a [`Schema`] changes after it is built, so a single
/// instance can be shared by any number of concurrent rewrites.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Schema {
    pub(crate) mutation_type: Option<String>,
    pub(crate) possible_types: IndexMap<String, Vec<String>>,
    pub(crate) query_type: String,
    pub(crate) subscription_type: Option<String>,
    pub(crate) types: IndexMap<String, GraphQLType>,
}
impl Schema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Every type defined in the schema (including built-in scalars), keyed
    /// by name and in definition order.
    pub fn defined_types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }

    pub fn mutation_type(&self) -> Option<&ObjectType> {
        self.root_type(OperationKind::Mutation)
    }

    pub fn mutation_type_name(&self) -> Option<&str> {
        self.mutation_type.as_deref()
    }

    /// Look up an [`ObjectType`] by name. Returns `None` if the type is
    /// undefined or is not an object type.
    pub fn object_type(&self, type_name: &str) -> Option<&ObjectType> {
        self.types.get(type_name).and_then(|t| t.as_object())
    }

    /// The names of every concrete object type that can satisfy the named
    /// composite type:
    ///
    ///   * object type: just itself
    ///   * interface type: every object type implementing it, directly or
    ///     through interface inheritance
    ///   * union type: its member types
    ///
    /// Returns `None` for undefined or non-composite types. Names are listed
    /// in schema definition order (member order for unions).
    pub fn possible_type_names(&self, type_name: &str) -> Option<&[String]> {
        self.possible_types.get(type_name).map(|names| names.as_slice())
    }

    /// Like [`Schema::possible_type_names`], but resolves each name to its
    /// [`ObjectType`]. Returns an empty list for undefined or non-composite
    /// types.
    pub fn possible_types(&self, type_name: &str) -> Vec<&ObjectType> {
        self.possible_type_names(type_name)
            .unwrap_or_default()
            .iter()
            .filter_map(|name| self.object_type(name))
            .collect()
    }

    /// The query root type. Always present in a built [`Schema`].
    pub fn query_type(&self) -> Option<&ObjectType> {
        self.root_type(OperationKind::Query)
    }

    pub fn query_type_name(&self) -> &str {
        self.query_type.as_str()
    }

    /// The root [`ObjectType`] for the given kind of operation, if the schema
    /// defines one.
    pub fn root_type(&self, operation_kind: OperationKind) -> Option<&ObjectType> {
        self.root_type_name(operation_kind)
            .and_then(|type_name| self.object_type(type_name))
    }

    pub fn root_type_name(&self, operation_kind: OperationKind) -> Option<&str> {
        match operation_kind {
            OperationKind::Mutation => self.mutation_type_name(),
            OperationKind::Query => Some(self.query_type_name()),
            OperationKind::Subscription => self.subscription_type_name(),
        }
    }

    pub fn subscription_type(&self) -> Option<&ObjectType> {
        self.root_type(OperationKind::Subscription)
    }

    pub fn subscription_type_name(&self) -> Option<&str> {
        self.subscription_type.as_deref()
    }

    pub fn type_(&self, type_name: &str) -> Option<&GraphQLType> {
        self.types.get(type_name)
    }
}
