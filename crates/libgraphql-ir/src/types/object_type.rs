use crate::loc;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectOrInterfaceTypeTrait;
use indexmap::IndexMap;
use inherent::inherent;

/// Represents an
/// [object type](https://spec.graphql.org/October2021/#sec-Objects) defined
/// within some [`Schema`].
///
/// Object types are the only *concrete* types in GraphQL: every value
/// produced for an interface- or union-typed field is, at runtime, an
/// instance of exactly one object type.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectType(pub(crate) ObjectOrInterfaceTypeData);

impl ObjectType {
    /// Whether this type implements the named interface, either directly or
    /// through an interface that itself implements it.
    pub fn implements_interface(
        &self,
        schema: &Schema,
        interface_name: &str,
    ) -> bool {
        schema.possible_type_names(interface_name)
            .is_some_and(|names| names.iter().any(|name| name == self.name()))
    }
}

#[inherent]
impl ObjectOrInterfaceTypeTrait for ObjectType {
    /// The [`SourceLocation`](loc::SourceLocation) indicating where this
    /// [`ObjectType`] was defined within the schema.
    pub fn def_location(&self) -> &loc::SourceLocation {
        self.0.def_location()
    }

    /// The description of this [`ObjectType`] as defined in the schema
    /// (e.g. in a """-string immediately before the type definition).
    pub fn description(&self) -> Option<&str> {
        self.0.description()
    }

    /// Look up a single [`Field`] by name. Includes the implicit
    /// `__typename` field.
    pub fn field(&self, field_name: &str) -> Option<&Field> {
        self.0.field(field_name)
    }

    /// A map from FieldName -> [`Field`] for all fields defined on this
    /// [`ObjectType`] in the schema, in definition order. Fields added by
    /// type extensions follow the fields of the original definition.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        self.0.fields()
    }

    /// The names of all interfaces this [`ObjectType`] declares it
    /// implements, in the order they were declared.
    pub fn interface_names(&self) -> Vec<&str> {
        self.0.interface_names()
    }

    /// The name of this [`ObjectType`].
    pub fn name(&self) -> &str {
        self.0.name()
    }
}
