use crate::loc;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectOrInterfaceTypeTrait;
use crate::types::ObjectType;
use indexmap::IndexMap;
use inherent::inherent;

/// Represents an
/// [interface type](https://spec.graphql.org/October2021/#sec-Interfaces)
/// defined within some [`Schema`].
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InterfaceType(pub(crate) ObjectOrInterfaceTypeData);

impl InterfaceType {
    /// Every [`ObjectType`] in the schema that implements this interface,
    /// in schema definition order.
    pub fn implementing_types<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Vec<&'schema ObjectType> {
        schema.possible_types(self.name())
    }
}

#[inherent]
impl ObjectOrInterfaceTypeTrait for InterfaceType {
    /// The [`SourceLocation`](loc::SourceLocation) indicating where this
    /// [`InterfaceType`] was defined within the schema.
    pub fn def_location(&self) -> &loc::SourceLocation {
        self.0.def_location()
    }

    pub fn description(&self) -> Option<&str> {
        self.0.description()
    }

    pub fn field(&self, field_name: &str) -> Option<&Field> {
        self.0.field(field_name)
    }

    pub fn fields(&self) -> &IndexMap<String, Field> {
        self.0.fields()
    }

    /// The names of the interfaces this interface declares it implements.
    pub fn interface_names(&self) -> Vec<&str> {
        self.0.interface_names()
    }

    // The name of this [`InterfaceType`].
    pub fn name(&self) -> &str {
        self.0.name()
    }
}
