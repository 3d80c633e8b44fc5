use crate::loc;
use crate::schema::Schema;
use crate::types::ObjectType;

/// Represents a
/// [union type](https://spec.graphql.org/October2021/#sec-Unions) defined
/// within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UnionType {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) members: Vec<String>,
    pub(crate) name: String,
}
impl UnionType {
    /// The [`SourceLocation`](loc::SourceLocation) indicating where this
    /// [`UnionType`] was defined within the schema.
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// An ordered list of the names of each type defined as a member of this
    /// union.
    ///
    /// The order retains the order members were listed on the union
    /// definition. Members added by a type extension follow, in the order
    /// they were listed on the extension.
    pub fn member_type_names(&self) -> Vec<&str> {
        self.members
            .iter()
            .map(|type_name| type_name.as_str())
            .collect()
    }

    /// The member [`ObjectType`]s of this union, in member order.
    pub fn member_types<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Vec<&'schema ObjectType> {
        self.members
            .iter()
            .filter_map(|type_name| schema.object_type(type_name))
            .collect()
    }

    /// The name of this [`UnionType`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
