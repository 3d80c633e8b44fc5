use crate::loc;
use crate::types::TypeAnnotation;

/// A field defined on an [`ObjectType`](crate::types::ObjectType) or
/// [`InterfaceType`](crate::types::InterfaceType).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Field {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) parameter_names: Vec<String>,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Field {
    pub(crate) fn typename_field() -> Self {
        Self {
            def_location: loc::SourceLocation::GraphQLBuiltIn,
            description: None,
            name: "__typename".to_string(),
            parameter_names: vec![],
            type_annotation: TypeAnnotation::Named {
                nullable: false,
                type_name: "String".to_string(),
            },
        }
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The names of the arguments this field accepts, in definition order.
    pub fn parameter_names(&self) -> Vec<&str> {
        self.parameter_names.iter().map(|name| name.as_str()).collect()
    }

    /// The declared return type of this field.
    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
