use crate::loc;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

/// An input object type. Input objects never appear in selection sets; they
/// are indexed so that every type name referenced by a schema resolves.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputObjectType {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) fields: IndexMap<String, TypeAnnotation>,
    pub(crate) name: String,
}
impl InputObjectType {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// A map from input field name -> declared [`TypeAnnotation`].
    pub fn fields(&self) -> &IndexMap<String, TypeAnnotation> {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
