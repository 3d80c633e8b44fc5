use crate::ast;
use crate::file_reader;
use crate::loc;
use crate::operation::OperationKind;
use crate::schema::Schema;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::TypeAnnotation;
use crate::types::UnionType;
use indexmap::IndexMap;
use indexmap::IndexSet;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Debug, Default)]
struct RootOperationTypeNames {
    mutation: Option<String>,
    query: Option<String>,
    subscription: Option<String>,
}

/// Utility for building a [`Schema`] from one or more SDL sources.
///
/// Type definitions may be spread across any number of sources. Type
/// extensions are held aside until [`SchemaBuilder::build`] so that an
/// extension may appear before the definition it extends.
///
/// ```
/// use libgraphql_ir::schema::SchemaBuilder;
///
/// let schema = SchemaBuilder::new()
///     .load_str(None, "type Query { pet: Pet } union Pet = Cat | Dog")
///     .unwrap()
///     .load_str(None, "type Cat { name: String } type Dog { name: String }")
///     .unwrap()
///     .build()
///     .unwrap();
///
/// assert_eq!(schema.possible_type_names("Pet").unwrap(), ["Cat", "Dog"]);
/// ```
#[derive(Debug)]
pub struct SchemaBuilder {
    root_types: Option<(RootOperationTypeNames, loc::SourceLocation)>,
    type_extensions: Vec<(Option<PathBuf>, ast::schema::TypeExtension)>,
    types: IndexMap<String, GraphQLType>,
}
impl SchemaBuilder {
    pub fn new() -> Self {
        Self {
            root_types: None,
            type_extensions: vec![],
            types: IndexMap::from([
                ("Boolean".to_string(), GraphQLType::Bool),
                ("Float".to_string(), GraphQLType::Float),
                ("ID".to_string(), GraphQLType::ID),
                ("Int".to_string(), GraphQLType::Int),
                ("String".to_string(), GraphQLType::String),
            ]),
        }
    }

    pub fn from_str(
        file_path: Option<&Path>,
        content: impl AsRef<str>,
    ) -> Result<Self> {
        Self::new().load_str(file_path, content)
    }

    pub fn load_file(self, file_path: impl AsRef<Path>) -> Result<Self> {
        let file_path = file_path.as_ref();
        let content = file_reader::read_content(file_path)
            .map_err(|err| SchemaBuildError::SchemaFileReadError(Box::new(err)))?;
        self.load_str(Some(file_path), content)
    }

    pub fn load_files(
        self,
        file_paths: impl IntoIterator<Item = impl AsRef<Path>>,
    ) -> Result<Self> {
        file_paths.into_iter()
            .try_fold(self, |builder, file_path| builder.load_file(file_path))
    }

    pub fn load_str(
        mut self,
        file_path: Option<&Path>,
        content: impl AsRef<str>,
    ) -> Result<Self> {
        let doc = ast::schema::parse(content.as_ref())
            .map_err(|err| SchemaBuildError::ParseError {
                file: file_path.map(|p| p.to_path_buf()),
                err: err.to_string(),
            })?;

        for def in doc.definitions {
            use ast::schema::Definition as Def;
            match def {
                Def::DirectiveDefinition(_) => (),
                Def::SchemaDefinition(schema_def) =>
                    self.visit_schema_definition(file_path, schema_def)?,
                Def::TypeDefinition(type_def) =>
                    self.visit_type_definition(file_path, type_def)?,
                Def::TypeExtension(type_ext) =>
                    self.type_extensions.push((
                        file_path.map(|p| p.to_path_buf()),
                        type_ext,
                    )),
            }
        }

        Ok(self)
    }

    /// Consume this [`SchemaBuilder`] to produce an immutable [`Schema`].
    pub fn build(mut self) -> Result<Schema> {
        for (file_path, type_ext) in std::mem::take(&mut self.type_extensions) {
            self.merge_type_extension(file_path.as_deref(), type_ext)?;
        }

        let (root_names, schema_def_explicit) = match self.root_types.take() {
            Some((names, _)) => (names, true),
            None => (RootOperationTypeNames::default(), false),
        };

        let query_type = match root_names.query {
            Some(type_name) => {
                self.check_root_type(OperationKind::Query, &type_name)?;
                type_name
            },
            None if !schema_def_explicit && self.types.contains_key("Query") => {
                self.check_root_type(OperationKind::Query, "Query")?;
                "Query".to_string()
            },
            None => return Err(SchemaBuildError::NoQueryOperationTypeDefined),
        };
        let mutation_type = self.resolve_optional_root_type(
            OperationKind::Mutation,
            root_names.mutation,
            schema_def_explicit,
        )?;
        let subscription_type = self.resolve_optional_root_type(
            OperationKind::Subscription,
            root_names.subscription,
            schema_def_explicit,
        )?;

        self.check_type_references()?;
        let possible_types = self.compute_possible_types();

        Ok(Schema {
            mutation_type,
            possible_types,
            query_type,
            subscription_type,
            types: self.types,
        })
    }

    fn check_root_type(
        &self,
        operation_kind: OperationKind,
        type_name: &str,
    ) -> Result<()> {
        match self.types.get(type_name) {
            Some(GraphQLType::Object(_)) => Ok(()),
            Some(_) => Err(SchemaBuildError::RootOperationTypeNotAnObject {
                operation_kind,
                type_name: type_name.to_string(),
            }),
            None => Err(SchemaBuildError::UndefinedRootOperationType {
                operation_kind,
                type_name: type_name.to_string(),
            }),
        }
    }

    fn resolve_optional_root_type(
        &self,
        operation_kind: OperationKind,
        explicit_name: Option<String>,
        schema_def_explicit: bool,
    ) -> Result<Option<String>> {
        if let Some(type_name) = explicit_name {
            self.check_root_type(operation_kind, &type_name)?;
            return Ok(Some(type_name));
        }

        // Without a `schema { ... }` definition, root types are found by
        // their conventional names.
        let default_name = match operation_kind {
            OperationKind::Mutation => "Mutation",
            OperationKind::Query => "Query",
            OperationKind::Subscription => "Subscription",
        };
        if !schema_def_explicit && self.types.contains_key(default_name) {
            self.check_root_type(operation_kind, default_name)?;
            return Ok(Some(default_name.to_string()));
        }

        Ok(None)
    }

    fn check_type_references(&self) -> Result<()> {
        for type_ in self.types.values() {
            match type_ {
                GraphQLType::Interface(iface) => {
                    self.check_interface_refs(&iface.0)?;
                    self.check_field_types(&iface.0)?;
                },

                GraphQLType::Object(obj) => {
                    self.check_interface_refs(&obj.0)?;
                    self.check_field_types(&obj.0)?;
                },

                GraphQLType::Union(union_type) => {
                    for member_name in &union_type.members {
                        if self.types.get(member_name).and_then(|t| t.as_object()).is_none() {
                            return Err(SchemaBuildError::InvalidUnionMember {
                                location: union_type.def_location.clone(),
                                member_name: member_name.to_string(),
                                union_name: union_type.name.to_string(),
                            });
                        }
                    }
                },

                GraphQLType::InputObject(inputobj) => {
                    for (field_name, annot) in &inputobj.fields {
                        if !self.types.contains_key(annot.innermost_type_name()) {
                            return Err(SchemaBuildError::UndefinedFieldType {
                                field_name: field_name.to_string(),
                                field_type_name: annot.innermost_type_name().to_string(),
                                location: inputobj.def_location.clone(),
                                type_name: inputobj.name.to_string(),
                            });
                        }
                    }
                },

                GraphQLType::Bool
                | GraphQLType::Enum(_)
                | GraphQLType::Float
                | GraphQLType::ID
                | GraphQLType::Int
                | GraphQLType::Scalar(_)
                | GraphQLType::String => (),
            }
        }
        Ok(())
    }

    fn check_field_types(&self, type_data: &ObjectOrInterfaceTypeData) -> Result<()> {
        for field in type_data.fields.values() {
            let field_type_name = field.type_annotation.innermost_type_name();
            if !self.types.contains_key(field_type_name) {
                return Err(SchemaBuildError::UndefinedFieldType {
                    field_name: field.name.to_string(),
                    field_type_name: field_type_name.to_string(),
                    location: field.def_location.clone(),
                    type_name: type_data.name.to_string(),
                });
            }
        }
        Ok(())
    }

    fn check_interface_refs(&self, type_data: &ObjectOrInterfaceTypeData) -> Result<()> {
        for iface_name in &type_data.interfaces {
            if self.types.get(iface_name).and_then(|t| t.as_interface()).is_none() {
                return Err(SchemaBuildError::InvalidInterfaceReference {
                    interface_name: iface_name.to_string(),
                    location: type_data.def_location.clone(),
                    type_name: type_data.name.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Builds the adjacency index from each composite type to the concrete
    /// object types that satisfy it.
    fn compute_possible_types(&self) -> IndexMap<String, Vec<String>> {
        let mut possible_types: IndexMap<String, Vec<String>> = IndexMap::new();
        for (type_name, type_) in &self.types {
            match type_ {
                GraphQLType::Interface(_) => {
                    possible_types.insert(type_name.to_string(), vec![]);
                },
                GraphQLType::Object(_) => {
                    possible_types.insert(type_name.to_string(), vec![type_name.to_string()]);
                },
                GraphQLType::Union(union_type) => {
                    possible_types.insert(type_name.to_string(), union_type.members.clone());
                },
                _ => (),
            }
        }

        for (type_name, type_) in &self.types {
            let GraphQLType::Object(obj) = type_ else {
                continue;
            };
            let mut implemented = IndexSet::new();
            self.collect_implemented_interfaces(&obj.0.interfaces, &mut implemented);
            for iface_name in implemented {
                if let Some(implementers) = possible_types.get_mut(iface_name) {
                    implementers.push(type_name.to_string());
                }
            }
        }

        possible_types
    }

    fn collect_implemented_interfaces<'a>(
        &'a self,
        iface_names: &'a [String],
        implemented: &mut IndexSet<&'a str>,
    ) {
        for iface_name in iface_names {
            if !implemented.insert(iface_name.as_str()) {
                continue;
            }
            if let Some(iface) = self.types.get(iface_name).and_then(|t| t.as_interface()) {
                self.collect_implemented_interfaces(&iface.0.interfaces, implemented);
            }
        }
    }

    fn fields_from_ast(
        file_path: Option<&Path>,
        type_name: &str,
        fields: &mut IndexMap<String, Field>,
        ast_fields: &[ast::schema::Field],
    ) -> Result<()> {
        for ast_field in ast_fields {
            let location = loc::SourceLocation::schema(file_path, ast_field.position);

            // https://spec.graphql.org/October2021/#sel-IAHZhCFDBDBABDl4L
            if ast_field.name.starts_with("__") {
                return Err(SchemaBuildError::InvalidDunderPrefixedFieldName {
                    field_name: ast_field.name.to_string(),
                    location,
                    type_name: type_name.to_string(),
                });
            }

            if let Some(existing) = fields.get(ast_field.name.as_str()) {
                return Err(SchemaBuildError::DuplicateFieldDefinition {
                    def1: existing.def_location.clone(),
                    def2: location,
                    field_name: ast_field.name.to_string(),
                    type_name: type_name.to_string(),
                });
            }

            fields.insert(ast_field.name.to_string(), Field {
                def_location: location,
                description: ast_field.description.to_owned(),
                name: ast_field.name.to_string(),
                parameter_names: ast_field.arguments
                    .iter()
                    .map(|arg| arg.name.to_string())
                    .collect(),
                type_annotation: TypeAnnotation::from_ast_type(&ast_field.field_type),
            });
        }
        Ok(())
    }

    fn object_or_interface_data(
        file_path: Option<&Path>,
        name: &str,
        description: &Option<String>,
        position: ast::AstPos,
        implements_interfaces: &[String],
        ast_fields: &[ast::schema::Field],
    ) -> Result<ObjectOrInterfaceTypeData> {
        let mut fields = IndexMap::from([
            ("__typename".to_string(), Field::typename_field()),
        ]);
        Self::fields_from_ast(file_path, name, &mut fields, ast_fields)?;
        Ok(ObjectOrInterfaceTypeData {
            def_location: loc::SourceLocation::schema(file_path, position),
            description: description.to_owned(),
            fields,
            interfaces: implements_interfaces.to_vec(),
            name: name.to_string(),
        })
    }

    fn merge_type_extension(
        &mut self,
        file_path: Option<&Path>,
        type_ext: ast::schema::TypeExtension,
    ) -> Result<()> {
        use ast::schema::TypeExtension as Ext;
        let (type_name, position, expected_kind) = match &type_ext {
            Ext::Enum(ext) => (ext.name.as_str(), ext.position, GraphQLTypeKind::Enum),
            Ext::InputObject(ext) => (ext.name.as_str(), ext.position, GraphQLTypeKind::InputObject),
            Ext::Interface(ext) => (ext.name.as_str(), ext.position, GraphQLTypeKind::Interface),
            Ext::Object(ext) => (ext.name.as_str(), ext.position, GraphQLTypeKind::Object),
            Ext::Scalar(ext) => (ext.name.as_str(), ext.position, GraphQLTypeKind::Scalar),
            Ext::Union(ext) => (ext.name.as_str(), ext.position, GraphQLTypeKind::Union),
        };
        let extension_location = loc::SourceLocation::schema(file_path, position);

        let Some(existing_type) = self.types.get_mut(type_name) else {
            return Err(SchemaBuildError::ExtensionOfUndefinedType {
                extension_location,
                type_name: type_name.to_string(),
            });
        };
        let existing_kind = existing_type.kind();
        let type_name = type_name.to_string();

        match (existing_type, type_ext) {
            (GraphQLType::Enum(enum_type), Ext::Enum(ext)) => {
                enum_type.values.extend(ext.values.iter().map(|v| v.name.to_string()));
            },

            (GraphQLType::InputObject(inputobj), Ext::InputObject(ext)) => {
                for input_value in &ext.fields {
                    inputobj.fields.insert(
                        input_value.name.to_string(),
                        TypeAnnotation::from_ast_type(&input_value.value_type),
                    );
                }
            },

            (GraphQLType::Interface(iface), Ext::Interface(ext)) => {
                Self::fields_from_ast(file_path, &type_name, &mut iface.0.fields, &ext.fields)?;
                Self::extend_interfaces(&mut iface.0.interfaces, &ext.implements_interfaces);
            },

            (GraphQLType::Object(obj), Ext::Object(ext)) => {
                Self::fields_from_ast(file_path, &type_name, &mut obj.0.fields, &ext.fields)?;
                Self::extend_interfaces(&mut obj.0.interfaces, &ext.implements_interfaces);
            },

            (GraphQLType::Scalar(_), Ext::Scalar(_)) => (),

            (GraphQLType::Union(union_type), Ext::Union(ext)) => {
                for member in ext.types {
                    if !union_type.members.contains(&member) {
                        union_type.members.push(member);
                    }
                }
            },

            _ => return Err(SchemaBuildError::InvalidExtensionType {
                expected_kind,
                extension_location,
                schema_type_kind: existing_kind,
                type_name,
            }),
        }

        Ok(())
    }

    fn extend_interfaces(interfaces: &mut Vec<String>, additional: &[String]) {
        for iface_name in additional {
            if !interfaces.contains(iface_name) {
                interfaces.push(iface_name.to_string());
            }
        }
    }

    fn visit_schema_definition(
        &mut self,
        file_path: Option<&Path>,
        schema_def: ast::schema::SchemaDefinition,
    ) -> Result<()> {
        let location = loc::SourceLocation::schema(file_path, schema_def.position);
        if let Some((_, existing_location)) = &self.root_types {
            return Err(SchemaBuildError::DuplicateSchemaDefinition {
                def1: existing_location.clone(),
                def2: location,
            });
        }
        self.root_types = Some((RootOperationTypeNames {
            mutation: schema_def.mutation,
            query: schema_def.query,
            subscription: schema_def.subscription,
        }, location));
        Ok(())
    }

    fn visit_type_definition(
        &mut self,
        file_path: Option<&Path>,
        type_def: ast::schema::TypeDefinition,
    ) -> Result<()> {
        use ast::schema::TypeDefinition as Def;
        let new_type = match &type_def {
            Def::Enum(def) => GraphQLType::Enum(Box::new(EnumType {
                def_location: loc::SourceLocation::schema(file_path, def.position),
                description: def.description.to_owned(),
                name: def.name.to_string(),
                values: def.values.iter().map(|v| v.name.to_string()).collect(),
            })),

            Def::InputObject(def) => GraphQLType::InputObject(Box::new(InputObjectType {
                def_location: loc::SourceLocation::schema(file_path, def.position),
                description: def.description.to_owned(),
                fields: def.fields
                    .iter()
                    .map(|input_value| (
                        input_value.name.to_string(),
                        TypeAnnotation::from_ast_type(&input_value.value_type),
                    ))
                    .collect(),
                name: def.name.to_string(),
            })),

            Def::Interface(def) => GraphQLType::Interface(Box::new(InterfaceType(
                Self::object_or_interface_data(
                    file_path,
                    &def.name,
                    &def.description,
                    def.position,
                    &def.implements_interfaces,
                    &def.fields,
                )?,
            ))),

            Def::Object(def) => GraphQLType::Object(Box::new(ObjectType(
                Self::object_or_interface_data(
                    file_path,
                    &def.name,
                    &def.description,
                    def.position,
                    &def.implements_interfaces,
                    &def.fields,
                )?,
            ))),

            Def::Scalar(def) => GraphQLType::Scalar(Box::new(ScalarType {
                def_location: loc::SourceLocation::schema(file_path, def.position),
                description: def.description.to_owned(),
                name: def.name.to_string(),
            })),

            Def::Union(def) => GraphQLType::Union(Box::new(UnionType {
                def_location: loc::SourceLocation::schema(file_path, def.position),
                description: def.description.to_owned(),
                members: def.types.to_vec(),
                name: def.name.to_string(),
            })),
        };

        let type_name = new_type.name().to_string();
        let def_location = new_type.def_location().clone();

        // https://spec.graphql.org/October2021/#sec-Names.Reserved-Names
        if type_name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedTypeName {
                def_location,
                type_name,
            });
        }

        if let Some(conflicting_type) = self.types.get(type_name.as_str()) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                def1: conflicting_type.def_location().clone(),
                def2: def_location,
                type_name,
            });
        }

        self.types.insert(type_name, new_type);
        Ok(())
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error("Field `{type_name}.{field_name}` is defined more than once")]
    DuplicateFieldDefinition {
        def1: loc::SourceLocation,
        def2: loc::SourceLocation,
        field_name: String,
        type_name: String,
    },

    #[error("Multiple `schema` definitions found (at {def1} and {def2})")]
    DuplicateSchemaDefinition {
        def1: loc::SourceLocation,
        def2: loc::SourceLocation,
    },

    #[error("Type `{type_name}` is defined more than once (at {def1} and {def2})")]
    DuplicateTypeDefinition {
        def1: loc::SourceLocation,
        def2: loc::SourceLocation,
        type_name: String,
    },

    #[error("Attempted to extend type `{type_name}` which is not defined")]
    ExtensionOfUndefinedType {
        extension_location: loc::SourceLocation,
        type_name: String,
    },

    #[error(
        "Field `{type_name}.{field_name}` is invalid: names starting with `__` \
        are reserved"
    )]
    InvalidDunderPrefixedFieldName {
        field_name: String,
        location: loc::SourceLocation,
        type_name: String,
    },

    #[error("Type `{type_name}` is invalid: names starting with `__` are reserved")]
    InvalidDunderPrefixedTypeName {
        def_location: loc::SourceLocation,
        type_name: String,
    },

    #[error(
        "Cannot apply a {expected_kind} extension to `{type_name}`, which is \
        a {schema_type_kind} type"
    )]
    InvalidExtensionType {
        expected_kind: GraphQLTypeKind,
        extension_location: loc::SourceLocation,
        schema_type_kind: GraphQLTypeKind,
        type_name: String,
    },

    #[error(
        "Type `{type_name}` implements `{interface_name}`, which is not a \
        defined interface type"
    )]
    InvalidInterfaceReference {
        interface_name: String,
        location: loc::SourceLocation,
        type_name: String,
    },

    #[error(
        "Union `{union_name}` includes member `{member_name}`, which is not a \
        defined object type"
    )]
    InvalidUnionMember {
        location: loc::SourceLocation,
        member_name: String,
        union_name: String,
    },

    #[error("No query operation type is defined in the schema")]
    NoQueryOperationTypeDefined,

    #[error("Error parsing schema: {err}")]
    ParseError {
        file: Option<PathBuf>,
        err: String,
    },

    #[error("The {operation_kind} root type `{type_name}` is not an object type")]
    RootOperationTypeNotAnObject {
        operation_kind: OperationKind,
        type_name: String,
    },

    #[error("Failure while trying to read a schema file from disk: {0}")]
    SchemaFileReadError(Box<file_reader::ReadContentError>),

    #[error(
        "Field `{type_name}.{field_name}` has type `{field_type_name}`, which \
        is not defined"
    )]
    UndefinedFieldType {
        field_name: String,
        field_type_name: String,
        location: loc::SourceLocation,
        type_name: String,
    },

    #[error("The {operation_kind} root type `{type_name}` is not defined")]
    UndefinedRootOperationType {
        operation_kind: OperationKind,
        type_name: String,
    },
}
