use crate::loc;
use crate::operation::OperationKind;
use crate::schema::SchemaBuilder;
use crate::schema::SchemaBuildError;
use crate::types::GraphQLTypeKind;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

fn build_err(sdl: &str) -> SchemaBuildError {
    match SchemaBuilder::from_str(None, sdl).and_then(|builder| builder.build()) {
        Ok(schema) => panic!("Expected an error, but built: {schema:#?}"),
        Err(err) => err,
    }
}

mod build_basics {
    use super::*;

    #[test]
    fn builtin_scalars_are_predefined() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, "type Query { a: Int }")?
            .build()?;

        assert_eq!(
            schema.defined_types().keys().collect::<Vec<_>>(),
            vec!["Boolean", "Float", "ID", "Int", "String", "Query"],
        );

        Ok(())
    }

    #[test]
    fn typename_field_is_implicit_on_objects_and_interfaces() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, concat!(
            "type Query { a: Int }\n",
            "interface Node { id: ID! }\n",
        ))?.build()?;

        let query_type = schema.object_type("Query").unwrap();
        assert_eq!(
            query_type.fields().keys().collect::<Vec<_>>(),
            vec!["__typename", "a"],
        );
        let typename = query_type.field("__typename").unwrap();
        assert_eq!(typename.def_location(), &loc::SourceLocation::GraphQLBuiltIn);
        assert_eq!(typename.type_annotation().to_graphql_string(), "String!");

        let node = schema.type_("Node").unwrap().as_interface().unwrap();
        assert!(node.field("__typename").is_some());

        Ok(())
    }

    #[test]
    fn def_locations_carry_the_file_path() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(Some(Path::new("schema.graphql")), "type Query { a: Int }")?
            .build()?;

        assert_eq!(
            schema.object_type("Query").unwrap().def_location(),
            &loc::SourceLocation::Schema(loc::FilePosition {
                col: 1,
                file: Some(PathBuf::from("schema.graphql")),
                line: 1,
            }),
        );

        Ok(())
    }

    #[test]
    fn default_root_type_names() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, concat!(
            "type Query { a: Int }\n",
            "type Mutation { b: Int }\n",
        ))?.build()?;

        assert_eq!(schema.query_type_name(), "Query");
        assert_eq!(schema.mutation_type_name(), Some("Mutation"));
        assert_eq!(schema.subscription_type_name(), None);
        assert_eq!(schema.root_type(OperationKind::Mutation).unwrap().name(), "Mutation");
        assert!(schema.root_type(OperationKind::Subscription).is_none());

        Ok(())
    }

    #[test]
    fn explicit_schema_definition_overrides_default_names() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, concat!(
            "schema { query: Root mutation: Writes }\n",
            "type Root { a: Int }\n",
            "type Writes { b: Int }\n",
            "type Subscription { c: Int }\n",
        ))?.build()?;

        assert_eq!(schema.query_type_name(), "Root");
        assert_eq!(schema.root_type_name(OperationKind::Mutation), Some("Writes"));
        assert_eq!(schema.subscription_type_name(), None);

        Ok(())
    }

    #[test]
    fn types_may_span_multiple_sources() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "type Query { me: User }")?
            .load_str(None, "type User { id: ID! }")?
            .build()?;

        assert!(schema.object_type("User").is_some());

        Ok(())
    }
}

mod possible_types {
    use super::*;

    const SDL: &str = concat!(
        "type Query { node: Node }\n",
        "interface Node { id: ID! }\n",
        "interface Named implements Node { id: ID! name: String }\n",
        "type Person implements Named & Node { id: ID! name: String }\n",
        "type Dog implements Named { id: ID! name: String }\n",
        "type Robot implements Node { id: ID! }\n",
        "union Pet = Dog | Person\n",
        "enum Sort { ASC DESC }\n",
    );

    #[test]
    fn object_type_is_its_own_only_possible_type() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, SDL)?.build()?;
        assert_eq!(schema.possible_type_names("Robot").unwrap(), ["Robot"]);
        Ok(())
    }

    #[test]
    fn union_possible_types_follow_member_order() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, SDL)?.build()?;
        assert_eq!(schema.possible_type_names("Pet").unwrap(), ["Dog", "Person"]);

        let pet = schema.type_("Pet").unwrap().as_union().unwrap();
        let members = pet.member_types(&schema)
            .into_iter()
            .map(|obj| obj.name())
            .collect::<Vec<_>>();
        assert_eq!(members, vec!["Dog", "Person"]);
        Ok(())
    }

    #[test]
    fn interface_possible_types_include_transitive_implementers() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, SDL)?.build()?;

        assert_eq!(
            schema.possible_type_names("Node").unwrap(),
            ["Person", "Dog", "Robot"],
        );
        assert_eq!(schema.possible_type_names("Named").unwrap(), ["Person", "Dog"]);

        let dog = schema.object_type("Dog").unwrap();
        assert!(dog.implements_interface(&schema, "Node"));
        assert!(!schema.object_type("Robot").unwrap().implements_interface(&schema, "Named"));

        let named = schema.type_("Named").unwrap().as_interface().unwrap();
        let implementers = named.implementing_types(&schema)
            .into_iter()
            .map(|obj| obj.name())
            .collect::<Vec<_>>();
        assert_eq!(implementers, vec!["Person", "Dog"]);
        Ok(())
    }

    #[test]
    fn leaf_and_undefined_types_have_no_possible_types() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, SDL)?.build()?;
        assert!(schema.possible_type_names("Sort").is_none());
        assert!(schema.possible_type_names("String").is_none());
        assert!(schema.possible_type_names("Missing").is_none());
        assert!(schema.possible_types("Missing").is_empty());
        Ok(())
    }
}

mod extensions {
    use super::*;

    #[test]
    fn object_extension_appends_fields_and_interfaces() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, concat!(
            "type Query { a: Int }\n",
            "interface Node { id: ID! }\n",
            "extend type Query implements Node { id: ID! b: String }\n",
        ))?.build()?;

        let query_type = schema.object_type("Query").unwrap();
        assert_eq!(
            query_type.fields().keys().collect::<Vec<_>>(),
            vec!["__typename", "a", "id", "b"],
        );
        assert_eq!(query_type.interface_names(), vec!["Node"]);
        assert_eq!(schema.possible_type_names("Node").unwrap(), ["Query"]);

        Ok(())
    }

    #[test]
    fn extension_may_precede_its_definition() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "extend union Pet = Cat")?
            .load_str(None, concat!(
                "type Query { pet: Pet }\n",
                "union Pet = Dog\n",
                "type Dog { name: String }\n",
                "type Cat { name: String }\n",
            ))?
            .build()?;

        assert_eq!(schema.possible_type_names("Pet").unwrap(), ["Dog", "Cat"]);

        Ok(())
    }

    #[test]
    fn extension_of_undefined_type_is_an_error() {
        let err = build_err(concat!(
            "type Query { a: Int }\n",
            "extend type Missing { a: Int }\n",
        ));
        assert!(matches!(
            err,
            SchemaBuildError::ExtensionOfUndefinedType { type_name, .. }
                if type_name == "Missing",
        ));
    }

    #[test]
    fn extension_of_the_wrong_kind_is_an_error() {
        let err = build_err(concat!(
            "type Query { a: Int }\n",
            "type A { a: Int }\n",
            "extend union Query = A\n",
        ));
        assert!(matches!(
            err,
            SchemaBuildError::InvalidExtensionType {
                expected_kind: GraphQLTypeKind::Union,
                schema_type_kind: GraphQLTypeKind::Object,
                type_name,
                ..
            } if type_name == "Query",
        ));
    }
}

mod errors {
    use super::*;

    #[test]
    fn duplicate_type_definition() {
        let err = build_err(concat!(
            "type Query { a: Int }\n",
            "type User { id: ID! }\n",
            "type User { name: String }\n",
        ));
        let SchemaBuildError::DuplicateTypeDefinition { def1, def2, type_name } = err else {
            panic!("Expected a DuplicateTypeDefinition error");
        };
        assert_eq!(type_name, "User");
        assert_eq!(def1.file_position().unwrap().line, 2);
        assert_eq!(def2.file_position().unwrap().line, 3);
    }

    #[test]
    fn duplicate_field_definition() {
        let err = build_err("type Query { a: Int a: String }");
        assert!(matches!(
            err,
            SchemaBuildError::DuplicateFieldDefinition { field_name, type_name, .. }
                if field_name == "a" && type_name == "Query",
        ));
    }

    #[test]
    fn dunder_prefixed_names_are_reserved() {
        assert!(matches!(
            build_err("type Query { __secret: Int }"),
            SchemaBuildError::InvalidDunderPrefixedFieldName { .. },
        ));
        assert!(matches!(
            build_err("type Query { a: Int } type __Hidden { a: Int }"),
            SchemaBuildError::InvalidDunderPrefixedTypeName { .. },
        ));
    }

    #[test]
    fn union_members_must_be_object_types() {
        let err = build_err(concat!(
            "type Query { a: Int }\n",
            "interface Node { id: ID! }\n",
            "union U = Node\n",
        ));
        assert!(matches!(
            err,
            SchemaBuildError::InvalidUnionMember { member_name, union_name, .. }
                if member_name == "Node" && union_name == "U",
        ));

        assert!(matches!(
            build_err("type Query { a: Int } union U = Missing"),
            SchemaBuildError::InvalidUnionMember { .. },
        ));
    }

    #[test]
    fn implemented_interfaces_must_be_interface_types() {
        let err = build_err(concat!(
            "type Query { a: Int }\n",
            "type User implements Query { a: Int }\n",
        ));
        assert!(matches!(
            err,
            SchemaBuildError::InvalidInterfaceReference { interface_name, type_name, .. }
                if interface_name == "Query" && type_name == "User",
        ));
    }

    #[test]
    fn undefined_field_type() {
        let err = build_err("type Query { me: User }");
        assert!(matches!(
            err,
            SchemaBuildError::UndefinedFieldType { field_type_name, .. }
                if field_type_name == "User",
        ));
    }

    #[test]
    fn missing_query_type() {
        assert_eq!(
            build_err("type Foo { a: Int }"),
            SchemaBuildError::NoQueryOperationTypeDefined,
        );

        // An explicit schema definition disables the default names.
        assert_eq!(
            build_err(concat!(
                "schema { mutation: Mutation }\n",
                "type Query { a: Int }\n",
                "type Mutation { b: Int }\n",
            )),
            SchemaBuildError::NoQueryOperationTypeDefined,
        );
    }

    #[test]
    fn root_type_must_be_a_defined_object_type() {
        assert_eq!(
            build_err("schema { query: Q } interface Q { a: Int }"),
            SchemaBuildError::RootOperationTypeNotAnObject {
                operation_kind: OperationKind::Query,
                type_name: "Q".to_string(),
            },
        );
        assert_eq!(
            build_err("schema { query: Q } type Query { a: Int }"),
            SchemaBuildError::UndefinedRootOperationType {
                operation_kind: OperationKind::Query,
                type_name: "Q".to_string(),
            },
        );
    }

    #[test]
    fn duplicate_schema_definition() {
        assert!(matches!(
            build_err(concat!(
                "schema { query: Query }\n",
                "schema { query: Query }\n",
                "type Query { a: Int }\n",
            )),
            SchemaBuildError::DuplicateSchemaDefinition { .. },
        ));
    }

    #[test]
    fn parse_errors_name_the_file() {
        let err = SchemaBuilder::new()
            .load_str(Some(Path::new("broken.graphql")), "type Query {")
            .unwrap_err();
        assert!(matches!(
            err,
            SchemaBuildError::ParseError { file: Some(file), .. }
                if file == Path::new("broken.graphql"),
        ));
    }

    #[test]
    fn missing_schema_file() {
        let err = SchemaBuilder::new()
            .load_file("/this/path/does/not/exist.graphql")
            .unwrap_err();
        assert!(matches!(err, SchemaBuildError::SchemaFileReadError(_)));
    }
}
