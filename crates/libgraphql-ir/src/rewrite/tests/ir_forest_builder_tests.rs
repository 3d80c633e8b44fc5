use crate::operation::FragmentTableBuilder;
use crate::operation::OperationKind;
use crate::rewrite;
use crate::rewrite::IrForestBuilder;
use crate::rewrite::RewriteError;
use crate::rewrite::tests::test_utils;
use crate::rewrite::tests::test_utils::field_at;
use crate::rewrite::tests::test_utils::keys;
use crate::schema::SchemaBuilder;
use rayon::prelude::*;
use std::path::Path;

mod operations {
    use super::*;

    #[test]
    fn every_operation_gets_a_document() {
        let schema = test_utils::schema();
        let doc = test_utils::parse(r#"
            query A { me { id } }
            mutation Rename { renamePet(name: "Rex") { ... on Dog { name } } }
            query B { pet { __typename } }
            { sort }
        "#);
        let forest = rewrite::rewrite(&schema, &doc, None).unwrap();

        assert_eq!(forest.len(), 4);
        assert!(!forest.is_empty());
        assert_eq!(
            forest.documents().map(|doc| doc.name()).collect::<Vec<_>>(),
            vec![Some("A"), Some("B"), None, Some("Rename")],
        );
        assert_eq!(
            forest.documents_of_kind(OperationKind::Query).count(),
            3,
        );

        let rename = forest.get(OperationKind::Mutation, Some("Rename")).unwrap();
        assert_eq!(rename.operation_kind(), OperationKind::Mutation);
        assert_eq!(rename.root_type_name(), "Mutation");
        assert_eq!(rename.typed_children().type_names().collect::<Vec<_>>(), vec!["Mutation"]);
        let name = field_at(
            rename.selection_map().unwrap(),
            &[("Mutation", "renamePet"), ("Dog", "name")],
        );
        assert_eq!(name.parent_type_name(), "Dog");

        let anonymous = forest.get(OperationKind::Query, None).unwrap();
        assert_eq!(keys(anonymous.selection_map().unwrap()), vec!["sort"]);
        assert!(forest.get(OperationKind::Mutation, Some("A")).is_none());
        assert!(forest.operation("Missing").is_none());
    }

    #[test]
    fn empty_document_produces_empty_forest() {
        let schema = test_utils::schema();
        let doc = test_utils::parse("fragment F on Person { id }");
        let forest = rewrite::rewrite(&schema, &doc, None).unwrap();
        assert!(forest.is_empty());
        assert_eq!(forest.len(), 0);
    }

    #[test]
    fn anonymous_operations_of_different_kinds_coexist() {
        let schema = test_utils::schema();
        let doc = test_utils::parse(r#"
            { me { id } }
            mutation { renamePet(name: "Rex") { __typename } }
        "#);
        let forest = rewrite::rewrite(&schema, &doc, None).unwrap();
        assert!(forest.get(OperationKind::Query, None).is_some());
        assert!(forest.get(OperationKind::Mutation, None).is_some());
    }

    #[test]
    fn fragments_may_come_from_other_documents() {
        let schema = test_utils::schema();
        let shared_path = Path::new("fragments.graphql");
        let query_path = Path::new("query.graphql");
        let shared = test_utils::parse("fragment PersonName on Person { name }");
        let doc = test_utils::parse("query Me { me { id ...PersonName } }");

        let mut fragments = FragmentTableBuilder::new();
        fragments.add_from_document_ast(&shared, Some(shared_path)).unwrap();
        fragments.add_from_document_ast(&doc, Some(query_path)).unwrap();
        let fragments = fragments.build();

        let forest = IrForestBuilder::new(&schema, &fragments)
            .add_document(&doc, Some(query_path))
            .unwrap()
            .build();
        let me = forest.operation("Me").unwrap();
        assert_eq!(
            me.def_location().file_position().unwrap().file.as_deref(),
            Some(query_path),
        );

        let root = me.selection_map().unwrap();
        let id = field_at(root, &[("Query", "me"), ("Person", "id")]);
        let name = field_at(root, &[("Query", "me"), ("Person", "name")]);
        assert_eq!(
            id.occurrences()[0].location().file_position().unwrap().file.as_deref(),
            Some(query_path),
        );
        assert_eq!(
            name.occurrences()[0].location().file_position().unwrap().file.as_deref(),
            Some(shared_path),
        );
    }

    #[test]
    fn display_renders_the_document_tree() {
        let schema = test_utils::schema();
        let doc = test_utils::parse(r#"
            query Q($x: Boolean!) {
                me { name @include(if: $x) friend: bestFriend { id } }
            }
        "#);
        let forest = rewrite::rewrite(&schema, &doc, None).unwrap();

        assert_eq!(forest.to_string(), concat!(
            "query Q\n",
            "  ... on Query\n",
            "    me -> Person\n",
            "      ... on Person\n",
            "        name -> String [@include(if: $x)]\n",
            "        friend: bestFriend -> Person\n",
            "          ... on Person\n",
            "            id -> ID!\n",
        ));
    }
}

mod errors {
    use super::*;

    #[test]
    fn duplicate_operation_names_across_kinds() {
        let schema = test_utils::schema();
        let doc = test_utils::parse(r#"
            query A { me { id } }
            mutation A { renamePet(name: "Rex") { __typename } }
        "#);
        let errors = rewrite::rewrite(&schema, &doc, None).unwrap_err();

        let [RewriteError::DuplicateOperationName {
            first_def_location,
            operation_kind,
            operation_name,
            second_def_location,
        }] = &errors[..] else {
            panic!("Unexpected errors: {errors:?}");
        };
        assert_eq!(*operation_kind, OperationKind::Mutation);
        assert_eq!(operation_name.as_deref(), Some("A"));
        assert_eq!(first_def_location.file_position().unwrap().line, 2);
        assert_eq!(second_def_location.file_position().unwrap().line, 3);
    }

    #[test]
    fn duplicate_anonymous_queries() {
        let schema = test_utils::schema();
        let doc = test_utils::parse("{ me { id } } query { sort }");
        let errors = rewrite::rewrite(&schema, &doc, None).unwrap_err();
        assert!(matches!(
            &errors[..],
            [RewriteError::DuplicateOperationName { operation_name: None, .. }],
        ));
    }

    #[test]
    fn errors_from_every_operation_are_reported() {
        let schema = test_utils::schema();
        let doc = test_utils::parse(r#"
            query Fine { me { id } }
            query BadField { me { nope } }
            query BadFragment { me { ...Missing } }
        "#);
        let errors = rewrite::rewrite(&schema, &doc, None).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(matches!(errors[0], RewriteError::UnknownField { .. }));
        assert!(matches!(errors[1], RewriteError::UndefinedFragment { .. }));
    }

    #[test]
    fn operation_kind_without_root_type() {
        let schema = SchemaBuilder::from_str(None, "type Query { a: Int }")
            .unwrap()
            .build()
            .unwrap();
        let doc = test_utils::parse("subscription OnA { a }");
        let errors = rewrite::rewrite(&schema, &doc, None).unwrap_err();
        assert!(matches!(
            &errors[..],
            [RewriteError::NoRootTypeDefinedInSchema {
                operation_kind: OperationKind::Subscription,
                ..
            }],
        ));
    }

    #[test]
    fn duplicate_fragment_definitions() {
        let schema = test_utils::schema();
        let doc = test_utils::parse(r#"
            { me { ...F } }
            fragment F on Person { id }
            fragment F on Person { name }
        "#);
        let errors = rewrite::rewrite(&schema, &doc, None).unwrap_err();
        assert!(matches!(&errors[..], [RewriteError::FragmentTable(_)]));
    }
}

#[test]
fn independent_documents_rewrite_in_parallel() {
    let schema = test_utils::schema();
    let sources: Vec<String> = (0..64)
        .map(|idx| format!(
            "query Op{idx} {{ search {{ ... on Named {{ n{idx}: name }} ...Ids }} }} \
             fragment Ids on Node {{ id }}",
        ))
        .collect();
    let docs: Vec<_> = sources.iter().map(|src| test_utils::parse(src)).collect();

    let results: Vec<(String, usize)> = docs.par_iter()
        .enumerate()
        .map(|(idx, doc)| {
            let forest = rewrite::rewrite(&schema, doc, None).unwrap();
            let root = forest.operation(&format!("Op{idx}")).unwrap().selection_map().unwrap();
            let search = field_at(root, &[("Query", "search")]);
            let person = search.typed_children().get("Person").unwrap();
            (keys(person).join(","), search.typed_children().len())
        })
        .collect();

    for (idx, (person_keys, type_count)) in results.into_iter().enumerate() {
        assert_eq!(person_keys, format!("n{idx},id"));
        assert_eq!(type_count, 4);
    }
}
