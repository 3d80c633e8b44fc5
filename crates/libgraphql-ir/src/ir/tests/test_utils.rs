use crate::ast;
use crate::ir::ConditionPolarity;
use crate::ir::DeferredCondition;
use crate::ir::FieldOccurrence;
use crate::ir::IrField;
use crate::ir::TypedChildren;
use crate::loc;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;

/// A schema plus a tiny parsed document that IR nodes in these tests can
/// borrow from.
pub(super) struct Fixture {
    pub(super) document: ast::operation::Document,
    pub(super) schema: Schema,
}
impl Fixture {
    pub(super) fn new() -> Self {
        let schema = SchemaBuilder::from_str(None, concat!(
            "type Query { f: Int pet: Pet }\n",
            "union Pet = Dog | Cat\n",
            "type Dog { name: String }\n",
            "type Cat { name: String }\n",
        )).unwrap().build().unwrap();
        let document = ast::operation::parse("{ f pet { name } }").unwrap();
        Self { document, schema }
    }

    fn root_fields(&self) -> &[ast::operation::Selection] {
        match &self.document.definitions[0] {
            ast::operation::Definition::Operation(
                ast::operation::OperationDefinition::SelectionSet(selection_set),
            ) => &selection_set.items,
            other => panic!("Unexpected definition: {other:?}"),
        }
    }

    fn ast_field(selection: &ast::operation::Selection) -> &ast::operation::Field {
        match selection {
            ast::operation::Selection::Field(field) => field,
            other => panic!("Unexpected selection: {other:?}"),
        }
    }

    fn occurrence<'ast>(
        ast_field: &'ast ast::operation::Field,
        conditions: Vec<DeferredCondition>,
    ) -> FieldOccurrence<'ast> {
        FieldOccurrence {
            ast_field,
            conditions,
            location: loc::SourceLocation::executable(None, ast_field.position),
        }
    }

    /// A `Query.f` node stored under `response_key`.
    pub(super) fn scalar_field(
        &self,
        response_key: &str,
        conditions: Vec<DeferredCondition>,
    ) -> IrField<'_, '_> {
        let query_type = self.schema.object_type("Query").unwrap();
        IrField::new(
            response_key,
            query_type,
            query_type.field("f").unwrap(),
            Self::occurrence(Self::ast_field(&self.root_fields()[0]), conditions),
            TypedChildren::new(),
        )
    }

    /// A `Query.pet` node whose children select `name` on each of
    /// `pet_types`.
    pub(super) fn pet_field(&self, pet_types: &[&str]) -> IrField<'_, '_> {
        let query_type = self.schema.object_type("Query").unwrap();
        let pet_ast = Self::ast_field(&self.root_fields()[1]);
        let name_ast = Self::ast_field(&pet_ast.selection_set.items[0]);

        let mut children = TypedChildren::new();
        for type_name in pet_types {
            let pet_type = self.schema.object_type(type_name).unwrap();
            children.selection_map_mut(pet_type.name()).insert_or_merge(IrField::new(
                "name",
                pet_type,
                pet_type.field("name").unwrap(),
                Self::occurrence(name_ast, vec![]),
                TypedChildren::new(),
            ));
        }

        IrField::new(
            "pet",
            query_type,
            query_type.field("pet").unwrap(),
            Self::occurrence(pet_ast, vec![]),
            children,
        )
    }
}

pub(super) fn condition(polarity: ConditionPolarity, variable: &str) -> DeferredCondition {
    DeferredCondition {
        location: loc::SourceLocation::GraphQLBuiltIn,
        polarity,
        variable: variable.to_string(),
    }
}
