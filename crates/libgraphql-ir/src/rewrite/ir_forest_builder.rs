use crate::ast;
use crate::ir::IrDocument;
use crate::ir::IrForest;
use crate::loc;
use crate::operation::FragmentTable;
use crate::operation::OperationKind;
use crate::rewrite::RewriteError;
use crate::rewrite::SelectionMerger;
use crate::rewrite::TypeScope;
use crate::schema::Schema;
use std::collections::HashMap;
use std::path::Path;

type Result<T> = std::result::Result<T, Vec<RewriteError>>;

/// Builds an [`IrForest`] from the operations of one or more documents.
///
/// Each operation is rewritten independently. A document that contains a
/// failing operation fails as a whole: every operation error from that
/// document is reported and no partial forest is produced.
///
/// ```
/// use libgraphql_ir::ast;
/// use libgraphql_ir::operation::FragmentTable;
/// use libgraphql_ir::rewrite::IrForestBuilder;
/// use libgraphql_ir::schema::SchemaBuilder;
///
/// let schema = SchemaBuilder::from_str(None, "type Query { a: Int b: Int }")
///     .unwrap()
///     .build()
///     .unwrap();
/// let fragments_doc = ast::operation::parse("fragment B on Query { b }").unwrap();
/// let fragments = FragmentTable::from_document(&fragments_doc, None).unwrap();
///
/// let doc = ast::operation::parse("query Both { a ...B }").unwrap();
/// let forest = IrForestBuilder::new(&schema, &fragments)
///     .add_document(&doc, None)
///     .unwrap()
///     .build();
///
/// let both = forest.operation("Both").unwrap();
/// assert_eq!(both.selection_map().unwrap().keys().collect::<Vec<_>>(), vec!["a", "b"]);
/// ```
#[derive(Debug)]
pub struct IrForestBuilder<'schema, 'ast, 'frag> {
    anonymous_operations: HashMap<OperationKind, loc::SourceLocation>,
    forest: IrForest<'schema, 'ast>,
    merger: SelectionMerger<'schema, 'ast, 'frag>,
    named_operations: HashMap<String, loc::SourceLocation>,
    schema: &'schema Schema,
}
impl<'schema, 'ast, 'frag> IrForestBuilder<'schema, 'ast, 'frag> {
    pub fn new(schema: &'schema Schema, fragments: &'frag FragmentTable<'ast>) -> Self {
        Self {
            anonymous_operations: HashMap::new(),
            forest: IrForest::default(),
            merger: SelectionMerger::new(schema, fragments),
            named_operations: HashMap::new(),
            schema,
        }
    }

    /// Rewrite every operation definition in `document`. Fragment
    /// definitions in `document` are not collected here; they must already
    /// be in the [`FragmentTable`] this builder was created with.
    pub fn add_document(
        mut self,
        document: &'ast ast::operation::Document,
        file_path: Option<&'ast Path>,
    ) -> Result<Self> {
        let mut errors = vec![];
        for definition in &document.definitions {
            let ast::operation::Definition::Operation(operation) = definition else {
                continue;
            };
            if let Err(err) = self.add_operation(operation, file_path) {
                errors.push(err);
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(self)
    }

    fn add_operation(
        &mut self,
        operation: &'ast ast::operation::OperationDefinition,
        file_path: Option<&'ast Path>,
    ) -> std::result::Result<(), RewriteError> {
        use ast::operation::OperationDefinition as OpDef;
        let operation_kind = OperationKind::from(operation);
        let (name, position, selection_set) = match operation {
            OpDef::Mutation(op) => (op.name.as_deref(), op.position, &op.selection_set),
            OpDef::Query(op) => (op.name.as_deref(), op.position, &op.selection_set),
            OpDef::SelectionSet(selection_set) => (None, selection_set.span.0, selection_set),
            OpDef::Subscription(op) => (op.name.as_deref(), op.position, &op.selection_set),
        };
        let def_location = loc::SourceLocation::executable(file_path, position);

        let existing_location = match name {
            Some(name) => self.named_operations.get(name),
            None => self.anonymous_operations.get(&operation_kind),
        };
        if let Some(first_def_location) = existing_location {
            return Err(RewriteError::DuplicateOperationName {
                first_def_location: first_def_location.clone(),
                operation_kind,
                operation_name: name.map(str::to_string),
                second_def_location: def_location,
            });
        }
        match name {
            Some(name) => self.named_operations.insert(name.to_string(), def_location.clone()),
            None => self.anonymous_operations.insert(operation_kind, def_location.clone()),
        };

        let root_type = self.schema.root_type(operation_kind)
            .ok_or_else(|| RewriteError::NoRootTypeDefinedInSchema {
                location: def_location.clone(),
                operation_kind,
            })?;

        tracing::debug!(
            "Rewriting {operation_kind} `{}` defined at {def_location}",
            name.unwrap_or("<anonymous>"),
        );
        let typed_children = self.merger.merge(
            selection_set,
            &TypeScope::singleton(root_type),
            file_path,
        )?;

        self.forest.insert(IrDocument {
            def_location,
            name: name.map(str::to_string),
            operation_kind,
            root_type,
            typed_children,
        });
        Ok(())
    }

    pub fn build(self) -> IrForest<'schema, 'ast> {
        self.forest
    }

    pub fn from_ast(
        schema: &'schema Schema,
        fragments: &'frag FragmentTable<'ast>,
        document: &'ast ast::operation::Document,
        file_path: Option<&'ast Path>,
    ) -> Result<IrForest<'schema, 'ast>> {
        Ok(Self::new(schema, fragments).add_document(document, file_path)?.build())
    }
}
