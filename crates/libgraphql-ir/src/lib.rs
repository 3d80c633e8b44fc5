//! Rewrites validated GraphQL executable documents into a typed
//! intermediate representation (IR).
//!
//! Every field selection in an operation, whether it was selected directly,
//! through an inline fragment, or through a named fragment spread, is grouped
//! under the concrete object type it applies to. Repeated selections of the
//! same response key are merged into a single [`ir::IrField`] that remembers
//! every contributing AST occurrence along with any `@skip`/`@include`
//! conditions that could not be decided statically.
//!
//! ```
//! use libgraphql_ir::ast;
//! use libgraphql_ir::rewrite;
//! use libgraphql_ir::schema::SchemaBuilder;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let schema = SchemaBuilder::from_str(
//!     None,
//!     "type Query { me: User } type User { id: ID! name: String }",
//! )?
//! .build()?;
//!
//! let document = ast::operation::parse("query Me { me { id ...Name } } fragment Name on User { name }")?;
//! let forest = rewrite::rewrite(&schema, &document, None).map_err(|errs| format!("{errs:?}"))?;
//!
//! let me = forest.operation("Me").unwrap();
//! assert_eq!(me.selection_map().unwrap().keys().collect::<Vec<_>>(), vec!["me"]);
//! # Ok(())
//! # }
//! ```

pub mod ast;
pub mod file_reader;
pub mod ir;
pub mod loc;
pub mod operation;
pub mod rewrite;
pub mod schema;
pub mod types;

#[cfg(test)]
mod tests;
