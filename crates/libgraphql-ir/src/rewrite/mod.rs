//! The rewrite engine: turns a validated executable document into an
//! [`IrForest`].
//!
//! The pieces, leaves first:
//!
//!   * [`TypeScope`] narrows a set of possible concrete types by a fragment's
//!     type condition.
//!   * [`DirectiveEvaluator`] decides whether `@skip`/`@include` statically
//!     eliminate a selection.
//!   * [`SelectionMerger`] expands fragments and merges field selections into
//!     per-type [`SelectionMap`](crate::ir::SelectionMap)s, recursively.
//!   * [`IrForestBuilder`] runs the merger once per operation.

mod directive_evaluator;
mod ir_forest_builder;
mod rewrite_error;
mod selection_merger;
mod type_scope;

pub use directive_evaluator::DirectiveEvaluator;
pub use directive_evaluator::DirectiveVerdict;
pub use ir_forest_builder::IrForestBuilder;
pub use rewrite_error::RewriteError;
pub use selection_merger::SelectionMerger;
pub use type_scope::TypeScope;

use crate::ast;
use crate::ir::IrForest;
use crate::operation::FragmentTable;
use crate::schema::Schema;
use std::path::Path;

/// Rewrite every operation in `document`, resolving fragment spreads against
/// the fragments defined in that same document.
///
/// Use [`IrForestBuilder`] directly when fragments come from other
/// documents too.
pub fn rewrite<'schema, 'ast>(
    schema: &'schema Schema,
    document: &'ast ast::operation::Document,
    file_path: Option<&'ast Path>,
) -> Result<IrForest<'schema, 'ast>, Vec<RewriteError>> {
    let fragments = FragmentTable::from_document(document, file_path)
        .map_err(|errs| errs.into_iter().map(RewriteError::from).collect::<Vec<_>>())?;
    IrForestBuilder::from_ast(schema, &fragments, document, file_path)
}

#[cfg(test)]
mod tests;
