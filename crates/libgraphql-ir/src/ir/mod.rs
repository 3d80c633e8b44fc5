//! The typed intermediate representation produced by a rewrite.
//!
//! An [`IrForest`] holds one [`IrDocument`] per operation. Every document and
//! every composite-typed [`IrField`] carries [`TypedChildren`]: one
//! [`SelectionMap`] per concrete object type, listing the fields that
//! statically apply when the value at that position has that runtime type.
//!
//! All IR values are built during a single rewrite and are never mutated
//! afterwards. They borrow the [`Schema`](crate::schema::Schema) (`'schema`)
//! and the parsed documents (`'ast`) they were built from.

mod deferred_condition;
mod display;
mod field_occurrence;
mod ir_document;
mod ir_field;
mod ir_forest;
mod selection_map;
mod typed_children;

pub use deferred_condition::ConditionPolarity;
pub use deferred_condition::DeferredCondition;
pub use deferred_condition::VariableBindings;
pub use field_occurrence::FieldOccurrence;
pub use ir_document::IrDocument;
pub use ir_field::IrField;
pub use ir_forest::IrForest;
pub use selection_map::SelectionMap;
pub use typed_children::TypedChildren;

#[cfg(test)]
mod tests;
