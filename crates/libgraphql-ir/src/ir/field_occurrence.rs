use crate::ast;
use crate::ir::DeferredCondition;
use crate::ir::VariableBindings;
use crate::loc;

/// One statically-alive AST field selection that contributed to an
/// [`IrField`](crate::ir::IrField).
///
/// `conditions` holds every deferred `@skip`/`@include` condition on the path
/// from the operation root to this selection: those on enclosing fields, on
/// the inline fragments and fragment spreads it was reached through, and on
/// the field itself. Outermost conditions come first.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldOccurrence<'ast> {
    pub(crate) ast_field: &'ast ast::operation::Field,
    pub(crate) conditions: Vec<DeferredCondition>,
    pub(crate) location: loc::SourceLocation,
}
impl<'ast> FieldOccurrence<'ast> {
    pub fn alias(&self) -> Option<&'ast str> {
        let ast_field = self.ast_field;
        ast_field.alias.as_deref()
    }

    pub fn ast_field(&self) -> &'ast ast::operation::Field {
        self.ast_field
    }

    pub fn conditions(&self) -> &[DeferredCondition] {
        &self.conditions
    }

    pub fn is_conditional(&self) -> bool {
        !self.conditions.is_empty()
    }

    /// Whether this occurrence survives every deferred condition under
    /// `bindings`. `None` if some condition needed to decide depends on an
    /// unbound variable.
    pub fn is_included(&self, bindings: &VariableBindings) -> Option<bool> {
        let mut undecided = false;
        for condition in &self.conditions {
            match condition.evaluate(bindings) {
                Some(false) => return Some(false),
                Some(true) => (),
                None => undecided = true,
            }
        }
        (!undecided).then_some(true)
    }

    pub fn location(&self) -> &loc::SourceLocation {
        &self.location
    }
}
