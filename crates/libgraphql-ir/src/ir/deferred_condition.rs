use crate::loc;
use std::collections::HashMap;

/// Boolean values for the variables referenced by `@skip`/`@include`
/// conditions, keyed by variable name (without the leading `$`).
pub type VariableBindings = HashMap<String, bool>;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ConditionPolarity {
    /// `@include(if: $var)`: included when the variable is `true`.
    Include,
    /// `@skip(if: $var)`: included when the variable is `false`.
    Skip,
}
impl ConditionPolarity {
    pub fn directive_name(&self) -> &'static str {
        match self {
            Self::Include => "include",
            Self::Skip => "skip",
        }
    }
}

/// A `@skip` or `@include` condition whose `if:` argument is a variable and
/// so could not be decided while rewriting. It is resolved later, once the
/// operation's variable values are known.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct DeferredCondition {
    pub(crate) location: loc::SourceLocation,
    pub(crate) polarity: ConditionPolarity,
    pub(crate) variable: String,
}
impl DeferredCondition {
    /// Whether the guarded selection is included under `bindings`, or `None`
    /// if the variable is unbound.
    pub fn evaluate(&self, bindings: &VariableBindings) -> Option<bool> {
        let value = *bindings.get(self.variable.as_str())?;
        Some(match self.polarity {
            ConditionPolarity::Include => value,
            ConditionPolarity::Skip => !value,
        })
    }

    /// Where the directive appears in the executable document.
    pub fn location(&self) -> &loc::SourceLocation {
        &self.location
    }

    pub fn polarity(&self) -> ConditionPolarity {
        self.polarity
    }

    pub fn variable(&self) -> &str {
        self.variable.as_str()
    }
}
impl std::fmt::Display for DeferredCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "@{}(if: ${})", self.polarity.directive_name(), self.variable)
    }
}
