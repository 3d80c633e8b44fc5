use crate::ast;
use crate::ir::ConditionPolarity;
use crate::ir::DeferredCondition;
use crate::loc;
use crate::rewrite::RewriteError;
use std::path::Path;

/// What the `@skip`/`@include` directives on one selection say about it.
#[derive(Clone, Debug, PartialEq)]
pub enum DirectiveVerdict {
    /// Always selected.
    Alive,

    /// Never selected: some directive has a literal condition that excludes
    /// it.
    Dead,

    /// Selected unless one of these variable-bound conditions excludes it at
    /// execution time.
    Undecided(Vec<DeferredCondition>),
}

/// Statically evaluates `@skip(if: ...)` and `@include(if: ...)`.
///
/// Directives other than `@skip` and `@include` are ignored.
pub struct DirectiveEvaluator;
impl DirectiveEvaluator {
    pub fn evaluate(
        directives: &[ast::operation::Directive],
        file_path: Option<&Path>,
    ) -> Result<DirectiveVerdict, RewriteError> {
        let mut dead = false;
        let mut deferred = vec![];

        for directive in directives {
            let polarity = match directive.name.as_str() {
                "include" => ConditionPolarity::Include,
                "skip" => ConditionPolarity::Skip,
                _ => continue,
            };
            let location = loc::SourceLocation::executable(file_path, directive.position);

            let condition = directive.arguments
                .iter()
                .find_map(|(arg_name, value)| (arg_name == "if").then_some(value))
                .ok_or_else(|| RewriteError::InvalidDirectiveCondition {
                    directive_name: directive.name.to_string(),
                    location: location.clone(),
                    reason: "missing `if` argument".to_string(),
                })?;

            match condition {
                ast::operation::Value::Boolean(value) => {
                    let included = match polarity {
                        ConditionPolarity::Include => *value,
                        ConditionPolarity::Skip => !*value,
                    };
                    dead |= !included;
                },

                ast::operation::Value::Variable(variable) =>
                    deferred.push(DeferredCondition {
                        location,
                        polarity,
                        variable: variable.to_string(),
                    }),

                other => return Err(RewriteError::InvalidDirectiveCondition {
                    directive_name: directive.name.to_string(),
                    location,
                    reason: format!("expected a Boolean or a variable, found `{other}`"),
                }),
            }
        }

        Ok(if dead {
            DirectiveVerdict::Dead
        } else if deferred.is_empty() {
            DirectiveVerdict::Alive
        } else {
            DirectiveVerdict::Undecided(deferred)
        })
    }
}
