use crate::ast;
use crate::ir::DeferredCondition;
use crate::ir::FieldOccurrence;
use crate::ir::IrField;
use crate::ir::TypedChildren;
use crate::loc;
use crate::operation::FragmentTable;
use crate::rewrite::DirectiveEvaluator;
use crate::rewrite::DirectiveVerdict;
use crate::rewrite::RewriteError;
use crate::rewrite::TypeScope;
use crate::schema::Schema;
use std::collections::HashMap;
use std::path::Path;

type Result<T> = std::result::Result<T, RewriteError>;

/// State that flows down (but never back up) through fields and fragments.
#[derive(Clone, Debug)]
struct MergeContext<'ast> {
    /// Deferred conditions on every enclosing field and fragment, from the
    /// operation root down.
    conditions: Vec<DeferredCondition>,
    /// The file holding the selections currently being visited. Changes when
    /// a spread pulls in a fragment defined in another document.
    file_path: Option<&'ast Path>,
}

/// Expands fragments and merges field selections into [`TypedChildren`].
///
/// A merger holds only read-only references, so one merger can serve any
/// number of operations.
#[derive(Clone, Copy, Debug)]
pub struct SelectionMerger<'schema, 'ast, 'frag> {
    fragments: &'frag FragmentTable<'ast>,
    schema: &'schema Schema,
}
impl<'schema, 'ast, 'frag> SelectionMerger<'schema, 'ast, 'frag> {
    pub fn new(schema: &'schema Schema, fragments: &'frag FragmentTable<'ast>) -> Self {
        Self {
            fragments,
            schema,
        }
    }

    /// Merge `selection_set` for every concrete type in `scope`.
    ///
    /// The result holds an entry for each type in `scope` that at least one
    /// field statically applies to. Types nothing applies to are absent.
    pub fn merge(
        &self,
        selection_set: &'ast ast::operation::SelectionSet,
        scope: &TypeScope<'schema>,
        file_path: Option<&'ast Path>,
    ) -> Result<TypedChildren<'schema, 'ast>> {
        let ctx = MergeContext {
            conditions: vec![],
            file_path,
        };
        self.merge_selection_set(selection_set, scope, &mut vec![], &ctx)
    }

    fn merge_selection_set(
        &self,
        selection_set: &'ast ast::operation::SelectionSet,
        scope: &TypeScope<'schema>,
        fragment_stack: &mut Vec<&'ast str>,
        ctx: &MergeContext<'ast>,
    ) -> Result<TypedChildren<'schema, 'ast>> {
        let mut typed_children = TypedChildren::new();
        for selection in &selection_set.items {
            use ast::operation::Selection;
            match selection {
                Selection::Field(field) => self.merge_field(
                    field,
                    scope,
                    fragment_stack,
                    ctx,
                    &mut typed_children,
                )?,

                Selection::FragmentSpread(spread) => {
                    let children = self.merge_fragment_spread(spread, scope, fragment_stack, ctx)?;
                    typed_children.merge(children);
                },

                Selection::InlineFragment(inline_fragment) => {
                    let children = self.merge_inline_fragment(
                        inline_fragment,
                        scope,
                        fragment_stack,
                        ctx,
                    )?;
                    typed_children.merge(children);
                },
            }
        }
        Ok(typed_children)
    }

    /// `None` if the directives statically eliminate the selection.
    /// Otherwise the conditions every field collected through it inherits.
    fn inherited_conditions(
        directives: &[ast::operation::Directive],
        ctx: &MergeContext<'ast>,
        location: &loc::SourceLocation,
    ) -> Result<Option<Vec<DeferredCondition>>> {
        Ok(match DirectiveEvaluator::evaluate(directives, ctx.file_path)? {
            DirectiveVerdict::Alive => Some(ctx.conditions.clone()),
            DirectiveVerdict::Dead => {
                tracing::trace!("Statically eliminated selection at {location}");
                None
            },
            DirectiveVerdict::Undecided(deferred) => {
                let mut conditions = ctx.conditions.clone();
                conditions.extend(deferred);
                Some(conditions)
            },
        })
    }

    fn merge_field(
        &self,
        field: &'ast ast::operation::Field,
        scope: &TypeScope<'schema>,
        fragment_stack: &mut Vec<&'ast str>,
        ctx: &MergeContext<'ast>,
        typed_children: &mut TypedChildren<'schema, 'ast>,
    ) -> Result<()> {
        let location = loc::SourceLocation::executable(ctx.file_path, field.position);
        let Some(conditions) = Self::inherited_conditions(&field.directives, ctx, &location)? else {
            return Ok(());
        };
        let response_key = field.alias.as_deref().unwrap_or(field.name.as_str());

        // The nested scope depends only on the field's return type, which may
        // differ between parent types (covariant interface fields).
        let mut children_by_return_type: HashMap<&'schema str, TypedChildren<'schema, 'ast>> =
            HashMap::new();

        for parent_type in scope.iter() {
            let field_definition = parent_type.field(field.name.as_str())
                .ok_or_else(|| RewriteError::UnknownField {
                    field_name: field.name.to_string(),
                    location: location.clone(),
                    parent_type_name: parent_type.name().to_string(),
                })?;
            let return_type_name = field_definition.type_annotation().innermost_type_name();

            let children = match children_by_return_type.get(return_type_name) {
                Some(children) => children.clone(),
                None => {
                    let children = match TypeScope::for_output_type(self.schema, return_type_name) {
                        Some(nested_scope) => {
                            let nested_ctx = MergeContext {
                                conditions: conditions.clone(),
                                file_path: ctx.file_path,
                            };
                            self.merge_selection_set(
                                &field.selection_set,
                                &nested_scope,
                                fragment_stack,
                                &nested_ctx,
                            )?
                        },

                        None if !field.selection_set.items.is_empty() =>
                            return Err(RewriteError::InvalidSubselection {
                                field_name: field.name.to_string(),
                                field_type_name: return_type_name.to_string(),
                                location: location.clone(),
                                parent_type_name: parent_type.name().to_string(),
                            }),

                        None => TypedChildren::new(),
                    };
                    children_by_return_type.insert(return_type_name, children.clone());
                    children
                },
            };

            let occurrence = FieldOccurrence {
                ast_field: field,
                conditions: conditions.clone(),
                location: location.clone(),
            };
            typed_children
                .selection_map_mut(parent_type.name())
                .insert_or_merge(IrField::new(
                    response_key,
                    parent_type,
                    field_definition,
                    occurrence,
                    children,
                ));
        }

        Ok(())
    }

    fn merge_fragment_spread(
        &self,
        spread: &'ast ast::operation::FragmentSpread,
        scope: &TypeScope<'schema>,
        fragment_stack: &mut Vec<&'ast str>,
        ctx: &MergeContext<'ast>,
    ) -> Result<TypedChildren<'schema, 'ast>> {
        let location = loc::SourceLocation::executable(ctx.file_path, spread.position);
        let Some(conditions) = Self::inherited_conditions(&spread.directives, ctx, &location)? else {
            return Ok(TypedChildren::new());
        };
        let fragment_name = spread.fragment_name.as_str();

        if let Some(cycle_start) = fragment_stack.iter().position(|name| *name == fragment_name) {
            let mut cycle_path: Vec<String> = fragment_stack[cycle_start..]
                .iter()
                .map(|name| name.to_string())
                .collect();
            cycle_path.push(fragment_name.to_string());
            return Err(RewriteError::CyclicFragmentReference {
                cycle_path,
                location,
            });
        }

        let fragment = self.fragments.get(fragment_name)
            .ok_or_else(|| RewriteError::UndefinedFragment {
                fragment_name: fragment_name.to_string(),
                location: location.clone(),
            })?;

        let narrowed = scope.narrow(
            self.schema,
            Some(fragment.type_condition_name()),
            &fragment.def_location(),
        )?;
        if narrowed.is_empty() {
            tracing::trace!(
                "Fragment `{fragment_name}` spread at {location} applies to no possible type",
            );
            return Ok(TypedChildren::new());
        }

        tracing::debug!(
            "Expanding fragment `{fragment_name}` at {location} for [{}]",
            narrowed.type_names().collect::<Vec<_>>().join(", "),
        );
        let fragment_ctx = MergeContext {
            conditions,
            file_path: fragment.file_path(),
        };
        fragment_stack.push(fragment_name);
        let result = self.merge_selection_set(
            &fragment.definition().selection_set,
            &narrowed,
            fragment_stack,
            &fragment_ctx,
        );
        fragment_stack.pop();
        result
    }

    fn merge_inline_fragment(
        &self,
        inline_fragment: &'ast ast::operation::InlineFragment,
        scope: &TypeScope<'schema>,
        fragment_stack: &mut Vec<&'ast str>,
        ctx: &MergeContext<'ast>,
    ) -> Result<TypedChildren<'schema, 'ast>> {
        let location = loc::SourceLocation::executable(ctx.file_path, inline_fragment.position);
        let Some(conditions) = Self::inherited_conditions(
            &inline_fragment.directives,
            ctx,
            &location,
        )? else {
            return Ok(TypedChildren::new());
        };

        let type_condition = inline_fragment.type_condition
            .as_ref()
            .map(|ast::operation::TypeCondition::On(type_name)| type_name.as_str());
        let narrowed = scope.narrow(self.schema, type_condition, &location)?;
        if narrowed.is_empty() {
            tracing::trace!("Inline fragment at {location} applies to no possible type");
            return Ok(TypedChildren::new());
        }

        let fragment_ctx = MergeContext {
            conditions,
            file_path: ctx.file_path,
        };
        self.merge_selection_set(
            &inline_fragment.selection_set,
            &narrowed,
            fragment_stack,
            &fragment_ctx,
        )
    }
}
