use crate::loc;
use crate::operation::FragmentTableBuildError;
use crate::operation::OperationKind;
use thiserror::Error;

/// Structural failures while rewriting a document.
///
/// Apart from [`RewriteError::CyclicFragmentReference`] and
/// [`RewriteError::DuplicateOperationName`], every variant describes input
/// that validation should already have rejected.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum RewriteError {
    #[error(
        "Fragment spread at {location} forms a cycle: {}",
        .cycle_path.join(" -> ")
    )]
    CyclicFragmentReference {
        /// The fragments being expanded, from the first one to repeat through
        /// the repeated spread itself.
        cycle_path: Vec<String>,
        location: loc::SourceLocation,
    },

    #[error(
        "Operation name `{operation_name:?}` is used more than once (at \
        {first_def_location} and {second_def_location})"
    )]
    DuplicateOperationName {
        first_def_location: loc::SourceLocation,
        operation_kind: OperationKind,
        operation_name: Option<String>,
        second_def_location: loc::SourceLocation,
    },

    #[error(transparent)]
    FragmentTable(#[from] FragmentTableBuildError),

    #[error("`@{directive_name}` at {location} has an invalid `if` argument: {reason}")]
    InvalidDirectiveCondition {
        directive_name: String,
        location: loc::SourceLocation,
        reason: String,
    },

    #[error(
        "Field `{parent_type_name}.{field_name}` at {location} returns \
        `{field_type_name}`, which cannot have a selection set"
    )]
    InvalidSubselection {
        field_name: String,
        field_type_name: String,
        location: loc::SourceLocation,
        parent_type_name: String,
    },

    #[error("The schema defines no root type for {operation_kind} operations (at {location})")]
    NoRootTypeDefinedInSchema {
        location: loc::SourceLocation,
        operation_kind: OperationKind,
    },

    #[error("Fragment `{fragment_name}` spread at {location} is not defined")]
    UndefinedFragment {
        fragment_name: String,
        location: loc::SourceLocation,
    },

    #[error("Field `{field_name}` at {location} is not defined on type `{parent_type_name}`")]
    UnknownField {
        field_name: String,
        location: loc::SourceLocation,
        parent_type_name: String,
    },

    #[error(
        "Type condition `{type_name}` at {location} does not name an object, \
        interface, or union type in the schema"
    )]
    UnknownTypeCondition {
        location: loc::SourceLocation,
        type_name: String,
    },
}
