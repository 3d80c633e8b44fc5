use crate::ast;

/// The kind of a GraphQL operation, which also selects the schema's root
/// type the operation is evaluated against.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum OperationKind {
    Mutation,
    Query,
    Subscription,
}
impl OperationKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Mutation => "mutation",
            Self::Query => "query",
            Self::Subscription => "subscription",
        }
    }
}
impl std::convert::From<&ast::operation::OperationDefinition> for OperationKind {
    fn from(value: &ast::operation::OperationDefinition) -> Self {
        use ast::operation::OperationDefinition as Op;
        match value {
            Op::Mutation(_) => Self::Mutation,
            Op::Query(_)
            | Op::SelectionSet(_) => Self::Query,
            Op::Subscription(_) => Self::Subscription,
        }
    }
}
impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}
