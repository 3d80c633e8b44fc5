use crate::ast;

/// Represents the declared type of a [`Field`](crate::types::Field) or input
/// field, including list wrapping and nullability.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeAnnotation {
    List {
        inner: Box<TypeAnnotation>,
        nullable: bool,
    },
    Named {
        nullable: bool,
        type_name: String,
    },
}
impl TypeAnnotation {
    pub(crate) fn from_ast_type(ast_type: &ast::schema::Type) -> Self {
        Self::from_ast_type_impl(ast_type, /* nullable = */ true)
    }

    fn from_ast_type_impl(ast_type: &ast::schema::Type, nullable: bool) -> Self {
        match ast_type {
            ast::schema::Type::ListType(inner) => Self::List {
                inner: Box::new(Self::from_ast_type_impl(inner, true)),
                nullable,
            },

            ast::schema::Type::NamedType(name) => Self::Named {
                nullable,
                type_name: name.to_string(),
            },

            ast::schema::Type::NonNullType(inner) =>
                Self::from_ast_type_impl(inner, false),
        }
    }

    /// The name of the named type at the core of this annotation, after
    /// unwrapping every list and non-null wrapper.
    ///
    /// For `[[User!]]!` this is `User`.
    pub fn innermost_type_name(&self) -> &str {
        match self {
            Self::List { inner, .. } => inner.innermost_type_name(),
            Self::Named { type_name, .. } => type_name.as_str(),
        }
    }

    pub fn is_nullable(&self) -> bool {
        match self {
            Self::List { nullable, .. }
            | Self::Named { nullable, .. } => *nullable,
        }
    }

    pub fn to_graphql_string(&self) -> String {
        let (mut repr, nullable) = match self {
            Self::List { inner, nullable } =>
                (format!("[{}]", inner.to_graphql_string()), *nullable),
            Self::Named { nullable, type_name } =>
                (type_name.to_string(), *nullable),
        };
        if !nullable {
            repr.push('!');
        }
        repr
    }
}
impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_graphql_string().as_str())
    }
}
