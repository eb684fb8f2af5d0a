use crate::types::ListTypeAnnotation;
use crate::types::NamedTypeAnnotation;

/// Represents the declared type of a
/// [`FieldSelection`](crate::operation::FieldSelection) or
/// [`Variable`](crate::operation::Variable): a named schema type wrapped in
/// zero or more list and non-null modifiers.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeAnnotation {
    List(ListTypeAnnotation),
    Named(NamedTypeAnnotation),
}
impl TypeAnnotation {
    /// Unwrap the [`ListTypeAnnotation`] if this annotation is one.
    pub fn as_list_annotation(&self) -> Option<&ListTypeAnnotation> {
        if let Self::List(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// Unwrap the [`NamedTypeAnnotation`] if this annotation is one.
    pub fn as_named_annotation(&self) -> Option<&NamedTypeAnnotation> {
        if let Self::Named(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// Shorthand for a nullable list wrapping `inner`.
    pub fn list(inner: impl Into<TypeAnnotation>) -> Self {
        Self::List(ListTypeAnnotation::new(inner, /* nullable = */ true))
    }

    /// Shorthand for a nullable reference to the named schema type.
    pub fn named(type_name: impl Into<String>) -> Self {
        Self::Named(NamedTypeAnnotation::new(type_name, /* nullable = */ true))
    }

    /// Returns a copy of this annotation with the outermost level marked
    /// non-null.
    pub fn non_null(self) -> Self {
        match self {
            Self::List(list_annot) => Self::List(ListTypeAnnotation {
                nullable: false,
                ..list_annot
            }),
            Self::Named(named_annot) => Self::Named(NamedTypeAnnotation {
                nullable: false,
                ..named_annot
            }),
        }
    }

    /// Recursively unwrap this [`TypeAnnotation`] and return the inner-most
    /// [`NamedTypeAnnotation`] from it.
    pub fn innermost_named_type_annotation(&self) -> &NamedTypeAnnotation {
        match self {
            TypeAnnotation::List(ListTypeAnnotation { inner_type_annotation, .. })
                => inner_type_annotation.innermost_named_type_annotation(),
            TypeAnnotation::Named(named_annot)
                => named_annot,
        }
    }

    /// Check if two type annotations are definitionally equal.
    ///
    /// Two type annotations are equivalent if they have:
    /// - Same type structure (Named vs List)
    /// - Same nullability at each level
    /// - Same innermost type name
    ///
    /// Two selections of the same response key can only be merged into one
    /// property when their annotations are equivalent.
    pub fn is_equivalent_to(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::List(self_list), Self::List(other_list))
                => self_list.is_equivalent_to(other_list),
            (Self::Named(self_named), Self::Named(other_named))
                => self_named.is_equivalent_to(other_named),
            _ => false, // List vs Named mismatch
        }
    }

    /// Indicates if this [`TypeAnnotation`] is [nullable or
    /// non-nullable](https://spec.graphql.org/October2021/#sec-Non-Null).
    pub fn nullable(&self) -> bool {
        match self {
            TypeAnnotation::List(ListTypeAnnotation { nullable, .. }) => *nullable,
            TypeAnnotation::Named(NamedTypeAnnotation { nullable, .. }) => *nullable,
        }
    }
}
impl std::convert::From<ListTypeAnnotation> for TypeAnnotation {
    fn from(value: ListTypeAnnotation) -> Self {
        Self::List(value)
    }
}
impl std::convert::From<NamedTypeAnnotation> for TypeAnnotation {
    fn from(value: NamedTypeAnnotation) -> Self {
        Self::Named(value)
    }
}
impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(list_annot) => write!(
                f,
                "[{}]{}",
                list_annot.inner_type_annotation(),
                if list_annot.nullable() { "" } else { "!" },
            ),

            Self::Named(named_annot) => write!(
                f,
                "{}{}",
                named_annot.type_name(),
                if named_annot.nullable() { "" } else { "!" },
            ),
        }
    }
}
