use crate::types::NamedTypeAnnotation;
use crate::types::TypeAnnotation;

/// One property of an [`ObjectDeclaration`](crate::projection::ObjectDeclaration).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Property {
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    /// Set when the property may be missing entirely (as opposed to present
    /// and `null`).
    pub(crate) optional: bool,
    #[serde(rename = "type")]
    pub(crate) type_: PropertyType,
}
impl Property {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn optional(&self) -> bool {
        self.optional
    }

    pub fn property_type(&self) -> &PropertyType {
        &self.type_
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PropertyType {
    List {
        item_type: Box<PropertyType>,
        nullable: bool,
    },

    /// A scalar or enum type, referred to by its schema name.
    Named {
        nullable: bool,
        type_name: String,
    },

    /// A declaration generated within the same projection.
    Reference {
        declaration_name: String,
        nullable: bool,
    },

    /// A closed union of string literals; always non-null. Used for
    /// `__typename` so that a union of declarations can be narrowed on it.
    TypenameLiteral {
        type_names: Vec<String>,
    },
}
impl PropertyType {
    /// The schema's type for `type_annotation`, wrapped in its list and
    /// nullability modifiers.
    pub fn from_type_annotation(type_annotation: &TypeAnnotation) -> Self {
        Self::wrap_in_modifiers(type_annotation, &|named_annot| Self::Named {
            nullable: named_annot.nullable(),
            type_name: named_annot.type_name().to_string(),
        })
    }

    /// A reference to `declaration_name` wrapped in the list and nullability
    /// modifiers of `type_annotation`.
    pub fn reference(type_annotation: &TypeAnnotation, declaration_name: &str) -> Self {
        Self::wrap_in_modifiers(type_annotation, &|named_annot| Self::Reference {
            declaration_name: declaration_name.to_string(),
            nullable: named_annot.nullable(),
        })
    }

    pub fn typename_literal<S: AsRef<str>>(type_names: &[S]) -> Self {
        Self::TypenameLiteral {
            type_names: type_names.iter()
                .map(|type_name| type_name.as_ref().to_string())
                .collect(),
        }
    }

    pub fn nullable(&self) -> bool {
        match self {
            Self::List { nullable, .. }
                | Self::Named { nullable, .. }
                | Self::Reference { nullable, .. }
                => *nullable,
            Self::TypenameLiteral { .. } => false,
        }
    }

    fn wrap_in_modifiers(
        type_annotation: &TypeAnnotation,
        innermost: &dyn Fn(&NamedTypeAnnotation) -> PropertyType,
    ) -> Self {
        match type_annotation {
            TypeAnnotation::List(list_annot) => Self::List {
                item_type: Box::new(Self::wrap_in_modifiers(
                    list_annot.inner_type_annotation(),
                    innermost,
                )),
                nullable: list_annot.nullable(),
            },
            TypeAnnotation::Named(named_annot) => innermost(named_annot),
        }
    }
}
