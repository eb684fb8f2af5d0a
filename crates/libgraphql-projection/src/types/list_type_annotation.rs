use crate::types::TypeAnnotation;

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ListTypeAnnotation {
    pub(super) inner_type_annotation: Box<TypeAnnotation>,
    pub(super) nullable: bool,
}
impl ListTypeAnnotation {
    pub fn new(inner: impl Into<TypeAnnotation>, nullable: bool) -> Self {
        Self {
            inner_type_annotation: Box::new(inner.into()),
            nullable,
        }
    }

    pub fn inner_type_annotation(&self) -> &TypeAnnotation {
        &self.inner_type_annotation
    }

    /// Check if two list type annotations are definitionally equal: same
    /// nullability and equivalent inner annotations.
    pub fn is_equivalent_to(&self, other: &Self) -> bool {
        self.nullable == other.nullable
            && self.inner_type_annotation.is_equivalent_to(
                &other.inner_type_annotation,
            )
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }
}
