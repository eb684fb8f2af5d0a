#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NamedTypeAnnotation {
    pub(crate) nullable: bool,
    pub(crate) type_name: String,
}

impl NamedTypeAnnotation {
    pub fn new(type_name: impl Into<String>, nullable: bool) -> Self {
        Self {
            nullable,
            type_name: type_name.into(),
        }
    }

    /// Check if two named type annotations are definitionally equal.
    ///
    /// Two named type annotations are equivalent if they have:
    /// - Same type name
    /// - Same nullability
    pub fn is_equivalent_to(&self, other: &Self) -> bool {
        self.nullable == other.nullable
            && self.type_name == other.type_name
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }

    /// The name of the schema type (scalar, enum, object, interface, or
    /// union) this annotation refers to.
    pub fn type_name(&self) -> &str {
        self.type_name.as_str()
    }
}
