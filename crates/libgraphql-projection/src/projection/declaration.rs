use crate::projection::Property;

/// A named structural type produced by the
/// [`ProjectionEngine`](crate::projection::ProjectionEngine).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Declaration {
    Object(ObjectDeclaration),
    Union(UnionDeclaration),
}
impl Declaration {
    pub fn as_object(&self) -> Option<&ObjectDeclaration> {
        if let Self::Object(decl) = self {
            Some(decl)
        } else {
            None
        }
    }

    pub fn as_union(&self) -> Option<&UnionDeclaration> {
        if let Self::Union(decl) = self {
            Some(decl)
        } else {
            None
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Object(decl) => decl.name(),
            Self::Union(decl) => decl.name(),
        }
    }
}

/// The shape of one variant: an object with an ordered list of properties.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectDeclaration {
    /// Names of fragments spread into this shape whose fields were not merged
    /// into `properties`. Always empty when merging is enabled.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub(crate) fragment_spreads: Vec<String>,
    pub(crate) name: String,
    pub(crate) possible_types: Vec<String>,
    pub(crate) properties: Vec<Property>,
}
impl ObjectDeclaration {
    pub fn fragment_spreads(&self) -> &[String] {
        self.fragment_spreads.as_slice()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The concrete types whose responses take this shape.
    pub fn possible_types(&self) -> &[String] {
        self.possible_types.as_slice()
    }

    pub fn properties(&self) -> &[Property] {
        self.properties.as_slice()
    }

    /// Look up a property by name.
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|property| property.name() == name)
    }
}

/// A discriminated union of the [`ObjectDeclaration`]s generated for each
/// variant of one selection set.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UnionDeclaration {
    pub(crate) members: Vec<String>,
    pub(crate) name: String,
}
impl UnionDeclaration {
    /// Names of the member declarations, in variant order.
    pub fn members(&self) -> &[String] {
        self.members.as_slice()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
