use crate::operation::BooleanCondition;
use crate::operation::FieldSelection;
use crate::operation::FragmentSpread;
use crate::operation::TypeCondition;

/// One entry of a [`SelectionSet`](crate::operation::SelectionSet).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Selection {
    /// `@include(if: $var)` / `@skip(if: $var)` applied to a group of
    /// selections.
    BooleanCondition(BooleanCondition),
    Field(FieldSelection),
    /// `...FragmentName`
    FragmentSpread(FragmentSpread),
    /// `... on TypeName { }`
    TypeCondition(TypeCondition),
}
impl Selection {
    pub fn as_field(&self) -> Option<&FieldSelection> {
        if let Self::Field(field) = self {
            Some(field)
        } else {
            None
        }
    }
}
impl std::convert::From<BooleanCondition> for Selection {
    fn from(value: BooleanCondition) -> Self {
        Self::BooleanCondition(value)
    }
}
impl std::convert::From<FieldSelection> for Selection {
    fn from(value: FieldSelection) -> Self {
        Self::Field(value)
    }
}
impl std::convert::From<FragmentSpread> for Selection {
    fn from(value: FragmentSpread) -> Self {
        Self::FragmentSpread(value)
    }
}
impl std::convert::From<TypeCondition> for Selection {
    fn from(value: TypeCondition) -> Self {
        Self::TypeCondition(value)
    }
}
