use crate::operation::SelectionSet;

/// An inline fragment (`... on TypeName { }`).
///
/// The `possible_types` of the inner [`SelectionSet`] are the concrete types
/// that satisfy `type_name`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct TypeCondition {
    pub(super) selection_set: SelectionSet,
    pub(super) type_name: String,
}
impl TypeCondition {
    pub fn new(type_name: impl Into<String>, selection_set: SelectionSet) -> Self {
        Self {
            selection_set,
            type_name: type_name.into(),
        }
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    pub fn type_name(&self) -> &str {
        self.type_name.as_str()
    }
}
