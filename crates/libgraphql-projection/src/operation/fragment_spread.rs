use crate::operation::SelectionSet;

/// A spread of a named fragment (`...FragmentName`).
///
/// The spread carries the fragment's own [`SelectionSet`] with its
/// `possible_types` narrowed to the types the fragment's type condition
/// accepts.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FragmentSpread {
    pub(super) fragment_name: String,
    pub(super) selection_set: SelectionSet,
}
impl FragmentSpread {
    pub fn new(fragment_name: impl Into<String>, selection_set: SelectionSet) -> Self {
        Self {
            fragment_name: fragment_name.into(),
            selection_set,
        }
    }

    pub fn fragment_name(&self) -> &str {
        self.fragment_name.as_str()
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }
}
