use crate::operation::Selection;
use crate::operation::SelectionSetBuilder;

/// An ordered set of [`Selection`]s requested at one position within an
/// operation or fragment, along with the concrete object types that this
/// position can resolve to at runtime.
///
/// `possible_types` is computed by whatever compiled the operation: it is a
/// list with a single entry when the position's declared type is an object
/// type, and the full list of implementors/members when the declared type is
/// an interface or union.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SelectionSet {
    pub(super) possible_types: Vec<String>,
    #[serde(default)]
    pub(super) selections: Vec<Selection>,
}
impl SelectionSet {
    /// Convenience wrapper around [`SelectionSetBuilder::new()`].
    pub fn builder<S: Into<String>>(
        possible_types: impl IntoIterator<Item = S>,
    ) -> SelectionSetBuilder {
        SelectionSetBuilder::new(possible_types)
    }

    /// Produce a new [`SelectionSet`] whose selections are this set's
    /// selections followed by `other`'s.
    ///
    /// The `possible_types` of `self` are retained.
    pub fn concat(&self, other: &SelectionSet) -> SelectionSet {
        let mut selections = self.selections.clone();
        selections.extend(other.selections.iter().cloned());
        SelectionSet {
            possible_types: self.possible_types.clone(),
            selections,
        }
    }

    /// The names of the concrete object types this position can resolve to,
    /// in a stable order.
    pub fn possible_types(&self) -> &[String] {
        self.possible_types.as_slice()
    }

    pub fn selections(&self) -> &[Selection] {
        self.selections.as_slice()
    }
}
