use crate::operation::SelectionSet;

/// A group of selections guarded by `@include(if: $variable_name)` or, when
/// `inverted` is set, `@skip(if: $variable_name)`.
///
/// Fields reachable only through a [`BooleanCondition`] may be absent from a
/// response.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct BooleanCondition {
    #[serde(default)]
    pub(super) inverted: bool,
    pub(super) selection_set: SelectionSet,
    pub(super) variable_name: String,
}
impl BooleanCondition {
    /// `@include(if: $variable_name)`
    pub fn include(variable_name: impl Into<String>, selection_set: SelectionSet) -> Self {
        Self {
            inverted: false,
            selection_set,
            variable_name: variable_name.into(),
        }
    }

    /// `@skip(if: $variable_name)`
    pub fn skip(variable_name: impl Into<String>, selection_set: SelectionSet) -> Self {
        Self {
            inverted: true,
            selection_set,
            variable_name: variable_name.into(),
        }
    }

    pub fn inverted(&self) -> bool {
        self.inverted
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    pub fn variable_name(&self) -> &str {
        self.variable_name.as_str()
    }
}
