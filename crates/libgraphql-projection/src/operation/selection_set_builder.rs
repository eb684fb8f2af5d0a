use crate::operation::Selection;
use crate::operation::SelectionSet;
use thiserror::Error;

type Result<T> = std::result::Result<T, SelectionSetBuildError>;

#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSetBuilder {
    possible_types: Vec<String>,
    selections: Vec<Selection>,
}
impl SelectionSetBuilder {
    pub fn new<S: Into<String>>(
        possible_types: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            possible_types: possible_types.into_iter().map(Into::into).collect(),
            selections: vec![],
        }
    }

    /// Add a [`Selection`] after any previously added `Selection`s.
    pub fn add_selection(mut self, selection: impl Into<Selection>) -> Self {
        self.selections.push(selection.into());
        self
    }

    pub fn build(self) -> Result<SelectionSet> {
        let mut seen = std::collections::HashSet::new();
        for type_name in &self.possible_types {
            if !seen.insert(type_name.as_str()) {
                return Err(SelectionSetBuildError::DuplicatePossibleType {
                    type_name: type_name.to_owned(),
                });
            }
        }

        Ok(SelectionSet {
            possible_types: self.possible_types,
            selections: self.selections,
        })
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SelectionSetBuildError {
    #[error(
        "The possible type `{type_name}` was listed more than once for the \
        same selection set."
    )]
    DuplicatePossibleType {
        type_name: String,
    },
}
